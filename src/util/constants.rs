// buildpick - util/constants.rs
//
// Single source of truth for named constants and defaults.

/// Application display name.
pub const APP_NAME: &str = "buildpick";

/// Application identifier used for the config directory.
pub const APP_ID: &str = "buildpick";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the fallback directory used when no platform-specific match exists.
pub const DEFAULT_DIR_NAME: &str = "default";

/// Name of the optional configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Logging level used when neither RUST_LOG, --debug, nor the config file
/// selects one.
pub const DEFAULT_LOG_LEVEL: &str = "info";
