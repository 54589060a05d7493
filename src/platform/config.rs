// buildpick - platform/config.rs
//
// Platform-specific config directory resolution and config.toml loading
// with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::paths::is_bare_dir_name;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for buildpick configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/buildpick/ or %APPDATA%\buildpick\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve the platform-appropriate config directory.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[resolver]` section.
    pub resolver: ResolverSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[resolver]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ResolverSection {
    /// Name of the fallback directory.
    pub default_dir_name: Option<String>,
    /// Sort the child listing before the substring scan.
    pub sort_entries: Option<bool>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Name of the fallback directory.
    pub default_dir_name: String,
    /// Sort the child listing before the substring scan.
    pub sort_entries: bool,
    /// Logging level string (consumed before tracing is initialised).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_dir_name: constants::DEFAULT_DIR_NAME.to_string(),
            sort_entries: true,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. A missing file yields defaults with no warnings (first run);
/// an unparseable file yields defaults with a warning so the tool still runs
/// but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    tracing::debug!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();

    // -- Resolver: default_dir_name --
    if let Some(ref name) = raw.resolver.default_dir_name {
        if !is_bare_dir_name(name) {
            warnings.push(format!(
                "[resolver] default_dir_name = \"{name}\" must be a non-empty bare directory \
                 name. Using default (\"{}\").",
                constants::DEFAULT_DIR_NAME,
            ));
        } else {
            config.default_dir_name = name.clone();
        }
    }

    // -- Resolver: sort_entries --
    if let Some(sort) = raw.resolver.sort_entries {
        config.sort_entries = sort;
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default ({}).",
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    (config, warnings)
}
