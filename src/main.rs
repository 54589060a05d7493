// buildpick - main.rs
//
// CLI entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading (platform-appropriate config.toml)
// 3. Logging initialisation (debug mode support)
// 4. Directory resolution and result reporting
//
// The resolved path is printed to stdout; all diagnostics go to stderr.
// Exit codes: 0 = directory found, 1 = no match, 2 = resolution error.

use buildpick::core::resolver::{resolve_for_host, ResolveOptions};
use buildpick::platform::config::{load_config, PlatformPaths};
use buildpick::platform::host::HostPlatform;
use buildpick::util;
use clap::Parser;
use std::path::PathBuf;

/// buildpick - select a platform-specific build output directory.
///
/// Matches the platform identifier against the children of the base build
/// directory: exact name first, then the first child whose name occurs
/// within the identifier, then a "default" directory.
#[derive(Parser, Debug)]
#[command(name = "buildpick", version, about)]
struct Cli {
    /// Base build directory containing the per-platform subdirectories.
    base_dir: PathBuf,

    /// Platform identifier (defaults to the host platform, e.g. "linux",
    /// "win32", "darwin").
    #[arg(short = 'p', long = "platform")]
    platform: Option<String>,

    /// Name of the fallback directory.
    #[arg(long = "default-name")]
    default_name: Option<String>,

    /// Scan children in raw filesystem listing order instead of sorted order.
    #[arg(long = "no-sort")]
    no_sort: bool,

    /// Sort children by name even when config.toml disables it.
    #[arg(long = "sort", conflicts_with = "no_sort")]
    sort: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Either CLI sort flag overrides config.toml; with neither given, the
/// config value decides. clap rejects --sort together with --no-sort.
fn effective_sort(sort_flag: bool, no_sort_flag: bool, config_value: bool) -> bool {
    if sort_flag {
        true
    } else if no_sort_flag {
        false
    } else {
        config_value
    }
}

fn main() {
    let cli = Cli::parse();

    // Config must be read before logging init so [logging] level can apply.
    let platform_paths = PlatformPaths::resolve();
    let (config, config_warnings) = load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    for warning in &config_warnings {
        tracing::warn!("{}", warning);
    }

    tracing::debug!(
        version = util::constants::APP_VERSION,
        base = %cli.base_dir.display(),
        "buildpick starting"
    );

    // CLI flags override config.toml values.
    let options = ResolveOptions {
        default_dir_name: cli
            .default_name
            .unwrap_or(config.default_dir_name),
        sort_entries: effective_sort(cli.sort, cli.no_sort, config.sort_entries),
    };

    match resolve_for_host(
        &cli.base_dir,
        cli.platform.as_deref(),
        &HostPlatform,
        &options,
    ) {
        Ok(Some(resolution)) => {
            println!("{}", resolution.path.display());
        }
        Ok(None) => {
            eprintln!(
                "No build directory found under '{}'",
                cli.base_dir.display()
            );
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = %e, "Resolution failed");
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    }
}
