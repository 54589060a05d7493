// buildpick - core/resolver.rs
//
// Build directory resolution with three fallback tiers:
//   1. Exact:     base_dir/<platform> exists.
//   2. Substring: an immediate child of base_dir whose name occurs
//                 anywhere within the platform identifier.
//   3. Default:   base_dir/<default_dir_name> exists.
// No tier matching is not an error; the resolver returns Ok(None).
//
// The listing in tier 2 includes files as well as directories, matching the
// historical behaviour this tool replaces. The exact and default existence
// checks likewise accept any filesystem entry.

use crate::platform::host::PlatformProvider;
use crate::util::constants;
use crate::util::error::{ResolveError, Result};
use crate::util::paths::is_bare_dir_name;
use std::io;
use std::path::{Path, PathBuf};

/// How a resolved directory was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Child named exactly after the platform identifier.
    Exact,
    /// Child whose name occurs as a substring within the platform identifier.
    Substring,
    /// The fallback `default` directory.
    Default,
}

/// A successfully resolved build directory.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Full path of the chosen directory; always a direct child of the base
    /// directory, and existed at resolution time.
    pub path: PathBuf,

    /// Which fallback tier produced the match.
    pub kind: MatchKind,
}

/// Options controlling a resolution.
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// Name of the fallback directory (tier 3).
    pub default_dir_name: String,

    /// Sort the child listing by name before the substring scan so
    /// first-match-wins is deterministic. When false the raw filesystem
    /// listing order is used, which is platform- and filesystem-dependent.
    pub sort_entries: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            default_dir_name: constants::DEFAULT_DIR_NAME.to_string(),
            sort_entries: true,
        }
    }
}

/// Resolve the build directory for `platform` under `base_dir`.
///
/// Returns `Ok(Some(..))` with the chosen path, `Ok(None)` when no tier
/// matched, and `Err` when `base_dir` itself cannot be inspected or when
/// `platform` / the default directory name could not name a direct child of
/// `base_dir` in the first place.
pub fn resolve(
    base_dir: &Path,
    platform: &str,
    options: &ResolveOptions,
) -> Result<Option<Resolution>> {
    // Both joined names must stay direct children of base_dir. An empty
    // identifier would join to base_dir itself; a separator or traversal
    // component would escape it.
    if !is_bare_dir_name(platform) {
        return Err(ResolveError::InvalidPlatform {
            platform: platform.to_string(),
        });
    }
    if !is_bare_dir_name(&options.default_dir_name) {
        return Err(ResolveError::InvalidDefaultName {
            name: options.default_dir_name.clone(),
        });
    }

    // Pre-flight check on the base directory. fs::metadata rather than
    // Path::exists / Path::is_dir so PermissionDenied is distinguishable
    // from a path that genuinely does not exist.
    match std::fs::metadata(base_dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(ResolveError::NotADirectory {
                path: base_dir.to_path_buf(),
            });
        }
        Err(e) => {
            return Err(match e.kind() {
                io::ErrorKind::NotFound => ResolveError::BaseNotFound {
                    path: base_dir.to_path_buf(),
                },
                io::ErrorKind::PermissionDenied => ResolveError::PermissionDenied {
                    path: base_dir.to_path_buf(),
                    source: e,
                },
                _ => ResolveError::ReadDir {
                    path: base_dir.to_path_buf(),
                    source: e,
                },
            });
        }
    }

    tracing::info!(
        platform,
        base = %base_dir.display(),
        "Looking for build directory"
    );

    // Tier 1: exact match.
    let exact = base_dir.join(platform);
    if exact.exists() {
        tracing::info!(dir = %exact.display(), "Found build directory (exact match)");
        return Ok(Some(Resolution {
            path: exact,
            kind: MatchKind::Exact,
        }));
    }

    tracing::info!("Exact match not found, finding closest guess");

    // Tier 2: first child whose name occurs within the platform identifier.
    let mut names = list_child_names(base_dir)?;
    if options.sort_entries {
        names.sort_unstable();
    }

    for name in &names {
        if platform.contains(name.as_str()) {
            let path = base_dir.join(name);
            tracing::info!(dir = %path.display(), "Found build directory (substring match)");
            return Ok(Some(Resolution {
                path,
                kind: MatchKind::Substring,
            }));
        }
    }

    tracing::info!(
        default = %options.default_dir_name,
        "No match found, looking for default directory"
    );

    // Tier 3: the default directory.
    let default_dir = base_dir.join(&options.default_dir_name);
    if default_dir.exists() {
        tracing::info!(dir = %default_dir.display(), "Found build directory (default)");
        return Ok(Some(Resolution {
            path: default_dir,
            kind: MatchKind::Default,
        }));
    }

    tracing::warn!(platform, "No build directories found for platform");
    Ok(None)
}

/// Resolve with the platform identifier taken from `provider` when the
/// caller did not supply one.
///
/// An empty or whitespace-only identifier counts as unsupplied, matching
/// callers that pass through an unset environment or argument value.
pub fn resolve_for_host(
    base_dir: &Path,
    platform: Option<&str>,
    provider: &dyn PlatformProvider,
    options: &ResolveOptions,
) -> Result<Option<Resolution>> {
    match platform {
        Some(p) if !p.trim().is_empty() => resolve(base_dir, p, options),
        _ => {
            let host = provider.platform_id();
            tracing::debug!(platform = %host, "Platform identifier taken from host provider");
            resolve(base_dir, &host, options)
        }
    }
}

/// Names of the immediate children of `base_dir` (files and directories).
///
/// Entries with non-UTF-8 names cannot participate in the substring scan and
/// are skipped with a debug diagnostic.
fn list_child_names(base_dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for entry_result in walkdir::WalkDir::new(base_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| base_dir.to_path_buf());
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("directory walk failed"));
                return Err(if source.kind() == io::ErrorKind::PermissionDenied {
                    ResolveError::PermissionDenied { path, source }
                } else {
                    ResolveError::ReadDir { path, source }
                });
            }
        };

        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => {
                tracing::debug!(
                    entry = %entry.path().display(),
                    "Skipping child with non-UTF-8 name"
                );
            }
        }
    }

    Ok(names)
}

// =============================================================================
// Tests
// =============================================================================
