// buildpick - util/error.rs
//
// Typed errors with context-preserving source chains.
// No string-based error propagation; every variant carries the path it
// refers to so diagnostics stay actionable.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while resolving a build directory.
///
/// A resolution that simply finds no matching directory is NOT an error;
/// the resolver reports that as `Ok(None)`. These variants cover the cases
/// where the base directory itself cannot be inspected.
#[derive(Debug)]
pub enum ResolveError {
    /// The platform identifier cannot name a direct child of the base
    /// directory (empty, contains path separators, or is a traversal
    /// component).
    InvalidPlatform { platform: String },

    /// The configured default directory name cannot name a direct child of
    /// the base directory.
    InvalidDefaultName { name: String },

    /// The base build directory does not exist.
    BaseNotFound { path: PathBuf },

    /// The base path exists but is not a directory.
    NotADirectory { path: PathBuf },

    /// Permission denied inspecting the base directory or its children.
    PermissionDenied { path: PathBuf, source: io::Error },

    /// Listing the base directory's children failed for another reason.
    ReadDir { path: PathBuf, source: io::Error },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlatform { platform } => {
                write!(
                    f,
                    "Platform identifier '{platform}' is not a bare directory name"
                )
            }
            Self::InvalidDefaultName { name } => {
                write!(
                    f,
                    "Default directory name '{name}' is not a bare directory name"
                )
            }
            Self::BaseNotFound { path } => {
                write!(f, "Base build directory '{}' does not exist", path.display())
            }
            Self::NotADirectory { path } => {
                write!(f, "Base build path '{}' is not a directory", path.display())
            }
            Self::PermissionDenied { path, source } => {
                write!(
                    f,
                    "Permission denied accessing '{}': {source}",
                    path.display()
                )
            }
            Self::ReadDir { path, source } => {
                write!(f, "Failed to list '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PermissionDenied { source, .. } => Some(source),
            Self::ReadDir { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for buildpick results.
pub type Result<T> = std::result::Result<T, ResolveError>;
