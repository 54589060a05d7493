// buildpick - platform/host.rs
//
// Host platform identification.
//
// The resolver never reads the host platform itself; it receives the
// identifier through this trait so tests (and callers targeting a platform
// other than the host) can inject a fixed value.

/// Source of the platform identifier used when the caller does not supply one.
pub trait PlatformProvider {
    /// An identifier for the operating platform, e.g. "linux", "win32",
    /// "darwin".
    fn platform_id(&self) -> String;
}

/// Platform provider backed by the operating system the binary was built for.
///
/// Identifiers follow the naming convention of the build directories this
/// tool was written to select: `std::env::consts::OS` values are passed
/// through except "windows" -> "win32" and "macos" -> "darwin".
#[derive(Debug, Default, Clone, Copy)]
pub struct HostPlatform;

impl PlatformProvider for HostPlatform {
    fn platform_id(&self) -> String {
        match std::env::consts::OS {
            "windows" => "win32".to_string(),
            "macos" => "darwin".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_platform_id_is_nonempty() {
        assert!(!HostPlatform.platform_id().is_empty());
    }

    /// The raw std names for Windows and macOS must never leak through.
    #[test]
    fn test_host_platform_id_is_normalised() {
        let id = HostPlatform.platform_id();
        assert_ne!(id, "windows");
        assert_ne!(id, "macos");
    }
}
