// buildpick - tests/e2e_resolve.rs
//
// End-to-end tests for build directory resolution.
//
// These tests exercise the real filesystem through temp directories --
// no mocks, no stubs. Each covers one of the user-visible resolution
// scenarios: exact match, substring fallback, default fallback, absence,
// and error reporting for a bad base directory.

use buildpick::core::resolver::{resolve, resolve_for_host, MatchKind, ResolveOptions};
use buildpick::platform::host::PlatformProvider;
use buildpick::util::error::ResolveError;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

/// Build a temp directory with the given child directories.
fn builds_dir(children: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for child in children {
        fs::create_dir(dir.path().join(child)).expect("mkdir child");
    }
    dir
}

struct FixedPlatform(&'static str);

impl PlatformProvider for FixedPlatform {
    fn platform_id(&self) -> String {
        self.0.to_string()
    }
}

// =============================================================================
// Resolution scenarios
// =============================================================================

/// /builds with linux/ and default/, platform "linux" -> /builds/linux.
#[test]
fn e2e_exact_match() {
    let builds = builds_dir(&["linux", "default"]);
    let res = resolve(builds.path(), "linux", &ResolveOptions::default())
        .unwrap()
        .expect("should resolve");
    assert_eq!(res.kind, MatchKind::Exact);
    assert_eq!(res.path, builds.path().join("linux"));
}

/// /builds with win32/ and default/, platform "win32-msvc" -> /builds/win32.
#[test]
fn e2e_substring_match() {
    let builds = builds_dir(&["win32", "default"]);
    let res = resolve(builds.path(), "win32-msvc", &ResolveOptions::default())
        .unwrap()
        .expect("should resolve");
    assert_eq!(res.kind, MatchKind::Substring);
    assert_eq!(res.path, builds.path().join("win32"));
}

/// /builds with default/ only, platform "freebsd" -> /builds/default.
#[test]
fn e2e_default_fallback() {
    let builds = builds_dir(&["default"]);
    let res = resolve(builds.path(), "freebsd", &ResolveOptions::default())
        .unwrap()
        .expect("should resolve");
    assert_eq!(res.kind, MatchKind::Default);
    assert_eq!(res.path, builds.path().join("default"));
}

/// /builds with linux/ only, platform "freebsd" -> no match, not an error.
#[test]
fn e2e_no_match_is_absence_not_error() {
    let builds = builds_dir(&["linux"]);
    let res = resolve(builds.path(), "freebsd", &ResolveOptions::default()).unwrap();
    assert!(res.is_none());
}

/// A returned path is always a direct child of the base directory and exists.
#[test]
fn e2e_resolved_path_is_existing_direct_child() {
    let builds = builds_dir(&["win32", "win", "default"]);
    for platform in ["win32", "win32-msvc", "freebsd"] {
        let res = resolve(builds.path(), platform, &ResolveOptions::default())
            .unwrap()
            .expect("should resolve");
        assert_eq!(res.path.parent(), Some(builds.path()));
        assert!(res.path.exists());
    }
}

/// Resolution on a nonexistent base directory reports BaseNotFound.
#[test]
fn e2e_missing_base_dir_is_reported() {
    let result = resolve(
        Path::new("/nonexistent/buildpick-e2e-test-path"),
        "linux",
        &ResolveOptions::default(),
    );
    assert!(
        matches!(result, Err(ResolveError::BaseNotFound { .. })),
        "expected BaseNotFound, got {result:?}"
    );
}

/// Omitting the platform consults the injected provider.
#[test]
fn e2e_host_provider_fills_missing_platform() {
    let builds = builds_dir(&["sunos", "default"]);
    let res = resolve_for_host(
        builds.path(),
        None,
        &FixedPlatform("sunos"),
        &ResolveOptions::default(),
    )
    .unwrap()
    .expect("should resolve");
    assert_eq!(res.path, builds.path().join("sunos"));
}
