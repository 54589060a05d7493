// buildpick - util/paths.rs
//
// Path-component validation shared by the resolver and config loading.

/// True when `name` can only refer to a direct child of the directory it is
/// joined to: non-empty, no path separators, and not a relative traversal
/// component.
pub fn is_bare_dir_name(name: &str) -> bool {
    !name.is_empty()
        && !name.contains('/')
        && !name.contains('\\')
        && name != "."
        && name != ".."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_names_are_accepted() {
        assert!(is_bare_dir_name("linux"));
        assert!(is_bare_dir_name("win32-msvc"));
        assert!(is_bare_dir_name("default"));
        assert!(is_bare_dir_name("..hidden"));
    }

    #[test]
    fn test_separators_and_traversal_are_rejected() {
        assert!(!is_bare_dir_name(""));
        assert!(!is_bare_dir_name("."));
        assert!(!is_bare_dir_name(".."));
        assert!(!is_bare_dir_name("../outside"));
        assert!(!is_bare_dir_name("a/b"));
        assert!(!is_bare_dir_name("a\\b"));
    }
}
