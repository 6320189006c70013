//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Join a base URL and a path with exactly one slash between them.
///
/// An empty path (or `/`) yields the base URL without a trailing slash.
///
/// # Examples
/// ```ignore
/// join_url("https://example.com/", "/users")  -> "https://example.com/users"
/// join_url("https://example.com", "users/1")  -> "https://example.com/users/1"
/// join_url("https://example.com/app/", "")    -> "https://example.com/app"
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/pages/      ← cwd
/// /home/user/site/seokit.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://example.com/", "/users"),
            "https://example.com/users"
        );
        assert_eq!(
            join_url("https://example.com", "users/1"),
            "https://example.com/users/1"
        );
        assert_eq!(
            join_url("https://example.com//", "//about"),
            "https://example.com/about"
        );
    }

    #[test]
    fn test_join_url_empty_path() {
        assert_eq!(join_url("https://example.com/", ""), "https://example.com");
        assert_eq!(join_url("https://example.com/app", "/"), "https://example.com/app");
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("a/b/c");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp.path().join("seokit.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("seokit.toml")).unwrap();
        assert_eq!(found, temp.path().join("seokit.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let temp = TempDir::new().unwrap();
        assert!(
            find_config_file_from(temp.path(), Path::new("definitely-not-here-seokit.toml"))
                .is_none()
        );
    }

    #[test]
    fn test_find_config_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        assert!(find_config_file_from(temp.path(), &path).is_none());

        std::fs::write(&path, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &path), Some(path));
    }
}
