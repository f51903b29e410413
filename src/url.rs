//! Repository URL helpers.
//!
//! These are plain textual transformations. No URL parsing is performed, so
//! SSH remotes, `http://` URLs and self-hosted forges pass through untouched
//! and are never classified as GitHub repositories.

use crate::defaults::GITHUB_URL;

/// Clean a repository URL by removing newlines, `git+` and `.git`.
///
/// Every newline is removed. `git+` and `.git` are removed at their first
/// occurrence only.
///
/// ```
/// use readme_gen::url::clean_repository_url;
///
/// assert_eq!(
///     clean_repository_url("git+https://github.com/a/b.git"),
///     "https://github.com/a/b"
/// );
/// ```
pub fn clean_repository_url(raw: &str) -> String {
    let url: String = raw.chars().filter(|c| *c != '\n').collect();
    let url = url.replacen("git+", "", 1);
    url.replacen(".git", "", 1)
}

/// Check if a repository URL points at GitHub.
pub fn is_github_repository(repository_url: &str) -> bool {
    repository_url.contains(GITHUB_URL)
}

/// Get the GitHub username (first path segment) from a repository URL.
///
/// The caller is expected to have checked [`is_github_repository`] first;
/// other URLs produce a meaningless result.
pub fn github_username_from_repository_url(repository_url: &str) -> String {
    let path = repository_url.replacen(GITHUB_URL, "", 1);
    path.split('/').next().unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_repository_url_strips_prefix_and_suffix() {
        assert_eq!(
            clean_repository_url("git+https://github.com/a/b.git"),
            "https://github.com/a/b"
        );
    }

    #[test]
    fn test_clean_repository_url_strips_newlines() {
        assert_eq!(clean_repository_url("https://x.com/y\n"), "https://x.com/y");
        assert_eq!(
            clean_repository_url("https://x.com/\ny\n"),
            "https://x.com/y"
        );
    }

    #[test]
    fn test_clean_repository_url_without_matches_is_unchanged() {
        assert_eq!(
            clean_repository_url("https://gitlab.com/foo/bar"),
            "https://gitlab.com/foo/bar"
        );
    }

    #[test]
    fn test_clean_repository_url_ssh_remote() {
        assert_eq!(
            clean_repository_url("git@github.com:foo/bar.git"),
            "git@github.com:foo/bar"
        );
    }

    #[test]
    fn test_clean_repository_url_removes_first_match_only() {
        // Textual removal: the first `.git` wins even inside a path segment.
        assert_eq!(
            clean_repository_url("https://host/a.gitx/b.git"),
            "https://host/ax/b.git"
        );
    }

    #[test]
    fn test_is_github_repository() {
        assert!(is_github_repository("https://github.com/foo/bar"));
        assert!(!is_github_repository("https://gitlab.com/foo/bar"));
        assert!(!is_github_repository("http://github.com/foo/bar"));
        assert!(!is_github_repository("git@github.com:foo/bar"));
    }

    #[test]
    fn test_github_username_from_repository_url() {
        assert_eq!(
            github_username_from_repository_url("https://github.com/alice/project"),
            "alice"
        );
        assert_eq!(
            github_username_from_repository_url("https://github.com/bob"),
            "bob"
        );
    }
}
