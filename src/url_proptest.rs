//! Property-based tests for repository URL helpers.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::url::{
        clean_repository_url, github_username_from_repository_url, is_github_repository,
    };
    use proptest::prelude::*;

    proptest! {
        /// Property: cleaned URLs never contain newlines
        #[test]
        fn clean_repository_url_never_contains_newlines(input in ".*") {
            let result = clean_repository_url(&input);
            prop_assert!(!result.contains('\n'));
        }

        /// Property: `git+` prefix and `.git` suffix are both stripped
        #[test]
        fn clean_repository_url_strips_wrapping(
            user in "[a-z][a-z0-9-]{0,15}",
            repo in "[a-z][a-z0-9_-]{0,15}",
        ) {
            let raw = format!("git+https://github.com/{}/{}.git", user, repo);
            prop_assert_eq!(
                clean_repository_url(&raw),
                format!("https://github.com/{}/{}", user, repo)
            );
        }

        /// Property: input without `git` and newlines is returned unchanged
        #[test]
        fn clean_repository_url_preserves_plain_urls(input in "[a-fh-z0-9:/._-]*") {
            prop_assert_eq!(clean_repository_url(&input), input);
        }

        /// Property: GitHub usernames round-trip through a GitHub URL
        #[test]
        fn github_username_is_first_segment(
            user in "[A-Za-z0-9][A-Za-z0-9-]{0,20}",
            rest in "(/[a-z0-9._-]{1,10}){0,3}",
        ) {
            let url = format!("https://github.com/{}{}", user, rest);
            prop_assert!(is_github_repository(&url));
            prop_assert_eq!(github_username_from_repository_url(&url), user);
        }
    }
}
