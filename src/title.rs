//! Pull request title convention.

use regex::Regex;

// Looks for patterns like [stable/mariadb] and [test] at the start of a title.
const TITLE_PATTERN: &str = r"^(\[.*/.*\]|\[test\]).*$";

/// The body of the comment to post when a title misses the convention.
pub const TITLE_HINT_COMMENT: &str = "Thank you for submitting the pull request. There are many people who review pull requests for the different charts and tests. To help us review your pull request would you consider updating the pull request title to the format:

 * **[<repo>/<chart>] title** (e.g., _[stable/mariadb] title_) if this pull request is for a specific chart
 * **[test] title** if this pull request is for the common tests
";

/// Title format rule, compiled once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct TitlePolicy {
    re: Regex,
}

impl TitlePolicy {
    pub fn new() -> Self {
        Self {
            re: Regex::new(TITLE_PATTERN).expect("title pattern is a valid regex"),
        }
    }

    /// Case-sensitive, no trimming: the title must start with
    /// `[<segment>/<segment>]` or `[test]`.
    pub fn is_valid(&self, title: &str) -> bool {
        self.re.is_match(title)
    }
}

impl Default for TitlePolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_scoped_titles_are_valid() {
        let policy = TitlePolicy::new();
        assert!(policy.is_valid("[stable/mariadb] fix typo"));
        assert!(policy.is_valid("[incubator/etcd] bump chart version"));
    }

    #[test]
    fn test_titles_are_valid() {
        let policy = TitlePolicy::new();
        assert!(policy.is_valid("[test] add case"));
    }

    #[test]
    fn unprefixed_titles_are_invalid() {
        let policy = TitlePolicy::new();
        assert!(!policy.is_valid("fix typo"));
        assert!(!policy.is_valid("test: add case"));
        assert!(!policy.is_valid(""));
    }

    #[test]
    fn single_segment_titles_are_invalid() {
        let policy = TitlePolicy::new();
        assert!(!policy.is_valid("[stable] fix"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let policy = TitlePolicy::new();
        assert!(!policy.is_valid("[TEST] add case"));
    }

    #[test]
    fn leading_whitespace_is_not_trimmed() {
        let policy = TitlePolicy::new();
        assert!(!policy.is_valid(" [stable/mariadb] fix typo"));
    }
}
