//! Search predicates over repositories

use crate::client::Repository;

/// Keyword and/or language filter. Blank values are ignored.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    keyword: Option<String>,
    language: Option<String>,
}

impl SearchQuery {
    pub fn new(keyword: Option<&str>, language: Option<&str>) -> Self {
        Self {
            keyword: normalize(keyword),
            language: normalize(language),
        }
    }

    /// Whether no filter is active
    pub fn is_empty(&self) -> bool {
        self.keyword.is_none() && self.language.is_none()
    }

    /// Keyword is a case-insensitive substring of the full name; language is
    /// a case-insensitive exact match and never matches a repository without
    /// one.
    pub fn matches(&self, repo: &Repository) -> bool {
        let keyword_ok = self
            .keyword
            .as_ref()
            .is_none_or(|kw| repo.full_name.to_lowercase().contains(kw.as_str()));

        let language_ok = self.language.as_ref().is_none_or(|lang| {
            repo.language
                .as_deref()
                .is_some_and(|l| l.to_lowercase() == *lang)
        });

        keyword_ok && language_ok
    }

    /// Matching repositories, in their original order
    pub fn apply(&self, repos: &[Repository]) -> Vec<Repository> {
        repos.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

fn normalize(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::repo;

    fn sample() -> Vec<Repository> {
        vec![
            repo("octocat/foo-service", Some("Go")),
            repo("octocat/FOOBAR", Some("Rust")),
            repo("octocat/bar", Some("go")),
            repo("octocat/notes", None),
            repo("octocat/food", None),
        ]
    }

    fn names(repos: &[Repository]) -> Vec<&str> {
        repos.iter().map(|r| r.full_name.as_str()).collect()
    }

    #[test]
    fn test_keyword_is_case_insensitive_substring() {
        let query = SearchQuery::new(Some("Foo"), None);
        let found = query.apply(&sample());
        assert_eq!(
            names(&found),
            vec!["octocat/foo-service", "octocat/FOOBAR", "octocat/food"]
        );
        assert!(found.iter().all(|r| r.full_name.to_lowercase().contains("foo")));
    }

    #[test]
    fn test_language_exact_and_skips_missing() {
        let query = SearchQuery::new(None, Some("GO"));
        let found = query.apply(&sample());
        assert_eq!(names(&found), vec!["octocat/foo-service", "octocat/bar"]);
        assert!(
            found
                .iter()
                .all(|r| r.language.as_deref().map(str::to_lowercase) == Some("go".into()))
        );
    }

    #[test]
    fn test_language_is_not_a_substring_match() {
        let query = SearchQuery::new(None, Some("Ru"));
        assert!(query.apply(&sample()).is_empty());
    }

    #[test]
    fn test_both_filters_combine() {
        let query = SearchQuery::new(Some("foo"), Some("go"));
        assert_eq!(names(&query.apply(&sample())), vec!["octocat/foo-service"]);
    }

    #[test]
    fn test_keyword_matches_owner_part() {
        let query = SearchQuery::new(Some("octo"), None);
        assert_eq!(query.apply(&sample()).len(), 5);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let query = SearchQuery::new(Some("  "), Some(""));
        assert!(query.is_empty());
        assert_eq!(query.apply(&sample()).len(), 5);
    }
}
