use std::path::Path;

/// Literal substring patterns matched against source-relative paths.
///
/// Matching is case sensitive and unanchored, so `.git` also excludes
/// `.gitignore` and `docs/my.github/page.md`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreFilter {
    patterns: Vec<String>,
}

impl IgnoreFilter {
    pub fn new(patterns: Vec<String>) -> Self {
        IgnoreFilter { patterns }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Returns the first pattern contained in `relative_path`, if any.
    pub fn matching_pattern(&self, relative_path: &Path) -> Option<&str> {
        let path = relative_path.to_string_lossy();

        self.patterns
            .iter()
            .find(|pattern| path.contains(pattern.as_str()))
            .map(String::as_str)
    }

    pub fn should_ignore(&self, relative_path: &Path) -> bool {
        self.matching_pattern(relative_path).is_some()
    }
}
