use derive_new::new;
use std::fmt;
use std::path::PathBuf;

const DIFF_COMMAND: &str = "diff --unified --ignore-all-space";

/// Absolute paths of a source file and its counterpart in the target tree.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ComparisonPair {
    pub source: PathBuf,
    pub target: PathBuf,
}

// Paths are quoted verbatim; embedded double quotes are not escaped.
impl fmt::Display for ComparisonPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" \"{}\"",
            DIFF_COMMAND,
            self.source.display(),
            self.target.display()
        )
    }
}
