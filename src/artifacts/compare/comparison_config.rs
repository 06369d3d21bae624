use crate::artifacts::compare::comparison_error::{CompareError, CompareResult};
use crate::artifacts::compare::ignore_filter::IgnoreFilter;
use std::path::{Path, PathBuf};

/// Inputs of a single comparison run.
///
/// Built once from the resolved settings and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonConfig {
    source_root: PathBuf,
    target_root: PathBuf,
    ignore_filter: IgnoreFilter,
    regular_files_only: bool,
}

impl ComparisonConfig {
    /// Fails when either root is empty, before touching the filesystem.
    pub fn try_new(
        source_root: impl Into<PathBuf>,
        target_root: impl Into<PathBuf>,
        ignore_patterns: Vec<String>,
    ) -> CompareResult<Self> {
        let source_root = source_root.into();
        let target_root = target_root.into();

        if source_root.as_os_str().is_empty() {
            return Err(CompareError::Configuration("source"));
        }
        if target_root.as_os_str().is_empty() {
            return Err(CompareError::Configuration("target"));
        }

        Ok(ComparisonConfig {
            source_root,
            target_root,
            ignore_filter: IgnoreFilter::new(ignore_patterns),
            regular_files_only: false,
        })
    }

    pub fn with_regular_files_only(mut self, regular_files_only: bool) -> Self {
        self.regular_files_only = regular_files_only;
        self
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }

    pub fn ignore_filter(&self) -> &IgnoreFilter {
        &self.ignore_filter
    }

    pub fn regular_files_only(&self) -> bool {
        self.regular_files_only
    }
}
