use crate::areas::workspace::{Workspace, clean_absolute};
use crate::artifacts::compare::comparison_config::ComparisonConfig;
use crate::artifacts::compare::comparison_error::{CompareError, CompareResult};
use crate::artifacts::compare::comparison_pair::ComparisonPair;
use crate::artifacts::compare::comparison_summary::ComparisonSummary;
use crate::artifacts::script::script_writer::ScriptWriter;
use std::path::{Path, PathBuf};
use tracing::Span;

/// Pairs files of a source tree with their counterparts in a target tree.
#[derive(Debug)]
pub struct Comparer<'c> {
    config: &'c ComparisonConfig,
    source: Workspace,
    target: Workspace,
    excluded: Option<PathBuf>,
    span: Span,
}

impl<'c> Comparer<'c> {
    /// Events of this comparer are recorded inside `span`.
    pub fn new(config: &'c ComparisonConfig, span: Span) -> Self {
        let source = Workspace::new(config.source_root().into());
        let target = Workspace::new(config.target_root().into());

        Comparer {
            config,
            source,
            target,
            excluded: None,
            span,
        }
    }

    /// Leaves `path` out of the listing even when the walk finds it, e.g. the
    /// temporary file the script is being written to.
    pub fn excluding(mut self, path: &Path) -> CompareResult<Self> {
        let excluded = clean_absolute(path).map_err(|source| CompareError::AbsolutePath {
            path: path.to_path_buf(),
            source,
        })?;
        self.excluded = Some(excluded);

        Ok(self)
    }

    pub fn generate_comparison_script(
        &self,
        script: &mut ScriptWriter<'_>,
    ) -> CompareResult<ComparisonSummary> {
        let _entered = self.span.enter();
        let mut summary = ComparisonSummary::default();
        tracing::debug!(
            source = %self.source.path().display(),
            target = %self.target.path().display(),
            ignore = ?self.config.ignore_filter().patterns(),
            "comparing trees"
        );

        // An unreadable root fails before anything reaches the sink.
        let mut source_files = self.source.list_files().peekable();
        if let Some(Err(error)) = source_files.next_if(|file| file.is_err()) {
            return Err(error);
        }

        script.write_header()?;

        for source_file in source_files {
            let source_file = source_file?;
            if self.is_excluded(&source_file)? {
                tracing::trace!(path = %source_file.display(), "excluded");
                continue;
            }
            summary.scanned += 1;

            if let Some(pair) = self.comparison_pair(&source_file, &mut summary)? {
                script.write_command(&pair)?;
                summary.written += 1;
            }
        }

        tracing::debug!(%summary, "source tree walked");

        Ok(summary)
    }

    fn is_excluded(&self, source_file: &Path) -> CompareResult<bool> {
        let Some(excluded) = &self.excluded else {
            return Ok(false);
        };
        if source_file.file_name() != excluded.file_name() {
            return Ok(false);
        }

        let absolute = clean_absolute(source_file).map_err(|source| CompareError::AbsolutePath {
            path: source_file.to_path_buf(),
            source,
        })?;

        Ok(&absolute == excluded)
    }

    fn comparison_pair(
        &self,
        source_file: &Path,
        summary: &mut ComparisonSummary,
    ) -> CompareResult<Option<ComparisonPair>> {
        let relative_path = self.source.relative_path(source_file)?;

        if let Some(pattern) = self.config.ignore_filter().matching_pattern(&relative_path) {
            tracing::trace!(path = %relative_path.display(), pattern, "ignored");
            summary.ignored += 1;
            return Ok(None);
        }

        if !self
            .target
            .contains(&relative_path, self.config.regular_files_only())
        {
            tracing::debug!(path = %relative_path.display(), "not present in target");
            summary.missing += 1;
            return Ok(None);
        }

        let pair = ComparisonPair::new(
            self.source.absolute_path(&relative_path)?,
            self.target.absolute_path(&relative_path)?,
        );
        tracing::trace!(path = %relative_path.display(), "paired");

        Ok(Some(pair))
    }
}
