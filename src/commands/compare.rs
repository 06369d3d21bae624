use crate::areas::comparer::Comparer;
use crate::artifacts::compare::comparison_config::ComparisonConfig;
use crate::artifacts::compare::comparison_error::CompareResult;
use crate::artifacts::compare::comparison_summary::ComparisonSummary;
use crate::artifacts::script::output_target::OutputTarget;
use crate::artifacts::script::script_file::ScriptFile;
use crate::artifacts::script::script_writer::ScriptWriter;
use std::io::Write;

/// Generates the comparison script for `config` into `output`.
///
/// A file destination is only created once the whole script is written; on
/// failure no file is left behind. The temporary file is never listed itself,
/// even when the destination lies inside the source tree.
pub fn run_comparison(
    config: &ComparisonConfig,
    output: &OutputTarget,
) -> CompareResult<ComparisonSummary> {
    let span = tracing::info_span!(
        "compare",
        source = %config.source_root().display(),
        target = %config.target_root().display()
    );
    let comparer = Comparer::new(config, span);

    match output {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut sink = stdout.lock();

            write_script(&comparer, &mut sink, output)
        }
        OutputTarget::File(path) => {
            let mut file = ScriptFile::create(path)?;
            let comparer = comparer.excluding(file.temp_path())?;
            let summary = write_script(&comparer, &mut file, output)?;
            let path = file.persist()?;

            tracing::info!(file = %path.display(), "Comparison script generated");

            Ok(summary)
        }
    }
}

pub fn write_script(
    comparer: &Comparer<'_>,
    sink: &mut dyn Write,
    output: &OutputTarget,
) -> CompareResult<ComparisonSummary> {
    let mut script = ScriptWriter::new(sink, output.to_string());
    let summary = comparer.generate_comparison_script(&mut script)?;
    script.finish()?;

    Ok(summary)
}
