use crate::artifacts::compare::comparison_error::{CompareError, CompareResult};
use crate::artifacts::compare::comparison_pair::ComparisonPair;
use std::io::Write;

pub const SCRIPT_HEADER: &str = "#!/usr/bin/env bash\n\n";

/// Streams a comparison script into an injected sink, one line per pair.
pub struct ScriptWriter<'w> {
    sink: &'w mut dyn Write,
    destination: String,
}

impl<'w> ScriptWriter<'w> {
    /// `destination` only labels errors.
    pub fn new(sink: &'w mut dyn Write, destination: impl Into<String>) -> Self {
        ScriptWriter {
            sink,
            destination: destination.into(),
        }
    }

    pub fn write_header(&mut self) -> CompareResult<()> {
        self.sink
            .write_all(SCRIPT_HEADER.as_bytes())
            .map_err(|e| self.error(e))
    }

    pub fn write_command(&mut self, pair: &ComparisonPair) -> CompareResult<()> {
        writeln!(self.sink, "{}", pair).map_err(|e| self.error(e))
    }

    pub fn finish(mut self) -> CompareResult<()> {
        self.sink.flush().map_err(|e| self.error(e))
    }

    fn error(&self, source: std::io::Error) -> CompareError {
        CompareError::output_write(self.destination.clone(), source)
    }
}
