use std::fmt;

/// Counters collected while generating a script, used for reporting only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComparisonSummary {
    pub scanned: usize,
    pub ignored: usize,
    pub missing: usize,
    pub written: usize,
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scanned, {} ignored, {} missing in target, {} compared",
            self.scanned, self.ignored, self.missing, self.written
        )
    }
}
