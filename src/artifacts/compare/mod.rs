//! Comparison data model
//!
//! - `comparison_config`: immutable inputs of a run (roots, ignore patterns)
//! - `comparison_error`: error taxonomy of the comparison engine
//! - `comparison_pair`: a source/target pair and the diff command it renders to
//! - `comparison_summary`: per-run counters
//! - `ignore_filter`: substring based path exclusion

pub mod comparison_config;
pub mod comparison_error;
pub mod comparison_pair;
pub mod comparison_summary;
pub mod ignore_filter;
