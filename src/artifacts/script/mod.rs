//! Script output
//!
//! - `output_target`: file path or `-` for the standard output
//! - `script_file`: atomically persisted, executable script file
//! - `script_writer`: header and per-pair command emission

pub mod output_target;
pub mod script_file;
pub mod script_writer;
