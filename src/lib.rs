//! Generates a bash script of `diff` invocations for every file present at the
//! same relative path in two directory trees.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod settings;
pub mod tracing_config;
