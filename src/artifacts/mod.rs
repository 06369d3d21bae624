//! Data types shared by the comparison engine and the command layer
//!
//! - `compare`: configuration, ignore filter, comparison pairs and errors
//! - `script`: output destinations and script emission

pub mod compare;
pub mod script;
