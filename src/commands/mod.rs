//! Command implementations
//!
//! - `compare`: generate the comparison script into a file or stdout
//! - `version`: print build information

pub mod compare;
pub mod version;
