//! Directory trees and the engine that pairs them
//!
//! - `workspace`: one directory tree, walked in lexical order
//! - `comparer`: pairs source files with existing target files and streams
//!   the diff commands into a script

pub mod comparer;
pub(crate) mod workspace;
