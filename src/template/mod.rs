//! Built-in templates and the filesystem operations derived from them
//!
//! - `builtin`: the fixed template strings for each generated file
//! - `operation`: planned filesystem actions and their progress messages

pub mod builtin;
pub mod operation;
