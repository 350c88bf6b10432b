/// Handles argument parsing and drives the scaffold workflow.
pub mod cli;

/// Constants shared across the crate.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Builds the in-memory project tree.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// In-memory directory and file model.
pub mod project;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Built-in templates and planned filesystem operations.
pub mod template;

/// Repository initialization and working-directory scoping.
pub mod vcs;

/// Persists a generated project to disk.
pub mod writer;
