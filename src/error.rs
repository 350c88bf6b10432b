use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}.")]
    InvalidArgument(String),

    #[error("Duplicate entry '{name}' in directory '{}'.", directory.display())]
    DuplicateEntry { directory: PathBuf, name: String },

    #[error("Cannot proceed: output directory '{output_dir}' already exists. Use --force to overwrite it.")]
    OutputDirectoryExists { output_dir: String },

    #[error("Failed to create directory '{}'. Original error: {source}", path.display())]
    CreateDirectory { path: PathBuf, source: std::io::Error },

    #[error("Failed to write file '{}'. Original error: {source}", path.display())]
    WriteFile { path: PathBuf, source: std::io::Error },

    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    TemplateError(#[from] minijinja::Error),

    #[error("Failed to build template context. Original error: {0}")]
    ContextError(#[from] serde_json::Error),

    /// The version-control command could not run, exited with a failure,
    /// or the working directory could not be switched around it.
    #[error("Command '{command}' failed: {reason}.")]
    Subprocess { command: String, reason: String },
}

/// Broad classification of [`Error`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Io,
    Template,
    Subprocess,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument(_) | Error::DuplicateEntry { .. } => {
                ErrorKind::InvalidArgument
            }
            Error::OutputDirectoryExists { .. }
            | Error::CreateDirectory { .. }
            | Error::WriteFile { .. }
            | Error::IoError(_) => ErrorKind::Io,
            Error::TemplateError(_) | Error::ContextError(_) => ErrorKind::Template,
            Error::Subprocess { .. } => ErrorKind::Subprocess,
        }
    }
}

/// Convenience type alias for Results with kiln's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    log::debug!("Aborting on {:?} error: {err:?}", err.kind());
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
