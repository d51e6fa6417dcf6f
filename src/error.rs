//! Error handling for the goforge application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for goforge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// A configuration field is outside its allowed domain or the project
    /// name is malformed. Reported before any file-system activity.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Malformed template syntax. A parse failure indicates a defect in one
    /// of our own embedded templates, not in user input.
    #[error("Failed to parse template '{name}'. Original error: {source}")]
    TemplateParseError { name: String, source: minijinja::Error },

    /// Data-context resolution failure while executing a template
    /// (missing field, type mismatch).
    #[error("Failed to render template '{name}'. Original error: {source}")]
    TemplateExecError { name: String, source: minijinja::Error },

    /// A feature generator failed; wraps the first error it observed.
    #[error("Generator '{generator}' failed: {source}")]
    GenerateError { generator: &'static str, source: Box<Error> },

    #[error("Cannot proceed: output directory '{output_dir}' already exists.")]
    OutputDirectoryExistsError { output_dir: String },

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with goforge's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Walks the `GenerateError` wrapping to the first underlying cause.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::GenerateError { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
