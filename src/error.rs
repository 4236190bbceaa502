//! Error handling for stamp.
//! Defines the error type and result alias used by every generator.

use std::io;
use thiserror::Error;

/// Errors that can abort a generation run.
///
/// None of them are transient: they all point at a bad configuration,
/// a template out of sync with its context, or an unusable filesystem path.
#[derive(Error, Debug)]
pub enum Error {
    /// A template referenced a variable the render context does not provide.
    #[error("Undefined variable in template '{template}': {detail}.")]
    UndefinedVariable { template: String, detail: String },

    /// A path could not be read or written.
    #[error("Filesystem error at '{path}': {source}.")]
    FilesystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// A type specification failed validation.
    #[error("Invalid type spec '{name}': {reason}.")]
    InvalidTypeSpec { name: String, reason: String },

    /// An exclusion pattern is not a valid glob.
    #[error("Invalid exclusion pattern '{pattern}': {reason}.")]
    InvalidPattern { pattern: String, reason: String },

    /// Any other template failure (syntax errors, unknown filters, ...).
    #[error("Template error: {0}.")]
    TemplateError(#[from] minijinja::Error),

    /// Configuration file missing or malformed.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// I/O failure without path context.
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Wraps an I/O error together with the path it happened on.
    pub fn filesystem<P: AsRef<std::path::Path>>(path: P, source: io::Error) -> Self {
        Error::FilesystemError { path: path.as_ref().display().to_string(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Exits with status code 1 so callers driving several generators see a failure.
pub fn default_error_handler(err: Error) -> ! {
    log::debug!("{:?}", err);
    eprintln!("{}", err);
    std::process::exit(1);
}
