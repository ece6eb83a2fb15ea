//! CLI error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// A flag value could not be used.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An explicitly requested file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// The configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A pricer rejected its inputs.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Reading from disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
