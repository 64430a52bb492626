//! Error types for the plic core.

use thiserror::Error;

/// Errors that can occur at the boundaries of the core (config, catalog loading,
/// parsing user input). The calendar operations themselves never fail.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid event date '{0}'")]
    InvalidEventDate(String),

    #[error("Invalid event id '{0}'. Expected lowercase base-36 ([0-9a-z])")]
    InvalidEventId(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result type alias for plic core operations.
pub type CoreResult<T> = Result<T, CoreError>;
