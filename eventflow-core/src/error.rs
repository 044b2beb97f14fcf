//! Error types for the EventFlow CLI.

use thiserror::Error;

/// Errors that can occur in eventflow operations.
#[derive(Error, Debug)]
pub enum EventFlowError {
    #[error("Invalid pagination config: items per page must be at least 1")]
    InvalidConfig,

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM or h:MM AM/PM")]
    InvalidTime(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for eventflow operations.
pub type EventFlowResult<T> = Result<T, EventFlowError>;
