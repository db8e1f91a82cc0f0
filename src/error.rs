//! Error types for tictactoe
//!
//! Usage errors come straight from clap and are never wrapped or reformatted.
//! Everything else funnels into [`RouterError`] at the process boundary.

use crate::cli::common::{EXIT_ERROR, EXIT_USAGE};

/// Contract address validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// Address was empty
    #[error("address must not be empty")]
    Empty,

    /// Address did not start with 0x
    #[error("address must start with 0x: {0}")]
    MissingPrefix(String),

    /// Address had the wrong number of hex digits
    #[error("address must have 40 hex digits after 0x, got {0}")]
    InvalidLength(usize),

    /// Address contained a non-hex character
    #[error("invalid character {0:?} in address")]
    InvalidCharacter(char),
}

/// Failure inside a command action
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// Writing to the output stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a contract call failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Matched arguments could not be turned into a command
    #[error("Argument error: {0}")]
    Arguments(#[from] clap::Error),
}

/// Top-level error type for tictactoe
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Unknown command, bad flag or bad flag value
    #[error("{0}")]
    Usage(clap::Error),

    /// A dispatched action failed
    #[error("{0}")]
    Action(#[from] ActionError),

    /// Two sibling commands share a name
    #[error("Duplicate command name: {0}")]
    DuplicateCommand(String),

    /// I/O error while writing help or version text
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RouterError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            RouterError::Usage(_) => EXIT_USAGE,
            RouterError::Action(_) | RouterError::DuplicateCommand(_) | RouterError::Io(_) => {
                EXIT_ERROR
            }
        }
    }
}
