#![forbid(unsafe_code)]

//! tictactoe: command-line shell for the TicTacToe game
//!
//! The root command routes each invocation to one action: help, shell
//! completion scripts, the version string, or a command in one of the
//! contract subtrees (`game`, `metadata`).

pub mod bindings;
pub mod cli;
pub mod error;
pub mod types;
pub mod version;

use bindings::{GameCommands, MetadataCommands};

// Re-export error types for convenient access
pub use error::{ActionError, AddressError, RouterError};

// Re-export the router surface for convenient access
pub use cli::{CommandProvider, Router};
pub use version::{BIN_NAME, VERSION};

/// Build the router with the game and metadata subtrees attached
///
/// # Errors
///
/// Returns `RouterError::DuplicateCommand` if the bundled subtrees collide,
/// which would be a programming error.
pub fn router() -> Result<Router, RouterError> {
    Router::new()
        .with_provider(GameCommands)?
        .with_provider(MetadataCommands)
}
