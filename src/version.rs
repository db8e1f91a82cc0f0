//! Build-time constants

/// Version of tictactoe, fixed at compile time from the package manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the root command, used in help text and completion scripts
pub const BIN_NAME: &str = "tictactoe";
