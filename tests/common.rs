//! Test utilities for tictactoe integration tests

#![allow(dead_code)]

use assert_cmd::Command;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// A well-formed contract address, mixed case
pub const GAME_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

/// The same address as it appears in emitted calls
pub const GAME_ADDRESS_LOWER: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";

/// Command for the built tictactoe binary
pub fn tictactoe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tictactoe"))
}

/// Run the binary, require success, and return its stdout
pub fn stdout_of(args: &[&str]) -> TestResult<String> {
    let output = tictactoe().args(args).output()?;
    if !output.status.success() {
        return Err(format!(
            "tictactoe {:?} exited with {:?}: {}",
            args,
            output.status.code(),
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    Ok(String::from_utf8(output.stdout)?)
}
