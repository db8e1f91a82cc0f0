//! Version command implementation
//!
//! `tictactoe version` writes the build-time version string and a newline.

use crate::version::VERSION;
use std::io::Write;

/// Name of the version command
pub const VERSION_COMMAND: &str = "version";

/// Build the `version` command node
pub fn command() -> clap::Command {
    clap::Command::new(VERSION_COMMAND)
        .about("Print the version of tictactoe that you are currently using")
}

/// Run the version command
pub fn run_version(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", VERSION)?;
    out.flush()
}
