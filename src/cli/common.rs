//! Common helpers shared across CLI commands
//!
//! Exit codes and help rendering used by the router and the built-in commands.

use std::io::Write;

/// Successful dispatch, including explicitly requested help
pub const EXIT_SUCCESS: i32 = 0;
/// An action failed after dispatch
pub const EXIT_ERROR: i32 = 1;
/// Unknown command, bad flag or bad flag value (matches clap's own usage code)
pub const EXIT_USAGE: i32 = 2;

/// Write the help text of `command` to `out`
///
/// The command should already be built (see [`clap::Command::build`]) so the
/// usage line carries the full path from the root.
pub(crate) fn write_help(
    command: &mut clap::Command,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let help = command.render_help();
    write!(out, "{}", help)?;
    out.flush()
}

/// Find the node at `path` below `root`
///
/// Returns `None` if any segment is missing.
pub(crate) fn find_node<'a>(
    root: &'a mut clap::Command,
    path: &[String],
) -> Option<&'a mut clap::Command> {
    let mut node = root;
    for name in path {
        node = node.find_subcommand_mut(name)?;
    }
    Some(node)
}
