//! Completion command implementation
//!
//! `tictactoe completion <shell>` prints a completion script for the whole
//! command tree. Script generation itself is left to `clap_complete`.

use clap_complete::{Shell, generate};
use std::io::Write;

/// Name of the completion command group
pub const COMPLETION_COMMAND: &str = "completion";

/// Shells with a completion subcommand, keyed by subcommand name, in help listing order
pub const SUPPORTED_SHELLS: [(&str, Shell); 4] = [
    ("bash", Shell::Bash),
    ("zsh", Shell::Zsh),
    ("fish", Shell::Fish),
    ("powershell", Shell::PowerShell),
];

const COMPLETION_LONG_ABOUT: &str = "\
Generate shell completion scripts for tictactoe.

The command for each shell will print a completion script to stdout. You can source this script to get
completions in your current shell session. You can add this script to the completion directory for your
shell to get completions for all future sessions.

For example, to activate bash completions in your current shell:
\t$ . <(tictactoe completion bash)

To add tictactoe completions for all bash sessions:
\t$ tictactoe completion bash > /etc/bash_completion.d/tictactoe_completions";

/// Build the `completion` command group with one leaf per supported shell
pub fn command() -> clap::Command {
    let leaves = SUPPORTED_SHELLS.iter().map(|(name, _)| {
        clap::Command::new(*name).about(format!("{} completions for tictactoe", name))
    });

    clap::Command::new(COMPLETION_COMMAND)
        .about("Generate shell completion scripts for tictactoe")
        .long_about(COMPLETION_LONG_ABOUT)
        .subcommands(leaves)
}

/// Look up a supported shell by its subcommand name
pub fn shell_for(name: &str) -> Option<Shell> {
    SUPPORTED_SHELLS
        .iter()
        .find(|(shell_name, _)| *shell_name == name)
        .map(|(_, shell)| *shell)
}

/// Write the completion script for `shell` describing `root`
///
/// The script is rendered into memory first; `generate` panics on write
/// failures, so only the final copy touches `out`.
pub fn run_completion(
    shell: Shell,
    root: &mut clap::Command,
    out: &mut dyn Write,
) -> std::io::Result<()> {
    let bin_name = root.get_name().to_string();
    let mut script = Vec::new();
    generate(shell, root, bin_name, &mut script);
    out.write_all(&script)?;
    out.flush()
}
