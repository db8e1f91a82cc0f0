//! Metadata contract commands

use crate::bindings::call::{ContractArgs, ContractCall};
use crate::cli::CommandProvider;
use crate::error::ActionError;
use crate::types::CallKind;
use clap::{ArgMatches, FromArgMatches, Subcommand};
use std::io::Write;
use tracing::debug;

/// Name of the metadata command group
pub const METADATA_COMMAND: &str = "metadata";

const CONTRACT: &str = "TicTacToeMetadata";

/// Available metadata subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MetadataCommand {
    /// Fetch the token URI (JSON metadata with an SVG board) for a game
    TokenUri {
        #[command(flatten)]
        target: ContractArgs,

        /// Identifier of the game
        #[arg(long)]
        game_id: u64,
    },
}

impl MetadataCommand {
    /// The contract call this command stands for
    pub fn to_call(&self) -> ContractCall {
        match self {
            MetadataCommand::TokenUri { target, game_id } => ContractCall::new(
                CONTRACT,
                target.contract.clone(),
                "tokenURI",
                CallKind::Call,
            )
            .arg("gameId", *game_id),
        }
    }
}

/// Provider for the `metadata` subtree
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataCommands;

impl CommandProvider for MetadataCommands {
    fn build_subtree(&self) -> clap::Command {
        MetadataCommand::augment_subcommands(
            clap::Command::new(METADATA_COMMAND)
                .about("Query the TicTacToe metadata contract"),
        )
    }

    fn run(&self, matches: &ArgMatches, out: &mut dyn Write) -> Result<(), ActionError> {
        let command = MetadataCommand::from_arg_matches(matches)?;
        let call = command.to_call();
        debug!(method = call.method, address = %call.address, "emitting metadata call");
        call.write_jsonl(out)
    }
}
