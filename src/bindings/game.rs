//! Game contract commands
//!
//! `tictactoe game <command>` covers the TicTacToe contract's methods. Board
//! coordinates are checked against the 3x3 grid here; whether a move is legal
//! in the current game is decided by the contract.

use crate::bindings::call::{ContractArgs, ContractCall};
use crate::cli::CommandProvider;
use crate::error::ActionError;
use crate::types::CallKind;
use clap::{ArgMatches, FromArgMatches, Subcommand};
use std::io::Write;
use tracing::debug;

/// Name of the game command group
pub const GAME_COMMAND: &str = "game";

/// Contract name recorded in emitted calls
const CONTRACT: &str = "TicTacToe";

/// Available game subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Open a new game and wait for an opponent
    NewGame {
        #[command(flatten)]
        target: ContractArgs,
    },

    /// Join an open game as the second player
    AcceptGame {
        #[command(flatten)]
        target: ContractArgs,

        /// Identifier of the game to join
        #[arg(long)]
        game_id: u64,
    },

    /// Place your mark on the board
    MakeMove {
        #[command(flatten)]
        target: ContractArgs,

        /// Identifier of the game
        #[arg(long)]
        game_id: u64,

        /// Row, from 0 to 2
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..3))]
        x: u8,

        /// Column, from 0 to 2
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..3))]
        y: u8,
    },

    /// Read the current state of a game
    GameState {
        #[command(flatten)]
        target: ContractArgs,

        /// Identifier of the game
        #[arg(long)]
        game_id: u64,
    },
}

impl GameCommand {
    /// The contract call this command stands for
    pub fn to_call(&self) -> ContractCall {
        match self {
            GameCommand::NewGame { target } => ContractCall::new(
                CONTRACT,
                target.contract.clone(),
                "newGame",
                CallKind::Transaction,
            ),
            GameCommand::AcceptGame { target, game_id } => ContractCall::new(
                CONTRACT,
                target.contract.clone(),
                "acceptGame",
                CallKind::Transaction,
            )
            .arg("gameId", *game_id),
            GameCommand::MakeMove {
                target,
                game_id,
                x,
                y,
            } => ContractCall::new(
                CONTRACT,
                target.contract.clone(),
                "makeMove",
                CallKind::Transaction,
            )
            .arg("gameId", *game_id)
            .arg("x", *x)
            .arg("y", *y),
            GameCommand::GameState { target, game_id } => ContractCall::new(
                CONTRACT,
                target.contract.clone(),
                "gameState",
                CallKind::Call,
            )
            .arg("gameId", *game_id),
        }
    }
}

/// Provider for the `game` subtree
#[derive(Debug, Clone, Copy, Default)]
pub struct GameCommands;

impl CommandProvider for GameCommands {
    fn build_subtree(&self) -> clap::Command {
        GameCommand::augment_subcommands(
            clap::Command::new(GAME_COMMAND).about("Interact with the TicTacToe game contract"),
        )
    }

    fn run(&self, matches: &ArgMatches, out: &mut dyn Write) -> Result<(), ActionError> {
        let command = GameCommand::from_arg_matches(matches)?;
        let call = command.to_call();
        debug!(method = call.method, address = %call.address, "emitting game call");
        call.write_jsonl(out)
    }
}
