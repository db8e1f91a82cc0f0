//! Contract command subtrees
//!
//! Each provider exposes one contract's call surface under the root command.
//! Actions validate their flags and emit the resulting contract call as a
//! single JSON line; submitting it to a node is left to the caller.

pub mod call;
pub mod game;
pub mod metadata;

pub use call::{ContractArgs, ContractCall};
pub use game::{GameCommand, GameCommands};
pub use metadata::{MetadataCommand, MetadataCommands};
