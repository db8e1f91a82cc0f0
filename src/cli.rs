//! CLI command tree and dispatch

pub mod common;
pub mod completion;
pub mod router;
pub mod version;

// Re-export types for convenient access
pub use router::{CommandProvider, Router};
