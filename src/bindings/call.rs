//! Contract call records
//!
//! A [`ContractCall`] serializes to one JSON object per line with keys in a
//! fixed order: `address`, `args`, `contract`, `kind`, `method`. Argument
//! names are sorted, so identical invocations always produce identical bytes.

use crate::error::ActionError;
use crate::types::{CallKind, ContractAddress};
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Write;

/// Flags shared by every contract command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ContractArgs {
    /// Address of the deployed contract (0x followed by 40 hex digits)
    #[arg(long, value_parser = ContractAddress::parse)]
    pub contract: ContractAddress,
}

/// A single contract method invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractCall {
    /// Address of the deployed contract
    pub address: ContractAddress,
    /// Named method arguments, sorted by name
    pub args: BTreeMap<String, Value>,
    /// Contract name, e.g. `TicTacToe`
    pub contract: &'static str,
    /// View call or state-changing transaction
    pub kind: CallKind,
    /// Contract method name, e.g. `makeMove`
    pub method: &'static str,
}

impl ContractCall {
    /// Create a call with no arguments
    pub fn new(
        contract: &'static str,
        address: ContractAddress,
        method: &'static str,
        kind: CallKind,
    ) -> Self {
        ContractCall {
            address,
            args: BTreeMap::new(),
            contract,
            kind,
            method,
        }
    }

    /// Add a named argument
    pub fn arg(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.args.insert(name.to_string(), value.into());
        self
    }

    /// Write the call as one JSON line
    pub fn write_jsonl(&self, out: &mut dyn Write) -> Result<(), ActionError> {
        serde_json::to_writer(&mut *out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
