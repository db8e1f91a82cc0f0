#![forbid(unsafe_code)]

//! Core domain types for tictactoe
//!
//! Validated newtypes shared by the contract command subtrees.

use crate::error::AddressError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Number of hex digits in a contract address, excluding the 0x prefix
const ADDRESS_HEX_LEN: usize = 40;

/// A validated contract address
///
/// Addresses are `0x` followed by exactly 40 hex digits. They are stored
/// lowercased so that the same address always renders the same way.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct ContractAddress(String);

impl ContractAddress {
    /// Parses and normalizes an address
    pub fn parse(input: &str) -> Result<Self, AddressError> {
        if input.is_empty() {
            return Err(AddressError::Empty);
        }
        let digits = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .ok_or_else(|| AddressError::MissingPrefix(input.to_string()))?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidCharacter(bad));
        }
        if digits.len() != ADDRESS_HEX_LEN {
            return Err(AddressError::InvalidLength(digits.len()));
        }

        Ok(ContractAddress(format!("0x{}", digits.to_ascii_lowercase())))
    }

    /// Returns the address as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContractAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractAddress::parse(s)
    }
}

impl From<ContractAddress> for String {
    fn from(address: ContractAddress) -> Self {
        address.0
    }
}

/// Whether a contract method reads state or submits a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallKind {
    /// Read-only view call
    Call,
    /// State-changing transaction
    Transaction,
}
