//! Expense identifiers
//!
//! Ids are plain integers drawn from a per-ledger counter, wrapped in a
//! newtype so they cannot be mixed up with amounts or month numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an expense, unique within one ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u64);

impl ExpenseId {
    /// Wrap a raw id
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw integer value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Parse an id, accepting an optional leading `#`
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<u64> for ExpenseId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Monotonic id source owned by a ledger
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdCounter(u64);

impl IdCounter {
    /// Start counting from zero
    pub const fn new() -> Self {
        Self(0)
    }

    /// Hand out the next id
    pub fn next_id(&mut self) -> ExpenseId {
        let id = ExpenseId(self.0);
        self.0 += 1;
        id
    }

    /// Make sure ids handed out from now on are greater than `seen`
    pub fn bump_past(&mut self, seen: ExpenseId) {
        if self.0 <= seen.0 {
            self.0 = seen.0 + 1;
        }
    }
}
