//! # Business Identity Newtypes
//!
//! Newtype wrappers for the keys used across the trade-finance stack.
//! A contract UID is chosen by the importer's bank when the LC is first
//! submitted and then ties together the business-process record, every LC
//! revision and the three export documents. Purchase orders live in their
//! own numeric id space.

use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;

/// Business key identifying one trade-finance case across all its records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContractId(String);

impl ContractId {
    /// Create a contract id, rejecting empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdentifierError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(IdentifierError::Empty { kind: "contract id" });
        }
        Ok(Self(raw))
    }

    /// Access the underlying string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContractId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ContractId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Numeric identifier assigned to a purchase order on creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PurchaseOrderId(pub u64);

impl PurchaseOrderId {
    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Access the inner number.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PurchaseOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PurchaseOrderId {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| IdentifierError::Invalid {
                kind: "purchase order id",
                value: s.to_string(),
            })
    }
}
