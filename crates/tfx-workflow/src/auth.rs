//! # Caller Authorization
//!
//! The workflow never inspects certificates. It asks an
//! [`AuthorizationPort`] whether the current caller holds a role on a
//! contract, and the port answers from whatever identity system the
//! embedder runs.
//!
//! Two ports ship here: [`AllowAll`], and [`StaticParticipants`], an
//! explicit grant table used by tests and single-tenant embedders.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use tfx_core::{ContractId, Role};

/// Failure of the identity backend itself (not a denial).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("authorization backend unavailable: {0}")]
    Unavailable(String),
}

/// Answers role questions about the current caller.
pub trait AuthorizationPort: Send + Sync {
    /// Whether the caller holds `role` on `contract`.
    fn is_participant(&self, contract: &ContractId, role: Role) -> Result<bool, AuthError>;

    /// Whether the caller holds any of the four roles on `contract`.
    fn is_any_participant(&self, contract: &ContractId) -> Result<bool, AuthError> {
        for role in Role::ALL {
            if self.is_participant(contract, role)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Grants every role on every contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AuthorizationPort for AllowAll {
    fn is_participant(&self, _contract: &ContractId, _role: Role) -> Result<bool, AuthError> {
        Ok(true)
    }
}

/// Explicit `(contract, role)` grants for one caller.
///
/// Clones share the grant table, so a test can keep a handle and change
/// grants while the workflow owns another.
#[derive(Debug, Clone, Default)]
pub struct StaticParticipants {
    grants: Arc<RwLock<HashSet<(ContractId, Role)>>>,
}

impl StaticParticipants {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self, contract: &ContractId, role: Role) {
        self.grants.write().insert((contract.clone(), role));
    }

    pub fn revoke(&self, contract: &ContractId, role: Role) {
        self.grants.write().remove(&(contract.clone(), role));
    }

    /// Drop every grant.
    pub fn clear(&self) {
        self.grants.write().clear();
    }
}

impl AuthorizationPort for StaticParticipants {
    fn is_participant(&self, contract: &ContractId, role: Role) -> Result<bool, AuthError> {
        Ok(self.grants.read().contains(&(contract.clone(), role)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract() -> ContractId {
        ContractId::new("C-1").unwrap()
    }

    #[test]
    fn allow_all_grants_everything() {
        assert!(AllowAll.is_participant(&contract(), Role::ImporterBank).unwrap());
        assert!(AllowAll.is_any_participant(&contract()).unwrap());
    }

    #[test]
    fn static_grants_are_per_role() {
        let port = StaticParticipants::new();
        port.grant(&contract(), Role::ExporterBank);
        assert!(port.is_participant(&contract(), Role::ExporterBank).unwrap());
        assert!(!port.is_participant(&contract(), Role::ImporterBank).unwrap());
        assert!(port.is_any_participant(&contract()).unwrap());
    }

    #[test]
    fn clones_share_grants() {
        let port = StaticParticipants::new();
        let handle = port.clone();
        handle.grant(&contract(), Role::Importer);
        assert!(port.is_participant(&contract(), Role::Importer).unwrap());
        handle.revoke(&contract(), Role::Importer);
        assert!(!port.is_any_participant(&contract()).unwrap());
    }
}
