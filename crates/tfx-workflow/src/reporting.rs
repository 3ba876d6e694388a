//! # Contract Reporting
//!
//! Read-only projections over every stored contract. Nothing here is
//! cached: each call walks the business-process records in store order and
//! derives status from the current LC and documents.
//!
//! ## Derived contract status
//!
//! ```text
//!   LC status == ACCEPTED_BY_EB ?
//!     ├─ yes ─▶ BL status if a BL is on file, else ACCEPTED_BY_EB   (no comment)
//!     └─ no  ─▶ LC status, with the LC's last comment
//! ```

use serde::{Deserialize, Serialize};

use tfx_core::{CompanyRole, ContractId, DocumentType, Role};
use tfx_state::LcStatus;
use tfx_store::{BusinessProcessRecord, RecordKind, RecordStore};

use crate::auth::AuthorizationPort;
use crate::error::WorkflowError;
use crate::workflow::TradeFinanceWorkflow;

/// Message returned when `list_contracts_by_role` gets an unknown role.
pub const ROLE_LIST_ERROR: &str = "Role should be Importer, Exporter, ImporterBank or ExporterBank.";

/// One contract row in a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSummary {
    #[serde(rename = "contractID")]
    pub contract_id: String,
    #[serde(rename = "contractStatus")]
    pub contract_status: String,
    pub comment: String,
}

/// A listing result: `{"contracts": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractsList {
    pub contracts: Vec<ContractSummary>,
}

impl ContractsList {
    /// Contract ids in listing order.
    pub fn ids(&self) -> Vec<&str> {
        self.contracts.iter().map(|c| c.contract_id.as_str()).collect()
    }
}

/// `{"NumContracts": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCount {
    #[serde(rename = "NumContracts")]
    pub num_contracts: usize,
}

/// A named party and the role it plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub role: Role,
}

impl<S: RecordStore, A: AuthorizationPort> TradeFinanceWorkflow<S, A> {
    /// Aggregate status of one contract, or `None` if it has no LC.
    pub fn derive_contract_status(
        &self,
        contract: &str,
    ) -> Result<Option<ContractSummary>, WorkflowError> {
        self.summarize(&ContractId::new(contract)?)
    }

    fn summarize(&self, uid: &ContractId) -> Result<Option<ContractSummary>, WorkflowError> {
        let Some(lc) = self.find_lc(uid)? else {
            return Ok(None);
        };
        let summary = if lc.status == LcStatus::AcceptedByEb {
            let status = match self.find_document(uid, DocumentType::BillOfLading)? {
                Some(bl) => bl.status.to_string(),
                None => lc.status.to_string(),
            };
            ContractSummary {
                contract_id: uid.to_string(),
                contract_status: status,
                comment: String::new(),
            }
        } else {
            ContractSummary {
                contract_id: uid.to_string(),
                contract_status: lc.status.to_string(),
                comment: lc.comment,
            }
        };
        Ok(Some(summary))
    }

    /// Every business-process record, in store order.
    fn contracts(&self) -> Result<Vec<BusinessProcessRecord>, WorkflowError> {
        let mut out = Vec::new();
        for record in self.store.enumerate(RecordKind::BusinessProcess)? {
            out.push(record?.into_business_process()?);
        }
        Ok(out)
    }

    /// Build a listing from the contracts that pass `keep` and are visible
    /// to the caller.
    fn listing(
        &self,
        mut keep: impl FnMut(&BusinessProcessRecord, &ContractSummary) -> bool,
    ) -> Result<ContractsList, WorkflowError> {
        let mut list = ContractsList::default();
        for bp in self.contracts()? {
            let summary = self.summarize(&bp.uid)?.unwrap_or_else(|| ContractSummary {
                contract_id: bp.uid.to_string(),
                ..ContractSummary::default()
            });
            if keep(&bp, &summary) && self.visible(&bp.uid)? {
                list.contracts.push(summary);
            }
        }
        Ok(list)
    }

    /// Every contract visible to the caller, with derived status.
    pub fn list_contracts(&self) -> Result<ContractsList, WorkflowError> {
        self.audited("list_contracts", None, || self.listing(|_, _| true))
    }

    /// Contracts on which the caller holds `role`. Only ids are reported.
    pub fn list_contracts_by_role(&self, role: &str) -> Result<ContractsList, WorkflowError> {
        self.audited("list_contracts_by_role", None, || {
            let role: Role = role
                .parse()
                .map_err(|_| WorkflowError::InvalidArgument(ROLE_LIST_ERROR.to_string()))?;
            let mut list = ContractsList::default();
            for bp in self.contracts()? {
                if !self.config.enforce_authorization || self.auth.is_participant(&bp.uid, role)? {
                    list.contracts.push(ContractSummary {
                        contract_id: bp.uid.to_string(),
                        ..ContractSummary::default()
                    });
                }
            }
            Ok(list)
        })
    }

    /// Contracts where `company` holds the role with numeric `role_code`.
    pub fn list_contracts_by_role_name(
        &self,
        company: &str,
        role_code: &str,
    ) -> Result<ContractsList, WorkflowError> {
        self.audited("list_contracts_by_role_name", None, || {
            let role = CompanyRole::from_code(role_code)?;
            self.listing(|bp, _| bp.company_name(role) == company)
        })
    }

    /// Contracts whose LC is in `status`. Only ids are reported.
    pub fn list_lcs_by_status(&self, status: &str) -> Result<ContractsList, WorkflowError> {
        self.audited("list_lcs_by_status", None, || {
            let status: LcStatus = status.parse()?;
            let mut list = ContractsList::default();
            for bp in self.contracts()? {
                let matches = self.find_lc(&bp.uid)?.is_some_and(|lc| lc.status == status);
                if matches && self.visible(&bp.uid)? {
                    list.contracts.push(ContractSummary {
                        contract_id: bp.uid.to_string(),
                        ..ContractSummary::default()
                    });
                }
            }
            Ok(list)
        })
    }

    /// Contracts whose export documents are in `status`. Only ids are
    /// reported.
    ///
    /// Status comes from the bill of lading only, as in
    /// [`get_ed_status`](TradeFinanceWorkflow::get_ed_status). A contract
    /// whose bundle has no BL never appears here.
    pub fn list_eds_by_status(&self, status: &str) -> Result<ContractsList, WorkflowError> {
        self.audited("list_eds_by_status", None, || {
            let status: tfx_state::ExportDocumentStatus = status.parse()?;
            let mut list = ContractsList::default();
            for bp in self.contracts()? {
                let matches = self
                    .find_document(&bp.uid, DocumentType::BillOfLading)?
                    .is_some_and(|bl| bl.status == status);
                if matches && self.visible(&bp.uid)? {
                    list.contracts.push(ContractSummary {
                        contract_id: bp.uid.to_string(),
                        ..ContractSummary::default()
                    });
                }
            }
            Ok(list)
        })
    }

    /// Number of contracts on file, regardless of visibility.
    pub fn get_num_contracts(&self) -> Result<ContractCount, WorkflowError> {
        Ok(ContractCount {
            num_contracts: self.store.keys(RecordKind::BusinessProcess)?.len(),
        })
    }

    /// The four named parties of a contract.
    pub fn get_contract_participants(
        &self,
        contract: &str,
    ) -> Result<Option<Vec<Participant>>, WorkflowError> {
        let uid = ContractId::new(contract)?;
        self.require_participant(&uid, "read contract participants")?;
        Ok(self.find_bp(&uid)?.map(|bp| {
            Role::ALL
                .into_iter()
                .map(|role| Participant {
                    id: bp.party_name(role).to_string(),
                    role,
                })
                .collect()
        }))
    }
}
