//! Purchase orders.
//!
//! Each order is stored under a numeric id. A master index (`ALL_PO`)
//! lists every id in creation order; the next id is one past the last one
//! in the index. Creating an order writes the order and the index as one
//! saga.

use serde::{Deserialize, Serialize};

use tfx_core::{PurchaseOrderId, Role};
use tfx_documents::PurchaseOrder;
use tfx_store::{PurchaseOrderIndex, PurchaseOrderRecord, RecordKey, RecordStore, StoredRecord};

use crate::audit::WorkflowEvent;
use crate::auth::AuthorizationPort;
use crate::error::WorkflowError;
use crate::saga::Saga;
use crate::workflow::TradeFinanceWorkflow;

/// A purchase order with its id, as returned by the listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrderEntry {
    #[serde(rename = "ContractId")]
    pub id: PurchaseOrderId,
    #[serde(flatten)]
    pub order: PurchaseOrder,
}

impl From<PurchaseOrderRecord> for PurchaseOrderEntry {
    fn from(record: PurchaseOrderRecord) -> Self {
        Self {
            id: record.id,
            order: record.order,
        }
    }
}

impl<S: RecordStore, A: AuthorizationPort> TradeFinanceWorkflow<S, A> {
    /// Store a new purchase order. Only an importer may create one.
    pub fn create_po(
        &self,
        json: &str,
        creator_role: &str,
    ) -> Result<PurchaseOrderId, WorkflowError> {
        self.audited("create_po", None, || {
            if creator_role.parse::<Role>().ok() != Some(Role::Importer) {
                return Err(WorkflowError::PurchaseOrderDenied {
                    role: creator_role.to_string(),
                });
            }
            let order = PurchaseOrder::from_json(json)
                .map_err(|failure| WorkflowError::InvalidArgument(failure.to_string()))?;

            let mut index = self.po_index()?;
            let id = index
                .ids
                .last()
                .map_or(PurchaseOrderId(1), |last| last.next());
            index.ids.push(id);

            Saga::run(&self.store, "create_po", self.audit.as_ref(), |journal| {
                journal.create(StoredRecord::PurchaseOrder(PurchaseOrderRecord { id, order }))?;
                journal.put(StoredRecord::PurchaseOrderIndex(index))?;
                Ok(())
            })?;

            self.audit.record(WorkflowEvent::PurchaseOrderCreated { id });
            Ok(id)
        })
    }

    /// One purchase order by id.
    pub fn get_po_details(&self, id: &str) -> Result<Option<PurchaseOrder>, WorkflowError> {
        let id: PurchaseOrderId = id.parse()?;
        Ok(self.find_po(id)?.map(|record| record.order))
    }

    /// Every purchase order, in creation order.
    pub fn get_all_po(&self) -> Result<Vec<PurchaseOrderEntry>, WorkflowError> {
        self.all_po_where(|_| true)
    }

    /// Purchase orders naming `exporter`.
    pub fn get_all_po_for_exporter(
        &self,
        exporter: &str,
    ) -> Result<Vec<PurchaseOrderEntry>, WorkflowError> {
        self.all_po_where(|order| order.exporter == exporter)
    }

    /// Purchase orders naming `exporter_bank`.
    pub fn get_all_po_for_exporter_bank(
        &self,
        exporter_bank: &str,
    ) -> Result<Vec<PurchaseOrderEntry>, WorkflowError> {
        self.all_po_where(|order| order.exporter_bank == exporter_bank)
    }

    fn all_po_where(
        &self,
        keep: impl Fn(&PurchaseOrder) -> bool,
    ) -> Result<Vec<PurchaseOrderEntry>, WorkflowError> {
        let mut out = Vec::new();
        for id in self.po_index()?.ids {
            if let Some(record) = self.find_po(id)? {
                if keep(&record.order) {
                    out.push(record.into());
                }
            }
        }
        Ok(out)
    }

    fn po_index(&self) -> Result<PurchaseOrderIndex, WorkflowError> {
        Ok(self
            .store
            .find(&RecordKey::purchase_order_index())?
            .map(StoredRecord::into_purchase_order_index)
            .transpose()?
            .unwrap_or_default())
    }

    fn find_po(&self, id: PurchaseOrderId) -> Result<Option<PurchaseOrderRecord>, WorkflowError> {
        Ok(self
            .store
            .find(&RecordKey::purchase_order(id))?
            .map(StoredRecord::into_purchase_order)
            .transpose()?)
    }
}
