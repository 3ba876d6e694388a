//! Shared fixtures for the workflow integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};
use tfx_store::{MemoryStore, RecordKey, RecordKind, RecordStore, StoreError, StoredRecord};
use tfx_workflow::telemetry::init_test_tracing;
use tfx_workflow::{
    AllowAll, MemoryAuditSink, StaticParticipants, TradeFinanceWorkflow, WorkflowConfig,
};

pub const UID: &str = "C-100";

// ── Payloads ────────────────────────────────────────────────────────

pub fn lc_value() -> Value {
    json!({
        "Sender": "Importer Bank",
        "Receiver": "Exporter Bank",
        "Tag20": "LC-001",
        "Tag27": "1/1",
        "Tag31C": "01/01/2020",
        "Tag31D": "06/30/2020 Singapore",
        "Tag32B": "USD1000",
        "Tag39A": "10/10",
        "Tag40A": "Irrevocable",
        "Tag41A": "Any bank by negotiation",
        "Tag42C": "Sight",
        "Tag42D": "Issuing bank",
        "Tag43P": "Not allowed",
        "Tag43T": "Allowed",
        "Tag44A": "Shanghai",
        "Tag44B": "Singapore",
        "Tag44C": "03/31/2020",
        "Tag44E": "Shanghai",
        "Tag44F": "Singapore",
        "Tag45A": "Air compressors",
        "Tag46A": "BL, Invoice, Packing list",
        "Tag47A": "None",
        "Tag48": "21 days",
        "Tag49": "Without",
        "Tag50": "Importer Ltd",
        "Tag57D": "Advising bank",
        "Tag59": "Exporter Ltd",
        "Tag71B": "All charges for beneficiary"
    })
}

pub fn lc_json() -> String {
    lc_value().to_string()
}

pub fn lc_json_with(field: &str, value: &str) -> String {
    let mut lc = lc_value();
    lc[field] = Value::String(value.to_string());
    lc.to_string()
}

pub fn bl_value() -> Value {
    json!({
        "SCAC": "MAEU",
        "BL_NO": 100234,
        "BOOKING_NO": 55012,
        "EXPORT_REFERENCES": "EXP-77",
        "SVC_CONTRACT": "SC-2020-9",
        "ONWARD_INLAND_ROUTING": "Rail to Jurong",
        "SHIPPER_NAME_ADDRESS": "Exporter Ltd, Shanghai",
        "CONSIGNEE_NAME_ADDRESS": "Importer Ltd, Singapore",
        "VESSEL": "Maersk Kowloon",
        "VOYAGE_NO": 412,
        "PORT_OF_LOADING": "Shanghai",
        "PORT_OF_DISCHARGE": "Singapore",
        "PLACE_OF_RECEIPT": "Shanghai CY",
        "PLACE_OF_DELIVERY": "Singapore CY",
        "Rows": [
            {"DESCRIPTION_OF_GOODS": "Air compressors", "WEIGHT": 1200, "MEASUREMENT": 30}
        ],
        "FREIGHT_AND_CHARGES": 150,
        "RATE": 3,
        "UNIT": 50,
        "CURRENCY": "USD",
        "PREPAID": "Yes",
        "TOTAL_CONTAINERS_RECEIVED_BY_CARRIER": 1,
        "CONTAINER_NUMBER": "MSKU1234565",
        "PLACE_OF_ISSUE_OF_BL": "Shanghai",
        "NUMBER_AND_SEQUENCE_OF_ORIGINAL_BLS": "3/3",
        "DATE_OF_ISSUE_OF_BL": "03/01/2020",
        "DECLARED_VALUE": 1000,
        "SHIPPER_ON_BOARD_DATE": "03/01/2020",
        "SIGNED_BY": "Carrier agent",
        "LC_NUMBER": "LC-001",
        "DATE_OF_PRESENTATION": "03/15/2020"
    })
}

pub fn invoice_value() -> Value {
    json!({
        "PAYER": "Importer Ltd",
        "PAYEE": "Exporter Ltd",
        "TAX_REGISTRY_NO": 9100234,
        "INVOICE_CODE": 3100,
        "INVOICE_NUMBER": 20200301,
        "PRINTING_NO": 1,
        "Rows": [
            {"SERVICE": "Air compressors", "ITEM": 10, "AMOUNT_CHARGED": 1000, "REMARKS": "FOB Shanghai"}
        ],
        "TOTAL_IN_WORDS": "One thousand",
        "TOTAL_IN_FIGURES": 1000,
        "PRINT_NO": 1,
        "ANTI_FORGERY_CODE": "AF-998",
        "DATE_ISSUED": "03/01/2020",
        "DUE_DATE": "04/30/2020",
        "SHIPPING_DATE": "03/01/2020",
        "LC_NUMBER": "LC-001",
        "DATE_OF_PRESENTATION": "03/15/2020",
        "CURRENCY": "USD"
    })
}

pub fn packing_list_value() -> Value {
    json!({
        "CONSIGNEE_NAME": "Importer Ltd",
        "CONSIGNEE_ADDRESS": "1 Harbour Road, Singapore",
        "PACKING_LIST_NO": "PL-17",
        "DATE": "03/01/2020",
        "Rows": [
            {"DESCRIPTION_OF_GOODS": "Air compressors", "QUANTITY_MTONS": 1, "NET_WEIGHT_KGS": 1100, "GROSS_WEIGHT_KGS": 1200}
        ],
        "TOTAL_QUANTITY_MTONS": 1,
        "TOTAL_NET_WEIGHT_KGS": 1100,
        "TOTAL_GROSS_WEIGHT_KGS": 1200,
        "DELIVERY_TERMS": "FOB",
        "DOCUMENTARY_CREDIT_NUMBER": "LC-001",
        "METHOD_OF_LOADING": "Container",
        "CONTAINER_NUMBER": "MSKU1234565",
        "PORT_OF_LOADING": "Shanghai",
        "PORT_OF_DISCHARGE": "Singapore",
        "DATE_OF_PRESENTATION": "03/15/2020"
    })
}

pub fn bl_json() -> String {
    bl_value().to_string()
}

pub fn invoice_json() -> String {
    invoice_value().to_string()
}

pub fn packing_list_json() -> String {
    packing_list_value().to_string()
}

pub fn with_field(mut doc: Value, field: &str, value: Value) -> String {
    doc[field] = value;
    doc.to_string()
}

pub fn purchase_order_json(ref_no: &str, exporter: &str, exporter_bank: &str) -> String {
    json!({
        "RefNo": ref_no,
        "Importer": "Importer Ltd",
        "Exporter": exporter,
        "ExporterBank": exporter_bank,
        "Commodity": "Air compressors",
        "Currency": "USD",
        "Amount": "1000",
        "TermsofPayment": "L/C at sight"
    })
    .to_string()
}

// ── Workflows ───────────────────────────────────────────────────────

pub fn open_workflow() -> (TradeFinanceWorkflow<MemoryStore, AllowAll>, MemoryAuditSink) {
    init_test_tracing();
    let audit = MemoryAuditSink::new();
    let workflow = TradeFinanceWorkflow::new(MemoryStore::new(), AllowAll, WorkflowConfig::default())
        .with_audit_sink(Arc::new(audit.clone()));
    (workflow, audit)
}

pub fn guarded_workflow() -> (
    TradeFinanceWorkflow<MemoryStore, StaticParticipants>,
    StaticParticipants,
) {
    let grants = StaticParticipants::new();
    let workflow = TradeFinanceWorkflow::new(
        MemoryStore::new(),
        grants.clone(),
        WorkflowConfig::default().with_authorization(true),
    )
    .with_audit_sink(Arc::new(MemoryAuditSink::new()));
    (workflow, grants)
}

pub fn failing_workflow() -> (
    TradeFinanceWorkflow<FailingStore, AllowAll>,
    FailingStore,
    MemoryAuditSink,
) {
    init_test_tracing();
    let store = FailingStore::new();
    let audit = MemoryAuditSink::new();
    let workflow = TradeFinanceWorkflow::new(store.clone(), AllowAll, WorkflowConfig::default())
        .with_audit_sink(Arc::new(audit.clone()));
    (workflow, store, audit)
}

pub fn submit_contract<S: RecordStore, A: tfx_workflow::AuthorizationPort>(
    workflow: &TradeFinanceWorkflow<S, A>,
    uid: &str,
) {
    let outcome = workflow
        .submit_lc(uid, &lc_json(), b"%PDF-lc", "Importer Ltd", "Exporter Ltd", "Importer Bank", "Exporter Bank")
        .unwrap();
    assert!(outcome.is_applied(), "{outcome:?}");
}

pub fn submit_documents<S: RecordStore, A: tfx_workflow::AuthorizationPort>(
    workflow: &TradeFinanceWorkflow<S, A>,
    uid: &str,
) {
    let outcome = workflow
        .submit_ed(
            uid,
            b"%PDF-bl",
            b"%PDF-inv",
            b"%PDF-pl",
            &bl_json(),
            &invoice_json(),
            &packing_list_json(),
            "Maersk",
            "Allianz",
        )
        .unwrap();
    assert!(outcome.is_applied(), "{outcome:?}");
}

// ── Failure injection ───────────────────────────────────────────────

/// A [`MemoryStore`] that fails chosen operations.
///
/// `fail_write(n)` makes the n-th subsequent create or replace fail once.
/// `fail_removes(true)` makes every remove fail, which blocks compensation
/// of creates.
#[derive(Debug, Clone, Default)]
pub struct FailingStore {
    inner: MemoryStore,
    writes_until_failure: Arc<AtomicUsize>,
    removes_fail: Arc<AtomicBool>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_write(&self, nth: usize) {
        self.writes_until_failure.store(nth, Ordering::SeqCst);
    }

    pub fn fail_removes(&self, fail: bool) {
        self.removes_fail.store(fail, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Vec<StoredRecord> {
        self.inner.snapshot()
    }

    fn check_write(&self, key: &RecordKey) -> Result<(), StoreError> {
        let remaining = self.writes_until_failure.load(Ordering::SeqCst);
        match remaining {
            0 => Ok(()),
            1 => {
                self.writes_until_failure.store(0, Ordering::SeqCst);
                Err(StoreError::Unavailable(format!("injected failure writing {key}")))
            }
            n => {
                self.writes_until_failure.store(n - 1, Ordering::SeqCst);
                Ok(())
            }
        }
    }
}

impl RecordStore for FailingStore {
    fn create(&self, record: StoredRecord) -> Result<(), StoreError> {
        self.check_write(&record.key())?;
        self.inner.create(record)
    }

    fn get(&self, key: &RecordKey) -> Result<StoredRecord, StoreError> {
        self.inner.get(key)
    }

    fn replace(&self, record: StoredRecord) -> Result<StoredRecord, StoreError> {
        self.check_write(&record.key())?;
        self.inner.replace(record)
    }

    fn remove(&self, key: &RecordKey) -> Result<StoredRecord, StoreError> {
        if self.removes_fail.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable(format!("injected failure removing {key}")));
        }
        self.inner.remove(key)
    }

    fn keys(&self, kind: RecordKind) -> Result<Vec<RecordKey>, StoreError> {
        self.inner.keys(kind)
    }
}
