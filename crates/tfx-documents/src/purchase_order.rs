//! Purchase order payload.
//!
//! Purchase orders are plain records with no cross-validation. They sit
//! beside the LC workflow so that the parties can agree on the goods and
//! terms before an LC is issued.

use serde::{Deserialize, Serialize};

use crate::outcome::ValidationFailure;

/// A purchase order raised by an importer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PurchaseOrder {
    pub ref_no: String,
    pub importer: String,
    pub exporter: String,
    pub exporter_bank: String,
    pub commodity: String,
    pub aircompressor: String,
    pub currency: String,
    pub unit_price: String,
    pub amount: String,
    pub quantity: String,
    pub weight: String,
    #[serde(rename = "TermsofPayment")]
    pub terms_of_payment: String,
    #[serde(rename = "TermsofTrade")]
    pub terms_of_trade: String,
    #[serde(rename = "TermsofInsurance")]
    pub terms_of_insurance: String,
    pub packing_method: String,
    #[serde(rename = "WayofTransportation")]
    pub way_of_transportation: String,
    #[serde(rename = "TimeofShipment")]
    pub time_of_shipment: String,
    #[serde(rename = "PortofShipment")]
    pub port_of_shipment: String,
    #[serde(rename = "PortofDischarge")]
    pub port_of_discharge: String,
    pub payment_date: String,
    #[serde(rename = "PORejectReason")]
    pub po_reject_reason: String,
}

impl PurchaseOrder {
    /// Decode a purchase order from JSON.
    pub fn from_json(json: &str) -> Result<Self, ValidationFailure> {
        serde_json::from_str(json).map_err(|e| ValidationFailure::MalformedPayload {
            document: "purchase order",
            reason: e.to_string(),
        })
    }
}
