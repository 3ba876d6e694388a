//! # Bill of Lading
//!
//! The carrier's receipt for the shipped goods. Cross-validated against
//! the LC on rules 1, 2, 3, 6, 7 and 9.

use serde::{Deserialize, Serialize};

use tfx_core::DocumentType;

use crate::document::DocumentValidator;
use crate::lc_terms::LcTerms;
use crate::outcome::ValidationFailure;
use crate::rules::{self, require_number, require_rows, require_text};

/// A bill of lading as presented by the exporter's bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct BillOfLading {
    /// Standard carrier alpha code.
    pub scac: String,
    pub bl_no: Option<i64>,
    pub booking_no: Option<i64>,
    pub export_references: String,
    pub svc_contract: String,
    pub onward_inland_routing: String,
    pub shipper_name_address: String,
    pub consignee_name_address: String,
    pub vessel: String,
    pub voyage_no: Option<i64>,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub place_of_receipt: String,
    pub place_of_delivery: String,
    #[serde(rename = "Rows", alias = "ROWS")]
    pub rows: Vec<BillOfLadingRow>,
    pub freight_and_charges: Option<i64>,
    pub rate: Option<i64>,
    pub unit: Option<i64>,
    pub currency: String,
    pub prepaid: String,
    pub total_containers_received_by_carrier: Option<i64>,
    pub container_number: String,
    pub place_of_issue_of_bl: String,
    pub number_and_sequence_of_original_bls: String,
    /// `MM/DD/YYYY`.
    pub date_of_issue_of_bl: String,
    pub declared_value: Option<i64>,
    /// `MM/DD/YYYY`. The shipment date for rules 6 and 7.
    pub shipper_on_board_date: String,
    pub signed_by: String,
    pub lc_number: String,
    /// `MM/DD/YYYY`.
    pub date_of_presentation: String,
}

/// One line of goods on a bill of lading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct BillOfLadingRow {
    pub description_of_goods: String,
    pub weight: i64,
    pub measurement: i64,
}

impl DocumentValidator for BillOfLading {
    const DOCUMENT_TYPE: DocumentType = DocumentType::BillOfLading;
    const LABEL: &'static str = "BL";

    fn lc_number(&self) -> &str {
        &self.lc_number
    }

    fn check_required(&self) -> Result<(), ValidationFailure> {
        require_number("BL_NO", self.bl_no)?;
        require_number("BOOKING_NO", self.booking_no)?;
        require_number("DECLARED_VALUE", self.declared_value)?;
        require_number("FREIGHT_AND_CHARGES", self.freight_and_charges)?;
        require_number("RATE", self.rate)?;
        require_number(
            "TOTAL_CONTAINERS_RECEIVED_BY_CARRIER",
            self.total_containers_received_by_carrier,
        )?;
        require_number("UNIT", self.unit)?;
        require_number("VOYAGE_NO", self.voyage_no)?;
        require_text("CONSIGNEE_NAME_ADDRESS", &self.consignee_name_address)?;
        require_text("CONTAINER_NUMBER", &self.container_number)?;
        require_text("CURRENCY", &self.currency)?;
        require_text("DATE_OF_ISSUE_OF_BL", &self.date_of_issue_of_bl)?;
        require_text("DATE_OF_PRESENTATION", &self.date_of_presentation)?;
        require_text("EXPORT_REFERENCES", &self.export_references)?;
        require_text("LC_NUMBER", &self.lc_number)?;
        require_text(
            "NUMBER_AND_SEQUENCE_OF_ORIGINAL_BLS",
            &self.number_and_sequence_of_original_bls,
        )?;
        require_text("ONWARD_INLAND_ROUTING", &self.onward_inland_routing)?;
        require_text("PLACE_OF_DELIVERY", &self.place_of_delivery)?;
        require_text("PLACE_OF_ISSUE_OF_BL", &self.place_of_issue_of_bl)?;
        require_text("PLACE_OF_RECEIPT", &self.place_of_receipt)?;
        require_text("PORT_OF_DISCHARGE", &self.port_of_discharge)?;
        require_text("PORT_OF_LOADING", &self.port_of_loading)?;
        require_text("PREPAID", &self.prepaid)?;
        require_rows("Rows", &self.rows)?;
        require_text("SCAC", &self.scac)?;
        require_text("SHIPPER_ON_BOARD_DATE", &self.shipper_on_board_date)?;
        require_text("SIGNED_BY", &self.signed_by)?;
        require_text("SVC_CONTRACT", &self.svc_contract)?;
        require_text("VESSEL", &self.vessel)?;
        require_text("SHIPPER_NAME_ADDRESS", &self.shipper_name_address)?;
        Ok(())
    }

    fn cross_validate(&self, terms: &LcTerms) -> Result<(), ValidationFailure> {
        rules::check_lc_number(Self::LABEL, &self.lc_number, terms)?;
        rules::check_not_before_issue("DATE_OF_ISSUE_OF_BL", &self.date_of_issue_of_bl, terms)?;
        let declared = self
            .declared_value
            .ok_or(ValidationFailure::MissingField("DECLARED_VALUE"))?;
        rules::check_within_tolerance("DECLARED_VALUE", declared, terms)?;
        rules::check_shipped_by_deadline("SHIPPER_ON_BOARD_DATE", &self.shipper_on_board_date, terms)?;
        rules::check_presentation_window(
            "DATE_OF_PRESENTATION",
            &self.date_of_presentation,
            "SHIPPER_ON_BOARD_DATE",
            &self.shipper_on_board_date,
        )?;
        rules::check_currency(Self::LABEL, &self.currency, terms)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_bill_of_lading, sample_terms};

    #[test]
    fn sample_passes_both_phases() {
        assert_eq!(sample_bill_of_lading().validate(&sample_terms()), Ok(()));
    }

    #[test]
    fn absent_numeric_field_is_missing() {
        let mut json = serde_json::to_value(sample_bill_of_lading()).unwrap();
        json.as_object_mut().unwrap().remove("VOYAGE_NO");
        let bl: BillOfLading = serde_json::from_value(json).unwrap();
        assert_eq!(bl.check_required(), Err(ValidationFailure::MissingField("VOYAGE_NO")));
    }

    #[test]
    fn every_required_field_is_named_when_removed() {
        let base = serde_json::to_value(sample_bill_of_lading()).unwrap();
        let keys: Vec<String> = base.as_object().unwrap().keys().cloned().collect();
        for key in keys {
            let mut json = base.clone();
            json.as_object_mut().unwrap().remove(&key);
            let doc: BillOfLading = serde_json::from_value(json).unwrap();
            match doc.check_required() {
                Err(ValidationFailure::MissingField(name)) => assert_eq!(name, key),
                other => panic!("removing {key} gave {other:?}"),
            }
        }
    }

    #[test]
    fn negative_numeric_field_is_missing() {
        let mut bl = sample_bill_of_lading();
        bl.rate = Some(-1);
        assert_eq!(bl.check_required(), Err(ValidationFailure::MissingField("RATE")));
    }

    #[test]
    fn zero_is_an_acceptable_number() {
        let mut bl = sample_bill_of_lading();
        bl.freight_and_charges = Some(0);
        assert_eq!(bl.check_required(), Ok(()));
    }

    #[test]
    fn empty_rows_are_missing() {
        let mut bl = sample_bill_of_lading();
        bl.rows.clear();
        assert_eq!(bl.check_required(), Err(ValidationFailure::MissingField("Rows")));
    }

    #[test]
    fn rules_evaluate_in_order() {
        let terms = sample_terms();
        let mut bl = sample_bill_of_lading();
        bl.currency = "EUR".into();
        bl.declared_value = Some(5000);
        // Rule 3 fires before rule 9.
        assert!(matches!(
            bl.validate(&terms),
            Err(ValidationFailure::ValueOutOfTolerance { field: "DECLARED_VALUE", .. })
        ));
        bl.declared_value = Some(1000);
        assert!(matches!(
            bl.validate(&terms),
            Err(ValidationFailure::CurrencyMismatch { document: "BL", .. })
        ));
    }

    #[test]
    fn bl_issued_before_credit_fails_rule_two() {
        let mut bl = sample_bill_of_lading();
        bl.date_of_issue_of_bl = "12/31/2019".into();
        assert!(matches!(
            bl.validate(&sample_terms()),
            Err(ValidationFailure::IssuedBeforeCredit { field: "DATE_OF_ISSUE_OF_BL", .. })
        ));
    }

    #[test]
    fn late_presentation_fails_rule_seven() {
        let mut bl = sample_bill_of_lading();
        bl.shipper_on_board_date = "03/01/2020".into();
        bl.date_of_presentation = "03/23/2020".into();
        assert!(matches!(
            bl.validate(&sample_terms()),
            Err(ValidationFailure::PresentationWindowExceeded { .. })
        ));
    }

    #[test]
    fn wire_names_match_field_list() {
        let json = serde_json::to_value(sample_bill_of_lading()).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["SCAC", "BL_NO", "Rows", "DATE_OF_ISSUE_OF_BL", "TOTAL_CONTAINERS_RECEIVED_BY_CARRIER"] {
            assert!(obj.contains_key(key), "{key}");
        }
    }
}
