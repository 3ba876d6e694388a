//! Packing list. Cross-validated on rules 1, 2 (presentation date, then
//! packing date) and 6.

use serde::{Deserialize, Serialize};

use tfx_core::DocumentType;

use crate::document::DocumentValidator;
use crate::lc_terms::LcTerms;
use crate::outcome::ValidationFailure;
use crate::rules::{self, require_number, require_rows, require_text};

/// A packing list as presented by the exporter's bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PackingList {
    pub consignee_name: String,
    pub consignee_address: String,
    pub packing_list_no: String,
    /// Packing date, `MM/DD/YYYY`.
    pub date: String,
    #[serde(rename = "Rows", alias = "ROWS")]
    pub rows: Vec<PackingListRow>,
    pub total_quantity_mtons: Option<i64>,
    pub total_net_weight_kgs: Option<i64>,
    pub total_gross_weight_kgs: Option<i64>,
    pub delivery_terms: String,
    pub documentary_credit_number: String,
    pub method_of_loading: String,
    pub container_number: String,
    pub port_of_loading: String,
    pub port_of_discharge: String,
    pub date_of_presentation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PackingListRow {
    pub description_of_goods: String,
    pub quantity_mtons: i64,
    pub net_weight_kgs: i64,
    pub gross_weight_kgs: i64,
}

impl DocumentValidator for PackingList {
    const DOCUMENT_TYPE: DocumentType = DocumentType::PackingList;
    const LABEL: &'static str = "packing list";

    fn lc_number(&self) -> &str {
        &self.documentary_credit_number
    }

    fn check_required(&self) -> Result<(), ValidationFailure> {
        require_number("TOTAL_GROSS_WEIGHT_KGS", self.total_gross_weight_kgs)?;
        require_number("TOTAL_NET_WEIGHT_KGS", self.total_net_weight_kgs)?;
        require_number("TOTAL_QUANTITY_MTONS", self.total_quantity_mtons)?;
        require_text("CONSIGNEE_ADDRESS", &self.consignee_address)?;
        require_text("CONSIGNEE_NAME", &self.consignee_name)?;
        require_text("CONTAINER_NUMBER", &self.container_number)?;
        require_text("DATE", &self.date)?;
        require_text("DATE_OF_PRESENTATION", &self.date_of_presentation)?;
        require_text("DELIVERY_TERMS", &self.delivery_terms)?;
        require_text("DOCUMENTARY_CREDIT_NUMBER", &self.documentary_credit_number)?;
        require_text("METHOD_OF_LOADING", &self.method_of_loading)?;
        require_text("PACKING_LIST_NO", &self.packing_list_no)?;
        require_text("PORT_OF_DISCHARGE", &self.port_of_discharge)?;
        require_text("PORT_OF_LOADING", &self.port_of_loading)?;
        require_rows("Rows", &self.rows)?;
        Ok(())
    }

    fn cross_validate(&self, terms: &LcTerms) -> Result<(), ValidationFailure> {
        rules::check_lc_number(Self::LABEL, &self.documentary_credit_number, terms)?;
        rules::check_not_before_issue("DATE_OF_PRESENTATION", &self.date_of_presentation, terms)?;
        rules::check_not_before_issue("DATE", &self.date, terms)?;
        rules::check_shipped_by_deadline("DATE", &self.date, terms)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_packing_list, sample_terms};

    #[test]
    fn sample_passes_both_phases() {
        assert_eq!(sample_packing_list().validate(&sample_terms()), Ok(()));
    }

    #[test]
    fn totals_are_checked_first() {
        let mut pl = sample_packing_list();
        pl.consignee_name.clear();
        pl.total_net_weight_kgs = None;
        assert_eq!(
            pl.check_required(),
            Err(ValidationFailure::MissingField("TOTAL_NET_WEIGHT_KGS"))
        );
    }

    #[test]
    fn every_required_field_is_named_when_removed() {
        let base = serde_json::to_value(sample_packing_list()).unwrap();
        let keys: Vec<String> = base.as_object().unwrap().keys().cloned().collect();
        for key in keys {
            let mut json = base.clone();
            json.as_object_mut().unwrap().remove(&key);
            let doc: PackingList = serde_json::from_value(json).unwrap();
            match doc.check_required() {
                Err(ValidationFailure::MissingField(name)) => assert_eq!(name, key),
                other => panic!("removing {key} gave {other:?}"),
            }
        }
    }

    #[test]
    fn credit_number_must_match() {
        let mut pl = sample_packing_list();
        pl.documentary_credit_number = "LC-999".into();
        assert_eq!(
            pl.validate(&sample_terms()),
            Err(ValidationFailure::LcNumberMismatch {
                document: "packing list",
                found: "LC-999".into(),
                expected: "LC-001".into(),
            })
        );
    }

    #[test]
    fn packing_after_latest_shipment_fails() {
        let mut pl = sample_packing_list();
        pl.date = "04/02/2020".into();
        assert!(matches!(
            pl.validate(&sample_terms()),
            Err(ValidationFailure::ShippedAfterDeadline { field: "DATE", .. })
        ));
    }

    #[test]
    fn tolerance_does_not_apply() {
        let mut terms = sample_terms();
        terms.tag39a = "not a number".into();
        assert_eq!(sample_packing_list().validate(&terms), Ok(()));
    }
}
