//! # Commercial Invoice
//!
//! Cross-validated on rules 1, 2 (presentation date, then invoice date),
//! 3, 4/5, 6, 7 and 9.

use serde::{Deserialize, Serialize};

use tfx_core::DocumentType;

use crate::document::DocumentValidator;
use crate::lc_terms::LcTerms;
use crate::outcome::ValidationFailure;
use crate::rules::{self, require_number, require_rows, require_text};

/// A commercial invoice as presented by the exporter's bank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Invoice {
    pub payer: String,
    pub payee: String,
    pub tax_registry_no: Option<i64>,
    pub invoice_code: Option<i64>,
    pub invoice_number: Option<i64>,
    pub printing_no: Option<i64>,
    #[serde(rename = "Rows", alias = "ROWS")]
    pub rows: Vec<InvoiceRow>,
    pub total_in_words: String,
    pub total_in_figures: Option<i64>,
    pub print_no: Option<i64>,
    pub anti_forgery_code: String,
    pub date_issued: String,
    pub due_date: String,
    pub shipping_date: String,
    pub lc_number: String,
    pub date_of_presentation: String,
    pub currency: String,
}

/// One billed service line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct InvoiceRow {
    pub service: String,
    pub item: i64,
    pub amount_charged: i64,
    pub remarks: String,
}

impl DocumentValidator for Invoice {
    const DOCUMENT_TYPE: DocumentType = DocumentType::Invoice;
    const LABEL: &'static str = "invoice";

    fn lc_number(&self) -> &str {
        &self.lc_number
    }

    fn check_required(&self) -> Result<(), ValidationFailure> {
        require_number("INVOICE_CODE", self.invoice_code)?;
        require_number("INVOICE_NUMBER", self.invoice_number)?;
        require_number("PRINTING_NO", self.printing_no)?;
        require_number("PRINT_NO", self.print_no)?;
        require_number("TAX_REGISTRY_NO", self.tax_registry_no)?;
        require_number("TOTAL_IN_FIGURES", self.total_in_figures)?;
        require_text("ANTI_FORGERY_CODE", &self.anti_forgery_code)?;
        require_text("CURRENCY", &self.currency)?;
        require_text("DATE_ISSUED", &self.date_issued)?;
        require_text("DATE_OF_PRESENTATION", &self.date_of_presentation)?;
        require_text("DUE_DATE", &self.due_date)?;
        require_text("LC_NUMBER", &self.lc_number)?;
        require_text("PAYEE", &self.payee)?;
        require_text("PAYER", &self.payer)?;
        require_text("SHIPPING_DATE", &self.shipping_date)?;
        require_text("TOTAL_IN_WORDS", &self.total_in_words)?;
        require_rows("Rows", &self.rows)?;
        Ok(())
    }

    fn cross_validate(&self, terms: &LcTerms) -> Result<(), ValidationFailure> {
        rules::check_lc_number(Self::LABEL, &self.lc_number, terms)?;
        rules::check_not_before_issue("DATE_OF_PRESENTATION", &self.date_of_presentation, terms)?;
        rules::check_not_before_issue("DATE_ISSUED", &self.date_issued, terms)?;
        let total = self
            .total_in_figures
            .ok_or(ValidationFailure::MissingField("TOTAL_IN_FIGURES"))?;
        rules::check_within_tolerance("TOTAL_IN_FIGURES", total, terms)?;
        rules::check_due_date("DATE_ISSUED", &self.date_issued, "DUE_DATE", &self.due_date, terms)?;
        rules::check_shipped_by_deadline("SHIPPING_DATE", &self.shipping_date, terms)?;
        rules::check_presentation_window(
            "DATE_OF_PRESENTATION",
            &self.date_of_presentation,
            "SHIPPING_DATE",
            &self.shipping_date,
        )?;
        rules::check_currency(Self::LABEL, &self.currency, terms)?;
        Ok(())
    }
}
