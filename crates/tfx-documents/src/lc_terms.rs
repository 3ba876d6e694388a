//! # Letter of Credit Terms
//!
//! An LC is submitted as a flat JSON object of SWIFT MT700-style tags. Every
//! tag is a mandatory, non-empty string. A handful of tags carry structure
//! the export-document rules depend on:
//!
//! | Tag | Meaning | Parsed by |
//! |-----|---------|-----------|
//! | `Tag20` | Documentary credit number | used verbatim |
//! | `Tag31C` | Date of issue | [`TradeDate::parse`] |
//! | `Tag32B` | Currency code and amount, e.g. `USD1000` | [`parse_amount_currency`] |
//! | `Tag39A` | Tolerance, `<plus>/<minus>` percent | [`parse_tolerance_percent`] |
//! | `Tag44C` | Latest date of shipment | [`TradeDate::parse`] |
//! | `Tag48` | Period for presentation in days | [`parse_period_days`] |
//!
//! The remaining tags (parties, expiry, drafts, shipment route, goods,
//! required documents, charges) are carried as text.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use tfx_core::TradeDate;

use crate::outcome::ValidationFailure;

/// Number of mandatory LC fields.
pub const LC_FIELD_COUNT: usize = 28;

/// The terms of a letter of credit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LcTerms {
    #[serde(rename = "Sender")]
    pub sender: String,
    #[serde(rename = "Receiver")]
    pub receiver: String,
    /// Documentary credit number.
    #[serde(rename = "Tag20")]
    pub tag20: String,
    /// Sequence of total.
    #[serde(rename = "Tag27")]
    pub tag27: String,
    /// Date of issue, `MM/DD/YYYY`.
    #[serde(rename = "Tag31C")]
    pub tag31c: String,
    /// Date and place of expiry.
    #[serde(rename = "Tag31D")]
    pub tag31d: String,
    /// Currency code and amount.
    #[serde(rename = "Tag32B")]
    pub tag32b: String,
    /// Percentage credit amount tolerance.
    #[serde(rename = "Tag39A")]
    pub tag39a: String,
    /// Form of documentary credit.
    #[serde(rename = "Tag40A")]
    pub tag40a: String,
    /// Available with / by.
    #[serde(rename = "Tag41A")]
    pub tag41a: String,
    /// Drafts at.
    #[serde(rename = "Tag42C")]
    pub tag42c: String,
    /// Drawee.
    #[serde(rename = "Tag42D")]
    pub tag42d: String,
    /// Partial shipments.
    #[serde(rename = "Tag43P")]
    pub tag43p: String,
    /// Transhipment.
    #[serde(rename = "Tag43T")]
    pub tag43t: String,
    /// Place of taking in charge / dispatch.
    #[serde(rename = "Tag44A")]
    pub tag44a: String,
    /// Place of final destination.
    #[serde(rename = "Tag44B")]
    pub tag44b: String,
    /// Latest date of shipment, `MM/DD/YYYY`.
    #[serde(rename = "Tag44C")]
    pub tag44c: String,
    /// Port of loading.
    #[serde(rename = "Tag44E")]
    pub tag44e: String,
    /// Port of discharge.
    #[serde(rename = "Tag44F")]
    pub tag44f: String,
    /// Description of goods.
    #[serde(rename = "Tag45A")]
    pub tag45a: String,
    /// Documents required.
    #[serde(rename = "Tag46A")]
    pub tag46a: String,
    /// Additional conditions.
    #[serde(rename = "Tag47A")]
    pub tag47a: String,
    /// Period for presentation.
    #[serde(rename = "Tag48")]
    pub tag48: String,
    /// Confirmation instructions.
    #[serde(rename = "Tag49")]
    pub tag49: String,
    /// Applicant.
    #[serde(rename = "Tag50")]
    pub tag50: String,
    /// Advise through bank.
    #[serde(rename = "Tag57D")]
    pub tag57d: String,
    /// Beneficiary.
    #[serde(rename = "Tag59")]
    pub tag59: String,
    /// Charges.
    #[serde(rename = "Tag71B")]
    pub tag71b: String,
}

/// Currency and amount extracted from `Tag32B`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditAmount {
    /// ISO currency code.
    pub currency: String,
    /// Whole amount in currency units.
    pub amount: u64,
}

impl LcTerms {
    /// Parse LC terms from JSON. Absent tags become empty strings and are
    /// reported by [`validate_required`](Self::validate_required).
    pub fn from_json(json: &str) -> Result<Self, ValidationFailure> {
        serde_json::from_str(json).map_err(|e| ValidationFailure::MalformedPayload {
            document: "L/C",
            reason: e.to_string(),
        })
    }

    /// Every mandatory field paired with its tag name, in check order.
    pub fn fields(&self) -> [(&'static str, &str); LC_FIELD_COUNT] {
        [
            ("Sender", self.sender.as_str()),
            ("Receiver", self.receiver.as_str()),
            ("Tag20", self.tag20.as_str()),
            ("Tag27", self.tag27.as_str()),
            ("Tag31C", self.tag31c.as_str()),
            ("Tag31D", self.tag31d.as_str()),
            ("Tag32B", self.tag32b.as_str()),
            ("Tag39A", self.tag39a.as_str()),
            ("Tag40A", self.tag40a.as_str()),
            ("Tag41A", self.tag41a.as_str()),
            ("Tag42C", self.tag42c.as_str()),
            ("Tag42D", self.tag42d.as_str()),
            ("Tag43P", self.tag43p.as_str()),
            ("Tag43T", self.tag43t.as_str()),
            ("Tag44A", self.tag44a.as_str()),
            ("Tag44B", self.tag44b.as_str()),
            ("Tag44C", self.tag44c.as_str()),
            ("Tag44E", self.tag44e.as_str()),
            ("Tag44F", self.tag44f.as_str()),
            ("Tag45A", self.tag45a.as_str()),
            ("Tag46A", self.tag46a.as_str()),
            ("Tag47A", self.tag47a.as_str()),
            ("Tag48", self.tag48.as_str()),
            ("Tag49", self.tag49.as_str()),
            ("Tag50", self.tag50.as_str()),
            ("Tag57D", self.tag57d.as_str()),
            ("Tag59", self.tag59.as_str()),
            ("Tag71B", self.tag71b.as_str()),
        ]
    }

    /// Fail with the first empty mandatory field.
    pub fn validate_required(&self) -> Result<(), ValidationFailure> {
        match self.fields().iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(ValidationFailure::MissingField(*name)),
            None => Ok(()),
        }
    }

    /// Required-field check followed by a parse of every structured tag the
    /// export-document rules depend on.
    pub fn check_terms(&self) -> Result<(), ValidationFailure> {
        self.validate_required()?;
        self.issue_date()?;
        self.amount()?;
        self.tolerance_percent()?;
        self.latest_shipment_date()?;
        self.presentation_period_days()?;
        Ok(())
    }

    /// Documentary credit number (`Tag20`).
    pub fn credit_number(&self) -> &str {
        self.tag20.trim()
    }

    /// Date of issue (`Tag31C`).
    pub fn issue_date(&self) -> Result<TradeDate, ValidationFailure> {
        parse_tag_date("Tag31C", &self.tag31c)
    }

    /// Currency and amount (`Tag32B`).
    pub fn amount(&self) -> Result<CreditAmount, ValidationFailure> {
        parse_amount_currency("Tag32B", &self.tag32b)
    }

    /// Tolerance percentage (`Tag39A`).
    pub fn tolerance_percent(&self) -> Result<u8, ValidationFailure> {
        parse_tolerance_percent(&self.tag39a)
    }

    /// Latest date of shipment (`Tag44C`).
    pub fn latest_shipment_date(&self) -> Result<TradeDate, ValidationFailure> {
        parse_tag_date("Tag44C", &self.tag44c)
    }

    /// Period for presentation in days (`Tag48`).
    pub fn presentation_period_days(&self) -> Result<u32, ValidationFailure> {
        parse_period_days("Tag48", &self.tag48)
    }
}

// ─── Tag parsers ─────────────────────────────────────────────────────

// The patterns are constant, so the `expect`s below cannot fire.
fn digit_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[0-9]+").expect("regex for digit runs"))
}

fn uppercase_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[A-Z]+").expect("regex for currency codes"))
}

/// Extract the amount (first run of digits) and currency (first run of
/// uppercase letters) from a combined currency-and-amount tag.
pub fn parse_amount_currency(
    tag: &'static str,
    value: &str,
) -> Result<CreditAmount, ValidationFailure> {
    let amount = digit_run()
        .find(value)
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .ok_or(ValidationFailure::MalformedTag(tag))?;
    let currency = uppercase_run()
        .find(value)
        .map(|m| m.as_str().to_string())
        .ok_or(ValidationFailure::MalformedTag(tag))?;
    Ok(CreditAmount { currency, amount })
}

/// Parse the first `/`-separated component of a tolerance tag as an integer
/// percentage in `[0, 100]`.
pub fn parse_tolerance_percent(value: &str) -> Result<u8, ValidationFailure> {
    let first = value.split('/').next().unwrap_or_default().trim();
    first
        .parse::<u8>()
        .ok()
        .filter(|pct| *pct <= 100)
        .ok_or_else(|| ValidationFailure::ToleranceOutOfRange(value.to_string()))
}

/// Extract the first run of digits as a day count.
pub fn parse_period_days(tag: &'static str, value: &str) -> Result<u32, ValidationFailure> {
    digit_run()
        .find(value)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or(ValidationFailure::MalformedTag(tag))
}

/// Parse a `MM/DD/YYYY` field, naming the field on failure.
pub fn parse_tag_date(field: &'static str, value: &str) -> Result<TradeDate, ValidationFailure> {
    TradeDate::parse(value).map_err(|_| ValidationFailure::MalformedDate {
        field,
        value: value.to_string(),
    })
}
