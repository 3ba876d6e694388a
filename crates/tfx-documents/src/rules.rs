//! # Cross-Validation Rules
//!
//! The numbered rules that tie an export document to the terms of its LC.
//! Each validator picks the rules that apply to its document kind and
//! evaluates them in ascending number, stopping at the first failure.
//!
//! | # | Rule |
//! |---|------|
//! | 1 | Document LC number equals `Tag20` |
//! | 2 | Document date not earlier than `Tag31C` (equal passes) |
//! | 3 | Value within `amount ± tolerance%` of `Tag32B` (bounds inclusive) |
//! | 4/5 | Invoice date + `Tag48` days not later than the due date |
//! | 6 | Shipment/packing date not later than `Tag44C` |
//! | 7 | Presentation date not later than shipment date + 21 days |
//! | 9 | Document currency equals the `Tag32B` currency |
//!
//! Rule 8 (issue date not earlier than the LC issue date) is the same
//! comparison as rule 2 and is satisfied whenever rule 2 is.

use tfx_core::TradeDate;

use crate::lc_terms::{parse_tag_date, LcTerms};
use crate::outcome::ValidationFailure;

/// Days allowed between shipment and presentation of documents.
pub const PRESENTATION_WINDOW_DAYS: u32 = 21;

// ─── Required-field helpers ──────────────────────────────────────────

/// A numeric field must be present and non-negative.
pub(crate) fn require_number(field: &'static str, value: Option<i64>) -> Result<(), ValidationFailure> {
    match value {
        Some(v) if v >= 0 => Ok(()),
        _ => Err(ValidationFailure::MissingField(field)),
    }
}

/// A text field must be non-empty.
pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationFailure> {
    if value.trim().is_empty() {
        Err(ValidationFailure::MissingField(field))
    } else {
        Ok(())
    }
}

/// The row list must be non-empty.
pub(crate) fn require_rows<T>(field: &'static str, rows: &[T]) -> Result<(), ValidationFailure> {
    if rows.is_empty() {
        Err(ValidationFailure::MissingField(field))
    } else {
        Ok(())
    }
}

// ─── Numbered rules ──────────────────────────────────────────────────

/// Rule 1.
pub fn check_lc_number(
    document: &'static str,
    found: &str,
    terms: &LcTerms,
) -> Result<(), ValidationFailure> {
    let expected = terms.credit_number();
    if found.trim() == expected {
        Ok(())
    } else {
        Err(ValidationFailure::LcNumberMismatch {
            document,
            found: found.to_string(),
            expected: expected.to_string(),
        })
    }
}

/// Rule 2.
pub fn check_not_before_issue(
    field: &'static str,
    value: &str,
    terms: &LcTerms,
) -> Result<(), ValidationFailure> {
    let credit_issued = terms.issue_date()?;
    let date = parse_tag_date(field, value)?;
    if date.is_before(&credit_issued) {
        return Err(ValidationFailure::IssuedBeforeCredit {
            field,
            date: date.to_string(),
            credit_issued: credit_issued.to_string(),
        });
    }
    Ok(())
}

/// Rule 3.
///
/// The band `[(100 - tol)% of amount, (100 + tol)% of amount]` is checked
/// in integer arithmetic scaled by 100, so the bounds are exact.
pub fn check_within_tolerance(
    field: &'static str,
    value: i64,
    terms: &LcTerms,
) -> Result<(), ValidationFailure> {
    let credit = terms.amount()?;
    let tolerance_percent = terms.tolerance_percent()?;
    if !within_tolerance(value, credit.amount, tolerance_percent) {
        return Err(ValidationFailure::ValueOutOfTolerance {
            field,
            value,
            amount: credit.amount,
            tolerance_percent,
        });
    }
    Ok(())
}

/// Whether `value` lies within `amount ± tolerance_percent%`, inclusive.
pub fn within_tolerance(value: i64, amount: u64, tolerance_percent: u8) -> bool {
    let scaled = i128::from(value) * 100;
    let amount = i128::from(amount);
    let tol = i128::from(tolerance_percent);
    let lower = amount * (100 - tol);
    let upper = amount * (100 + tol);
    scaled >= lower && scaled <= upper
}

/// Rules 4 and 5.
pub fn check_due_date(
    issued_field: &'static str,
    issued: &str,
    due_field: &'static str,
    due: &str,
    terms: &LcTerms,
) -> Result<(), ValidationFailure> {
    let period_days = terms.presentation_period_days()?;
    let issued = parse_tag_date(issued_field, issued)?;
    let due = parse_tag_date(due_field, due)?;
    let earliest_due = shifted(issued_field, &issued, period_days)?;
    if !earliest_due.is_on_or_before(&due) {
        return Err(ValidationFailure::DueDateBeforePresentationPeriod {
            issued: issued.to_string(),
            period_days,
            due: due.to_string(),
        });
    }
    Ok(())
}

/// Rule 6.
pub fn check_shipped_by_deadline(
    field: &'static str,
    value: &str,
    terms: &LcTerms,
) -> Result<(), ValidationFailure> {
    let latest = terms.latest_shipment_date()?;
    let date = parse_tag_date(field, value)?;
    if !date.is_on_or_before(&latest) {
        return Err(ValidationFailure::ShippedAfterDeadline {
            field,
            date: date.to_string(),
            latest: latest.to_string(),
        });
    }
    Ok(())
}

/// Rule 7.
pub fn check_presentation_window(
    presented_field: &'static str,
    presented: &str,
    shipped_field: &'static str,
    shipped: &str,
) -> Result<(), ValidationFailure> {
    let presented = parse_tag_date(presented_field, presented)?;
    let shipped = parse_tag_date(shipped_field, shipped)?;
    let deadline = shifted(shipped_field, &shipped, PRESENTATION_WINDOW_DAYS)?;
    if !presented.is_on_or_before(&deadline) {
        return Err(ValidationFailure::PresentationWindowExceeded {
            presented: presented.to_string(),
            shipped: shipped.to_string(),
        });
    }
    Ok(())
}

/// Rule 9.
pub fn check_currency(
    document: &'static str,
    found: &str,
    terms: &LcTerms,
) -> Result<(), ValidationFailure> {
    let expected = terms.amount()?.currency;
    if found.trim() == expected {
        Ok(())
    } else {
        Err(ValidationFailure::CurrencyMismatch {
            document,
            found: found.to_string(),
            expected,
        })
    }
}

fn shifted(field: &'static str, date: &TradeDate, days: u32) -> Result<TradeDate, ValidationFailure> {
    date.plus_days(days)
        .map_err(|_| ValidationFailure::MalformedDate {
            field,
            value: date.to_string(),
        })
}
