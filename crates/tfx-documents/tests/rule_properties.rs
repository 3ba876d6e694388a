//! # Rule Property Tests
//!
//! Property checks for the arithmetic and calendar rules that every
//! export-document validator relies on.

use proptest::prelude::*;
use tfx_core::TradeDate;
use tfx_documents::rules::{check_presentation_window, within_tolerance, PRESENTATION_WINDOW_DAYS};
use tfx_documents::{parse_tolerance_percent, ValidationFailure};

proptest! {
    /// The band bounds themselves always pass; one unit outside fails
    /// whenever the bound is a whole number.
    #[test]
    fn tolerance_bounds_are_inclusive(amount in 1u64..1_000_000, tol in 0u8..=100) {
        let amount_i = amount as i64;
        let tol_i = i64::from(tol);
        let lower = amount_i * (100 - tol_i);
        let upper = amount_i * (100 + tol_i);
        if lower % 100 == 0 {
            prop_assert!(within_tolerance(lower / 100, amount, tol));
            prop_assert!(!within_tolerance(lower / 100 - 1, amount, tol));
        }
        if upper % 100 == 0 {
            prop_assert!(within_tolerance(upper / 100, amount, tol));
            prop_assert!(!within_tolerance(upper / 100 + 1, amount, tol));
        }
        prop_assert!(within_tolerance(amount_i, amount, tol));
    }

    /// Every integer percentage in range parses; everything above fails.
    #[test]
    fn tolerance_tag_range(pct in 0u32..400, minus in 0u32..100) {
        let tag = format!("{pct}/{minus}");
        let parsed = parse_tolerance_percent(&tag);
        if pct <= 100 {
            prop_assert_eq!(parsed, Ok(pct as u8));
        } else {
            prop_assert_eq!(parsed, Err(ValidationFailure::ToleranceOutOfRange(tag)));
        }
    }

    /// Presentation passes exactly when it is at most 21 days after shipment.
    #[test]
    fn presentation_window(y in 2000i32..2100, m in 1u32..=12, d in 1u32..=28, offset in 0u32..60) {
        let shipped = TradeDate::from_ymd(y, m, d).unwrap();
        let presented = shipped.plus_days(offset).unwrap();
        let result = check_presentation_window(
            "DATE_OF_PRESENTATION",
            &presented.to_string(),
            "SHIPPING_DATE",
            &shipped.to_string(),
        );
        prop_assert_eq!(result.is_ok(), offset <= PRESENTATION_WINDOW_DAYS);
    }
}

#[test]
fn documented_tolerance_examples() {
    assert!(within_tolerance(900, 1000, 10));
    assert!(within_tolerance(1100, 1000, 10));
    assert!(!within_tolerance(899, 1000, 10));
    assert!(!within_tolerance(1101, 1000, 10));
}

#[test]
fn documented_presentation_examples() {
    assert!(check_presentation_window("P", "03/22/2020", "S", "03/01/2020").is_ok());
    assert!(check_presentation_window("P", "03/23/2020", "S", "03/01/2020").is_err());
}
