//! # Temporal Types — Trade Dates and Audit Timestamps
//!
//! Two distinct notions of time exist in the trade-finance stack:
//!
//! - **`TradeDate`**: a calendar date (no time-of-day, no zone) written as
//!   `MM/DD/YYYY` in every LC tag and export-document field. All of the
//!   cross-validation date rules compare `TradeDate`s with an inclusive
//!   "on or before" comparator.
//! - **`Timestamp`**: a UTC instant truncated to seconds, used only for
//!   transition logs and audit events.
//!
//! ## Parsing Invariant
//!
//! `TradeDate::parse` returns `Err(DateError::Malformed)` for anything that
//! is not a real calendar date. Comparisons take parsed dates only, so a
//! malformed input can never be mistaken for an "earlier" date.

use chrono::{DateTime, Days, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// The `chrono` format string for trade dates.
pub const TRADE_DATE_FORMAT: &str = "%m/%d/%Y";

/// A calendar date in `MM/DD/YYYY` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TradeDate(NaiveDate);

impl TradeDate {
    /// Parse a `MM/DD/YYYY` string. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), TRADE_DATE_FORMAT)
            .map(Self)
            .map_err(|_| DateError::Malformed {
                value: s.to_string(),
            })
    }

    /// Construct from year, month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DateError::Malformed {
                value: format!("{month:02}/{day:02}/{year:04}"),
            })
    }

    /// Whether `self` falls on or before `other`.
    pub fn is_on_or_before(&self, other: &TradeDate) -> bool {
        self.0 <= other.0
    }

    /// Whether `self` falls strictly before `other`.
    pub fn is_before(&self, other: &TradeDate) -> bool {
        self.0 < other.0
    }

    /// The date `days` calendar days later.
    pub fn plus_days(&self, days: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(u64::from(days)))
            .map(Self)
            .ok_or_else(|| DateError::Overflow {
                date: self.to_string(),
                days,
            })
    }

    /// Access the inner `NaiveDate`.
    pub fn as_naive(&self) -> &NaiveDate {
        &self.0
    }
}

impl std::fmt::Display for TradeDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TRADE_DATE_FORMAT))
    }
}

impl std::str::FromStr for TradeDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TradeDate {
    type Error = DateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TradeDate> for String {
    fn from(value: TradeDate) -> Self {
        value.to_string()
    }
}

/// A UTC-only timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// From a `DateTime<Utc>`, discarding sub-second precision.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt.with_nanosecond(0).unwrap_or(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Render as ISO8601 with Z suffix (e.g., `2020-03-01T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Rendering then parsing yields the same date.
        #[test]
        fn display_parse_identity(y in 1900i32..2200, m in 1u32..=12, d in 1u32..=28) {
            let date = TradeDate::from_ymd(y, m, d).unwrap();
            prop_assert_eq!(TradeDate::parse(&date.to_string()).unwrap(), date);
        }

        /// Shifting forward never lands before the start.
        #[test]
        fn plus_days_is_monotonic(y in 1900i32..2200, m in 1u32..=12, d in 1u32..=28, n in 0u32..400) {
            let date = TradeDate::from_ymd(y, m, d).unwrap();
            let later = date.plus_days(n).unwrap();
            prop_assert!(date.is_on_or_before(&later));
        }
    }
}
