//! Due date parsing and serialization.
//!
//! The REST service stores due dates either as plain calendar dates or as
//! full timestamps, and uses empty strings for "no due date". Everything is
//! normalized to a [`NaiveDate`] and written back as `YYYY-MM-DD`.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{ProtocolError, Result};

/// The wire format of a due date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a due date as sent by the service or typed by a user.
///
/// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp (its calendar date is kept)
/// and the empty string, which means no due date.
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidDueDate`] for anything else.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use labboard_protocol::parse_due_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 1);
/// assert_eq!(parse_due_date("2024-03-01").unwrap(), expected);
/// assert_eq!(parse_due_date("2024-03-01T00:00:00.000Z").unwrap(), expected);
/// assert_eq!(parse_due_date("").unwrap(), None);
/// assert!(parse_due_date("next week").is_err());
/// ```
pub fn parse_due_date(value: &str) -> Result<Option<NaiveDate>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| Some(timestamp.date_naive()))
        .map_err(|_| ProtocolError::InvalidDueDate {
            value: value.to_string(),
        })
}

/// Formats a due date for display, using an empty string when unset.
#[must_use]
pub fn format_due_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Serializes an optional due date as `YYYY-MM-DD` or `null`.
///
/// # Errors
///
/// Propagates serializer errors.
pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

/// Deserializes an optional due date, see [`parse_due_date`].
///
/// # Errors
///
/// Fails when the value is neither null nor a parseable date string.
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(value) => parse_due_date(&value).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
