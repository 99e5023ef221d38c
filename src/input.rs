//! Construction inputs: timestamps, dates, or parseable text
//!
//! [`Period::make`](crate::Period::make) accepts anything convertible into a
//! [`DateInput`]. Text is parsed with an inferred format: `%Y-%m-%d` for
//! plain dates, or `%Y-%m-%d %H:%M:%S` when the text contains a space. An
//! explicit chrono format string overrides the inference.

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Inferred format for date-only text
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inferred format for text carrying a time component
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A raw construction input for one endpoint of a period
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// An already-resolved timestamp
    DateTime(NaiveDateTime),
    /// A calendar date, resolved to midnight
    Date(NaiveDate),
    /// Text to be parsed
    Text(String),
}

impl DateInput {
    /// Resolve the input to a timestamp
    ///
    /// `format` overrides the inferred format for text inputs. Empty or
    /// blank text, and text the format cannot parse, fail with
    /// [`Error::InvalidDate`].
    pub fn resolve(self, format: Option<&str>) -> Result<NaiveDateTime> {
        match self {
            DateInput::DateTime(ts) => Ok(ts),
            DateInput::Date(date) => Ok(date.and_time(NaiveTime::MIN)),
            DateInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(Error::InvalidDate("empty date input".to_string()));
                }
                let format = format.unwrap_or(if text.contains(' ') {
                    DATETIME_FORMAT
                } else {
                    DATE_FORMAT
                });
                parse_text(text, format)
            }
        }
    }
}

/// Parse text with a chrono format string, accepting date-only formats
fn parse_text(text: &str, format: &str) -> Result<NaiveDateTime> {
    if let Ok(ts) = NaiveDateTime::parse_from_str(text, format) {
        return Ok(ts);
    }
    // A date-only format leaves the time fields unset, which the datetime
    // parser reports as an error; retry as a plain date at midnight.
    match NaiveDate::parse_from_str(text, format) {
        Ok(date) => Ok(date.and_time(NaiveTime::MIN)),
        Err(err) => Err(Error::InvalidDate(format!(
            "cannot parse {text:?} with format {format:?}: {err}"
        ))),
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(ts: NaiveDateTime) -> Self {
        DateInput::DateTime(ts)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        DateInput::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        DateInput::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        DateInput::Text(text)
    }
}
