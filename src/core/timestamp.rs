//! Timestamp formatting utilities
//!
//! Handlers that prefix their output with a timestamp capture the local
//! wall clock at handle time and render it with a [`TimestampFormat`].

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Write};

const LOCAL_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use pipeline_logger::core::TimestampFormat;
///
/// let stamp = TimestampFormat::LocalDateTime.now();
/// // Output: "2025-06-08 14:03:27.512904"
/// assert_eq!(stamp.len(), 26);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local date and time with microseconds: `2025-06-08 14:03:27.512904`
    ///
    /// This is the default human-readable format.
    #[default]
    LocalDateTime,

    /// ISO 8601 with milliseconds and offset: `2025-06-08T14:03:27.512+02:00`
    Iso8601,

    /// RFC 3339 format: `2025-06-08T14:03:27.512904+02:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1749384207`
    Unix,

    /// Unix timestamp in milliseconds: `1749384207512`
    UnixMillis,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use pipeline_logger::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a datetime in any time zone according to this format
    ///
    /// A `Custom` string that chrono cannot render falls back to
    /// [`TimestampFormat::LocalDateTime`]; formatting never panics.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        match self {
            TimestampFormat::LocalDateTime => datetime.format(LOCAL_DATE_TIME).to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                match write!(rendered, "{}", datetime.format(format_str)) {
                    Ok(()) => rendered,
                    Err(_) => datetime.format(LOCAL_DATE_TIME).to_string(),
                }
            }
        }
    }

    /// Reject a `Custom` format containing specifiers chrono does not know
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] naming the bad format string.
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("unsupported strftime format '{}'", format_str),
                ));
            }
        }
        Ok(())
    }

    /// Capture the local wall clock and format it
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Local::now())
    }
}
