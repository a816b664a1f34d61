//! Diagnostic-stream handler
//!
//! Writes timestamped lines to standard error, the way a syslog-style
//! sink would record them.

use crate::core::{Handler, LoggerError, Result, TimestampFormat};
use std::io::Write;

/// Default facility name
pub const DEFAULT_FACILITY: &str = "user";

/// Writes `[<timestamp>] <text>` lines to standard error
///
/// The facility is stored for callers that route on it; it does not change
/// the output.
///
/// # Example
///
/// ```
/// use pipeline_logger::handlers::SyslogHandler;
/// use pipeline_logger::TimestampFormat;
///
/// let handler = SyslogHandler::new("daemon")
///     .with_timestamp_format(TimestampFormat::Rfc3339);
/// assert_eq!(handler.facility(), "daemon");
/// ```
#[derive(Debug, Clone)]
pub struct SyslogHandler {
    facility: String,
    timestamp_format: TimestampFormat,
}

impl SyslogHandler {
    pub fn new(facility: impl Into<String>) -> Self {
        Self {
            facility: facility.into(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this handler
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn facility(&self) -> &str {
        &self.facility
    }

    fn format_line(&self, text: &str) -> String {
        format!("[{}] {}\n", self.timestamp_format.now(), text)
    }
}

impl Default for SyslogHandler {
    fn default() -> Self {
        Self::new(DEFAULT_FACILITY)
    }
}

impl Handler for SyslogHandler {
    fn try_handle(&self, text: &str) -> Result<()> {
        let line = self.format_line(text);
        let mut stderr = std::io::stderr().lock();
        stderr
            .write_all(line.as_bytes())
            .and_then(|()| stderr.flush())
            .map_err(|e| LoggerError::io_operation("writing to stderr", "syslog output failed", e))
    }

    fn name(&self) -> &str {
        "syslog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_facility() {
        let handler = SyslogHandler::default();
        assert_eq!(handler.facility(), "user");
        assert_eq!(handler.timestamp_format, TimestampFormat::LocalDateTime);
    }

    #[test]
    fn test_line_shape() {
        let handler = SyslogHandler::default()
            .with_timestamp_format(TimestampFormat::Custom("%Y".to_string()));
        let line = handler.format_line("disk full");

        assert!(line.starts_with('['));
        assert!(line.ends_with("] disk full\n"));
        assert_eq!(line.len(), "[2025] disk full\n".len());
    }

    #[test]
    fn test_unrenderable_timestamp_does_not_panic() {
        let handler = SyslogHandler::new("user")
            .with_timestamp_format(TimestampFormat::Custom("%Q".to_string()));

        let outcome = std::panic::catch_unwind(|| handler.handle("bad format"));
        assert!(outcome.is_ok());
        assert!(handler.format_line("x").ends_with("] x\n"));
    }

    #[test]
    fn test_handle_writes_to_stderr() {
        let handler = SyslogHandler::new("local0");
        assert!(handler.try_handle("syslog handler test line").is_ok());
    }
}
