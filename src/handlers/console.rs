//! Console handler implementation

use crate::core::{Handler, LoggerError, Result};
use std::io::Write;

/// Writes each message as a line on standard output
#[derive(Debug, Clone, Default)]
pub struct ConsoleHandler;

impl ConsoleHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Handler for ConsoleHandler {
    fn try_handle(&self, text: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)
            .and_then(|()| stdout.flush())
            .map_err(|e| LoggerError::io_operation("writing to stdout", "console output failed", e))
    }

    fn name(&self) -> &str {
        "console"
    }
}
