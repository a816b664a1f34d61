//! Handler trait for message sinks

use super::error::Result;

/// A sink that performs a side effect for an approved message.
///
/// Implementors only write [`try_handle`](Handler::try_handle). The
/// provided [`handle`](Handler::handle) reports failures on stderr and
/// never returns them, which is what makes handlers safe to fan out.
pub trait Handler: Send + Sync {
    /// Deliver `text`, returning any delivery error.
    fn try_handle(&self, text: &str) -> Result<()>;

    /// Deliver `text`, reporting and swallowing any delivery error.
    fn handle(&self, text: &str) {
        if let Err(e) = self.try_handle(text) {
            eprintln!("[LOGGER ERROR] Handler '{}' failed: {}", self.name(), e);
        }
    }

    fn name(&self) -> &str;
}
