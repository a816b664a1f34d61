//! Handler implementations

pub mod console;
pub mod file;
pub mod network;
pub mod syslog;

pub use console::ConsoleHandler;
pub use file::FileHandler;
pub use network::NetworkHandler;
pub use syslog::SyslogHandler;

// Re-export trait for convenience
pub use crate::core::Handler;
