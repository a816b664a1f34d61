//! Logging macro for ergonomic message formatting.
//!
//! # Examples
//!
//! ```
//! use pipeline_logger::prelude::*;
//! use pipeline_logger::log;
//!
//! let logger = Logger::new();
//!
//! log!(logger, "Server started");
//!
//! let port = 8080;
//! log!(logger, "Server listening on port {}", port);
//!
//! assert_eq!(logger.metrics().received(), 2);
//! ```

/// Format a message and run it through a [`Logger`](crate::Logger).
///
/// A lone string literal is passed through without allocating.
#[macro_export]
macro_rules! log {
    ($logger:expr, $msg:literal) => {
        $logger.log($msg)
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(format!($($arg)+))
    };
}
