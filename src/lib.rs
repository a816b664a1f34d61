//! # Pipeline Logger
//!
//! A small, composable logging pipeline: an ordered chain of filters decides
//! whether a message is accepted, and every accepted message is fanned out to
//! a list of handlers whose failures are isolated from each other.
//!
//! ## Features
//!
//! - **Filters**: case-insensitive substring and regular-expression filters,
//!   or any `Fn(&str) -> bool`
//! - **Handlers**: console, stderr ("syslog-style"), file append and TCP delivery
//! - **Failure isolation**: handler errors and panics are reported, never propagated
//! - **Declarative setup**: build a pipeline from JSON with [`LoggerConfig`]

pub mod core;
pub mod filters;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        DeliveryErrorCallback, Filter, FilterConfig, Handler, HandlerConfig, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
    pub use crate::filters::{PatternFilter, SubstringFilter};
    pub use crate::handlers::{ConsoleHandler, FileHandler, NetworkHandler, SyslogHandler};
}

pub use core::{
    DeliveryErrorCallback, Filter, FilterConfig, Handler, HandlerConfig, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Result, TimestampFormat,
};
pub use filters::{PatternFilter, SubstringFilter};
pub use handlers::{ConsoleHandler, FileHandler, NetworkHandler, SyslogHandler};
