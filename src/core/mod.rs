//! Core pipeline types and traits

pub mod config;
pub mod error;
pub mod filter;
pub mod handler;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use config::{FilterConfig, HandlerConfig, LoggerConfig};
pub use error::{LoggerError, Result};
pub use filter::Filter;
pub use handler::Handler;
pub use logger::{DeliveryErrorCallback, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
