//! Declarative pipeline configuration
//!
//! A [`LoggerConfig`] describes filters and handlers as data, typically
//! loaded from JSON, and is turned into a [`Logger`] by [`LoggerConfig::build`].
//! All validation happens during `build`, so a bad pattern or an empty
//! destination is reported before any message is logged.
//!
//! ```
//! use pipeline_logger::core::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "filters": [
//!         { "type": "substring", "pattern": "ERROR" },
//!         { "type": "pattern", "pattern": "\\d{4}-\\d{2}-\\d{2}" }
//!     ],
//!     "handlers": [
//!         { "type": "console" },
//!         { "type": "syslog", "facility": "daemon" }
//!     ]
//! }"#)?;
//!
//! let logger = config.build()?;
//! assert_eq!(logger.filter_count(), 2);
//! assert_eq!(logger.handler_count(), 2);
//! # Ok::<(), pipeline_logger::LoggerError>(())
//! ```

use super::{
    error::{LoggerError, Result},
    filter::Filter,
    handler::Handler,
    logger::Logger,
    timestamp::TimestampFormat,
};
use crate::filters::{PatternFilter, SubstringFilter};
use crate::handlers::{
    network::DEFAULT_NETWORK_TIMEOUT, syslog::DEFAULT_FACILITY, ConsoleHandler, FileHandler,
    NetworkHandler, SyslogHandler,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One filter in the chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    /// Case-insensitive substring
    Substring { pattern: String },
    /// Regular expression, searched anywhere in the text
    Pattern { pattern: String },
}

impl FilterConfig {
    pub fn build(&self) -> Result<Box<dyn Filter>> {
        let filter: Box<dyn Filter> = match self {
            FilterConfig::Substring { pattern } => Box::new(SubstringFilter::new(pattern.as_str())),
            FilterConfig::Pattern { pattern } => Box::new(PatternFilter::new(pattern)?),
        };
        Ok(filter)
    }
}

fn default_facility() -> String {
    DEFAULT_FACILITY.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_NETWORK_TIMEOUT.as_millis() as u64
}

/// One handler in the dispatch list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HandlerConfig {
    Console,
    Syslog {
        #[serde(default = "default_facility")]
        facility: String,
        #[serde(default)]
        timestamp_format: TimestampFormat,
    },
    File {
        path: PathBuf,
    },
    Network {
        host: String,
        port: u16,
        /// Connect/write bound in milliseconds; 0 disables it
        #[serde(default = "default_timeout_ms")]
        timeout_ms: u64,
        #[serde(default)]
        timestamp_format: TimestampFormat,
    },
}

impl HandlerConfig {
    pub fn build(&self) -> Result<Box<dyn Handler>> {
        let handler: Box<dyn Handler> = match self {
            HandlerConfig::Console => Box::new(ConsoleHandler::new()),
            HandlerConfig::Syslog {
                facility,
                timestamp_format,
            } => {
                timestamp_format.validate()?;
                Box::new(
                    SyslogHandler::new(facility.as_str())
                        .with_timestamp_format(timestamp_format.clone()),
                )
            }
            HandlerConfig::File { path } => {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config("FileHandler", "path must not be empty"));
                }
                Box::new(FileHandler::new(path.clone()))
            }
            HandlerConfig::Network {
                host,
                port,
                timeout_ms,
                timestamp_format,
            } => {
                if host.trim().is_empty() {
                    return Err(LoggerError::config("NetworkHandler", "host must not be empty"));
                }
                timestamp_format.validate()?;
                Box::new(
                    NetworkHandler::new(host.as_str(), *port)
                        .with_timeout(Some(Duration::from_millis(*timeout_ms)))
                        .with_timestamp_format(timestamp_format.clone()),
                )
            }
        };
        Ok(handler)
    }
}

/// A whole pipeline: filters in evaluation order, handlers in dispatch order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading logger config", path.display().to_string(), e)
        })?;
        Self::from_json(&json)
    }

    /// Build a [`Logger`], failing on the first invalid entry
    pub fn build(&self) -> Result<Logger> {
        let filters = self
            .filters
            .iter()
            .map(FilterConfig::build)
            .collect::<Result<Vec<_>>>()?;
        let handlers = self
            .handlers
            .iter()
            .map(HandlerConfig::build)
            .collect::<Result<Vec<_>>>()?;

        Ok(Logger::with_pipeline(filters, handlers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = LoggerConfig::from_json(
            r#"{
                "filters": [{ "type": "substring", "pattern": "ERROR" }],
                "handlers": [
                    { "type": "file", "path": "out.txt" },
                    { "type": "network", "host": "logs.internal", "port": 5140 }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.filters,
            vec![FilterConfig::Substring {
                pattern: "ERROR".to_string()
            }]
        );
        assert_eq!(
            config.handlers[1],
            HandlerConfig::Network {
                host: "logs.internal".to_string(),
                port: 5140,
                timeout_ms: 5000,
                timestamp_format: TimestampFormat::LocalDateTime,
            }
        );
    }

    #[test]
    fn test_syslog_facility_defaults_to_user() {
        let config = LoggerConfig::from_json(r#"{ "handlers": [{ "type": "syslog" }] }"#).unwrap();
        assert_eq!(
            config.handlers[0],
            HandlerConfig::Syslog {
                facility: "user".to_string(),
                timestamp_format: TimestampFormat::LocalDateTime,
            }
        );
    }

    #[test]
    fn test_empty_config_builds_empty_pipeline() {
        let logger = LoggerConfig::from_json("{}").unwrap().build().unwrap();
        assert_eq!(logger.filter_count(), 0);
        assert_eq!(logger.handler_count(), 0);
    }

    #[test]
    fn test_invalid_pattern_fails_build() {
        let config = LoggerConfig {
            filters: vec![FilterConfig::Pattern {
                pattern: "[unterminated".to_string(),
            }],
            handlers: vec![HandlerConfig::Console],
        };

        let err = config.build().err().unwrap();
        assert!(matches!(err, LoggerError::InvalidPattern { .. }));
    }

    #[test]
    fn test_invalid_timestamp_format_fails_build() {
        let config = LoggerConfig::from_json(
            r#"{ "handlers": [{ "type": "syslog", "timestamp_format": { "Custom": "%Q" } }] }"#,
        )
        .unwrap();
        let err = config.build().err().unwrap();
        assert!(matches!(err, LoggerError::InvalidConfiguration { ref component, .. } if component == "TimestampFormat"));

        let err = HandlerConfig::Network {
            host: "localhost".to_string(),
            port: 514,
            timeout_ms: 100,
            timestamp_format: TimestampFormat::Custom("[%Q]".to_string()),
        }
        .build()
        .err()
        .unwrap();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_port_out_of_range_is_rejected() {
        let err = LoggerConfig::from_json(
            r#"{ "handlers": [{ "type": "network", "host": "localhost", "port": 70000 }] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_empty_destinations_are_rejected() {
        let err = HandlerConfig::Network {
            host: "  ".to_string(),
            port: 514,
            timeout_ms: 0,
            timestamp_format: TimestampFormat::default(),
        }
        .build()
        .err()
        .unwrap();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = HandlerConfig::File {
            path: PathBuf::new(),
        }
        .build()
        .err()
        .unwrap();
        assert!(err.to_string().contains("FileHandler"));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = LoggerConfig::from_json(r#"{ "handlers": [{ "type": "carrier_pigeon" }] }"#)
            .unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("logger.json");
        std::fs::write(&path, r#"{ "handlers": [{ "type": "console" }] }"#).unwrap();

        let config = LoggerConfig::from_file(&path).unwrap();
        assert_eq!(config.handlers, vec![HandlerConfig::Console]);

        let missing = LoggerConfig::from_file(temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(missing, LoggerError::IoOperation { .. }));
    }
}
