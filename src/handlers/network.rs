//! Network handler for remote logging
//!
//! Opens a fresh TCP connection for every message, sends one line and
//! closes the connection. Nothing is queued and a failed send is never
//! retried.

use crate::core::{Handler, LoggerError, Result, TimestampFormat};
use std::io::Write;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Default bound on connect and write
pub const DEFAULT_NETWORK_TIMEOUT: Duration = Duration::from_secs(5);

/// Network handler that sends `[<timestamp>] <text>\n` to a TCP server
///
/// # Example
///
/// ```no_run
/// use pipeline_logger::handlers::NetworkHandler;
/// use pipeline_logger::prelude::*;
/// use std::time::Duration;
///
/// let handler = NetworkHandler::new("127.0.0.1", 9000)
///     .with_timeout(Some(Duration::from_millis(500)));
///
/// let logger = Logger::builder().handler(handler).build();
/// logger.log("This line will be sent to 127.0.0.1:9000");
/// ```
#[derive(Debug, Clone)]
pub struct NetworkHandler {
    host: String,
    port: u16,
    timeout: Option<Duration>,
    timestamp_format: TimestampFormat,
}

impl NetworkHandler {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: Some(DEFAULT_NETWORK_TIMEOUT),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Bound connect and write by `timeout`; `None` blocks indefinitely
    ///
    /// Host name resolution happens before the connect and is not covered
    /// by this bound.
    ///
    /// Default: 5 seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        // A zero duration is rejected by the socket API, so it means "no bound".
        self.timeout = timeout.filter(|t| !t.is_zero());
        self
    }

    /// Set the timestamp format for this handler
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connect to the first resolved address that accepts
    fn connect(&self) -> Result<TcpStream> {
        let addrs: Vec<SocketAddr> = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| LoggerError::io_operation("resolving log server", self.address(), e))?
            .collect();

        let mut last_err = None;
        for addr in addrs {
            let attempt = match self.timeout {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => return Ok(stream),
                Err(e) => last_err = Some(e),
            }
        }

        let err = last_err.unwrap_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "host resolved to no addresses")
        });
        Err(LoggerError::io_operation("connecting to log server", self.address(), err))
    }

    fn send_line(&self, text: &str) -> Result<()> {
        let line = format!("[{}] {}\n", self.timestamp_format.now(), text);

        let mut stream = self.connect()?;
        stream
            .set_write_timeout(self.timeout)
            .map_err(|e| LoggerError::io_operation("configuring log socket", self.address(), e))?;
        stream.set_nodelay(true)?;

        stream
            .write_all(line.as_bytes())
            .and_then(|()| stream.flush())
            .map_err(|e| LoggerError::io_operation("sending to log server", self.address(), e))?;

        // Dropping the stream closes the connection.
        Ok(())
    }
}

impl Handler for NetworkHandler {
    fn try_handle(&self, text: &str) -> Result<()> {
        self.send_line(text)
    }

    fn name(&self) -> &str {
        "network"
    }
}
