//! Main logger implementation

use super::{error::LoggerError, filter::Filter, handler::Handler, metrics::LoggerMetrics};
use parking_lot::RwLock;
use std::sync::Arc;

/// Callback invoked with the handler name and error whenever a delivery fails
pub type DeliveryErrorCallback = Arc<dyn Fn(&str, &LoggerError) + Send + Sync>;

/// Filter-then-dispatch logging pipeline
///
/// A message reaches the handlers only when every filter approves it.
/// Filters run in insertion order and evaluation stops at the first
/// rejection. Approved messages are then handed to every handler in
/// insertion order; a handler that fails or panics is reported and the
/// next handler still runs.
///
/// # Example
///
/// ```
/// use pipeline_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .filter(SubstringFilter::new("error"))
///     .handler(ConsoleHandler::new())
///     .build();
///
/// logger.log("2025-06-08 ERROR: disk full");
/// logger.log("2025-06-08 INFO: ok");
///
/// assert_eq!(logger.metrics().dispatched(), 1);
/// assert_eq!(logger.metrics().rejected(), 1);
/// ```
pub struct Logger {
    filters: RwLock<Vec<Box<dyn Filter>>>,
    handlers: RwLock<Vec<Box<dyn Handler>>>,
    metrics: Arc<LoggerMetrics>,
    on_delivery_error: Option<DeliveryErrorCallback>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            filters: RwLock::new(Vec::new()),
            handlers: RwLock::new(Vec::new()),
            metrics: Arc::new(LoggerMetrics::new()),
            on_delivery_error: None,
        }
    }

    /// Create a logger from already-boxed filter and handler sequences
    #[must_use]
    pub fn with_pipeline(filters: Vec<Box<dyn Filter>>, handlers: Vec<Box<dyn Handler>>) -> Self {
        Self {
            filters: RwLock::new(filters),
            handlers: RwLock::new(handlers),
            ..Self::new()
        }
    }

    /// Append a filter to the end of the chain
    pub fn add_filter(&self, filter: Box<dyn Filter>) {
        self.filters.write().push(filter);
    }

    /// Append a handler to the end of the dispatch list
    pub fn add_handler(&self, handler: Box<dyn Handler>) {
        self.handlers.write().push(handler);
    }

    pub fn filter_count(&self) -> usize {
        self.filters.read().len()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Evaluate the filter chain without dispatching
    ///
    /// An empty chain accepts everything; empty text is never accepted.
    pub fn accepts(&self, text: &str) -> bool {
        !text.is_empty() && self.passes_filters(text)
    }

    /// Run `text` through the pipeline
    ///
    /// Empty text returns immediately without touching filters or handlers.
    pub fn log(&self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if text.is_empty() {
            return;
        }
        self.metrics.record_received();

        if !self.passes_filters(text) {
            self.metrics.record_rejected();
            return;
        }

        self.metrics.record_dispatched();
        self.dispatch(text);
    }

    fn passes_filters(&self, text: &str) -> bool {
        self.filters.read().iter().all(|filter| filter.matches(text))
    }

    /// Fan `text` out to every handler with per-handler panic isolation
    fn dispatch(&self, text: &str) {
        let handlers = self.handlers.read();

        for (idx, handler) in handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                handler.try_handle(text)
            }));

            let error = match result {
                Ok(Ok(())) => continue,
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] Handler #{} ({}) failed: {}",
                        idx,
                        handler.name(),
                        e
                    );
                    e
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "Unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] Handler #{} ({}) panicked: {}. \
                         Other handlers continue to function.",
                        idx,
                        handler.name(),
                        panic_msg
                    );
                    LoggerError::handler_panicked(handler.name(), panic_msg)
                }
            };

            self.metrics.record_delivery_failure();
            if let Some(ref callback) = self.on_delivery_error {
                callback(handler.name(), &error);
            }
        }
    }

    /// Get the pipeline metrics
    ///
    /// # Example
    ///
    /// ```
    /// use pipeline_logger::Logger;
    ///
    /// let logger = Logger::new();
    /// logger.log("nobody is listening");
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.received(), 1);
    /// assert_eq!(metrics.dispatched(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use pipeline_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .filter(SubstringFilter::new("ERROR"))
///     .filter(PatternFilter::new(r"\d{4}-\d{2}-\d{2}").unwrap())
///     .handler(ConsoleHandler::new())
///     .on_delivery_error(Arc::new(|handler: &str, err: &LoggerError| {
///         eprintln!("ALERT: {} dropped a message: {}", handler, err);
///     }))
///     .build();
///
/// assert_eq!(logger.filter_count(), 2);
/// ```
pub struct LoggerBuilder {
    filters: Vec<Box<dyn Filter>>,
    handlers: Vec<Box<dyn Handler>>,
    on_delivery_error: Option<DeliveryErrorCallback>,
}

impl LoggerBuilder {
    /// Create a new builder with an empty pipeline
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            handlers: Vec::new(),
            on_delivery_error: None,
        }
    }

    /// Add a filter
    #[must_use = "builder methods return a new value"]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add an already-boxed filter
    #[must_use = "builder methods return a new value"]
    pub fn boxed_filter(mut self, filter: Box<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a handler
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Add an already-boxed handler
    #[must_use = "builder methods return a new value"]
    pub fn boxed_handler(mut self, handler: Box<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Set a callback for delivery failures
    ///
    /// The callback runs after the failure has been reported on stderr.
    #[must_use = "builder methods return a new value"]
    pub fn on_delivery_error(mut self, callback: DeliveryErrorCallback) -> Self {
        self.on_delivery_error = Some(callback);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::with_pipeline(self.filters, self.handlers);
        logger.on_delivery_error = self.on_delivery_error;
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
