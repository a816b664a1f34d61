//! Pipeline metrics for observability
//!
//! Counts how messages move through the filter chain and how many
//! handler deliveries fail.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing pipeline activity
///
/// # Example
///
/// ```
/// use pipeline_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_received();
/// metrics.record_rejected();
///
/// assert_eq!(metrics.received(), 1);
/// assert_eq!(metrics.rejection_rate(), 100.0);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Non-empty messages passed to `log`
    received: AtomicU64,

    /// Messages stopped by a filter
    rejected: AtomicU64,

    /// Messages that passed every filter and were fanned out
    dispatched: AtomicU64,

    /// Handler invocations that returned an error or panicked
    delivery_failures: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            received: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            dispatched: AtomicU64::new(0),
            delivery_failures: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn received(&self) -> u64 {
        self.received.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivery_failures(&self) -> u64 {
        self.delivery_failures.load(Ordering::Relaxed)
    }

    /// Record a received message, returning the previous count
    #[inline]
    pub fn record_received(&self) -> u64 {
        self.received.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_rejected(&self) -> u64 {
        self.rejected.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dispatched(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivery_failure(&self) -> u64 {
        self.delivery_failures.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of received messages stopped by the filter chain (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been received.
    pub fn rejection_rate(&self) -> f64 {
        let received = self.received() as f64;
        if received == 0.0 {
            0.0
        } else {
            (self.rejected() as f64 / received) * 100.0
        }
    }

    /// Reset all counters to zero
    pub fn reset(&self) {
        self.received.store(0, Ordering::Relaxed);
        self.rejected.store(0, Ordering::Relaxed);
        self.dispatched.store(0, Ordering::Relaxed);
        self.delivery_failures.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            received: AtomicU64::new(self.received()),
            rejected: AtomicU64::new(self.rejected()),
            dispatched: AtomicU64::new(self.dispatched()),
            delivery_failures: AtomicU64::new(self.delivery_failures()),
        }
    }
}
