//! Request metrics collection.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for HTTP request handling.
#[derive(Default)]
pub struct RequestMetrics {
    /// Total requests processed.
    pub total_requests: AtomicU64,
    /// Total requests that ended in an error response.
    pub total_errors: AtomicU64,
}

impl RequestMetrics {
    /// Records a completed request.
    pub fn record_request(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a request that ended in an error response.
    pub fn record_error(&self) {
        self.total_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns the total number of requests.
    #[must_use]
    pub fn requests(&self) -> u64 {
        self.total_requests.load(Ordering::Relaxed)
    }

    /// Returns the total number of error responses.
    #[must_use]
    pub fn errors(&self) -> u64 {
        self.total_errors.load(Ordering::Relaxed)
    }
}
