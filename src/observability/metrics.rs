//! Request metrics for the HTTP server.
//!
//! Counters are lock-free and shared by cloning the tracker into the
//! request middleware.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Process-wide request counters.
#[derive(Debug, Clone)]
pub struct MetricsTracker {
    requests_total: Arc<AtomicU64>,
    client_errors_total: Arc<AtomicU64>,
    server_errors_total: Arc<AtomicU64>,
    duration_total_ms: Arc<AtomicU64>,
}

/// Point-in-time copy of the counters, served by the health endpoint.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsSummary {
    pub requests_total: u64,
    pub client_errors_total: u64,
    pub server_errors_total: u64,
    pub average_duration_ms: f64,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self {
            requests_total: Arc::new(AtomicU64::new(0)),
            client_errors_total: Arc::new(AtomicU64::new(0)),
            server_errors_total: Arc::new(AtomicU64::new(0)),
            duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track one completed HTTP request.
    pub fn track_request(&self, method: &str, path: &str, status: u16, duration_ms: u128) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.duration_total_ms
            .fetch_add(duration_ms as u64, Ordering::Relaxed);

        match status {
            400..=499 => {
                self.client_errors_total.fetch_add(1, Ordering::Relaxed);
            }
            500..=599 => {
                self.server_errors_total.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }

        tracing::debug!(
            method = %method,
            path = %path,
            status = status,
            duration_ms = duration_ms,
            "HTTP request completed"
        );
    }

    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    pub fn client_errors_total(&self) -> u64 {
        self.client_errors_total.load(Ordering::Relaxed)
    }

    pub fn server_errors_total(&self) -> u64 {
        self.server_errors_total.load(Ordering::Relaxed)
    }

    /// Fraction of requests answered with a 5xx (0.0 to 1.0).
    pub fn server_error_rate(&self) -> f64 {
        let total = self.requests_total() as f64;
        if total == 0.0 {
            0.0
        } else {
            self.server_errors_total() as f64 / total
        }
    }

    pub fn summary(&self) -> MetricsSummary {
        let requests = self.requests_total();
        let average_duration_ms = if requests == 0 {
            0.0
        } else {
            self.duration_total_ms.load(Ordering::Relaxed) as f64 / requests as f64
        };

        MetricsSummary {
            requests_total: requests,
            client_errors_total: self.client_errors_total(),
            server_errors_total: self.server_errors_total(),
            average_duration_ms,
        }
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u128 {
        self.start.elapsed().as_millis()
    }
}
