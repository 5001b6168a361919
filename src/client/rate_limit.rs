//! Request pacing for the dashboard API
//!
//! The dashboard API rejects clients that exceed a per-organization request
//! rate. Every request waits on a [`RequestPacer`] so that two consecutive
//! calls are at least one configured interval apart.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;

/// Default minimum spacing between two requests.
pub const DEFAULT_REQUEST_INTERVAL: Duration = Duration::from_millis(210);

/// Enforces a minimum interval between outgoing requests.
///
/// Owned by the client and built from configuration; an interval of zero
/// disables pacing entirely.
pub struct RequestPacer {
    limiter: Option<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    interval: Duration,
    waited: AtomicU64,
}

impl Default for RequestPacer {
    fn default() -> Self {
        Self::new(DEFAULT_REQUEST_INTERVAL)
    }
}

impl RequestPacer {
    /// Create a pacer allowing one request per `interval`.
    pub fn new(interval: Duration) -> Self {
        // Quota::with_period returns None for a zero period
        let limiter = Quota::with_period(interval).map(RateLimiter::direct);

        Self {
            limiter,
            interval,
            waited: AtomicU64::new(0),
        }
    }

    /// A pacer that never delays.
    #[cfg(test)]
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured minimum interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether requests are being paced at all.
    pub fn is_enabled(&self) -> bool {
        self.limiter.is_some()
    }

    /// Number of requests that had to wait for their slot.
    pub fn waits(&self) -> u64 {
        self.waited.load(Ordering::Relaxed)
    }

    /// Wait until the next request may be sent.
    pub async fn wait(&self) {
        let Some(limiter) = &self.limiter else {
            return;
        };

        if limiter.check().is_ok() {
            return;
        }

        self.waited.fetch_add(1, Ordering::Relaxed);
        debug!("Pacing request ({:?} interval)", self.interval);
        limiter.until_ready().await;
    }
}
