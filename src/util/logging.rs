//! # Logging Utilities
//!
//! Rate-limited logging for the decode path. AIS feeds from real receivers
//! carry a steady trickle of corrupt sentences, and an unthrottled warning
//! per bad checksum can drown a production log.

use std::time::Instant;

/// Throttling structure for rate-limiting log messages.
#[derive(Debug)]
pub struct LogThrottle {
    /// Time window for throttling (in milliseconds)
    window_ms: u64,
    /// Maximum messages allowed per window
    cap: u32,
    /// Current message count in window
    count: u32,
    /// Start time of current window
    t0: Instant,
}

impl LogThrottle {
    /// Create new throttle with time window and message cap.
    ///
    /// # Arguments
    /// * `window_ms` - Time window in milliseconds
    /// * `cap` - Maximum messages allowed per window
    pub fn new(window_ms: u64, cap: u32) -> Self {
        Self {
            window_ms,
            cap,
            count: 0,
            t0: Instant::now(),
        }
    }

    /// Check if logging is allowed (resets counter after window expires).
    ///
    /// Returns `true` if the message should be logged, `false` if it
    /// should be throttled.
    pub fn allow(&mut self) -> bool {
        let now = Instant::now();
        let elapsed_ms = now.duration_since(self.t0).as_millis() as u64;

        if elapsed_ms > self.window_ms {
            self.t0 = now;
            self.count = 0;
        }

        self.count += 1;
        self.count <= self.cap
    }

    /// Reset the throttle (start new window immediately).
    pub fn reset(&mut self) {
        self.t0 = Instant::now();
        self.count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_throttle_basic() {
        let mut throttle = LogThrottle::new(1000, 3); // 3 messages per second

        // First 3 messages should be allowed
        assert!(throttle.allow());
        assert!(throttle.allow());
        assert!(throttle.allow());

        // 4th message should be throttled
        assert!(!throttle.allow());
        assert!(!throttle.allow());
    }

    #[test]
    fn test_log_throttle_reset() {
        let mut throttle = LogThrottle::new(1000, 2);

        assert!(throttle.allow());
        assert!(throttle.allow());
        assert!(!throttle.allow());

        throttle.reset();
        assert!(throttle.allow());
        assert!(throttle.allow());
        assert!(!throttle.allow());
    }
}
