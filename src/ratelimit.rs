//! Token-bucket rate limiter for outbound lines.

use std::time::Duration;

use tokio::time::Instant;

/// Configuration for a [`RateLimiter`]: burst capacity and refill window.
///
/// `capacity = u32::MAX` with a tiny window effectively disables limiting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub messages_per_window: u32,
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            messages_per_window: 5,
            window_seconds: 2,
        }
    }
}

/// A writer-side token bucket. Only `acquire` suspends; it never blocks the
/// reader, since the engine only calls it from the writer task.
pub struct RateLimiter {
    tokens: u32,
    capacity: u32,
    window: Duration,
    last_refill: Instant,
}

impl RateLimiter {
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            tokens: config.messages_per_window,
            capacity: config.messages_per_window,
            window: Duration::from_secs(config.window_seconds),
            last_refill: Instant::now(),
        }
    }

    /// Acquire a single token, sleeping as needed per the token-bucket
    /// algorithm: refill fully once a window has elapsed since the last
    /// refill, otherwise wait out the remainder of the current window.
    pub async fn acquire(&mut self) {
        loop {
            let elapsed = self.last_refill.elapsed();
            if elapsed >= self.window {
                self.tokens = self.capacity;
                self.last_refill = Instant::now();
            }

            if self.tokens > 0 {
                break;
            }

            let remaining = self.window.saturating_sub(elapsed);
            tokio::time::sleep(remaining).await;
            self.tokens = self.capacity;
            self.last_refill = Instant::now();
        }

        self.tokens -= 1;
    }
}
