/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/

//! Rate limiter module for throttling outgoing API requests
//!
//! This module provides client side throttling using the `governor` crate.
//! It is opt-in: a client built from a configuration with the limiter
//! disabled sends requests as fast as the caller issues them.

use crate::application::config::RateLimiterConfig;
use crate::constants::RATE_LIMIT_POLL_MS;
use crate::error::AppError;
use governor::{
    Quota, RateLimiter as GovernorRateLimiter,
    clock::QuantaClock,
    state::{InMemoryState, NotKeyed},
};
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

/// Rate limiter for controlling API request rates
///
/// Uses the `governor` crate to implement a token bucket algorithm
/// for rate limiting API requests.
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, QuantaClock>>,
}

impl RateLimiter {
    /// Creates a new rate limiter from configuration
    ///
    /// The bucket refills `max_requests` cells every `period_seconds` and can
    /// hold up to `burst_size` cells.
    ///
    /// # Returns
    ///
    /// * `Ok(RateLimiter)` - The limiter
    /// * `Err(AppError::Config)` - If `max_requests`, `period_seconds` or `burst_size` is zero
    ///
    /// # Example
    ///
    /// ```ignore
    /// use ledger_api_client::application::config::RateLimiterConfig;
    /// use ledger_api_client::application::rate_limiter::RateLimiter;
    ///
    /// let config = RateLimiterConfig {
    ///     enabled: true,
    ///     max_requests: 60,
    ///     period_seconds: 60,
    ///     burst_size: 10,
    /// };
    ///
    /// let limiter = RateLimiter::new(&config)?;
    /// ```
    pub fn new(config: &RateLimiterConfig) -> Result<Self, AppError> {
        let max_requests = NonZeroU32::new(config.max_requests)
            .ok_or_else(|| AppError::Config("rate limiter max_requests must be > 0".into()))?;
        let burst_size = NonZeroU32::new(config.burst_size)
            .ok_or_else(|| AppError::Config("rate limiter burst_size must be > 0".into()))?;
        if config.period_seconds == 0 {
            return Err(AppError::Config(
                "rate limiter period_seconds must be > 0".into(),
            ));
        }

        let replenish = Duration::from_secs(config.period_seconds) / max_requests.get();
        let quota = Quota::with_period(replenish)
            .ok_or_else(|| AppError::Config("rate limiter period is too short".into()))?
            .allow_burst(burst_size);

        let limiter = GovernorRateLimiter::direct(quota);

        Ok(Self {
            limiter: Arc::new(limiter),
        })
    }

    /// Builds a limiter only when the configuration enables one
    pub fn from_config(config: &RateLimiterConfig) -> Result<Option<Self>, AppError> {
        if config.enabled {
            Self::new(config).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Waits until a request can be made according to the rate limit
    pub async fn wait(&self) {
        while self.limiter.check().is_err() {
            tokio::time::sleep(Duration::from_millis(RATE_LIMIT_POLL_MS)).await;
        }
    }

    /// Blocks the current thread until a request can be made
    ///
    /// Used by the blocking client, which must not touch the async runtime.
    pub fn wait_blocking(&self) {
        while self.limiter.check().is_err() {
            std::thread::sleep(Duration::from_millis(RATE_LIMIT_POLL_MS));
        }
    }

    /// Checks if a request can be made immediately, consuming a cell if so
    #[must_use]
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("limiter", &"GovernorRateLimiter")
            .finish()
    }
}
