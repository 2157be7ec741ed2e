use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use serde_json::json;
use tracing::warn;

use super::Middleware;
use crate::config::RateLimitConfig;
use crate::server::{ApiRequest, ApiResponse};

/// Expired windows are swept once the table grows past this many clients.
const PURGE_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: SystemTime,
}

/// Fixed-window request counter keyed by [`ApiRequest::client_id`].
///
/// Clients are keyed by socket peer unless `trust_proxy` is set. The first
/// request of a window always passes. A window resets on the first request
/// after `reset_at`.
pub struct RateLimitMiddleware {
    max_requests: u32,
    window: Duration,
    trust_proxy: bool,
    clients: DashMap<String, Window>,
}

impl RateLimitMiddleware {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            max_requests: config.max_requests,
            window: config.window(),
            trust_proxy: config.trust_proxy,
            clients: DashMap::new(),
        }
    }

    /// Count one request for `client` at `now`.
    ///
    /// Returns the end of the current window when the client is over its limit.
    pub fn check(&self, client: &str, now: SystemTime) -> Result<(), SystemTime> {
        if self.clients.len() > PURGE_THRESHOLD {
            self.purge_expired(now);
        }

        let mut entry = self.clients.entry(client.to_string()).or_insert(Window {
            count: 0,
            reset_at: now + self.window,
        });
        let window = entry.value_mut();

        if window.count == 0 || now > window.reset_at {
            window.count = 1;
            window.reset_at = now + self.window;
            return Ok(());
        }
        if window.count >= self.max_requests {
            return Err(window.reset_at);
        }
        window.count += 1;
        Ok(())
    }

    pub fn purge_expired(&self, now: SystemTime) {
        self.clients.retain(|_, w| w.reset_at >= now);
    }

    pub fn tracked_clients(&self) -> usize {
        self.clients.len()
    }
}

fn epoch_secs(t: SystemTime) -> u64 {
    t.duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0)
}

impl Middleware for RateLimitMiddleware {
    fn before(&self, req: &ApiRequest) -> Option<ApiResponse> {
        let client = req.client_id(self.trust_proxy);
        match self.check(&client, SystemTime::now()) {
            Ok(()) => None,
            Err(reset_at) => {
                warn!(client = %client, "Rate limit exceeded");
                Some(ApiResponse::json(
                    429,
                    json!({
                        "success": false,
                        "error": "Rate limit exceeded",
                        "resetTime": epoch_secs(reset_at),
                    }),
                ))
            }
        }
    }
}
