use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

use super::Middleware;
use crate::server::{ApiRequest, ApiResponse};

/// Request counters exposed on `/metrics`.
///
/// Auth failures (401/403) and rate-limited requests (429) are classified from
/// the final status in `after`, so the counting middleware needs no coupling to
/// the middlewares that reject.
#[derive(Default)]
pub struct MetricsMiddleware {
    request_count: AtomicUsize,
    total_latency_ns: AtomicU64,
    auth_failures: AtomicUsize,
    rate_limited: AtomicUsize,
    server_errors: AtomicUsize,
}

impl MetricsMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Mean latency over all completed requests, zero before the first one.
    pub fn average_latency(&self) -> Duration {
        let count = self.request_count.load(Ordering::Relaxed) as u64;
        if count == 0 {
            Duration::from_nanos(0)
        } else {
            Duration::from_nanos(self.total_latency_ns.load(Ordering::Relaxed) / count)
        }
    }

    pub fn auth_failures(&self) -> usize {
        self.auth_failures.load(Ordering::Relaxed)
    }

    pub fn rate_limited(&self) -> usize {
        self.rate_limited.load(Ordering::Relaxed)
    }

    pub fn server_errors(&self) -> usize {
        self.server_errors.load(Ordering::Relaxed)
    }

    /// Prometheus text exposition of the counters.
    pub fn render_prometheus(&self) -> String {
        format!(
            "# HELP cbuild_requests_total Total number of handled requests\n\
             # TYPE cbuild_requests_total counter\n\
             cbuild_requests_total {}\n\
             # HELP cbuild_request_latency_seconds Average request latency in seconds\n\
             # TYPE cbuild_request_latency_seconds gauge\n\
             cbuild_request_latency_seconds {}\n\
             # HELP cbuild_auth_failures_total Requests rejected by API-key authentication\n\
             # TYPE cbuild_auth_failures_total counter\n\
             cbuild_auth_failures_total {}\n\
             # HELP cbuild_rate_limited_total Requests rejected by the rate limiter\n\
             # TYPE cbuild_rate_limited_total counter\n\
             cbuild_rate_limited_total {}\n\
             # HELP cbuild_server_errors_total Responses with a 5xx status\n\
             # TYPE cbuild_server_errors_total counter\n\
             cbuild_server_errors_total {}\n\
             # HELP cbuild_coroutine_stack_bytes Configured coroutine stack size\n\
             # TYPE cbuild_coroutine_stack_bytes gauge\n\
             cbuild_coroutine_stack_bytes {}\n",
            self.request_count(),
            self.average_latency().as_secs_f64(),
            self.auth_failures(),
            self.rate_limited(),
            self.server_errors(),
            may::config().get_stack_size(),
        )
    }
}

impl Middleware for MetricsMiddleware {
    fn before(&self, _req: &ApiRequest) -> Option<ApiResponse> {
        self.request_count.fetch_add(1, Ordering::Relaxed);
        None
    }

    fn after(&self, _req: &ApiRequest, res: &mut ApiResponse, latency: Duration) {
        self.total_latency_ns
            .fetch_add(latency.as_nanos() as u64, Ordering::Relaxed);
        match res.status {
            401 | 403 => {
                self.auth_failures.fetch_add(1, Ordering::Relaxed);
            }
            429 => {
                self.rate_limited.fetch_add(1, Ordering::Relaxed);
            }
            s if s >= 500 => {
                self.server_errors.fetch_add(1, Ordering::Relaxed);
            }
            _ => {}
        }
    }
}
