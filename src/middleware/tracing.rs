use std::time::Duration;

use tracing::{debug, info, warn};

use super::Middleware;
use crate::server::{ApiRequest, ApiResponse};

/// Logs request start and completion inside the per-request span.
pub struct TracingMiddleware;

impl Middleware for TracingMiddleware {
    fn before(&self, req: &ApiRequest) -> Option<ApiResponse> {
        debug!(peer = ?req.peer, body_bytes = req.body.len(), "Request started");
        None
    }

    fn after(&self, _req: &ApiRequest, res: &mut ApiResponse, latency: Duration) {
        let latency_ms = latency.as_millis() as u64;
        if res.status >= 500 {
            warn!(status = res.status, latency_ms, "Request failed");
        } else {
            info!(status = res.status, latency_ms, "Request completed");
        }
    }
}
