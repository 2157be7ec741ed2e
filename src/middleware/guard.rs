use tracing::debug;

use super::Middleware;
use crate::server::{ApiRequest, ApiResponse};

/// Rejects oversized bodies and non-JSON POSTs before they reach a route.
pub struct RequestGuard {
    max_body_bytes: usize,
}

impl RequestGuard {
    pub fn new(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }
}

impl Middleware for RequestGuard {
    fn before(&self, req: &ApiRequest) -> Option<ApiResponse> {
        let length = req.content_length();
        if length > self.max_body_bytes {
            debug!(length, limit = self.max_body_bytes, "Request body over limit");
            return Some(ApiResponse::error(413, "Request too large"));
        }
        if req.method == "POST" && !req.is_json() {
            return Some(ApiResponse::error(400, "Content-Type must be application/json"));
        }
        None
    }
}
