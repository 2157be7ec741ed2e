use std::time::Duration;

use crate::server::{ApiRequest, ApiResponse};

/// Hook pair run around every HTTP request.
///
/// `before` hooks run in chain order until one returns a response; the route is
/// skipped in that case. `after` hooks always run, for every middleware in the chain.
pub trait Middleware: Send + Sync {
    fn before(&self, _req: &ApiRequest) -> Option<ApiResponse> {
        None
    }
    fn after(&self, _req: &ApiRequest, _res: &mut ApiResponse, _latency: Duration) {}
}
