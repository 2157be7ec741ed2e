use std::collections::HashSet;

use tracing::warn;

use super::Middleware;
use crate::server::{ApiRequest, ApiResponse};

/// Paths served without an API key.
const PUBLIC_PATHS: &[&str] = &["/", "/health"];

/// `X-API-Key` check against a fixed key set.
pub struct ApiKeyMiddleware {
    keys: HashSet<String>,
}

impl ApiKeyMiddleware {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl Middleware for ApiKeyMiddleware {
    fn before(&self, req: &ApiRequest) -> Option<ApiResponse> {
        if PUBLIC_PATHS.contains(&req.path.as_str()) || req.method == "OPTIONS" {
            return None;
        }
        match req.header("x-api-key") {
            None | Some("") => {
                warn!(path = %req.path, "API key missing");
                Some(ApiResponse::error(401, "API key required"))
            }
            Some(key) if !self.keys.contains(key) => {
                warn!(path = %req.path, "API key rejected");
                Some(ApiResponse::error(403, "Invalid API key"))
            }
            Some(_) => None,
        }
    }
}
