use std::collections::HashMap;
use std::time::Duration;

use super::Middleware;
use crate::config::CorsSettings;
use crate::server::{ApiRequest, ApiResponse};

const ALLOW_ANY_ORIGIN: &str = "Access-Control-Allow-Origin: *";
const VARY_ORIGIN: &str = "Vary: Origin";

/// Which origins get an `Access-Control-Allow-Origin` header.
enum OriginPolicy {
    Any,
    /// Allowed origin -> its pre-rendered header line
    List(HashMap<String, &'static str>),
}

/// Answers preflight requests and stamps CORS headers on every response.
///
/// With a wildcard origin the header is `*`. Otherwise the request's `Origin`
/// is echoed when it is on the list, together with `Vary: Origin`; other
/// origins get no allow-origin header.
///
/// Header lines are rendered once at construction; `may_minihttp` only accepts
/// `'static` header lines, so they live for the rest of the process.
pub struct CorsMiddleware {
    origins: OriginPolicy,
    allow_headers: &'static str,
    allow_methods: &'static str,
}

fn leak_line(name: &str, value: &str) -> &'static str {
    Box::leak(format!("{name}: {value}").into_boxed_str())
}

impl CorsMiddleware {
    pub fn new(settings: &CorsSettings) -> Self {
        let origins = if settings.allowed_origins.iter().any(|o| o == "*") {
            OriginPolicy::Any
        } else {
            OriginPolicy::List(
                settings
                    .allowed_origins
                    .iter()
                    .map(|o| (o.clone(), leak_line("Access-Control-Allow-Origin", o)))
                    .collect(),
            )
        };
        Self {
            origins,
            allow_headers: leak_line(
                "Access-Control-Allow-Headers",
                &settings.allowed_headers.join(", "),
            ),
            allow_methods: leak_line(
                "Access-Control-Allow-Methods",
                &settings.allowed_methods.join(", "),
            ),
        }
    }

    /// Allow-origin line for a request carrying `origin`, if any.
    pub fn allow_origin(&self, origin: Option<&str>) -> Option<&'static str> {
        match &self.origins {
            OriginPolicy::Any => Some(ALLOW_ANY_ORIGIN),
            OriginPolicy::List(allowed) => origin.and_then(|o| allowed.get(o).copied()),
        }
    }
}

impl Default for CorsMiddleware {
    fn default() -> Self {
        Self::new(&CorsSettings::default())
    }
}

impl Middleware for CorsMiddleware {
    fn before(&self, req: &ApiRequest) -> Option<ApiResponse> {
        if req.method == "OPTIONS" {
            Some(ApiResponse::empty(204))
        } else {
            None
        }
    }

    fn after(&self, req: &ApiRequest, res: &mut ApiResponse, _latency: Duration) {
        if let Some(line) = self.allow_origin(req.header("origin")) {
            res.add_header(line);
        }
        if matches!(self.origins, OriginPolicy::List(_)) {
            res.add_header(VARY_ORIGIN);
        }
        res.add_header(self.allow_headers);
        res.add_header(self.allow_methods);
    }
}
