//! HTTP middleware chain.
//!
//! [`AppService`](crate::server::AppService) assembles the chain in this order:
//! tracing, metrics, CORS, request guard, API-key auth (only when keys are
//! configured), rate limiting.

mod auth;
mod core;
mod cors;
mod guard;
mod metrics;
mod rate_limit;
mod tracing;

pub use auth::ApiKeyMiddleware;
pub use core::Middleware;
pub use cors::CorsMiddleware;
pub use guard::RequestGuard;
pub use metrics::MetricsMiddleware;
pub use rate_limit::RateLimitMiddleware;
pub use tracing::TracingMiddleware;
