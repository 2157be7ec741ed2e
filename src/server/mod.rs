//! HTTP adapter on `may_minihttp`.
//!
//! [`AppService::handle`] is transport-free: it takes an [`ApiRequest`] and
//! returns an [`ApiResponse`], which keeps routing and middleware testable
//! without a socket. The `HttpService` impl only converts at the edges.

mod http_server;
mod request;
mod response;
mod service;

pub use http_server::{HttpServer, PeerAware, ServerHandle};
pub use request::{parse_request, ApiRequest};
pub use response::{write_response, ApiResponse, ResponseBody};
pub use service::{
    component_template_endpoint, health_endpoint, metrics_endpoint, root_endpoint, AppService, Route,
};
