use super::http_server::PeerAware;
use super::request::{parse_request, ApiRequest};
use super::response::{write_response, ApiResponse};
use crate::config::ServiceConfig;
use crate::generator::ComponentGenerator;
use crate::ids;
use crate::linter::ComponentValidator;
use crate::middleware::{
    ApiKeyMiddleware, CorsMiddleware, MetricsMiddleware, Middleware, RateLimitMiddleware,
    RequestGuard, TracingMiddleware,
};
use crate::registry;
use crate::spec::{parse_component_spec, parse_pattern_request, parse_validation_request};
use may_minihttp::{HttpService, Request, Response};
use serde_json::{json, Value};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info_span, warn};

const TEMPLATE_PREFIX: &str = "/api/component-template/";

/// Routes served by [`AppService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Root,
    Health,
    Metrics,
    GenerateComponent,
    ValidateComponent,
    ValidatePattern,
    ComponentTypes,
    ComponentTemplate(String),
}

impl Route {
    /// Resolve a path (query string already removed).
    pub fn resolve(path: &str) -> Option<Route> {
        let route = match path {
            "/" => Route::Root,
            "/health" => Route::Health,
            "/metrics" => Route::Metrics,
            "/api/generate-component" => Route::GenerateComponent,
            "/api/validate-component" => Route::ValidateComponent,
            "/api/validate-pattern" => Route::ValidatePattern,
            "/api/component-types" => Route::ComponentTypes,
            _ => {
                let component_type = path.strip_prefix(TEMPLATE_PREFIX)?;
                if component_type.is_empty() || component_type.contains('/') {
                    return None;
                }
                Route::ComponentTemplate(component_type.to_string())
            }
        };
        Some(route)
    }

    pub fn method(&self) -> &'static str {
        match self {
            Route::GenerateComponent | Route::ValidateComponent | Route::ValidatePattern => "POST",
            _ => "GET",
        }
    }

    fn allow_header(&self) -> &'static str {
        match self.method() {
            "POST" => "Allow: POST, OPTIONS",
            _ => "Allow: GET, OPTIONS",
        }
    }
}

struct AppState {
    generator: ComponentGenerator,
    validator: ComponentValidator,
    environment: String,
    metrics: Arc<MetricsMiddleware>,
    middlewares: Vec<Arc<dyn Middleware>>,
}

/// HTTP front end over the generator and the validator.
///
/// Cloned once per connection by `may_minihttp`; all clones share one state.
#[derive(Clone)]
pub struct AppService {
    state: Arc<AppState>,
    peer: Option<SocketAddr>,
}

impl AppService {
    /// Build the service and its middleware chain from configuration.
    pub fn new(config: &ServiceConfig) -> Self {
        let generator = match &config.templates_dir {
            Some(dir) => ComponentGenerator::with_template_dir(dir),
            None => ComponentGenerator::new(),
        };
        let metrics = Arc::new(MetricsMiddleware::new());

        let mut middlewares: Vec<Arc<dyn Middleware>> = vec![
            Arc::new(TracingMiddleware),
            Arc::clone(&metrics) as Arc<dyn Middleware>,
            Arc::new(CorsMiddleware::new(&config.cors)),
            Arc::new(RequestGuard::new(config.http.max_body_bytes)),
        ];
        if config.auth_enabled() {
            middlewares.push(Arc::new(ApiKeyMiddleware::new(config.security.api_keys.iter().cloned())));
        }
        middlewares.push(Arc::new(RateLimitMiddleware::new(config.rate_limit)));

        Self {
            state: Arc::new(AppState {
                generator,
                validator: ComponentValidator::new(),
                environment: config.environment.clone(),
                metrics,
                middlewares,
            }),
            peer: None,
        }
    }

    pub fn metrics(&self) -> &MetricsMiddleware {
        &self.state.metrics
    }

    pub fn generator(&self) -> &ComponentGenerator {
        &self.state.generator
    }

    /// Run the middleware chain and the matched route for one request.
    pub fn handle(&self, req: &ApiRequest) -> ApiResponse {
        let span = info_span!(
            "request",
            request_id = %req.request_id,
            method = %req.method,
            path = %req.path
        );
        let _entered = span.enter();
        let start = Instant::now();

        let mut early = None;
        for mw in &self.state.middlewares {
            early = mw.before(req);
            if early.is_some() {
                break;
            }
        }

        let mut res = match early {
            Some(res) => res,
            None => self.route(req),
        };

        let latency = start.elapsed();
        for mw in &self.state.middlewares {
            mw.after(req, &mut res, latency);
        }
        res
    }

    fn route(&self, req: &ApiRequest) -> ApiResponse {
        let Some(route) = Route::resolve(&req.path) else {
            return ApiResponse::error(404, format!("Not found: {} {}", req.method, req.path));
        };
        if req.method != route.method() {
            return ApiResponse::error(405, "Method not allowed").with_header(route.allow_header());
        }

        match route {
            Route::Root => root_endpoint(),
            Route::Health => health_endpoint(&self.state.environment),
            Route::Metrics => metrics_endpoint(&self.state.metrics),
            Route::GenerateComponent => self.generate_component(req),
            Route::ValidateComponent => self.validate_component(req),
            Route::ValidatePattern => self.validate_pattern(req),
            Route::ComponentTypes => ApiResponse::ok(json!(registry::all_template_types())),
            Route::ComponentTemplate(component_type) => component_template_endpoint(&component_type),
        }
    }

    fn generate_component(&self, req: &ApiRequest) -> ApiResponse {
        let body = match json_body(req) {
            Ok(body) => body,
            Err(res) => return res,
        };
        let spec = match parse_component_spec(&body) {
            Ok(spec) => spec,
            Err(e) => return ApiResponse::error(400, e.to_string()),
        };

        let span = info_span!(
            "generate",
            component_id = %ids::component_id(),
            component_type = %spec.component_type
        );
        let _entered = span.enter();

        match self.state.generator.generate_component(&spec) {
            Ok(component) => match serde_json::to_value(&component) {
                Ok(data) => ApiResponse::ok(data),
                Err(e) => {
                    error!(error = %e, "Failed to serialize generated component");
                    ApiResponse::error(500, "Failed to serialize generated component")
                }
            },
            Err(e) if e.is_client_error() => {
                warn!(error = %e, "Generation rejected");
                ApiResponse::error(400, e.to_string())
            }
            Err(e) => {
                error!(error = %e, "Generation failed");
                ApiResponse::error(500, e.to_string())
            }
        }
    }

    fn validate_component(&self, req: &ApiRequest) -> ApiResponse {
        let body = match json_body(req) {
            Ok(body) => body,
            Err(res) => return res,
        };
        match parse_validation_request(&body) {
            Ok(request) => {
                let result = self
                    .state
                    .validator
                    .validate_component(&request.component_code, request.strict);
                ApiResponse::ok(json!(result))
            }
            Err(e) => ApiResponse::error(400, e.to_string()),
        }
    }

    fn validate_pattern(&self, req: &ApiRequest) -> ApiResponse {
        let body = match json_body(req) {
            Ok(body) => body,
            Err(res) => return res,
        };
        match parse_pattern_request(&body) {
            Ok(request) => {
                let result = self
                    .state
                    .validator
                    .validate_pattern(&request.component_code, &request.component_type);
                ApiResponse::ok(json!(result))
            }
            Err(e) => ApiResponse::error(400, e.to_string()),
        }
    }
}

fn json_body(req: &ApiRequest) -> Result<Value, ApiResponse> {
    req.json_body()
        .map_err(|e| ApiResponse::error(400, format!("Invalid JSON body: {e}")))
}

/// Service description and endpoint index.
pub fn root_endpoint() -> ApiResponse {
    ApiResponse::json(
        200,
        json!({
            "name": "Component Builder",
            "description": "HTTP API for generating and validating shadcn/ui components",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "POST /api/generate-component": "Generate React components",
                "POST /api/validate-component": "Validate component code",
                "POST /api/validate-pattern": "Check component code against a shadcn pattern",
                "GET /api/component-types": "List available component types",
                "GET /api/component-template/:type": "Get template details",
                "GET /health": "Health check",
                "GET /metrics": "Prometheus metrics"
            }
        }),
    )
}

pub fn health_endpoint(environment: &str) -> ApiResponse {
    ApiResponse::json(
        200,
        json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "version": env!("CARGO_PKG_VERSION"),
            "environment": environment,
        }),
    )
}

pub fn metrics_endpoint(metrics: &MetricsMiddleware) -> ApiResponse {
    ApiResponse::text(
        200,
        "Content-Type: text/plain; version=0.0.4",
        metrics.render_prometheus(),
    )
}

pub fn component_template_endpoint(component_type: &str) -> ApiResponse {
    match registry::get_template(component_type) {
        Some(entry) => ApiResponse::ok(json!(entry)),
        None => ApiResponse::error(404, format!("Template not found for type: {component_type}")),
    }
}

impl PeerAware for AppService {
    fn with_peer(&self, peer: Option<SocketAddr>) -> Self {
        Self {
            state: Arc::clone(&self.state),
            peer,
        }
    }
}

impl HttpService for AppService {
    fn call(&mut self, req: Request, res: &mut Response) -> io::Result<()> {
        let request = parse_request(req, self.peer);
        let response = self.handle(&request);
        write_response(res, response);
        Ok(())
    }
}
