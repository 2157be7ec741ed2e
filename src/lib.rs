//! # component-builder
//!
//! **component-builder** generates React component source that follows the
//! shadcn/ui conventions (Radix primitives, `class-variance-authority`
//! variants, `cn()` class merging, `React.forwardRef`) and checks existing
//! component source against the same conventions.
//!
//! ## Overview
//!
//! Two pure core operations sit behind three adapters:
//!
//! - **[`generator`]** - Renders a [`spec::ComponentSpec`] through the
//!   template registered for its type and returns code, imports,
//!   dependencies, documentation and usage examples
//! - **[`linter`]** - Heuristic validator producing errors, warnings and
//!   suggestions; never fails
//!
//! Adapters:
//!
//! - **[`server`]** - HTTP/JSON service on `may_minihttp` with the
//!   **[`middleware`]** chain (tracing, metrics, CORS, request guard, API
//!   keys, rate limiting)
//! - **[`mcp`]** - Newline-delimited JSON-RPC tool server on stdin/stdout
//! - **[`cli`]** - The `component-builder` binary
//!
//! Supporting modules:
//!
//! - **[`spec`]** - Request types and the JSON Schemas that guard every
//!   adapter boundary
//! - **[`registry`]** - The static table of component templates
//! - **[`naming`]** - Identifier casing helpers used by the templates
//! - **[`config`]** - Service configuration from YAML plus `CBUILD_*`
//!   environment overrides
//! - **[`telemetry`]** - `tracing` subscriber setup; logs go to stderr
//! - **[`ids`]** - Request and component identifiers (ULID)
//!
//! ## Request Handling Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Client
//!     participant Server as HttpServer<br/>(may_minihttp)
//!     participant Chain as Middleware Chain
//!     participant Service as AppService
//!     participant Core as Generator / Validator
//!
//!     Client->>Server: POST /api/generate-component
//!     Server->>Chain: before hooks
//!     alt Rejected (401/403/413/429, preflight)
//!         Chain-->>Client: Early response
//!     end
//!     Chain->>Service: route
//!     Service->>Service: Schema-check JSON body
//!     Service->>Core: generate_component(spec)
//!     Core-->>Service: GeneratedComponent
//!     Service->>Chain: after hooks (CORS headers, metrics, access log)
//!     Chain-->>Client: {"success": true, "data": {...}}
//! ```
//!
//! ## Quick Start
//!
//! ```no_run
//! use component_builder::generator::ComponentGenerator;
//! use component_builder::spec::parse_component_spec;
//!
//! let spec = parse_component_spec(&serde_json::json!({
//!     "name": "SubmitButton",
//!     "type": "button",
//!     "size": "lg"
//! }))?;
//! let component = ComponentGenerator::new().generate_component(&spec)?;
//! println!("{}", component.code);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Runtime Considerations
//!
//! The HTTP service runs on the `may` coroutine runtime, not tokio. The
//! coroutine stack size comes from `http.stack_size` in the service
//! configuration (or `CBUILD_STACK_SIZE`).

pub mod cli;
pub mod config;
pub mod generator;
pub mod ids;
pub mod linter;
pub mod mcp;
pub mod middleware;
pub mod naming;
pub mod registry;
pub mod server;
pub mod spec;
pub mod telemetry;

pub use generator::{ComponentGenerator, GenerateError};
pub use linter::ComponentValidator;
pub use spec::{ComponentSpec, GeneratedComponent, ValidationResult};
