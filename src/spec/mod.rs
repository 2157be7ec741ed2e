//! Data model shared by the generator, the validator and every adapter.
//!
//! - [`types`] holds the serde types (`ComponentSpec`, `GeneratedComponent`, ...)
//! - [`schema`] holds the JSON Schemas used at the boundaries
//! - [`load`] reads specifications from JSON/YAML files

mod load;
pub mod schema;
mod types;

pub use load::*;
pub use schema::{
    component_spec_schema, examples_request_schema, parse_component_spec, parse_examples_request,
    parse_pattern_request, parse_template_request, parse_validation_request,
    pattern_request_schema, template_request_schema, validation_request_schema, SchemaError,
};
pub use types::*;

#[cfg(test)]
mod tests;
