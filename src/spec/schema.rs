//! JSON Schema shapes for the request bodies accepted by the adapters.
//!
//! Every adapter validates raw JSON against these schemas before deserializing it,
//! so HTTP, the stdio tool protocol and the CLI reject malformed input with the
//! same messages. The schema documents double as the `inputSchema` advertised for
//! tools.

use super::types::{
    ComponentSpec, ComponentType, ExamplesRequest, PatternRequest, TemplateRequest, ValidationRequest,
};
use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::fmt;

/// Boundary validation failure.
///
/// Holds every message produced by the schema validator, or a single
/// deserialization message when the document passed the schema but could not be
/// mapped onto the Rust type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    pub messages: Vec<String>,
}

impl SchemaError {
    fn single(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid request: {}", self.messages.join("; "))
    }
}

impl std::error::Error for SchemaError {}

/// Schema for [`ComponentSpec`].
pub fn component_spec_schema() -> Value {
    let types: Vec<&str> = ComponentType::ALL.iter().map(|t| t.as_str()).collect();
    json!({
        "type": "object",
        "required": ["name", "type"],
        "properties": {
            "name": { "type": "string", "minLength": 1, "description": "Component name" },
            "type": { "type": "string", "enum": types, "description": "Component type" },
            "variant": { "type": "string" },
            "size": { "type": "string", "enum": ["sm", "md", "lg", "xl"] },
            "description": { "type": "string" },
            "props": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["name", "type"],
                    "properties": {
                        "name": { "type": "string" },
                        "type": { "type": "string" },
                        "required": { "type": "boolean" },
                        "description": { "type": "string" },
                        "defaultValue": {}
                    }
                }
            },
            "styling": {
                "type": "object",
                "properties": {
                    "className": { "type": "string" },
                    "variant": { "type": "string" },
                    "colorScheme": {
                        "type": "string",
                        "enum": ["default", "primary", "secondary", "destructive", "outline", "ghost"]
                    }
                }
            },
            "accessibility": {
                "type": "object",
                "properties": {
                    "ariaLabel": { "type": "string" },
                    "role": { "type": "string" },
                    "tabIndex": { "type": "number" }
                }
            },
            "children": { "type": "boolean" },
            "customContent": { "type": "string" }
        }
    })
}

/// Schema for [`ValidationRequest`].
pub fn validation_request_schema() -> Value {
    json!({
        "type": "object",
        "required": ["componentCode"],
        "properties": {
            "componentCode": {
                "type": "string",
                "minLength": 1,
                "description": "The React component code to validate"
            },
            "strict": {
                "type": "boolean",
                "description": "Enable strict validation mode"
            }
        }
    })
}

/// Schema for [`PatternRequest`].
pub fn pattern_request_schema() -> Value {
    json!({
        "type": "object",
        "required": ["componentCode", "componentType"],
        "properties": {
            "componentCode": { "type": "string", "minLength": 1 },
            "componentType": { "type": "string", "minLength": 1 }
        }
    })
}

/// Schema for [`TemplateRequest`].
pub fn template_request_schema() -> Value {
    json!({
        "type": "object",
        "required": ["type"],
        "properties": {
            "type": { "type": "string", "description": "Component type to get template for" },
            "variant": { "type": "string", "description": "Specific variant to focus on" }
        }
    })
}

/// Schema for [`ExamplesRequest`].
pub fn examples_request_schema() -> Value {
    json!({
        "type": "object",
        "required": ["type"],
        "properties": {
            "type": { "type": "string", "description": "Component type to generate examples for" },
            "includeAdvanced": {
                "type": "boolean",
                "description": "Include advanced usage examples"
            }
        }
    })
}

type Compiled = Result<Validator, String>;

fn compile(schema: Value) -> Compiled {
    jsonschema::validator_for(&schema).map_err(|e| e.to_string())
}

static COMPONENT_SPEC: Lazy<Compiled> = Lazy::new(|| compile(component_spec_schema()));
static VALIDATION_REQUEST: Lazy<Compiled> = Lazy::new(|| compile(validation_request_schema()));
static PATTERN_REQUEST: Lazy<Compiled> = Lazy::new(|| compile(pattern_request_schema()));
static TEMPLATE_REQUEST: Lazy<Compiled> = Lazy::new(|| compile(template_request_schema()));
static EXAMPLES_REQUEST: Lazy<Compiled> = Lazy::new(|| compile(examples_request_schema()));

fn check<T: DeserializeOwned>(compiled: &Compiled, value: &Value) -> Result<T, SchemaError> {
    let validator = compiled
        .as_ref()
        .map_err(|e| SchemaError::single(format!("schema failed to compile: {e}")))?;

    let messages: Vec<String> = validator.iter_errors(value).map(|e| e.to_string()).collect();
    if !messages.is_empty() {
        return Err(SchemaError { messages });
    }

    serde_json::from_value(value.clone()).map_err(|e| SchemaError::single(e.to_string()))
}

/// Validate and deserialize a component specification.
pub fn parse_component_spec(value: &Value) -> Result<ComponentSpec, SchemaError> {
    check(&COMPONENT_SPEC, value)
}

pub fn parse_validation_request(value: &Value) -> Result<ValidationRequest, SchemaError> {
    check(&VALIDATION_REQUEST, value)
}

pub fn parse_pattern_request(value: &Value) -> Result<PatternRequest, SchemaError> {
    check(&PATTERN_REQUEST, value)
}

pub fn parse_template_request(value: &Value) -> Result<TemplateRequest, SchemaError> {
    check(&TEMPLATE_REQUEST, value)
}

pub fn parse_examples_request(value: &Value) -> Result<ExamplesRequest, SchemaError> {
    check(&EXAMPLES_REQUEST, value)
}
