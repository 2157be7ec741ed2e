//! Tool catalogue and dispatch.

use serde_json::{json, Value};
use tracing::{debug, info_span};

use super::error::ToolError;
use super::protocol::Tool;
use crate::generator::{
    describe_template, generate_examples_markdown, list_templates_markdown,
    render_generated_markdown, render_validation_markdown, ComponentGenerator, GenerateError,
};
use crate::ids;
use crate::linter::ComponentValidator;
use crate::registry;
use crate::spec::{
    component_spec_schema, examples_request_schema, parse_component_spec, parse_examples_request,
    parse_template_request, parse_validation_request, template_request_schema,
    validation_request_schema,
};

pub const GENERATE_COMPONENT: &str = "generate_component";
pub const VALIDATE_COMPONENT: &str = "validate_component";
pub const LIST_COMPONENT_TYPES: &str = "list_component_types";
pub const GET_COMPONENT_TEMPLATE: &str = "get_component_template";
pub const GENERATE_COMPONENT_EXAMPLES: &str = "generate_component_examples";

fn tool(name: &str, description: &str, input_schema: Value) -> Tool {
    Tool {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

/// The five tools, in advertisement order.
pub fn tool_definitions() -> Vec<Tool> {
    vec![
        tool(
            GENERATE_COMPONENT,
            "Generate a custom React component based on Shadcn UI standards",
            component_spec_schema(),
        ),
        tool(
            VALIDATE_COMPONENT,
            "Validate a React component against Shadcn UI standards",
            validation_request_schema(),
        ),
        tool(
            LIST_COMPONENT_TYPES,
            "List all available component types and their templates",
            json!({ "type": "object", "properties": {} }),
        ),
        tool(
            GET_COMPONENT_TEMPLATE,
            "Get detailed information about a specific component template",
            template_request_schema(),
        ),
        tool(
            GENERATE_COMPONENT_EXAMPLES,
            "Generate usage examples for a component type",
            examples_request_schema(),
        ),
    ]
}

/// Run one tool and return its markdown body.
pub fn call_tool(
    generator: &ComponentGenerator,
    validator: &ComponentValidator,
    name: &str,
    arguments: &Value,
) -> Result<String, ToolError> {
    debug!(tool = %name, "Calling tool");
    match name {
        GENERATE_COMPONENT => {
            let spec = parse_component_spec(arguments)?;
            let span = info_span!(
                "generate",
                component_id = %ids::component_id(),
                component_type = %spec.component_type
            );
            let _entered = span.enter();
            let component = generator.generate_component(&spec)?;
            Ok(render_generated_markdown(&component))
        }
        VALIDATE_COMPONENT => {
            let request = parse_validation_request(arguments)?;
            let result = validator.validate_component(&request.component_code, request.strict);
            Ok(render_validation_markdown(&result))
        }
        LIST_COMPONENT_TYPES => Ok(list_templates_markdown()),
        GET_COMPONENT_TEMPLATE => {
            let request = parse_template_request(arguments)?;
            let entry = registry::get_template(&request.component_type)
                .ok_or_else(|| GenerateError::TemplateMissingForType(request.component_type.clone()))?;
            Ok(describe_template(entry, request.variant.as_deref()))
        }
        GENERATE_COMPONENT_EXAMPLES => {
            let request = parse_examples_request(arguments)?;
            Ok(generate_examples_markdown(
                &request.component_type,
                request.include_advanced,
            )?)
        }
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}
