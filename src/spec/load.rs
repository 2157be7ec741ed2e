use super::schema::{parse_component_spec, parse_validation_request};
use super::types::{ComponentSpec, ValidationRequest};
use anyhow::Context;
use std::path::Path;

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Parse a JSON or YAML document (chosen by extension) into a generic value.
pub fn load_document(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document(&content, is_yaml(path))
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn parse_document(content: &str, yaml: bool) -> anyhow::Result<serde_json::Value> {
    let value = if yaml {
        serde_yaml::from_str(content)?
    } else {
        serde_json::from_str(content)?
    };
    Ok(value)
}

/// Load a [`ComponentSpec`] from disk and run it through the boundary schema.
pub fn load_component_spec(path: &Path) -> anyhow::Result<ComponentSpec> {
    let value = load_document(path)?;
    let spec = parse_component_spec(&value)
        .with_context(|| format!("{} is not a valid component specification", path.display()))?;
    Ok(spec)
}

/// Read component source from disk and wrap it as a [`ValidationRequest`].
pub fn load_validation_request(path: &Path, strict: bool) -> anyhow::Result<ValidationRequest> {
    let code = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::json!({ "componentCode": code, "strict": strict });
    let request = parse_validation_request(&value)
        .with_context(|| format!("{} cannot be validated", path.display()))?;
    Ok(request)
}
