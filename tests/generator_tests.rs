//! Generated code must pass the validator it is checked against

#![allow(clippy::unwrap_used, clippy::expect_used)]

use component_builder::registry::all_template_types;
use component_builder::spec::parse_component_spec;
use component_builder::{ComponentGenerator, ComponentValidator};
use serde_json::json;

#[test]
fn test_every_template_generates_valid_code() {
    let generator = ComponentGenerator::new();
    let validator = ComponentValidator::new();

    for component_type in all_template_types() {
        let spec = parse_component_spec(&json!({
            "name": "DemoWidget",
            "type": component_type,
            "description": "Demo component",
            "props": [{"name": "tone", "type": "string", "description": "Visual tone"}]
        }))
        .unwrap();
        let component = generator.generate_component(&spec).unwrap();
        let result = validator.validate_component(&component.code, false);
        assert!(
            result.errors.is_empty(),
            "{component_type} produced errors: {:?}",
            result.errors
        );
        assert!(result.is_valid);
    }
}

#[test]
fn test_templates_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("badge.tsx.jinja"),
        "import * as React from \"react\"\nexport const {{ ComponentName }} = () => null\n",
    )
    .unwrap();

    let generator = ComponentGenerator::with_template_dir(dir.path());
    let spec = parse_component_spec(&json!({"name": "Status", "type": "badge"})).unwrap();
    let component = generator.generate_component(&spec).unwrap();
    assert!(component.code.contains("export const Status = () => null"));

    let spec = parse_component_spec(&json!({"name": "Go", "type": "button"})).unwrap();
    assert!(generator.generate_component(&spec).is_err());
}
