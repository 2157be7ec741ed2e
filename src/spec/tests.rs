#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the data model and boundary schemas

use super::*;
use serde_json::json;
use std::io::Write;
use std::str::FromStr;
use tempfile::NamedTempFile;

#[test]
fn test_component_type_set_is_closed() {
    assert_eq!(ComponentType::ALL.len(), 44);
    assert_eq!(ComponentType::from_str("data-display"), Ok(ComponentType::DataDisplay));
    assert_eq!(ComponentType::ToggleGroup.as_str(), "toggle-group");
    assert!(ComponentType::from_str("not-a-real-type").is_err());
}

#[test]
fn test_component_spec_defaults() {
    let spec = parse_component_spec(&json!({ "name": "SubmitButton", "type": "button" }))
        .expect("minimal spec");
    assert_eq!(spec.size, Size::Md);
    assert!(spec.props.is_empty());
    assert!(!spec.children);
    assert!(spec.styling.is_none());
    assert!(spec.custom_content.is_none());
}

#[test]
fn test_component_spec_full_shape() {
    let value = json!({
        "name": "Fancy",
        "type": "card",
        "variant": "outline",
        "size": "lg",
        "description": "A fancy card",
        "props": [
            { "name": "title", "type": "string", "required": true },
            { "name": "count", "type": "number", "defaultValue": 3 }
        ],
        "styling": { "className": "p-4" },
        "accessibility": { "ariaLabel": "fancy", "tabIndex": 0 },
        "children": true,
        "customContent": "<span />"
    });
    let spec = parse_component_spec(&value).expect("full spec");
    assert_eq!(spec.size, Size::Lg);
    assert_eq!(spec.props.len(), 2);
    assert!(spec.props[0].required);
    assert_eq!(spec.props[1].default_value, Some(json!(3)));
    let styling = spec.styling.expect("styling");
    assert_eq!(styling.color_scheme, ColorScheme::Default);
    assert_eq!(styling.class_name.as_deref(), Some("p-4"));
    assert_eq!(spec.accessibility.and_then(|a| a.tab_index), Some(0.0));
}

#[test]
fn test_component_spec_rejects_unknown_type() {
    let err = parse_component_spec(&json!({ "name": "X", "type": "not-a-real-type" }))
        .expect_err("type outside the closed set");
    assert!(!err.messages.is_empty());
    assert!(err.to_string().starts_with("Invalid request: "));
}

#[test]
fn test_component_spec_accepts_type_without_template() {
    // Accepted at the boundary; generation reports the missing template.
    let spec = parse_component_spec(&json!({ "name": "Menu", "type": "dropdown" })).unwrap();
    assert_eq!(spec.component_type, "dropdown");
}

#[test]
fn test_component_spec_rejects_empty_name_and_bad_size() {
    let err = parse_component_spec(&json!({ "name": "", "type": "button", "size": "huge" }))
        .expect_err("empty name");
    assert!(err.messages.len() >= 2, "got {:?}", err.messages);
}

#[test]
fn test_validation_request_requires_code() {
    assert!(parse_validation_request(&json!({ "componentCode": "" })).is_err());
    assert!(parse_validation_request(&json!({})).is_err());
    let req = parse_validation_request(&json!({ "componentCode": "x" })).unwrap();
    assert!(!req.strict);
}

#[test]
fn test_template_and_pattern_requests() {
    let t = parse_template_request(&json!({ "type": "button", "variant": "ghost" })).unwrap();
    assert_eq!(t.component_type, "button");
    assert_eq!(t.variant.as_deref(), Some("ghost"));
    assert!(parse_template_request(&json!({ "variant": "ghost" })).is_err());

    let p = parse_pattern_request(&json!({ "componentCode": "x", "componentType": "card" })).unwrap();
    assert_eq!(p.component_type, "card");
}

#[test]
fn test_validation_result_serializes_camel_case() {
    let result = ValidationResult {
        is_valid: true,
        ..Default::default()
    };
    let v = serde_json::to_value(&result).unwrap();
    assert_eq!(v["isValid"], json!(true));
    assert!(v["errors"].as_array().unwrap().is_empty());
}

#[test]
fn test_load_component_spec_from_yaml() {
    let mut temp = NamedTempFile::with_suffix(".yaml").expect("create temp file");
    temp.write_all(b"name: SubmitButton\ntype: button\nprops:\n  - name: loading\n    type: boolean\n")
        .expect("write spec");
    temp.flush().expect("flush");

    let spec = load_component_spec(temp.path()).expect("load yaml spec");
    assert_eq!(spec.name, "SubmitButton");
    assert_eq!(spec.props[0].name, "loading");
}

#[test]
fn test_load_component_spec_reports_schema_failure() {
    let mut temp = NamedTempFile::with_suffix(".json").expect("create temp file");
    temp.write_all(br#"{"name":"X","type":"nope"}"#).expect("write spec");
    temp.flush().expect("flush");

    let err = load_component_spec(temp.path()).expect_err("invalid type");
    assert!(format!("{err:#}").contains("not a valid component specification"));
}

#[test]
fn test_examples_request_defaults_to_basic() {
    let req = parse_examples_request(&json!({"type": "card"})).unwrap();
    assert_eq!(req.component_type, "card");
    assert!(!req.include_advanced);

    let req = parse_examples_request(&json!({"type": "modal", "includeAdvanced": true})).unwrap();
    assert!(req.include_advanced);

    assert!(parse_examples_request(&json!({"includeAdvanced": true})).is_err());
}
