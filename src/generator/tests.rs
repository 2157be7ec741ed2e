#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::registry::all_template_types;
use crate::spec::{PropSpec, Size, Styling};
use serde_json::{json, Value};
use std::fs;

fn spec(name: &str, component_type: &str) -> ComponentSpec {
    ComponentSpec::new(name, component_type)
}

#[test]
fn test_every_registered_type_generates_code() {
    let generator = ComponentGenerator::new();
    for component_type in all_template_types() {
        let out = generator
            .generate_component(&spec("Widget", component_type))
            .unwrap_or_else(|e| panic!("{component_type}: {e}"));
        assert!(!out.code.is_empty(), "{component_type} rendered empty code");
        assert!(out.code.contains("Widget"), "{component_type} lost the component name");
        assert!(out.code.contains("export"), "{component_type} exports nothing");
        assert_eq!(out.name, "Widget");
    }
    assert_eq!(generator.cached_templates(), all_template_types().len());
}

#[test]
fn test_unregistered_type_fails() {
    let generator = ComponentGenerator::new();
    let err = generator
        .generate_component(&spec("Menu", "dropdown"))
        .expect_err("dropdown has no template");
    assert_eq!(err, GenerateError::UnknownComponentType("dropdown".into()));
    assert_eq!(err.to_string(), "Unknown component type: dropdown");
    assert!(err.is_client_error());
}

#[test]
fn test_type_lookup_ignores_case_but_derived_output_does_not() {
    let generator = ComponentGenerator::new();
    let out = generator.generate_component(&spec("Go", "BUTTON")).unwrap();
    assert!(out.code.contains("const Go = React.forwardRef"));
    assert_eq!(out.imports, imports_for("card"));
    assert!(!out.examples.iter().any(|e| e.contains("size=\"sm\"")));

    let input = generator.generate_component(&spec("Field", "Input")).unwrap();
    assert!(input.dependencies.contains(&"lucide-react".to_string()));
    assert!(!dependencies_for("input").contains(&"lucide-react".to_string()));
    assert!(!dependencies_for("Modal").contains(&"@radix-ui/react-dialog".to_string()));
}

#[test]
fn test_generation_is_idempotent() {
    let generator = ComponentGenerator::new();
    let mut s = spec("Fancy", "card");
    s.description = Some("A fancy card".into());
    s.props = vec![PropSpec::new("title", "string").required()];
    let a = generator.generate_component(&s).unwrap();
    let b = generator.generate_component(&s).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_submit_button_end_to_end() {
    let generator = ComponentGenerator::new();
    let mut s = spec("SubmitButton", "button");
    s.size = Size::Lg;
    s.children = true;
    let out = generator.generate_component(&s).unwrap();

    assert!(out.code.contains("SubmitButton"));
    assert!(out.code.contains("const submitButtonVariants = cva("));
    assert!(out.code.contains("size: \"lg\""));
    assert!(out.dependencies.contains(&"class-variance-authority".to_string()));
    assert!(out.dependencies.contains(&"lucide-react".to_string()));
    assert_eq!(
        out.examples,
        vec![
            "<SubmitButton>Basic button</SubmitButton>",
            "<SubmitButton variant=\"outline\">Outline Button</SubmitButton>",
            "<SubmitButton variant=\"destructive\" size=\"lg\">Large Destructive</SubmitButton>",
            "<SubmitButton size=\"sm\">Small</SubmitButton>",
            "<SubmitButton size=\"lg\">Large</SubmitButton>",
        ]
    );
}

#[test]
fn test_generator_keeps_first_letter_casing_path() {
    let generator = ComponentGenerator::new();
    let out = generator.generate_component(&spec("my-button", "badge")).unwrap();
    assert!(out.code.contains("const My-button = React.forwardRef"));
    assert!(out.documentation.starts_with("# My-button\n\n"));
}

#[test]
fn test_template_variables_reach_output() {
    let generator = ComponentGenerator::new();
    let mut s = spec("Field", "input");
    s.description = Some("Email field".into());
    s.props = vec![PropSpec::new("label", "string").required(), PropSpec::new("hint", "string")];
    s.styling = Some(Styling {
        class_name: Some("w-64".into()),
        ..Default::default()
    });
    let out = generator.generate_component(&s).unwrap();
    assert!(out.code.contains(" * Email field"));
    assert!(out.code.contains("  label: string\n"));
    assert!(out.code.contains("  hint?: string\n"));
    assert!(out.code.contains("\"w-64\","));
    assert!(!out.code.contains("aria-label"), "unset accessibility leaked:\n{}", out.code);
}

#[test]
fn test_imports_per_type() {
    assert_eq!(imports_for("input").len(), 2);
    assert_eq!(imports_for("button").len(), 4);
    assert!(imports_for("modal").contains(&"import { X } from \"lucide-react\"".to_string()));
    assert_eq!(
        imports_for("dropdown")[2],
        "import * as DropdownMenuPrimitive from \"@radix-ui/react-dropdown-menu\""
    );
}

#[test]
fn test_dependencies_deduplicated_and_ordered() {
    let deps = dependencies_for("toggle-group");
    assert_eq!(
        deps,
        vec![
            "@radix-ui/react-slot",
            "class-variance-authority",
            "clsx",
            "tailwind-merge",
            "@radix-ui/react-toggle",
            "@radix-ui/react-toggle-group",
            "lucide-react",
        ]
    );
    for t in crate::spec::ComponentType::ALL {
        let deps = dependencies_for(t.as_str());
        let mut seen = std::collections::HashSet::new();
        assert!(deps.iter().all(|d| seen.insert(d.clone())), "duplicates for {t}");
    }
    assert!(!dependencies_for("input").contains(&"lucide-react".to_string()));
    assert!(dependencies_for("button").contains(&"lucide-react".to_string()));
    assert!(dependencies_for("dialog").contains(&"@radix-ui/react-dialog".to_string()));
}

#[test]
fn test_documentation_layout() {
    let mut s = spec("Fancy", "card");
    s.description = Some("A fancy card".into());
    s.children = true;
    s.props = vec![
        PropSpec::new("title", "string").required().with_description("Heading text"),
        PropSpec::new("count", "number").required().with_default(json!(3)),
        PropSpec::new("flag", "boolean").with_default(json!(false)),
    ];
    let doc = generate_documentation(&s);
    let expected = "# Fancy\n\nA fancy card\n\n## Usage\n\n```tsx\nimport { Fancy } from \"@/components/ui/fancy\"\n\n<Fancy title={\"string\"} count={3}>\n  Content here\n</Fancy>\n```\n\n## Props\n\n| Prop | Type | Required | Description | Default |\n|------|------|----------|-------------|----------|\n| title | `string` | Yes | Heading text | - |\n| count | `number` | Yes | - | `3` |\n| flag | `boolean` | No | - | - |\n";
    assert_eq!(doc, expected);
}

#[test]
fn test_documentation_without_props_is_self_closing() {
    let doc = generate_documentation(&spec("Dot", "skeleton"));
    assert_eq!(
        doc,
        "# Dot\n\n## Usage\n\n```tsx\nimport { Dot } from \"@/components/ui/dot\"\n\n<Dot />\n```\n\n"
    );
}

#[test]
fn test_examples_with_prop_defaults() {
    let mut s = spec("Meter", "progress");
    s.props = vec![
        PropSpec::new("value", "number").with_default(json!(40)),
        PropSpec::new("label", "string").with_default(json!("Done")),
        PropSpec::new("hidden", "boolean").with_default(json!(false)),
        PropSpec::new("empty", "string").with_default(json!("")),
    ];
    let examples = generate_examples(&s);
    assert_eq!(examples[0], "<Meter />");
    assert_eq!(examples[1], "<Meter value={75} />");
    assert_eq!(examples.last().unwrap(), "<Meter value={40} label={\"Done\"} />");
    assert_eq!(examples.len(), 4);
}

#[test]
fn test_examples_serialize_defaults_like_json_stringify() {
    let mut s = spec("Chart", "card");
    let options: Value = serde_json::from_str(r#"{"z":1,"a":2.0,"nested":{"y":[3.0,"x"],"b":null}}"#).unwrap();
    s.props = vec![
        PropSpec::new("options", "object").with_default(options),
        PropSpec::new("ratio", "number").with_default(json!(2.0)),
        PropSpec::new("scale", "number").with_default(json!(1.5)),
    ];
    let examples = generate_examples(&s);
    assert_eq!(
        examples.last().unwrap(),
        "<Chart options={{\"z\":1,\"a\":2,\"nested\":{\"y\":[3,\"x\"],\"b\":null}}} ratio={2} scale={1.5} />"
    );
    assert_eq!(js_json(&json!("say \"hi\"")), r#""say \"hi\"""#);
}

#[test]
fn test_js_value_helpers() {
    assert!(!js_truthy(&json!(0)));
    assert!(!js_truthy(&json!("")));
    assert!(!js_truthy(&json!(null)));
    assert!(js_truthy(&json!([])));
    assert!(js_truthy(&json!({})));
    assert_eq!(js_display(&json!([1, "a", null])), "1,a,");
    assert_eq!(js_display(&json!({"a": 1})), "[object Object]");
    assert_eq!(js_display(&json!(2.0)), "2");
    assert_eq!(js_display(&json!(2.5)), "2.5");
    assert_eq!(js_display(&json!(true)), "true");
}

#[test]
fn test_template_dir_override_and_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("button.tsx.jinja"),
        "export const {{ ComponentName }} = \"{{ componentName | kebab_case }}/{{ type }}/{{ size }}\"\n",
    )
    .unwrap();

    let generator = ComponentGenerator::with_template_dir(dir.path());
    let out = generator.generate_component(&spec("BigRedButton", "button")).unwrap();
    assert_eq!(out.code, "export const BigRedButton = \"big-red-button/button/md\"\n");

    let err = generator.generate_component(&spec("Box", "card")).expect_err("no card template");
    assert_eq!(
        err,
        GenerateError::TemplateNotFound {
            template: "card.tsx.jinja".into()
        }
    );
    assert!(!err.is_client_error());
}

#[test]
fn test_render_failure_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("badge.tsx.jinja"), "{% if %}").unwrap();
    let generator = ComponentGenerator::with_template_dir(dir.path());
    match generator.generate_component(&spec("Tag", "badge")) {
        Err(GenerateError::Render(msg)) => assert!(!msg.is_empty()),
        other => panic!("expected render error, got {other:?}"),
    }
    assert_eq!(generator.cached_templates(), 0);
}

#[test]
fn test_compiled_template_is_reused() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("badge.tsx.jinja");
    fs::write(&path, "export const {{ ComponentName }} = 1\n").unwrap();
    let generator = ComponentGenerator::with_template_dir(dir.path());

    let first = generator.generate_component(&spec("Tag", "badge")).unwrap();
    assert_eq!(first.code, "export const Tag = 1\n");
    assert_eq!(generator.cached_templates(), 1);

    fs::remove_file(&path).unwrap();
    let second = generator.generate_component(&spec("Chip", "badge")).unwrap();
    assert_eq!(second.code, "export const Chip = 1\n");
    assert_eq!(generator.cached_templates(), 1);
}

#[test]
fn test_markdown_renderers() {
    let generator = ComponentGenerator::new();
    let out = generator.generate_component(&spec("Tag", "badge")).unwrap();
    let md = render_generated_markdown(&out);
    assert!(md.starts_with("# Generated Component: Tag\n\n## Code\n\n```tsx\n"));
    assert!(md.contains("## Dependencies\n\n```json\n[\n  \"@radix-ui/react-slot\","));
    assert!(md.ends_with("```tsx\n<Tag variant=\"destructive\">Error</Tag>\n```"));

    let listing = list_templates_markdown();
    assert!(listing.starts_with("# Available Component Types\n\n## Button (`button`)\n\n"));
    assert!(listing.contains("## RadioGroup (`radio`)"));

    let entry = crate::registry::get_template("alert").unwrap();
    let detail = describe_template(entry, Some("destructive"));
    assert!(detail.contains("**Type:** alert\n**Description:** Alert component"));
    assert!(detail.contains("- `default`\n- `destructive` (selected)\n"));
    assert!(detail.contains("### Example 2\n\n```tsx\n<Alert variant=\"destructive\">"));
}

#[test]
fn test_examples_markdown() {
    let basic = generate_examples_markdown("card", false).unwrap();
    assert!(basic.starts_with("# Card Examples\n\n## Basic Usage\n\n### Example 1\n\n"));
    assert!(!basic.contains("Advanced Usage"));

    let advanced = generate_examples_markdown("modal", true).unwrap();
    assert!(advanced.contains("## Advanced Usage\n\n### Modal with Form"));

    let mixed_case = generate_examples_markdown("Modal", true).unwrap();
    assert!(mixed_case.starts_with("# Modal Examples"));
    assert!(mixed_case.ends_with("## Advanced Usage\n\n"));

    let err = generate_examples_markdown("dropdown", false).expect_err("no template");
    assert_eq!(err.to_string(), "Template not found for type: dropdown");
}

#[test]
fn test_embedded_ids_match_registry() {
    let ids: Vec<&str> = embedded_template_ids().collect();
    for entry in crate::registry::templates() {
        assert!(ids.contains(&entry.template), "{} not embedded", entry.template);
    }
}

#[test]
fn test_casing_filters() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("badge.tsx.jinja"),
        "{{ ComponentName | camel_case }} {{ componentName | camel_case }} {{ ComponentName | kebab_case }}",
    )
    .unwrap();
    let generator = ComponentGenerator::with_template_dir(dir.path());
    let out = generator.generate_component(&spec("fancy-tag", "badge")).unwrap();
    assert_eq!(out.code, "FancyTag fancyTag fancy-tag");
}
