//! Markdown documentation and usage snippets derived from a [`ComponentSpec`].
//!
//! Default values are arbitrary JSON; they are displayed and tested for presence the
//! way a JavaScript host would (`0`, `""`, `false` and `null` count as absent).

use serde_json::Value;

use crate::naming::capitalize_first;
use crate::spec::ComponentSpec;

/// JavaScript truthiness of a JSON value.
pub fn js_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// JavaScript `String(value)` rendering of a JSON value.
pub fn js_display(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => js_display(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// JavaScript `JSON.stringify(value)`: insertion-ordered keys, whole floats without `.0`.
pub fn js_json(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) => js_display(value),
        Value::String(s) => json_string(s),
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(js_json).collect();
            format!("[{}]", items.join(","))
        }
        Value::Object(map) => {
            let fields: Vec<String> = map
                .iter()
                .map(|(k, v)| format!("{}:{}", json_string(k), js_json(v)))
                .collect();
            format!("{{{}}}", fields.join(","))
        }
    }
}

fn json_string(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}

fn truthy_default(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| js_truthy(v))
}

/// Markdown usage document: title, optional description, usage block, props table.
pub fn generate_documentation(spec: &ComponentSpec) -> String {
    let name = capitalize_first(&spec.name);
    let mut doc = format!("# {name}\n\n");

    if let Some(description) = spec.description.as_deref().filter(|d| !d.is_empty()) {
        doc.push_str(description);
        doc.push_str("\n\n");
    }

    doc.push_str("## Usage\n\n");
    doc.push_str(&format!(
        "```tsx\nimport {{ {name} }} from \"@/components/ui/{}\"\n\n",
        spec.name.to_lowercase()
    ));
    doc.push_str(&format!("<{name}"));

    let required: Vec<String> = spec
        .props
        .iter()
        .filter(|p| p.required)
        .map(|p| {
            let value = truthy_default(&p.default_value)
                .map(js_display)
                .unwrap_or_else(|| format!("\"{}\"", p.prop_type));
            format!("{}={{{}}}", p.name, value)
        })
        .collect();
    if !required.is_empty() {
        doc.push(' ');
        doc.push_str(&required.join(" "));
    }

    if spec.children {
        doc.push_str(&format!(">\n  Content here\n</{name}>"));
    } else {
        doc.push_str(" />");
    }
    doc.push_str("\n```\n\n");

    if !spec.props.is_empty() {
        doc.push_str("## Props\n\n");
        doc.push_str("| Prop | Type | Required | Description | Default |\n");
        doc.push_str("|------|------|----------|-------------|----------|\n");
        for prop in &spec.props {
            let description = prop
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or("-");
            let default = truthy_default(&prop.default_value)
                .map(|v| format!("`{}`", js_display(v)))
                .unwrap_or_else(|| "-".to_string());
            doc.push_str(&format!(
                "| {} | `{}` | {} | {} | {} |\n",
                prop.name,
                prop.prop_type,
                if prop.required { "Yes" } else { "No" },
                description,
                default
            ));
        }
    }

    doc
}

fn type_examples(n: &str, component_type: &str) -> Vec<String> {
    match component_type {
        "button" => vec![
            format!("<{n} variant=\"outline\">Outline Button</{n}>"),
            format!("<{n} variant=\"destructive\" size=\"lg\">Large Destructive</{n}>"),
        ],
        "select" => vec![format!(
            "<{n}><{n}Trigger><{n}Value /></{n}Trigger><{n}Content><{n}Item value=\"option1\">Option 1</{n}Item></{n}Content></{n}>"
        )],
        "checkbox" => vec![
            format!("<{n} id=\"terms\" />"),
            format!("<{n} checked disabled />"),
        ],
        "radio" => vec![format!(
            "<{n}><{n}Item value=\"option1\" /><{n}Item value=\"option2\" /></{n}>"
        )],
        "textarea" => vec![
            format!("<{n} placeholder=\"Enter your message...\" />"),
            format!("<{n} rows={{4}} />"),
        ],
        "switch" => vec![format!("<{n} checked />"), format!("<{n} disabled />")],
        "tabs" => vec![format!(
            "<{n}><{n}List><{n}Trigger value=\"tab1\">Tab 1</{n}Trigger></{n}List><{n}Content value=\"tab1\">Content</{n}Content></{n}>"
        )],
        "badge" => vec![
            format!("<{n} variant=\"secondary\">Beta</{n}>"),
            format!("<{n} variant=\"destructive\">Error</{n}>"),
        ],
        "avatar" => vec![format!(
            "<{n}><{n}Image src=\"/avatar.jpg\" /><{n}Fallback>CN</{n}Fallback></{n}>"
        )],
        "alert" => vec![format!(
            "<{n} variant=\"destructive\"><{n}Description>Error occurred!</{n}Description></{n}>"
        )],
        "progress" => vec![
            format!("<{n} value={{75}} />"),
            format!("<{n} value={{50}} max={{100}} />"),
        ],
        "skeleton" => vec![
            format!("<{n} className=\"w-[100px] h-[20px] rounded-full\" />"),
            format!("<{n} className=\"h-4 w-[250px]\" />"),
        ],
        _ => Vec::new(),
    }
}

/// Usage snippets: basic, per-type, size variants, then one snippet with every
/// prop that has a default.
pub fn generate_examples(spec: &ComponentSpec) -> Vec<String> {
    let n = capitalize_first(&spec.name);
    let component_type = spec.component_type.as_str();
    let mut examples = Vec::new();

    if spec.children {
        examples.push(format!("<{n}>Basic {component_type}</{n}>"));
    } else {
        examples.push(format!("<{n} />"));
    }

    examples.extend(type_examples(&n, component_type));

    if matches!(component_type, "button" | "input" | "textarea") {
        examples.push(format!("<{n} size=\"sm\">Small</{n}>"));
        examples.push(format!("<{n} size=\"lg\">Large</{n}>"));
    }

    let with_defaults: Vec<String> = spec
        .props
        .iter()
        .filter_map(|p| {
            let value = truthy_default(&p.default_value)?;
            Some(format!("{}={{{}}}", p.name, js_json(value)))
        })
        .collect();
    if !with_defaults.is_empty() {
        let props = with_defaults.join(" ");
        if spec.children {
            examples.push(format!("<{n} {props}>With Props</{n}>"));
        } else {
            examples.push(format!("<{n} {props} />"));
        }
    }

    examples
}
