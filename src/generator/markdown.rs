//! Markdown renderings shared by the stdio tool protocol and the CLI.

use crate::registry::{self, TemplateEntry};
use crate::spec::{GeneratedComponent, ValidationResult};

use super::GenerateError;

/// Full report for a generated component: code, imports, dependencies, docs, examples.
pub fn render_generated_markdown(component: &GeneratedComponent) -> String {
    let dependencies =
        serde_json::to_string_pretty(&component.dependencies).unwrap_or_else(|_| "[]".to_string());
    let examples = component
        .examples
        .iter()
        .map(|e| format!("```tsx\n{e}\n```"))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "# Generated Component: {name}\n\n## Code\n\n```tsx\n{code}\n```\n\n## Imports\n\n```tsx\n{imports}\n```\n\n## Dependencies\n\n```json\n{dependencies}\n```\n\n## Documentation\n\n{documentation}\n\n## Examples\n\n{examples}",
        name = component.name,
        code = component.code,
        imports = component.imports.join("\n"),
        documentation = component.documentation,
    )
}

fn numbered(out: &mut String, heading: &str, marker: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("## {heading}\n\n"));
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{}. {marker} {item}\n", i + 1));
    }
}

/// Status line followed by numbered errors, warnings and suggestions.
pub fn render_validation_markdown(result: &ValidationResult) -> String {
    let mut out = String::from("# Component Validation Result\n\n");
    let status = if result.is_valid { "✅ Valid" } else { "❌ Invalid" };
    out.push_str(&format!("**Status:** {status}\n\n"));

    numbered(&mut out, "Errors", "❌", &result.errors);
    if !result.errors.is_empty() {
        out.push('\n');
    }
    numbered(&mut out, "Warnings", "⚠️", &result.warnings);
    if !result.warnings.is_empty() {
        out.push('\n');
    }
    numbered(&mut out, "Suggestions", "💡", &result.suggestions);
    out
}

/// Every registered template with its variants and example snippets.
pub fn list_templates_markdown() -> String {
    let mut out = String::from("# Available Component Types\n\n");
    for entry in registry::templates() {
        out.push_str(&format!("## {} (`{}`)\n\n", entry.name, entry.component_type));
        out.push_str(&format!("{}\n\n", entry.description));
        if !entry.variants.is_empty() {
            out.push_str(&format!("**Variants:** {}\n\n", entry.variants.join(", ")));
        }
        if !entry.examples.is_empty() {
            out.push_str("**Examples:**\n");
            for example in entry.examples {
                out.push_str(&format!("- `{example}`\n"));
            }
            out.push('\n');
        }
    }
    out
}

fn usage_examples(out: &mut String, entry: &TemplateEntry) {
    for (i, example) in entry.examples.iter().enumerate() {
        out.push_str(&format!("### Example {}\n\n```tsx\n{example}\n```\n\n", i + 1));
    }
}

/// Detail page for one template; `selected_variant` is flagged in the variant list.
pub fn describe_template(entry: &TemplateEntry, selected_variant: Option<&str>) -> String {
    let mut out = format!("# {} Template\n\n", entry.name);
    out.push_str(&format!("**Type:** {}\n", entry.component_type));
    out.push_str(&format!("**Description:** {}\n\n", entry.description));

    if !entry.variants.is_empty() {
        out.push_str("## Available Variants\n\n");
        for variant in entry.variants {
            let selected = if Some(*variant) == selected_variant { " (selected)" } else { "" };
            out.push_str(&format!("- `{variant}`{selected}\n"));
        }
        out.push('\n');
    }

    out.push_str("## Usage Examples\n\n");
    usage_examples(&mut out, entry);
    out
}

const BUTTON_ADVANCED: &str = "### With Custom Styling\n\n```tsx\n<Button className=\"bg-gradient-to-r from-purple-500 to-pink-500\">\n  Gradient Button\n</Button>\n```\n\n### With Icon\n\n```tsx\n<Button variant=\"outline\" size=\"icon\">\n  <Icon className=\"h-4 w-4\" />\n</Button>\n```\n\n";

const CARD_ADVANCED: &str = "### Complex Card Layout\n\n```tsx\n<Card className=\"w-[350px]\">\n  <CardHeader>\n    <CardTitle>Create project</CardTitle>\n    <CardDescription>Deploy your new project in one-click.</CardDescription>\n  </CardHeader>\n  <CardContent>\n    <form>\n      <div className=\"grid w-full items-center gap-4\">\n        <Input placeholder=\"Project name\" />\n      </div>\n    </form>\n  </CardContent>\n  <CardFooter className=\"flex justify-between\">\n    <Button variant=\"outline\">Cancel</Button>\n    <Button>Deploy</Button>\n  </CardFooter>\n</Card>\n```\n\n";

const MODAL_ADVANCED: &str = "### Modal with Form\n\n```tsx\n<Modal>\n  <ModalTrigger asChild>\n    <Button variant=\"outline\">Edit Profile</Button>\n  </ModalTrigger>\n  <ModalContent className=\"sm:max-w-[425px]\">\n    <ModalHeader>\n      <ModalTitle>Edit profile</ModalTitle>\n      <ModalDescription>\n        Make changes to your profile here. Click save when you're done.\n      </ModalDescription>\n    </ModalHeader>\n    <div className=\"grid gap-4 py-4\">\n      <Input placeholder=\"Name\" />\n      <Input placeholder=\"Email\" />\n    </div>\n    <ModalFooter>\n      <Button type=\"submit\">Save changes</Button>\n    </ModalFooter>\n  </ModalContent>\n</Modal>\n```\n\n";

/// Registry examples for `component_type`, plus fixed advanced snippets when asked.
///
/// Only button, card and modal (matched exactly as written) have advanced
/// snippets; other types get an empty "Advanced Usage" section.
pub fn generate_examples_markdown(
    component_type: &str,
    include_advanced: bool,
) -> Result<String, GenerateError> {
    let entry = registry::get_template(component_type)
        .ok_or_else(|| GenerateError::TemplateMissingForType(component_type.to_string()))?;

    let mut out = format!("# {} Examples\n\n", entry.name);
    out.push_str("## Basic Usage\n\n");
    usage_examples(&mut out, entry);

    if include_advanced {
        out.push_str("## Advanced Usage\n\n");
        match component_type {
            "button" => out.push_str(BUTTON_ADVANCED),
            "card" => out.push_str(CARD_ADVANCED),
            "modal" => out.push_str(MODAL_ADVANCED),
            _ => {}
        }
    }
    Ok(out)
}
