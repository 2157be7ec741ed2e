use minijinja::Environment;
use serde::Serialize;
use std::path::PathBuf;

use crate::naming::{capitalize_first, lowercase_first, to_camel_case_delimited, to_kebab_case};
use crate::spec::{Accessibility, ComponentSpec, PropSpec, Styling};

macro_rules! embedded_templates {
    ($($id:literal),+ $(,)?) => {
        /// Template text compiled into the binary, keyed by template identifier.
        const EMBEDDED: &[(&str, &str)] = &[
            $(($id, include_str!(concat!("../../templates/components/", $id))),)+
        ];
    };
}

embedded_templates!(
    "button.tsx.jinja",
    "input.tsx.jinja",
    "card.tsx.jinja",
    "modal.tsx.jinja",
    "select.tsx.jinja",
    "checkbox.tsx.jinja",
    "radio.tsx.jinja",
    "textarea.tsx.jinja",
    "switch.tsx.jinja",
    "tabs.tsx.jinja",
    "badge.tsx.jinja",
    "avatar.tsx.jinja",
    "alert.tsx.jinja",
    "progress.tsx.jinja",
    "skeleton.tsx.jinja",
);

/// Where template text is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates shipped with the crate.
    Embedded,
    /// `<dir>/<identifier>` on disk.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Read the raw text for `template`. `None` means the identifier is unknown to
    /// this source (or the file cannot be read).
    pub fn load(&self, template: &str) -> Option<String> {
        match self {
            TemplateSource::Embedded => EMBEDDED
                .iter()
                .find(|(id, _)| *id == template)
                .map(|(_, text)| (*text).to_string()),
            TemplateSource::Directory(dir) => std::fs::read_to_string(dir.join(template)).ok(),
        }
    }
}

/// Variables visible to a component template.
#[derive(Debug, Serialize)]
pub struct TemplateContext<'a> {
    #[serde(rename = "ComponentName")]
    pub component_name_pascal: String,
    #[serde(rename = "componentName")]
    pub component_name_camel: String,
    #[serde(rename = "type")]
    pub component_type: &'a str,
    pub variant: Option<&'a str>,
    pub size: &'static str,
    pub description: Option<&'a str>,
    pub props: &'a [PropSpec],
    pub styling: Styling,
    pub accessibility: Accessibility,
    pub children: bool,
    #[serde(rename = "customContent")]
    pub custom_content: Option<&'a str>,
}

impl<'a> TemplateContext<'a> {
    pub fn from_spec(spec: &'a ComponentSpec) -> Self {
        Self {
            component_name_pascal: capitalize_first(&spec.name),
            component_name_camel: lowercase_first(&spec.name),
            component_type: &spec.component_type,
            variant: spec.variant.as_deref(),
            size: spec.size.as_str(),
            description: spec.description.as_deref(),
            props: &spec.props,
            styling: spec.styling.clone().unwrap_or_default(),
            accessibility: spec.accessibility.clone().unwrap_or_default(),
            children: spec.children,
            custom_content: spec.custom_content.as_deref(),
        }
    }
}

/// Build the rendering environment with the casing filters registered.
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("capitalize_first", |s: String| capitalize_first(&s));
    env.add_filter("camel_case", |s: String| to_camel_case_delimited(&s));
    env.add_filter("kebab_case", |s: String| to_kebab_case(&s));
    env
}

/// Identifiers of every embedded template.
pub fn embedded_template_ids() -> impl Iterator<Item = &'static str> {
    EMBEDDED.iter().map(|(id, _)| *id)
}
