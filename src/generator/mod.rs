//! # Generator Module
//!
//! Turns a [`ComponentSpec`] into React/Tailwind component source plus the material
//! around it: import lines, npm dependencies, a markdown usage document and usage
//! snippets.
//!
//! ## Pipeline
//!
//! ```text
//! ComponentSpec → registry lookup → compiled template (cached) → minijinja render
//!                                  → imports / dependencies / docs / examples
//! ```
//!
//! 1. **Lookup** - the requested `type` is resolved against [`crate::registry`]
//!    (case-insensitive). Types outside the registry fail with
//!    [`GenerateError::UnknownComponentType`].
//! 2. **Template** - loaded once per identifier from the generator's
//!    [`TemplateSource`], compiled, and kept for the lifetime of the generator.
//! 3. **Render** - minijinja with the casing filters `capitalize_first`,
//!    `camel_case` and `kebab_case`.
//! 4. **Derived output** - computed from the [`ComponentSpec`] alone, see [`imports_for`],
//!    [`dependencies_for`], [`generate_documentation`] and [`generate_examples`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use component_builder::generator::ComponentGenerator;
//! use component_builder::spec::ComponentSpec;
//!
//! let generator = ComponentGenerator::new();
//! let out = generator.generate_component(&ComponentSpec::new("SubmitButton", "button"))?;
//! assert!(out.code.contains("const SubmitButton = React.forwardRef"));
//! ```
//!
//! Generation never logs; adapters wrap calls in their own spans.

use minijinja::Environment;
use std::fmt;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::registry;
use crate::spec::{ComponentSpec, GeneratedComponent};

mod docs;
mod markdown;
mod templates;

#[cfg(test)]
mod tests;

pub use docs::{generate_documentation, generate_examples, js_display, js_json, js_truthy};
pub use markdown::{
    describe_template, generate_examples_markdown, list_templates_markdown,
    render_generated_markdown, render_validation_markdown,
};
pub use templates::{embedded_template_ids, TemplateContext, TemplateSource};

/// Errors produced while generating a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The requested type has no registered template.
    UnknownComponentType(String),
    /// A lookup by type for template metadata found nothing.
    TemplateMissingForType(String),
    /// The registered template identifier could not be loaded from the source.
    TemplateNotFound { template: String },
    /// The template failed to render.
    Render(String),
}

impl GenerateError {
    /// Whether the failure was caused by the request rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GenerateError::UnknownComponentType(_) | GenerateError::TemplateMissingForType(_)
        )
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::UnknownComponentType(t) => write!(f, "Unknown component type: {t}"),
            GenerateError::TemplateMissingForType(t) => write!(f, "Template not found for type: {t}"),
            GenerateError::TemplateNotFound { template } => {
                write!(f, "Template file not found: {template}")
            }
            GenerateError::Render(msg) => write!(f, "Template render failed: {msg}"),
        }
    }
}

impl std::error::Error for GenerateError {}

const BASE_IMPORTS: &[&str] = &[
    "import * as React from \"react\"",
    "import { cn } from \"@/lib/utils\"",
];

const BASE_DEPENDENCIES: &[&str] = &[
    "@radix-ui/react-slot",
    "class-variance-authority",
    "clsx",
    "tailwind-merge",
];

const ICONLESS_TYPES: &[&str] = &["input", "textarea", "progress", "skeleton"];

/// Import lines the generated component relies on.
///
/// Matches the type exactly as written; only the registry lookup ignores case.
pub fn imports_for(component_type: &str) -> Vec<String> {
    let mut imports: Vec<String> = BASE_IMPORTS.iter().map(|s| s.to_string()).collect();
    let extra: &[&str] = match component_type {
        "button" => &[
            "import { Slot } from \"@radix-ui/react-slot\"",
            "import { cva, type VariantProps } from \"class-variance-authority\"",
        ],
        "modal" => &[
            "import * as DialogPrimitive from \"@radix-ui/react-dialog\"",
            "import { X } from \"lucide-react\"",
        ],
        "dropdown" => &["import * as DropdownMenuPrimitive from \"@radix-ui/react-dropdown-menu\""],
        _ => &[],
    };
    imports.extend(extra.iter().map(|s| s.to_string()));
    imports
}

fn radix_packages(component_type: &str) -> &'static [&'static str] {
    match component_type {
        "modal" | "dialog" => &["@radix-ui/react-dialog"],
        "dropdown" => &["@radix-ui/react-dropdown-menu"],
        "select" => &["@radix-ui/react-select"],
        "checkbox" => &["@radix-ui/react-checkbox"],
        "radio" => &["@radix-ui/react-radio-group"],
        "switch" => &["@radix-ui/react-switch"],
        "tabs" => &["@radix-ui/react-tabs"],
        "accordion" => &["@radix-ui/react-accordion"],
        "avatar" => &["@radix-ui/react-avatar"],
        "popover" => &["@radix-ui/react-popover"],
        "tooltip" => &["@radix-ui/react-tooltip"],
        "hover-card" => &["@radix-ui/react-hover-card"],
        "context-menu" => &["@radix-ui/react-context-menu"],
        "menubar" => &["@radix-ui/react-menubar"],
        "navigation-menu" => &["@radix-ui/react-navigation-menu"],
        "scroll-area" => &["@radix-ui/react-scroll-area"],
        "separator" => &["@radix-ui/react-separator"],
        "slider" => &["@radix-ui/react-slider"],
        "toggle" | "toggle-group" => &["@radix-ui/react-toggle", "@radix-ui/react-toggle-group"],
        _ => &[],
    }
}

/// npm packages the generated component needs, first occurrence wins.
///
/// Matches the type exactly as written, so `"Input"` still pulls in `lucide-react`.
pub fn dependencies_for(component_type: &str) -> Vec<String> {
    let mut deps: Vec<&str> = BASE_DEPENDENCIES.to_vec();
    deps.extend_from_slice(radix_packages(component_type));
    if !ICONLESS_TYPES.contains(&component_type) {
        deps.push("lucide-react");
    }

    let mut unique: Vec<String> = Vec::with_capacity(deps.len());
    for dep in deps {
        if !unique.iter().any(|d| d == dep) {
            unique.push(dep.to_string());
        }
    }
    unique
}

/// Renders component specs into source text.
///
/// Cheap to share behind an `Arc`; each template is read from the source and
/// compiled into the minijinja environment the first time it is needed, then
/// rendered from the compiled form. Concurrent first loads of the same
/// identifier may both compile it; the first one registered wins.
pub struct ComponentGenerator {
    source: TemplateSource,
    env: RwLock<Environment<'static>>,
}

impl fmt::Debug for ComponentGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentGenerator")
            .field("source", &self.source)
            .field("cached", &self.cached_templates())
            .finish()
    }
}

impl Default for ComponentGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentGenerator {
    /// Generator backed by the templates compiled into the crate.
    pub fn new() -> Self {
        Self::with_source(TemplateSource::Embedded)
    }

    /// Generator reading `<dir>/<template identifier>` from disk.
    pub fn with_template_dir(dir: impl Into<PathBuf>) -> Self {
        Self::with_source(TemplateSource::Directory(dir.into()))
    }

    pub fn with_source(source: TemplateSource) -> Self {
        Self {
            source,
            env: RwLock::new(templates::environment()),
        }
    }

    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Number of compiled templates currently cached.
    pub fn cached_templates(&self) -> usize {
        self.env.read().map(|env| env.templates().count()).unwrap_or(0)
    }

    /// Compile `template` into the environment unless it is already there.
    fn ensure_compiled(&self, template: &str) -> Result<(), GenerateError> {
        let compiled = self
            .env
            .read()
            .map(|env| env.get_template(template).is_ok())
            .unwrap_or(false);
        if compiled {
            return Ok(());
        }

        let text = self
            .source
            .load(template)
            .ok_or_else(|| GenerateError::TemplateNotFound {
                template: template.to_string(),
            })?;

        let mut env = self
            .env
            .write()
            .map_err(|_| GenerateError::Render("template cache poisoned".to_string()))?;
        if env.get_template(template).is_err() {
            env.add_template_owned(template.to_string(), text)
                .map_err(|e| GenerateError::Render(e.to_string()))?;
        }
        Ok(())
    }

    fn render(&self, template: &str, ctx: &TemplateContext<'_>) -> Result<String, GenerateError> {
        self.ensure_compiled(template)?;
        let env = self
            .env
            .read()
            .map_err(|_| GenerateError::Render("template cache poisoned".to_string()))?;
        env.get_template(template)
            .and_then(|t| t.render(ctx))
            .map_err(|e| GenerateError::Render(e.to_string()))
    }

    /// Render `spec` into a [`GeneratedComponent`].
    pub fn generate_component(&self, spec: &ComponentSpec) -> Result<GeneratedComponent, GenerateError> {
        let entry = registry::get_template(&spec.component_type)
            .ok_or_else(|| GenerateError::UnknownComponentType(spec.component_type.clone()))?;

        let ctx = TemplateContext::from_spec(spec);
        let code = self.render(entry.template, &ctx)?;

        Ok(GeneratedComponent {
            name: spec.name.clone(),
            code,
            imports: imports_for(&spec.component_type),
            dependencies: dependencies_for(&spec.component_type),
            documentation: generate_documentation(spec),
            examples: generate_examples(spec),
        })
    }
}
