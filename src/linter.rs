//! # Component Linter Module
//!
//! Heuristic checks for shadcn-style React component source. The checks are plain
//! substring and regex probes over the text; nothing is parsed, so an aliased import
//! or a renamed helper is not recognised.
//!
//! ## Checks Performed
//!
//! 1. **Structure** - React import, `forwardRef`, `displayName`, export, PascalCase name
//! 2. **Typing** - props interface, `any`, forwardRef generics
//! 3. **Conventions** - `cn` import and usage, Tailwind classes, `cva`, Radix primitives,
//!    prop spreading
//! 4. **Accessibility** - ARIA attributes, semantic elements, keyboard handlers,
//!    focus-visible styles
//! 5. **Performance** - memoisation hooks, inline closures, component size
//! 6. **Strict mode** - labels, generics and doc comments promoted to errors
//!
//! [`validate_shadcn_pattern`] runs a separate per-type checklist.
//!
//! ## Usage
//!
//! ```rust
//! use component_builder::linter::ComponentValidator;
//!
//! let result = ComponentValidator::new().validate_component("", false);
//! assert!(!result.is_valid);
//! assert!(result.errors.contains(&"Missing React import".to_string()));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::naming::is_pascal_case;
pub use crate::spec::ValidationResult;

mod patterns;

pub use patterns::validate_shadcn_pattern;


static FORWARD_REF_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"const (\w+) = React\.forwardRef").expect("forwardRef name regex should be valid")
});
static INLINE_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]*=>[^}]*\}").expect("inline function regex should be valid"));
static TAILWIND_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"\b(bg-|text-|border-|rounded-|p-|m-|w-|h-|flex|grid|absolute|relative)\w*")
            .expect("tailwind utility regex should be valid"),
        Regex::new(r"\b(hover:|focus:|active:|disabled:)\w*")
            .expect("tailwind state regex should be valid"),
        Regex::new(r"\b(sm:|md:|lg:|xl:|2xl:)\w*").expect("tailwind breakpoint regex should be valid"),
    ]
});

const COMPLEXITY_INDICATORS: &[&str] = &[
    "state",
    "useEffect",
    "useState",
    "useCallback",
    "useMemo",
    "Portal",
    "Dialog",
    "Dropdown",
    "Popover",
    "Tooltip",
];

const MAX_LINES: usize = 200;
const MAX_INLINE_FUNCTIONS: usize = 2;

/// Severity bucket of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Makes the result invalid
    Error,
    Warning,
    /// Best-practice hint
    Suggestion,
}

/// Accumulates findings in check order.
#[derive(Debug, Default)]
pub(crate) struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

impl Findings {
    pub(crate) fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub(crate) fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub(crate) fn suggest(&mut self, msg: impl Into<String>) {
        self.suggestions.push(msg.into());
    }

    pub(crate) fn finish(self) -> ValidationResult {
        ValidationResult {
            is_valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            suggestions: self.suggestions,
        }
    }
}

impl ValidationResult {
    /// Findings of one severity.
    pub fn findings(&self, severity: Severity) -> &[String] {
        match severity {
            Severity::Error => &self.errors,
            Severity::Warning => &self.warnings,
            Severity::Suggestion => &self.suggestions,
        }
    }

    pub fn total_findings(&self) -> usize {
        self.errors.len() + self.warnings.len() + self.suggestions.len()
    }
}

/// Stateless checker for component source text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentValidator;

impl ComponentValidator {
    pub fn new() -> Self {
        Self
    }

    /// Run every check group against `code`. With `strict`, three extra checks run
    /// last and report errors; nothing reported without `strict` is dropped with it.
    pub fn validate_component(&self, code: &str, strict: bool) -> ValidationResult {
        let mut findings = Findings::default();

        check_structure(code, &mut findings);
        check_typing(code, &mut findings);
        check_conventions(code, &mut findings);
        check_accessibility(code, &mut findings);
        check_performance(code, &mut findings);
        if strict {
            check_strict(code, &mut findings);
        }

        findings.finish()
    }

    /// Per-type checklist, see [`validate_shadcn_pattern`].
    pub fn validate_pattern(&self, code: &str, component_type: &str) -> ValidationResult {
        validate_shadcn_pattern(code, component_type)
    }
}

fn check_structure(code: &str, f: &mut Findings) {
    if !code.contains("import * as React from \"react\"") && !code.contains("import React from \"react\"") {
        f.error("Missing React import");
    }

    if !code.contains("React.forwardRef") {
        f.warn("Consider using React.forwardRef for better ref handling");
    }

    if !code.contains(".displayName =") {
        f.warn("Missing displayName property for better debugging");
    }

    if !code.contains("export") {
        f.error("Component must be exported");
    }

    if let Some(name) = FORWARD_REF_NAME.captures(code).and_then(|c| c.get(1)) {
        if !is_pascal_case(name.as_str()) {
            f.error(format!("Component name \"{}\" should be in PascalCase", name.as_str()));
        }
    }
}

fn check_typing(code: &str, f: &mut Findings) {
    if !code.contains("interface") && !code.contains("type ") {
        f.warn("Consider adding TypeScript interface for props");
    }

    if code.contains("any") && !code.contains("React.ComponentPropsWithoutRef") {
        f.warn("Avoid using \"any\" type, use specific types instead");
    }

    if code.contains("React.forwardRef") && !code.contains('<') {
        f.warn("Consider adding generic types to forwardRef for better type safety");
    }
}

fn has_tailwind_classes(code: &str) -> bool {
    TAILWIND_PATTERNS.iter().any(|re| re.is_match(code))
}

fn is_complex_component(code: &str) -> bool {
    COMPLEXITY_INDICATORS.iter().any(|i| code.contains(i))
}

fn check_conventions(code: &str, f: &mut Findings) {
    let has_class_name = code.contains("className");

    if has_class_name && !code.contains("import { cn } from \"@/lib/utils\"") {
        f.error("Missing cn utility import for className handling");
    }

    if has_class_name && !code.contains("cn(") {
        f.warn("Consider using cn() utility for className composition");
    }

    if code.contains("className=") && !has_tailwind_classes(code) {
        f.suggest("Consider using Tailwind CSS classes for styling");
    }

    if code.contains("variant") && !code.contains("cva") {
        f.suggest("Consider using class-variance-authority (cva) for variant handling");
    }

    if is_complex_component(code) && !code.contains("@radix-ui/") {
        f.suggest("Consider using Radix UI primitives for complex interactive components");
    }

    if !code.contains("...props") {
        f.warn("Consider spreading remaining props to the underlying element");
    }
}

fn check_accessibility(code: &str, f: &mut Findings) {
    if code.contains("button") && !code.contains("aria-") {
        f.suggest("Consider adding appropriate ARIA attributes for better accessibility");
    }

    if code.contains("div") && code.contains("onClick") {
        f.warn("Consider using semantic HTML elements (button, a) instead of div for interactive elements");
    }

    if code.contains("onClick") && !code.contains("onKeyDown") {
        f.suggest("Consider adding keyboard event handlers for better accessibility");
    }

    if code.contains("focus") && !code.contains("focus-visible:") {
        f.suggest("Consider adding focus-visible styles for keyboard navigation");
    }
}

fn check_performance(code: &str, f: &mut Findings) {
    if code.contains("useMemo") || code.contains("useCallback") {
        f.suggest("Ensure useMemo and useCallback are used appropriately to avoid unnecessary optimizations");
    }

    if INLINE_FUNCTION.find_iter(code).count() > MAX_INLINE_FUNCTIONS {
        f.warn("Consider extracting inline functions to avoid re-creation on each render");
    }

    if code.split('\n').count() > MAX_LINES {
        f.suggest("Consider breaking down large components into smaller, reusable components");
    }
}

fn check_strict(code: &str, f: &mut Findings) {
    if !code.contains("aria-label") && !code.contains("aria-labelledby") {
        f.error("Strict mode: Missing accessibility labels");
    }

    if !code.contains('<') && code.contains("React.forwardRef") {
        f.error("Strict mode: Missing TypeScript generics for forwardRef");
    }

    if !code.contains("/**") && !code.contains("//") {
        f.error("Strict mode: Missing documentation comments");
    }
}

/// Print a validation result to stdout, grouped by severity.
///
/// With `errors_only`, warnings and suggestions are counted but not listed.
pub fn print_validation_result(result: &ValidationResult, errors_only: bool) {
    if result.total_findings() == 0 {
        println!("✅ No issues found!");
        return;
    }

    println!("\n📋 Validation Results:");
    println!(
        "   {} error(s), {} warning(s), {} suggestion(s)\n",
        result.errors.len(),
        result.warnings.len(),
        result.suggestions.len()
    );

    let groups: [(&str, &[String]); 3] = [
        ("❌ Errors (must fix):", &result.errors),
        ("⚠️  Warnings (should fix):", &result.warnings),
        ("💡 Suggestions (best practices):", &result.suggestions),
    ];
    for (i, (heading, items)) in groups.iter().enumerate() {
        if items.is_empty() || (errors_only && i > 0) {
            continue;
        }
        println!("{heading}");
        for item in items.iter() {
            println!("   {item}");
        }
        println!();
    }
}

/// Returned by [`ensure_valid`] when a result carries errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed with {errors} error(s)")]
pub struct ValidationFailed {
    pub errors: usize,
}

/// Turn a result with errors into an `Err` so callers can fail through `?`.
pub fn ensure_valid(result: &ValidationResult) -> Result<(), ValidationFailed> {
    if result.is_valid {
        Ok(())
    } else {
        Err(ValidationFailed {
            errors: result.errors.len(),
        })
    }
}
