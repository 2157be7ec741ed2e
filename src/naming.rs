//! Casing helpers and component-name validation.
//!
//! Two PascalCase conversions live here on purpose-built paths:
//! [`capitalize_first`] (used by the generator, touches only the first character)
//! and [`to_pascal_case`] (delimiter-aware, used by [`validate_component_name`]).
//! They disagree on inputs such as `"my-button"`.

use once_cell::sync::Lazy;
use regex::Regex;

static DELIMITED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_\s]+(.)?").expect("delimiter regex should be valid"));
static DELIMITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_\s]").expect("delimiter class regex should be valid"));
static LOWER_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("case boundary regex should be valid"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex should be valid"));
static ALNUM_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("name regex should be valid"));
static PASCAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("pascal regex should be valid"));
static PROPS_INTERFACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"interface\s+\w+Props[^{]*\{([^}]+)\}").expect("props interface regex should be valid")
});
static PROP_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)(\?)?:\s*([^;,]+)").expect("prop line regex should be valid"));

const MAX_NAME_LEN: usize = 50;

const RESERVED_WORDS: &[&str] = &[
    "React", "Component", "Element", "Fragment", "useState", "useEffect", "div", "span", "button",
    "input", "form", "table", "body", "head", "html",
];

const KNOWN_TS_TYPES: &[&str] = &[
    "string",
    "number",
    "boolean",
    "object",
    "array",
    "function",
    "React.ReactNode",
    "React.CSSProperties",
    "React.MouseEvent",
    "React.KeyboardEvent",
    "React.ChangeEvent",
    "React.FormEvent",
];

fn map_first(s: &str, f: impl Fn(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => f(first) + chars.as_str(),
        None => String::new(),
    }
}

/// Uppercase the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    map_first(s, |c| c.to_uppercase().collect())
}

/// Lowercase the first character, leave the rest untouched.
pub fn lowercase_first(s: &str) -> String {
    map_first(s, |c| c.to_lowercase().collect())
}

/// `"MyButton Group"` -> `"my-button-group"`
pub fn to_kebab_case(s: &str) -> String {
    let split = LOWER_UPPER.replace_all(s, "$1-$2").to_lowercase();
    WHITESPACE_RUN.replace_all(&split, "-").into_owned()
}

/// Delimiter-aware PascalCase: `"my-button"` -> `"MyButton"`.
pub fn to_pascal_case(s: &str) -> String {
    let joined = to_camel_case_delimited(s);
    match joined.chars().next() {
        Some(c) if c.is_ascii_lowercase() => capitalize_first(&joined),
        _ => joined,
    }
}

/// Drop `-`, `_` and whitespace runs, uppercasing the character after each:
/// `"my-button"` -> `"myButton"`. The first character is left as written.
pub fn to_camel_case_delimited(s: &str) -> String {
    DELIMITED
        .replace_all(s, |caps: &regex::Captures<'_>| {
            caps.get(1)
                .map(|m| m.as_str().to_uppercase())
                .unwrap_or_default()
        })
        .into_owned()
}

/// Outcome of [`validate_component_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCheck {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl NameCheck {
    fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn fail(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}

/// Check a user-supplied component name. The first failing rule wins.
pub fn validate_component_name(name: &str) -> NameCheck {
    if name.trim().is_empty() {
        return NameCheck::fail("Component name cannot be empty");
    }

    let stripped = DELIMITERS.replace_all(name, "");
    if !ALNUM_NAME.is_match(&stripped) {
        return NameCheck::fail("Component name must contain only letters and numbers");
    }

    if name.chars().count() > MAX_NAME_LEN {
        return NameCheck::fail("Component name is too long (max 50 characters)");
    }

    let formatted = to_pascal_case(name);
    if RESERVED_WORDS.contains(&formatted.as_str()) {
        return NameCheck::fail(format!("\"{formatted}\" is a reserved word"));
    }

    NameCheck::ok()
}

pub fn is_pascal_case(s: &str) -> bool {
    PASCAL.is_match(s)
}

/// A prop declared in a `...Props` interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedProp {
    pub name: String,
    pub prop_type: String,
    pub required: bool,
}

/// Read the members of the first `interface <X>Props { ... }` block in `code`.
///
/// Comment lines are skipped; a member is required unless declared with `?:`.
pub fn extract_props_from_code(code: &str) -> Vec<ExtractedProp> {
    let Some(body) = PROPS_INTERFACE.captures(code).and_then(|c| c.get(1)) else {
        return Vec::new();
    };

    body.as_str()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//") && !line.starts_with('*'))
        .filter_map(|line| PROP_LINE.captures(line))
        .filter_map(|caps| {
            Some(ExtractedProp {
                name: caps.get(1)?.as_str().to_string(),
                prop_type: caps.get(3)?.as_str().trim().to_string(),
                required: caps.get(2).is_none(),
            })
        })
        .collect()
}

/// Keep types that mention a known TypeScript/React type, otherwise fall back to `string`.
pub fn format_typescript_type(ts_type: &str) -> String {
    if KNOWN_TS_TYPES.iter().any(|known| ts_type.contains(known)) {
        ts_type.to_string()
    } else {
        "string".to_string()
    }
}
