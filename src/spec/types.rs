use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

macro_rules! component_types {
    ($($variant:ident => $key:literal),+ $(,)?) => {
        /// Closed set of component kinds a [`ComponentSpec`] may request.
        ///
        /// The set is wider than the template registry: a type listed here passes
        /// request validation but generation still fails when no template is
        /// registered for it.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum ComponentType {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl ComponentType {
            /// Every component type, in declaration order.
            pub const ALL: &'static [ComponentType] = &[$(ComponentType::$variant),+];

            /// The wire key (`"data-display"`, `"toggle-group"`, ...)
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(ComponentType::$variant => $key,)+
                }
            }
        }

        impl FromStr for ComponentType {
            type Err = UnknownComponentKey;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(ComponentType::$variant),)+
                    other => Err(UnknownComponentKey(other.to_string())),
                }
            }
        }
    };
}

component_types! {
    Button => "button",
    Input => "input",
    Card => "card",
    Modal => "modal",
    Dropdown => "dropdown",
    Form => "form",
    Navigation => "navigation",
    Layout => "layout",
    DataDisplay => "data-display",
    Feedback => "feedback",
    Custom => "custom",
    Select => "select",
    Checkbox => "checkbox",
    Radio => "radio",
    Textarea => "textarea",
    Switch => "switch",
    Slider => "slider",
    Tabs => "tabs",
    Accordion => "accordion",
    Alert => "alert",
    Badge => "badge",
    Avatar => "avatar",
    Breadcrumb => "breadcrumb",
    Pagination => "pagination",
    Progress => "progress",
    Skeleton => "skeleton",
    Spinner => "spinner",
    Tooltip => "tooltip",
    Popover => "popover",
    Dialog => "dialog",
    Sheet => "sheet",
    Toast => "toast",
    Table => "table",
    Calendar => "calendar",
    DatePicker => "date-picker",
    Command => "command",
    ContextMenu => "context-menu",
    HoverCard => "hover-card",
    Menubar => "menubar",
    NavigationMenu => "navigation-menu",
    ScrollArea => "scroll-area",
    Separator => "separator",
    Toggle => "toggle",
    ToggleGroup => "toggle-group",
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the [`ComponentType`] keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownComponentKey(pub String);

impl fmt::Display for UnknownComponentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown component type key '{}'", self.0)
    }
}

impl std::error::Error for UnknownComponentKey {}

/// Size token passed through to templates and size examples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Default,
    Primary,
    Secondary,
    Destructive,
    Outline,
    Ghost,
}

/// One entry of [`ComponentSpec::props`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub prop_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Any JSON value; rendered with JavaScript display/truthiness rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
}

impl PropSpec {
    pub fn new(name: impl Into<String>, prop_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prop_type: prop_type.into(),
            required: false,
            description: None,
            default_value: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Styling {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default)]
    pub color_scheme: ColorScheme,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessibility {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<f64>,
}

/// Declarative description of the component to generate.
///
/// `component_type` is kept as the raw requested key. Request validation restricts
/// it to [`ComponentType`]; the generator resolves it against the template
/// registry and reports unregistered keys itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default)]
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub props: Vec<PropSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styling: Option<Styling>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Accessibility>,
    #[serde(default)]
    pub children: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_content: Option<String>,
}

impl ComponentSpec {
    /// Spec with only the two required fields set; everything else defaulted.
    pub fn new(name: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            component_type: component_type.into(),
            variant: None,
            size: Size::default(),
            description: None,
            props: Vec::new(),
            styling: None,
            accessibility: None,
            children: false,
            custom_content: None,
        }
    }
}

/// Output of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedComponent {
    pub name: String,
    pub code: String,
    pub imports: Vec<String>,
    pub dependencies: Vec<String>,
    pub documentation: String,
    pub examples: Vec<String>,
}

/// Findings of one validation pass, bucketed by severity in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Request body for the validation operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub component_code: String,
    #[serde(default)]
    pub strict: bool,
}

/// Request body for the per-type pattern check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRequest {
    pub component_code: String,
    pub component_type: String,
}

/// Request body for template lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRequest {
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Arguments of the usage-examples operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamplesRequest {
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(default)]
    pub include_advanced: bool,
}
