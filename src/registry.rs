//! Static table of the component templates shipped with the crate.
//!
//! Lookups are case-insensitive; iteration order is the table order, which is also
//! the order reported by [`all_template_types`].

use once_cell::sync::Lazy;
use serde::Serialize;

/// Metadata for one registered template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    /// Display name (`"RadioGroup"` for the `radio` key)
    pub name: &'static str,
    #[serde(rename = "type")]
    pub component_type: &'static str,
    /// Template identifier, resolved by the generator's template source
    pub template: &'static str,
    pub variants: &'static [&'static str],
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

const DEFAULT_ONLY: &[&str] = &["default"];

static TEMPLATES: Lazy<Vec<TemplateEntry>> = Lazy::new(|| {
    vec![
        TemplateEntry {
            name: "Button",
            component_type: "button",
            template: "button.tsx.jinja",
            variants: &["default", "destructive", "outline", "secondary", "ghost", "link"],
            description: "Interactive button component with multiple variants and sizes",
            examples: &[
                "<Button>Click me</Button>",
                "<Button variant=\"outline\" size=\"lg\">Large Outline</Button>",
                "<Button variant=\"destructive\">Delete</Button>",
            ],
        },
        TemplateEntry {
            name: "Input",
            component_type: "input",
            template: "input.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Form input component with proper styling and accessibility",
            examples: &[
                "<Input type=\"text\" placeholder=\"Enter text...\" />",
                "<Input type=\"email\" placeholder=\"Email\" />",
                "<Input type=\"password\" placeholder=\"Password\" />",
            ],
        },
        TemplateEntry {
            name: "Card",
            component_type: "card",
            template: "card.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Flexible card component with header, content, and footer sections",
            examples: &[
                "<Card><CardContent>Simple card</CardContent></Card>",
                "<Card><CardHeader><CardTitle>Title</CardTitle></CardHeader><CardContent>Content here</CardContent></Card>",
            ],
        },
        TemplateEntry {
            name: "Modal",
            component_type: "modal",
            template: "modal.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Modal dialog component built with Radix UI primitives",
            examples: &[
                "<Modal><ModalTrigger>Open</ModalTrigger><ModalContent>Content</ModalContent></Modal>",
            ],
        },
        TemplateEntry {
            name: "Select",
            component_type: "select",
            template: "select.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Select dropdown component with searchable options",
            examples: &[
                "<Select><SelectTrigger><SelectValue /></SelectTrigger><SelectContent><SelectItem value=\"option1\">Option 1</SelectItem></SelectContent></Select>",
            ],
        },
        TemplateEntry {
            name: "Checkbox",
            component_type: "checkbox",
            template: "checkbox.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Checkbox input component with proper accessibility",
            examples: &["<Checkbox id=\"terms\" />", "<Checkbox checked disabled />"],
        },
        TemplateEntry {
            name: "RadioGroup",
            component_type: "radio",
            template: "radio.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Radio button group component for single selection",
            examples: &[
                "<RadioGroup><RadioGroupItem value=\"option1\" /><RadioGroupItem value=\"option2\" /></RadioGroup>",
            ],
        },
        TemplateEntry {
            name: "Textarea",
            component_type: "textarea",
            template: "textarea.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Multi-line text input component",
            examples: &[
                "<Textarea placeholder=\"Enter your message...\" />",
                "<Textarea rows={4} />",
            ],
        },
        TemplateEntry {
            name: "Switch",
            component_type: "switch",
            template: "switch.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Toggle switch component for boolean values",
            examples: &["<Switch />", "<Switch checked />", "<Switch disabled />"],
        },
        TemplateEntry {
            name: "Tabs",
            component_type: "tabs",
            template: "tabs.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Tabs component for organizing content in panels",
            examples: &[
                "<Tabs><TabsList><TabsTrigger value=\"tab1\">Tab 1</TabsTrigger></TabsList><TabsContent value=\"tab1\">Content</TabsContent></Tabs>",
            ],
        },
        TemplateEntry {
            name: "Badge",
            component_type: "badge",
            template: "badge.tsx.jinja",
            variants: &["default", "secondary", "destructive", "outline"],
            description: "Badge component for displaying status or labels",
            examples: &[
                "<Badge>New</Badge>",
                "<Badge variant=\"secondary\">Beta</Badge>",
                "<Badge variant=\"destructive\">Error</Badge>",
            ],
        },
        TemplateEntry {
            name: "Avatar",
            component_type: "avatar",
            template: "avatar.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Avatar component for displaying user profile images",
            examples: &[
                "<Avatar><AvatarImage src=\"/avatar.jpg\" /><AvatarFallback>CN</AvatarFallback></Avatar>",
            ],
        },
        TemplateEntry {
            name: "Alert",
            component_type: "alert",
            template: "alert.tsx.jinja",
            variants: &["default", "destructive"],
            description: "Alert component for displaying important messages",
            examples: &[
                "<Alert><AlertDescription>This is an alert message.</AlertDescription></Alert>",
                "<Alert variant=\"destructive\"><AlertDescription>Error occurred!</AlertDescription></Alert>",
            ],
        },
        TemplateEntry {
            name: "Progress",
            component_type: "progress",
            template: "progress.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Progress bar component for showing completion status",
            examples: &["<Progress value={50} />", "<Progress value={75} max={100} />"],
        },
        TemplateEntry {
            name: "Skeleton",
            component_type: "skeleton",
            template: "skeleton.tsx.jinja",
            variants: DEFAULT_ONLY,
            description: "Skeleton loading component for placeholder content",
            examples: &[
                "<Skeleton className=\"w-[100px] h-[20px] rounded-full\" />",
                "<Skeleton className=\"h-4 w-[250px]\" />",
            ],
        },
    ]
});

/// Look up a template by component type, ignoring case.
pub fn get_template(component_type: &str) -> Option<&'static TemplateEntry> {
    let key = component_type.to_lowercase();
    TEMPLATES.iter().find(|t| t.component_type == key)
}

/// Registered component type keys in table order.
pub fn all_template_types() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.component_type).collect()
}

/// All registered entries in table order.
pub fn templates() -> impl Iterator<Item = &'static TemplateEntry> {
    TEMPLATES.iter()
}
