//! Per-type shadcn checklists.

use super::{Findings, ValidationResult};

/// Check `code` against the conventions of one component type (case-insensitive).
///
/// Unknown types yield a single warning and no errors.
pub fn validate_shadcn_pattern(code: &str, component_type: &str) -> ValidationResult {
    let mut f = Findings::default();

    match component_type.to_lowercase().as_str() {
        "button" => button(code, &mut f),
        "input" => input(code, &mut f),
        "card" => card(code, &mut f),
        "modal" | "dialog" => modal(code, &mut f),
        "select" => select(code, &mut f),
        "checkbox" => checkbox(code, &mut f),
        "radio" => radio(code, &mut f),
        "textarea" => textarea(code, &mut f),
        "switch" => switch(code, &mut f),
        "tabs" => tabs(code, &mut f),
        "badge" => badge(code, &mut f),
        "avatar" => avatar(code, &mut f),
        "alert" => alert(code, &mut f),
        "progress" => progress(code, &mut f),
        "skeleton" => skeleton(code, &mut f),
        _ => f.warn(format!("Unknown component type: {component_type}")),
    }

    f.finish()
}

fn missing<'a>(code: &str, parts: &[&'a str]) -> Vec<&'a str> {
    parts.iter().copied().filter(|p| !code.contains(p)).collect()
}

fn button(code: &str, f: &mut Findings) {
    if !code.contains("buttonVariants") && !code.contains("cva") {
        f.error("Button should use class-variance-authority for variant handling");
    }
    if !code.contains("Slot") {
        f.warn("Button should support asChild prop with Slot component");
    }
    if !code.contains("disabled:") {
        f.warn("Button should include disabled state styles");
    }
}

fn input(code: &str, f: &mut Findings) {
    if !code.contains("HTMLInputElement") {
        f.error("Input should properly type the ref as HTMLInputElement");
    }
    if !code.contains("placeholder:") {
        f.suggest("Consider adding placeholder styles");
    }
    if !code.contains("disabled:") {
        f.warn("Input should include disabled state styles");
    }
}

fn card(code: &str, f: &mut Findings) {
    let absent = missing(code, &["CardHeader", "CardContent", "CardFooter"]);
    if !absent.is_empty() {
        f.suggest(format!("Consider adding missing card components: {}", absent.join(", ")));
    }
    if !code.contains("bg-card") {
        f.warn("Card should use semantic color tokens (bg-card, text-card-foreground)");
    }
}

fn modal(code: &str, f: &mut Findings) {
    if !code.contains("@radix-ui/react-dialog") {
        f.error("Modal should use Radix UI Dialog primitive");
    }
    if !code.contains("Portal") {
        f.error("Modal should use Portal for proper rendering");
    }
    if !code.contains("Overlay") {
        f.warn("Modal should include overlay component");
    }
    if !code.contains("Close") {
        f.warn("Modal should include close button");
    }
    if !code.contains("aria-") {
        f.warn("Modal should include proper ARIA attributes");
    }
}

fn select(code: &str, f: &mut Findings) {
    if !code.contains("@radix-ui/react-select") {
        f.error("Select should use Radix UI Select primitive");
    }
    for part in missing(code, &["SelectTrigger", "SelectContent", "SelectItem"]) {
        f.warn(format!("Select should include {part} component"));
    }
}

fn checkbox(code: &str, f: &mut Findings) {
    if !code.contains("@radix-ui/react-checkbox") {
        f.error("Checkbox should use Radix UI Checkbox primitive");
    }
    if !code.contains("CheckboxPrimitive.Indicator") {
        f.warn("Checkbox should include proper indicator");
    }
    if !code.contains("Check") {
        f.suggest("Consider using Check icon from lucide-react");
    }
}

fn radio(code: &str, f: &mut Findings) {
    if !code.contains("@radix-ui/react-radio-group") {
        f.error("Radio should use Radix UI RadioGroup primitive");
    }
    if !code.contains("RadioGroupPrimitive.Item") {
        f.warn("Radio should include RadioGroupItem components");
    }
    if !code.contains("RadioGroupPrimitive.Indicator") {
        f.warn("Radio should include proper indicator");
    }
}

fn textarea(code: &str, f: &mut Findings) {
    if !code.contains("HTMLTextAreaElement") {
        f.error("Textarea should properly type the ref as HTMLTextAreaElement");
    }
    if !code.contains("min-h-") {
        f.suggest("Consider adding minimum height for textarea");
    }
    if !code.contains("resize") {
        f.suggest("Consider controlling textarea resize behavior");
    }
}

fn switch(code: &str, f: &mut Findings) {
    if !code.contains("@radix-ui/react-switch") {
        f.error("Switch should use Radix UI Switch primitive");
    }
    if !code.contains("SwitchPrimitives.Thumb") {
        f.warn("Switch should include thumb component");
    }
    if !code.contains("data-[state=checked]") {
        f.suggest("Consider adding state-based styling");
    }
}

fn tabs(code: &str, f: &mut Findings) {
    if !code.contains("@radix-ui/react-tabs") {
        f.error("Tabs should use Radix UI Tabs primitive");
    }
    let absent = missing(code, &["TabsList", "TabsTrigger", "TabsContent"]);
    if !absent.is_empty() {
        f.warn(format!("Tabs should include: {}", absent.join(", ")));
    }
}

fn badge(code: &str, f: &mut Findings) {
    if !code.contains("cva") {
        f.suggest("Consider using class-variance-authority for badge variants");
    }
    if !code.contains("variant") {
        f.suggest("Consider adding variant support for different badge types");
    }
    if !code.contains("rounded-full") {
        f.suggest("Consider using rounded-full for badge styling");
    }
}

fn avatar(code: &str, f: &mut Findings) {
    if !code.contains("@radix-ui/react-avatar") {
        f.error("Avatar should use Radix UI Avatar primitive");
    }
    if !code.contains("AvatarImage") {
        f.warn("Avatar should include AvatarImage component");
    }
    if !code.contains("AvatarFallback") {
        f.warn("Avatar should include AvatarFallback component");
    }
    if !code.contains("rounded-full") {
        f.suggest("Avatar should be circular with rounded-full");
    }
}

fn alert(code: &str, f: &mut Findings) {
    if !code.contains("role=\"alert\"") {
        f.error("Alert should include role=\"alert\" for accessibility");
    }
    if !code.contains("variant") {
        f.suggest("Consider adding variant support for different alert types");
    }
    if !code.contains("destructive") {
        f.suggest("Consider adding destructive variant for error alerts");
    }
}

fn progress(code: &str, f: &mut Findings) {
    if !code.contains("value") {
        f.warn("Progress should accept value prop");
    }
    if !code.contains("max") {
        f.suggest("Consider adding max prop for progress range");
    }
    if !code.contains("translateX") {
        f.suggest("Consider using transform for smooth progress animation");
    }
}

fn skeleton(code: &str, f: &mut Findings) {
    if !code.contains("animate-pulse") {
        f.error("Skeleton should include animate-pulse for loading animation");
    }
    if !code.contains("bg-muted") {
        f.suggest("Consider using bg-muted for skeleton background");
    }
    if !code.contains("rounded") {
        f.suggest("Consider adding rounded corners to skeleton");
    }
}
