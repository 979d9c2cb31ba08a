//! Design-system button face.
//!
//! Renders the visual body of a control (size, variant, leading icon).
//! Navigation is left to the wrapping link, see [`super::ActionLink`].

use leptos::*;

use super::icons::{Icon, IconSvg};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Md => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

impl ButtonVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

/// Full class list for a button face; `extra` overrides come last.
pub fn button_classes(size: ButtonSize, variant: ButtonVariant, extra: &str) -> String {
    let mut classes = format!("btn {} {}", size.css_class(), variant.css_class());
    if !extra.trim().is_empty() {
        classes.push(' ');
        classes.push_str(extra.trim());
    }
    classes
}

#[component]
pub fn Button(
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] variant: ButtonVariant,
    /// Icon drawn before the label
    #[prop(optional)]
    icon: Option<Icon>,
    /// Style overrides appended to the variant classes
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=button_classes(size, variant, &class)>
            {icon.map(|icon| view! { <IconSvg icon=icon class="btn-icon"/> })}
            <span class="btn-label">{children()}</span>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(
            button_classes(ButtonSize::Lg, ButtonVariant::Outline, ""),
            "btn btn-lg btn-outline"
        );
        assert_eq!(
            button_classes(ButtonSize::default(), ButtonVariant::default(), "  cta-glow "),
            "btn btn-md btn-primary cta-glow"
        );
    }
}
