//! Button Components
//!
//! Outline buttons in two sizes:
//! - Icon: square, holds a single icon
//! - Wide: stretches to fill the row, icon plus label

use dioxus::prelude::*;

use crate::tokens;

/// Button size variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Square icon-only button
    #[default]
    Icon,
    /// Full-width button with icon and text
    Wide,
}

impl ButtonVariant {
    /// Returns the size/layout classes for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Icon => tokens::BUTTON_ICON,
            ButtonVariant::Wide => tokens::BUTTON_WIDE,
        }
    }

    /// Full class string: shared outline styling plus the variant classes
    pub fn full_class(&self) -> String {
        format!("{} {}", tokens::BUTTON_BASE, self.class())
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Size variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (icons, text)
    pub children: Element,
    /// Click handler. Unset means the button does nothing.
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Accessible label, required for icon-only buttons
    #[props(default)]
    pub aria_label: Option<String>,
    /// Toggle state, rendered as `aria-pressed` when set
    #[props(default)]
    pub pressed: Option<bool>,
}

/// Outline button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Icon,
///         aria_label: "Favorite".to_string(),
///         onclick: move |_| toggle(),
///         Icon { kind: IconKind::Heart }
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = props.variant.full_class();
    let pressed = props.pressed.map(|p| p.to_string());

    rsx! {
        button {
            "data-slot": "button",
            class: "{class}",
            r#type: "button",
            "aria-label": props.aria_label.clone(),
            "aria-pressed": pressed,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
