//! Search Input
//!
//! The header's search box. The input is uncontrolled: the browser owns its
//! value and the component keeps no state.

use dioxus::prelude::*;

use crate::tokens;

/// Properties for the SearchInput component
#[derive(Clone, PartialEq, Props)]
pub struct SearchInputProps {
    /// Placeholder text
    #[props(default = tokens::SEARCH_PLACEHOLDER.to_string())]
    pub placeholder: String,
    /// Called with the committed value on `change` (Enter or blur).
    /// Unset means searching is not wired.
    #[props(default)]
    pub onsearch: Option<EventHandler<String>>,
}

/// Uncontrolled search field named `search`
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    rsx! {
        input {
            class: tokens::SEARCH_INPUT,
            r#type: "search",
            name: "search",
            placeholder: "{props.placeholder}",
            onchange: move |e| {
                if let Some(handler) = &props.onsearch {
                    handler.call(e.value());
                }
            },
        }
    }
}
