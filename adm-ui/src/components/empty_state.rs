//! Placeholder shown where a chart has no data.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    #[props(default = "No data".to_string())]
    pub message: String,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div { class: "adm-empty", "{props.message}" }
    }
}
