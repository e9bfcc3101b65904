//! Card container with an optional title.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(default = String::new())]
    pub title: String,
    /// Extra classes on the outer element
    #[props(default = String::new())]
    pub class: String,
    /// Inline style, used for tone backgrounds
    #[props(default = String::new())]
    pub style: String,
    pub children: Element,
}

/// Bordered card. The header is only rendered when a title is given.
#[component]
pub fn Card(props: CardProps) -> Element {
    rsx! {
        div {
            class: "adm-card {props.class}",
            style: "{props.style}",
            if !props.title.is_empty() {
                div {
                    class: "adm-card-header",
                    h3 { class: "adm-card-title", "{props.title}" }
                }
            }
            {props.children}
        }
    }
}
