//! Fixed top bar: mobile menu button, breadcrumbs, search, notifications and
//! the user menu.

use adm_data::config::UserProfile;
use adm_data::shell::{UserAction, UserMenuState};
use adm_data::IconKind;
use dioxus::prelude::*;

use crate::components::Icon;

#[derive(Props, Clone, PartialEq)]
pub struct TopBarProps {
    /// Invoked by the mobile-only menu button
    pub on_toggle_sidebar: EventHandler<()>,
    pub user: UserProfile,
    pub breadcrumbs: Vec<String>,
}

#[component]
pub fn TopBar(props: TopBarProps) -> Element {
    let mut menu = use_signal(UserMenuState::default);
    let menu_open = menu.read().is_open();
    let last = props.breadcrumbs.len().saturating_sub(1);
    let initial = props.user.initial();
    let on_toggle = props.on_toggle_sidebar;

    rsx! {
        header {
            class: "adm-topbar",
            div {
                class: "group",
                button {
                    class: "adm-icon-button adm-menu-toggle",
                    "aria-label": "Toggle navigation",
                    onclick: move |_| on_toggle.call(()),
                    Icon { kind: IconKind::Menu }
                }
                ol {
                    class: "adm-breadcrumbs",
                    for (i, crumb) in props.breadcrumbs.iter().enumerate() {
                        if i > 0 {
                            li { "aria-hidden": "true", "/" }
                        }
                        if i == last {
                            li { class: "current", "{crumb}" }
                        } else {
                            li { a { href: "#", "{crumb}" } }
                        }
                    }
                }
            }
            div {
                class: "group",
                div {
                    class: "adm-search",
                    Icon { kind: IconKind::Search, class: "sm".to_string() }
                    input { r#type: "search", placeholder: "Search..." }
                }
                button {
                    class: "adm-icon-button",
                    "aria-label": "Notifications",
                    Icon { kind: IconKind::Bell }
                    span { class: "adm-ping" }
                }
                button {
                    class: "adm-icon-button",
                    "aria-label": "Tasks",
                    Icon { kind: IconKind::ListChecks }
                }
                div {
                    style: "position: relative;",
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Escape && menu.write().close() {
                            log::debug!("user menu dismissed with Escape");
                        }
                    },
                    button {
                        class: "adm-avatar",
                        "aria-haspopup": "menu",
                        "aria-expanded": "{menu_open}",
                        onclick: move |_| menu.write().toggle(),
                        if let Some(url) = props.user.avatar_url.as_ref() {
                            img { src: "{url}", alt: "{props.user.name}" }
                        } else {
                            "{initial}"
                        }
                    }
                    if menu_open {
                        div {
                            class: "adm-menu-backdrop",
                            onclick: move |_| {
                                menu.write().close();
                            },
                        }
                        div {
                            class: "adm-menu",
                            role: "menu",
                            div {
                                class: "label",
                                p { class: "name", "{props.user.name}" }
                                p { class: "email", "{props.user.email}" }
                            }
                            hr {}
                            for action in UserAction::ALL {
                                if action.is_destructive() {
                                    hr {}
                                }
                                button {
                                    class: if action.is_destructive() { "destructive" } else { "" },
                                    role: "menuitem",
                                    onclick: move |_| {
                                        menu.write().choose(action);
                                    },
                                    Icon { kind: action.icon(), class: "sm".to_string() }
                                    span { {action.label()} }
                                }
                            }
                        }
                    }
                }
                button {
                    class: "adm-icon-button",
                    "aria-label": "Settings",
                    Icon { kind: IconKind::Settings }
                }
            }
        }
    }
}
