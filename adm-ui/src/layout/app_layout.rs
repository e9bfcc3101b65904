//! Root layout component. Owns the mobile sidebar flag and hands it down as
//! a value to the sidebar and as a callback to the top bar.

use adm_data::shell::ShellState;
use adm_data::DashboardConfig;
use dioxus::prelude::*;

use super::{Sidebar, TopBar};

#[derive(Props, Clone, PartialEq)]
pub struct AppLayoutProps {
    pub config: DashboardConfig,
    pub children: Element,
}

#[component]
pub fn AppLayout(props: AppLayoutProps) -> Element {
    let mut shell = use_signal(ShellState::default);
    let open = shell.read().is_sidebar_open();

    rsx! {
        div {
            class: "adm-shell",
            Sidebar { open, brand: props.config.brand.clone() }
            if open {
                div {
                    class: "adm-overlay",
                    onclick: move |_| {
                        if shell.write().close_sidebar() {
                            log::debug!("mobile sidebar closed from overlay");
                        }
                    },
                }
            }
            TopBar {
                on_toggle_sidebar: move |_| shell.write().toggle_sidebar(),
                user: props.config.user.clone(),
                breadcrumbs: props.config.breadcrumbs.clone(),
            }
            main { class: "adm-content", {props.children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness() -> Element {
        rsx! {
            AppLayout {
                config: DashboardConfig::default(),
                p { "page body" }
            }
        }
    }

    #[test]
    fn test_shell_starts_with_sidebar_closed() {
        let mut dom = VirtualDom::new(Harness);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(r#"class="adm-sidebar""#));
        assert!(!html.contains(r#"class="adm-overlay""#));
        assert!(html.contains(r#"aria-label="Toggle navigation""#));
        assert!(html.contains("page body"));
    }
}
