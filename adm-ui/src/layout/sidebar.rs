//! Navigation panel: brand, the collapsible link tree, label links and the
//! system utilization readout.

use adm_data::navigation::{NavItem, LABELS, NAVIGATION, SYSTEM_UTILIZATION};
use adm_data::shell::NavExpansion;
use adm_data::IconKind;
use dioxus::prelude::*;

use crate::components::{Icon, ProgressBar};
use crate::theme::tone_text;

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    /// Off-canvas visibility below the mobile breakpoint
    pub open: bool,
    pub brand: String,
}

#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let expansion = use_signal(NavExpansion::default);
    let class = if props.open { "adm-sidebar open" } else { "adm-sidebar" };

    rsx! {
        aside {
            class: "{class}",
            div {
                class: "adm-brand",
                Icon { kind: IconKind::Hexagon }
                span { "{props.brand}" }
            }
            nav {
                class: "adm-nav",
                for item in NAVIGATION.iter() {
                    NavEntry { key: "{item.id}", item, depth: 0, expansion }
                }
                div { class: "adm-nav-heading", "Labels" }
                for label in LABELS.iter() {
                    a {
                        key: "{label.label}",
                        class: "adm-nav-item",
                        href: "{label.href}",
                        span {
                            style: format!("color: {}; display: inline-flex;", tone_text(label.tone)),
                            Icon { kind: IconKind::Tag, class: "sm".to_string() }
                        }
                        span { "{label.label}" }
                    }
                }
            }
            div {
                class: "adm-utilization",
                div { class: "adm-nav-heading", style: "padding: 0;", "System Utilization" }
                for metric in SYSTEM_UTILIZATION.iter() {
                    div {
                        key: "{metric.id}",
                        div {
                            class: "row",
                            span {
                                style: "display: inline-flex; align-items: center; gap: 6px;",
                                Icon { kind: metric.icon, class: "xs".to_string() }
                                "{metric.label}"
                            }
                            span { "{metric.value}%" }
                        }
                        ProgressBar { value: f64::from(metric.value), tone: metric.tone }
                        div { class: "details", "{metric.details}" }
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavEntryProps {
    pub item: &'static NavItem,
    /// Nesting level; children of a group render at depth 1
    pub depth: usize,
    pub expansion: Signal<NavExpansion>,
}

/// One node of the navigation tree. Groups render their children
/// recursively when expanded.
#[component]
pub fn NavEntry(props: NavEntryProps) -> Element {
    let item = props.item;
    let mut expansion = props.expansion;
    let mut class = String::from("adm-nav-item");
    if item.is_active {
        class.push_str(" active");
    }
    if props.depth > 0 {
        class.push_str(" sub");
    }

    if !item.is_group() {
        let href = item.href().unwrap_or("#");
        return rsx! {
            a {
                class: "{class}",
                href: "{href}",
                Icon { kind: item.icon }
                span { "{item.label}" }
                if item.is_new {
                    span { class: "adm-badge", "NEW" }
                }
            }
        };
    }

    let expanded = expansion.read().is_open(item.id);
    if expanded {
        class.push_str(" expanded");
    }

    rsx! {
        div {
            button {
                class: "{class}",
                "aria-expanded": "{expanded}",
                onclick: move |_| {
                    expansion.write().toggle(item.id);
                },
                Icon { kind: item.icon }
                span { "{item.label}" }
                if item.is_new {
                    span { class: "adm-badge", "NEW" }
                }
                Icon { kind: IconKind::ChevronDown, class: "sm adm-chevron".to_string() }
            }
            if expanded {
                div {
                    class: "adm-nav-children",
                    for child in item.children().iter() {
                        NavEntry { key: "{child.id}", item: child, depth: props.depth + 1, expansion }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(open: bool) -> String {
        let mut dom = VirtualDom::new_with_props(
            Sidebar,
            SidebarProps {
                open,
                brand: "COREUI".to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_open_class_follows_prop() {
        let closed = render(false);
        assert!(closed.contains(r#"class="adm-sidebar""#));
        assert!(!closed.contains("adm-sidebar open"));

        assert!(render(true).contains(r#"class="adm-sidebar open""#));
    }

    #[test]
    fn test_groups_start_collapsed() {
        let html = render(false);
        assert!(html.contains("COREUI"));
        assert!(!html.contains("adm-nav-children"));
        assert!(!html.contains("Typography"));
        assert_eq!(html.matches(r#"aria-expanded="false""#).count(), 3);
    }

    #[test]
    fn test_badges_labels_and_utilization() {
        let html = render(false);
        let flagged = NAVIGATION.iter().filter(|i| i.is_new).count();
        assert_eq!(html.matches(r#"class="adm-badge""#).count(), flagged);
        for label in LABELS {
            assert!(html.contains(label.label));
        }
        for metric in SYSTEM_UTILIZATION {
            assert!(html.contains(metric.details));
        }
        assert_eq!(html.matches(r#"role="progressbar""#).count(), SYSTEM_UTILIZATION.len());
    }
}
