//! The dashboard page: stylesheet, shell and the four widgets in order.

use adm_data::DashboardConfig;
use dioxus::prelude::*;

use crate::layout::AppLayout;
use crate::theme::{layout_css, GLOBAL_CSS};
use crate::widgets::{KpiCardGrid, SocialStatsGrid, TrafficPanel, TrafficSalesDetails};

#[derive(Props, Clone, PartialEq)]
pub struct DashboardPageProps {
    pub config: DashboardConfig,
}

#[component]
pub fn DashboardPage(props: DashboardPageProps) -> Element {
    let shell_css = layout_css(&props.config.layout);
    let caption = props.config.traffic_caption.clone();
    let default_period = props.config.default_period;

    rsx! {
        style { {GLOBAL_CSS} }
        style { {shell_css} }
        AppLayout {
            config: props.config,
            KpiCardGrid {}
            TrafficPanel { caption, default_period }
            SocialStatsGrid {}
            TrafficSalesDetails {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: DashboardConfig) -> String {
        let mut dom = VirtualDom::new_with_props(DashboardPage, DashboardPageProps { config });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_renders_with_default_config() {
        let html = render(DashboardConfig::default());
        assert!(html.contains("--sidebar-w: 256px"));
        assert!(html.contains(r#"class="adm-sidebar""#));
        assert!(!html.contains(r#"class="adm-overlay""#));
        assert!(html.contains(r#"class="adm-content""#));
        assert!(html.contains("COREUI"));
        assert!(html.contains("November 2017"));
        assert_eq!(html.matches(r#"class="adm-grid""#).count(), 2);
        assert!(html.contains(r#"class="adm-area-chart""#));
    }

    #[test]
    fn test_renders_with_overridden_config() {
        let raw = r#"{
            "brand": "ACME",
            "default_period": "day",
            "traffic_caption": "Last 24 hours",
            "layout": { "sidebar_width_px": 300 },
            "user": { "avatar_url": "/me.png" },
            "breadcrumbs": ["Dashboard"]
        }"#;
        let config = DashboardConfig::from_json(raw).unwrap();
        let html = render(config);
        assert!(html.contains("ACME"));
        assert!(!html.contains("COREUI"));
        assert!(html.contains("--sidebar-w: 300px"));
        assert!(html.contains("Last 24 hours"));
        assert!(html.contains(">0:00<"));
        assert!(html.contains(r#"src="/me.png""#));
        assert_eq!(html.matches(r#"class="current""#).count(), 1);
    }
}
