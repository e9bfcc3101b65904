//! Social-media tiles with a decorative sparkline behind the platform logo.

use adm_data::social::{SocialPlatformStat, SOCIAL_STATS};
use dioxus::prelude::*;

use crate::components::{Card, EmptyState, Icon, Sparkline};
use crate::theme::tone_background;

#[component]
pub fn SocialStatsGrid() -> Element {
    rsx! {
        div {
            class: "adm-grid",
            for stat in SOCIAL_STATS.iter() {
                SocialTile { key: "{stat.id}", stat }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct SocialTileProps {
    stat: &'static SocialPlatformStat,
}

#[component]
fn SocialTile(props: SocialTileProps) -> Element {
    let stat = props.stat;
    let style = format!("background: {};", tone_background(stat.tone));
    let sparkline = stat.sparkline.map(<[f64]>::to_vec).unwrap_or_default();

    rsx! {
        Card {
            class: "adm-social".to_string(),
            style,
            Sparkline { values: sparkline }
            div {
                class: "inner",
                div {
                    class: "logo",
                    title: "{stat.platform}",
                    Icon { kind: stat.icon, class: "lg".to_string() }
                }
                if stat.metrics.is_empty() {
                    EmptyState { message: "No metrics".to_string() }
                } else {
                    div {
                        class: "metrics",
                        for metric in stat.metrics.iter() {
                            div {
                                key: "{metric.label}",
                                div { class: "metric-value", "{metric.value}" }
                                div { class: "metric-label", "{metric.label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_every_platform() {
        let mut dom = VirtualDom::new(SocialStatsGrid);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        let with_sparkline = SOCIAL_STATS.iter().filter(|s| s.sparkline.is_some()).count();
        assert_eq!(html.matches(r#"class="spark""#).count(), with_sparkline);
        for stat in SOCIAL_STATS {
            assert!(html.contains(stat.platform));
            for metric in stat.metrics {
                assert!(html.contains(metric.label));
                assert!(html.contains(metric.value));
            }
        }
        assert!(!html.contains("adm-empty"));
    }
}
