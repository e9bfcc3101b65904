//! Traffic & Sales card: headline stats, daily activity, demographics and
//! traffic sources.

use adm_data::sales::{Trend, DAILY_ACTIVITY, DEMOGRAPHICS, MAIN_STATS, TRAFFIC_SOURCES};
use dioxus::prelude::*;

use crate::components::{Card, Icon, ProgressBar};
use crate::theme::tone_background;

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "adm-trend up",
        Trend::Down => "adm-trend down",
        Trend::Neutral => "adm-trend",
    }
}

#[component]
pub fn TrafficSalesDetails() -> Element {
    rsx! {
        Card {
            title: "Traffic & Sales".to_string(),
            div {
                class: "adm-card-body adm-sales",
                div {
                    class: "adm-main-stats",
                    for stat in MAIN_STATS.iter() {
                        div {
                            key: "{stat.label}",
                            div { class: "label", "{stat.label}" }
                            div { class: "value", "{stat.value}" }
                            hr { style: format!("background: {};", tone_background(stat.tone)) }
                        }
                    }
                }
                div {
                    class: "adm-two-col",
                    div {
                        class: "adm-bars",
                        for item in DAILY_ACTIVITY.iter() {
                            div {
                                key: "{item.id}",
                                div {
                                    class: "row",
                                    span { "{item.label}" }
                                    strong { "{item.value}%" }
                                }
                                ProgressBar { value: f64::from(item.value), tone: item.tone, thick: true }
                            }
                        }
                    }
                    div {
                        class: "adm-bars",
                        for item in DEMOGRAPHICS.iter() {
                            div {
                                key: "{item.id}",
                                div {
                                    class: "row",
                                    span {
                                        style: "display: inline-flex; align-items: center; gap: 6px;",
                                        Icon { kind: item.icon, class: "sm".to_string() }
                                        "{item.label}"
                                    }
                                    strong { "{item.percentage}%" }
                                }
                                ProgressBar { value: f64::from(item.percentage), tone: item.tone, thick: true }
                            }
                        }
                        div {
                            div { class: "adm-sources-title", "Traffic Sources" }
                            for source in TRAFFIC_SOURCES.iter() {
                                div {
                                    key: "{source.id}",
                                    class: "adm-source",
                                    div {
                                        class: "left",
                                        Icon { kind: source.icon, class: "sm".to_string() }
                                        span { "{source.label}" }
                                    }
                                    div {
                                        class: "right",
                                        strong { "{source.value}" }
                                        if let Some((icon, value)) = source.trend_badge() {
                                            span {
                                                class: trend_class(source.trend),
                                                Icon { kind: icon, class: "xs".to_string() }
                                                "{value}"
                                            }
                                        }
                                    }
                                }
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
    fn test_trend_class() {
        assert_eq!(trend_class(Trend::Up), "adm-trend up");
        assert_eq!(trend_class(Trend::Down), "adm-trend down");
        assert_eq!(trend_class(Trend::Neutral), "adm-trend");
    }

    #[test]
    fn test_renders_all_sections() {
        let mut dom = VirtualDom::new(TrafficSalesDetails);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        for stat in MAIN_STATS {
            assert!(html.contains(stat.label));
        }
        let bars = DAILY_ACTIVITY.len() + DEMOGRAPHICS.len();
        assert_eq!(html.matches("adm-progress thick").count(), bars);
        assert_eq!(html.matches(r#"class="adm-source""#).count(), TRAFFIC_SOURCES.len());
    }

    #[test]
    fn test_neutral_source_has_no_badge() {
        let mut dom = VirtualDom::new(TrafficSalesDetails);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches(r#"class="adm-trend up""#).count(), 1);
        assert_eq!(html.matches(r#"class="adm-trend down""#).count(), 1);
        assert!(!html.contains(r#"class="adm-trend""#));
    }
}
