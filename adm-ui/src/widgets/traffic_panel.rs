//! Traffic chart panel: period tabs, refresh, the area chart and the summary
//! bars underneath.

use adm_data::traffic::SUMMARY_STATS;
use adm_data::{IconKind, Period, TrafficPanelState};
use dioxus::prelude::*;

use crate::components::{AreaChart, Card, Icon, ProgressBar};

#[derive(Props, Clone, PartialEq)]
pub struct TrafficPanelProps {
    /// Shown under the title
    pub caption: String,
    #[props(default)]
    pub default_period: Period,
}

#[component]
pub fn TrafficPanel(props: TrafficPanelProps) -> Element {
    let default_period = props.default_period;
    let mut state = use_signal(move || TrafficPanelState::with_entropy(default_period));
    let selected = state.read().period();
    let series = state.read().series().to_vec();

    rsx! {
        Card {
            div {
                class: "adm-card-body",
                div {
                    class: "adm-traffic-head",
                    div {
                        h3 { class: "adm-card-title", "Traffic" }
                        p { class: "adm-card-description", "{props.caption}" }
                    }
                    div {
                        class: "group",
                        style: "display: flex; align-items: center; gap: 8px;",
                        div {
                            class: "adm-tabs",
                            role: "tablist",
                            for period in Period::ALL {
                                button {
                                    class: if period == selected { "selected" } else { "" },
                                    role: "tab",
                                    "aria-selected": period == selected,
                                    onclick: move |_| {
                                        state.write().select_period(period);
                                    },
                                    {period.label()}
                                }
                            }
                        }
                        button {
                            class: "adm-outline-button",
                            "aria-label": "Refresh",
                            onclick: move |_| state.write().refresh(),
                            Icon { kind: IconKind::Refresh, class: "sm".to_string() }
                        }
                    }
                }
                div {
                    style: "position: relative; margin-top: 16px;",
                    AreaChart { series }
                }
                div {
                    class: "adm-summary",
                    for stat in SUMMARY_STATS.iter() {
                        div {
                            key: "{stat.label}",
                            div {
                                class: "row",
                                span { "{stat.label}" }
                                span { "{stat.value} ({stat.percentage}%)" }
                            }
                            ProgressBar { value: f64::from(stat.percentage), tone: stat.tone }
                        }
                    }
                }
            }
        }
    }
}
