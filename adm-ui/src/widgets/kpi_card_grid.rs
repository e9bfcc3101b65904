//! Row of KPI cards, each with a headline value and a mini chart.

use adm_data::kpi::{KpiCard, KPI_CARDS};
use adm_data::IconKind;
use dioxus::prelude::*;

use crate::components::{Card, Icon, MiniChart};
use crate::theme::tone_background;

#[component]
pub fn KpiCardGrid() -> Element {
    rsx! {
        div {
            class: "adm-grid",
            for card in KPI_CARDS.iter() {
                KpiTile { key: "{card.id}", card }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct KpiTileProps {
    card: &'static KpiCard,
}

#[component]
fn KpiTile(props: KpiTileProps) -> Element {
    let card = props.card;
    let style = format!("background: {};", tone_background(card.tone));

    rsx! {
        Card {
            class: "adm-kpi".to_string(),
            style,
            div {
                class: "head",
                div {
                    p { class: "value", "{card.value}" }
                    p { class: "title", "{card.title}" }
                }
                button {
                    class: "adm-icon-button",
                    "aria-label": "Card settings",
                    Icon { kind: IconKind::Cog, class: "sm".to_string() }
                }
            }
            div {
                class: "chart",
                MiniChart { kind: card.chart, values: card.values() }
                span { class: "overlay-text", "{card.description}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adm_data::kpi::ChartKind;

    fn render() -> String {
        let mut dom = VirtualDom::new(KpiCardGrid);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_each_card_draws_its_declared_chart() {
        let html = render();
        let declared = |kind| KPI_CARDS.iter().filter(|c| c.chart == kind).count();
        assert_eq!(html.matches(r#"data-chart="line""#).count(), declared(ChartKind::Line));
        assert_eq!(html.matches(r#"data-chart="bar""#).count(), declared(ChartKind::Bar));
        assert_eq!(html.matches(r#"data-chart="bar""#).count(), 1);
    }

    #[test]
    fn test_renders_every_card() {
        let html = render();
        assert_eq!(html.matches("adm-kpi").count(), KPI_CARDS.len());
        for card in KPI_CARDS {
            assert!(html.contains(card.title), "missing {}", card.id);
            assert!(html.contains(card.value), "missing value of {}", card.id);
        }
    }
}
