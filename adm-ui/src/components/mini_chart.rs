//! The small embedded chart on a KPI card.

use adm_data::kpi::ChartKind;
use dioxus::prelude::*;

use crate::components::EmptyState;
use crate::geometry::{coord, mini_chart_shape, MiniChartShape};

const WIDTH: f64 = 100.0;
const HEIGHT: f64 = 60.0;

#[derive(Props, Clone, PartialEq)]
pub struct MiniChartProps {
    pub kind: ChartKind,
    pub values: Vec<f64>,
}

/// White line or translucent white bars, stretched to the card width.
#[component]
pub fn MiniChart(props: MiniChartProps) -> Element {
    match mini_chart_shape(props.kind, &props.values, WIDTH, HEIGHT) {
        MiniChartShape::Line(d) => rsx! {
            svg {
                view_box: "0 0 100 60",
                preserve_aspect_ratio: "none",
                "data-chart": "line",
                path {
                    d: "{d}",
                    fill: "none",
                    stroke: "#ffffff",
                    stroke_width: "2",
                    "vector-effect": "non-scaling-stroke",
                }
            }
        },
        MiniChartShape::Bars(bars) => {
            let rects: Vec<[String; 4]> = bars
                .iter()
                .map(|b| [coord(b.x), coord(b.y), coord(b.width), coord(b.height)])
                .collect();
            rsx! {
                svg {
                    view_box: "0 0 100 60",
                    preserve_aspect_ratio: "none",
                    "data-chart": "bar",
                    for [x, y, w, h] in rects {
                        rect {
                            x: "{x}",
                            y: "{y}",
                            width: "{w}",
                            height: "{h}",
                            fill: "#ffffff",
                            "fill-opacity": "0.6",
                        }
                    }
                }
            }
        }
        MiniChartShape::Empty => rsx! {
            EmptyState {}
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(kind: ChartKind, values: Vec<f64>) -> String {
        let mut dom = VirtualDom::new_with_props(MiniChart, MiniChartProps { kind, values });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_bar_chart_draws_one_rect_per_value() {
        let html = render(ChartKind::Bar, vec![3.0, 6.0, 9.0]);
        assert!(html.contains(r#"data-chart="bar""#));
        assert_eq!(html.matches("<rect").count(), 3);
    }

    #[test]
    fn test_line_chart_draws_a_path() {
        let html = render(ChartKind::Line, vec![3.0, 6.0]);
        assert!(html.contains(r#"data-chart="line""#));
        assert!(!html.contains("<rect"));
    }

    #[test]
    fn test_empty_series_shows_placeholder() {
        let html = render(ChartKind::Line, Vec::new());
        assert!(html.contains(r#"class="adm-empty""#));
        assert!(!html.contains("<svg"));
    }
}
