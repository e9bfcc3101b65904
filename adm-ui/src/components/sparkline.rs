//! Decorative background sparkline.

use dioxus::prelude::*;

use crate::geometry::sparkline_points;

#[derive(Props, Clone, PartialEq)]
pub struct SparklineProps {
    pub values: Vec<f64>,
}

#[component]
pub fn Sparkline(props: SparklineProps) -> Element {
    if props.values.is_empty() {
        return rsx! {};
    }
    let points = sparkline_points(&props.values);

    rsx! {
        svg {
            class: "spark",
            view_box: "0 0 100 40",
            preserve_aspect_ratio: "none",
            polyline {
                fill: "none",
                stroke: "currentColor",
                stroke_width: "1",
                points: "{points}",
            }
        }
    }
}
