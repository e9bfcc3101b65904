//! Two-series area chart for the traffic panel.
//!
//! Layout is a 2x2 grid: y-axis labels, the SVG plot, and x-axis labels
//! under the plot. Axis labels are HTML so they do not stretch with the
//! `preserveAspectRatio="none"` plot. Hovering a column shows a tooltip.

use adm_data::TrafficPoint;
use dioxus::prelude::*;

use crate::components::EmptyState;
use crate::geometry::{coord, format_tick, label_stride, nice_ceiling, y_ticks, Plot};

const PLOT_WIDTH: f64 = 720.0;
const PLOT_HEIGHT: f64 = 300.0;
const Y_INTERVALS: usize = 4;
const MAX_X_LABELS: usize = 12;

/// A positioned axis label; `offset` is a percentage of the plot extent.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub offset: f64,
    pub text: String,
}

/// Everything the chart draws, precomputed from the series.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaChartModel {
    pub current_area: String,
    pub current_line: String,
    pub previous_area: String,
    pub previous_line: String,
    /// SVG y coordinate of each horizontal grid line
    pub grid: Vec<f64>,
    pub y_labels: Vec<String>,
    pub x_labels: Vec<AxisLabel>,
    /// Centre x (SVG units) of each point's hover column
    pub columns: Vec<f64>,
    pub column_width: f64,
}

impl AreaChartModel {
    pub fn new(series: &[TrafficPoint], width: f64, height: f64) -> Self {
        let n = series.len();
        let peak = series
            .iter()
            .map(|p| p.current.max(p.previous))
            .fold(0.0, f64::max);
        let plot = Plot::new(width, height, nice_ceiling(peak));

        let current: Vec<f64> = series.iter().map(|p| p.current).collect();
        let previous: Vec<f64> = series.iter().map(|p| p.previous).collect();
        let ticks = y_ticks(plot.y_max, Y_INTERVALS);

        let stride = label_stride(n, MAX_X_LABELS);
        let x_labels = series
            .iter()
            .enumerate()
            .filter(|(i, _)| i % stride == 0)
            .map(|(i, p)| AxisLabel {
                offset: plot.x(i, n) / width * 100.0,
                text: p.label.clone(),
            })
            .collect();

        Self {
            current_area: plot.area_path(&current),
            current_line: plot.line_path(&current),
            previous_area: plot.area_path(&previous),
            previous_line: plot.line_path(&previous),
            grid: ticks.iter().map(|t| plot.y(*t)).collect(),
            y_labels: ticks.iter().map(|t| format_tick(*t)).collect(),
            x_labels,
            columns: (0..n).map(|i| plot.x(i, n)).collect(),
            column_width: if n == 0 { 0.0 } else { width / n as f64 },
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AreaChartProps {
    pub series: Vec<TrafficPoint>,
    #[props(default = "Current Period".to_string())]
    pub current_label: String,
    #[props(default = "Previous Period".to_string())]
    pub previous_label: String,
}

#[component]
pub fn AreaChart(props: AreaChartProps) -> Element {
    let mut hovered: Signal<Option<usize>> = use_signal(|| None);

    if props.series.is_empty() {
        return rsx! {
            EmptyState { message: "No traffic data".to_string() }
        };
    }

    let model = AreaChartModel::new(&props.series, PLOT_WIDTH, PLOT_HEIGHT);
    let view_box = format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT);
    let grid: Vec<String> = model.grid.iter().map(|y| coord(*y)).collect();
    let half = model.column_width / 2.0;
    let columns: Vec<(usize, String, String)> = model
        .columns
        .iter()
        .enumerate()
        .map(|(i, x)| (i, coord((x - half).max(0.0)), coord(model.column_width)))
        .collect();

    // The series can shrink under a stale hover index after a period switch.
    let tooltip = hovered().and_then(|i| {
        let point = props.series.get(i)?;
        let x = model.columns.get(i)?;
        Some((
            coord(*x),
            coord(x / PLOT_WIDTH * 100.0),
            point.label.clone(),
            format!("{:.0}", point.current),
            format!("{:.0}", point.previous),
        ))
    });

    rsx! {
        div {
            class: "adm-area-chart",
            div {
                class: "y-axis",
                for label in model.y_labels.iter() {
                    span { "{label}" }
                }
            }
            div {
                class: "plot",
                svg {
                    view_box: "{view_box}",
                    preserve_aspect_ratio: "none",
                    onmouseleave: move |_| hovered.set(None),
                    for y in grid {
                        line {
                            x1: "0",
                            y1: "{y}",
                            x2: "{PLOT_WIDTH}",
                            y2: "{y}",
                            stroke: "currentColor",
                            stroke_dasharray: "3 3",
                            "stroke-opacity": "0.3",
                            "vector-effect": "non-scaling-stroke",
                        }
                    }
                    path {
                        d: "{model.previous_area}",
                        style: "fill: var(--accent-green); fill-opacity: 0.2; stroke: none;",
                    }
                    path {
                        d: "{model.previous_line}",
                        style: "fill: none; stroke: var(--accent-green); stroke-width: 2;",
                        "vector-effect": "non-scaling-stroke",
                    }
                    path {
                        d: "{model.current_area}",
                        style: "fill: var(--primary); fill-opacity: 0.3; stroke: none;",
                    }
                    path {
                        d: "{model.current_line}",
                        style: "fill: none; stroke: var(--primary); stroke-width: 2;",
                        "vector-effect": "non-scaling-stroke",
                    }
                    if let Some((x, _, _, _, _)) = tooltip.as_ref() {
                        line {
                            x1: "{x}",
                            y1: "0",
                            x2: "{x}",
                            y2: "{PLOT_HEIGHT}",
                            stroke: "currentColor",
                            "stroke-opacity": "0.5",
                            "vector-effect": "non-scaling-stroke",
                        }
                    }
                    for (i, x, w) in columns {
                        rect {
                            x: "{x}",
                            y: "0",
                            width: "{w}",
                            height: "{PLOT_HEIGHT}",
                            fill: "transparent",
                            onmouseenter: move |_| hovered.set(Some(i)),
                        }
                    }
                }
                if let Some((_, pct, label, current, previous)) = tooltip {
                    div {
                        class: "adm-tooltip",
                        style: "left: {pct}%;",
                        strong { "{label}" }
                        div { "{props.current_label}: {current}" }
                        div { "{props.previous_label}: {previous}" }
                    }
                }
            }
            div {
                class: "x-axis",
                for label in model.x_labels.iter() {
                    span { style: "left: {label.offset}%;", "{label.text}" }
                }
            }
        }
        div {
            class: "adm-legend",
            span { style: "--swatch: var(--primary);", "{props.current_label}" }
            span { style: "--swatch: var(--accent-green);", "{props.previous_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, current: f64, previous: f64) -> TrafficPoint {
        TrafficPoint {
            label: label.to_string(),
            current,
            previous,
        }
    }

    #[test]
    fn test_model_scales_to_nice_ceiling() {
        let series = vec![point("a", 80.0, 40.0), point("b", 170.0, 120.0)];
        let model = AreaChartModel::new(&series, 100.0, 100.0);
        assert_eq!(model.y_labels, vec!["0", "50", "100", "150", "200"]);
        assert_eq!(model.grid, vec![100.0, 75.0, 50.0, 25.0, 0.0]);
        assert_eq!(model.current_line, "M0,60 L100,15");
        assert_eq!(model.previous_line, "M0,80 L100,40");
        assert!(model.current_area.ends_with("L100,100 L0,100 Z"));
    }

    #[test]
    fn test_model_thins_x_labels() {
        let series: Vec<_> = (1..=30).map(|i| point(&i.to_string(), 10.0, 5.0)).collect();
        let model = AreaChartModel::new(&series, 720.0, 300.0);
        let texts: Vec<_> = model.x_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["1", "4", "7", "10", "13", "16", "19", "22", "25", "28"]);
        assert_eq!(model.x_labels[0].offset, 0.0);
        assert_eq!(model.columns.len(), 30);
        assert_eq!(model.column_width, 24.0);
    }

    #[test]
    fn test_model_of_empty_series() {
        let model = AreaChartModel::new(&[], 720.0, 300.0);
        assert!(model.current_area.is_empty());
        assert!(model.columns.is_empty());
        assert!(model.x_labels.is_empty());
        assert_eq!(model.column_width, 0.0);
    }
}
