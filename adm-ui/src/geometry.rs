//! SVG geometry for the dashboard charts.
//!
//! Everything here is pure: values in, path strings and rectangles out. The
//! components only interpolate the results into `svg` elements.

use adm_data::kpi::ChartKind;

/// Format an SVG coordinate with at most two decimals and no trailing zeros.
pub fn coord(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Round `value` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_ceiling(value: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(value.log10().floor());
    let normalized = value / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| normalized <= *s)
        .unwrap_or(10.0);
    step * magnitude
}

/// Evenly spaced ticks from 0 to `y_max`, `intervals + 1` values.
pub fn y_ticks(y_max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    (0..=intervals)
        .map(|i| y_max * i as f64 / intervals as f64)
        .collect()
}

/// Short axis label: `850`, `2k`, `2.5k`.
pub fn format_tick(value: f64) -> String {
    if value >= 1000.0 {
        let k = value / 1000.0;
        if k.fract().abs() < 1e-9 {
            format!("{:.0}k", k)
        } else {
            format!("{:.1}k", k)
        }
    } else {
        format!("{:.0}", value)
    }
}

/// Every `stride`-th x label is shown so at most `max_labels` appear.
pub fn label_stride(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 {
        return count.max(1);
    }
    count.div_ceil(max_labels).max(1)
}

/// A plotting area mapping series index and value to SVG coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub y_max: f64,
}

impl Plot {
    pub fn new(width: f64, height: f64, y_max: f64) -> Self {
        let y_max = if y_max > 0.0 && y_max.is_finite() { y_max } else { 1.0 };
        Self { width, height, y_max }
    }

    pub fn x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            self.width / 2.0
        } else {
            index as f64 / (count - 1) as f64 * self.width
        }
    }

    pub fn y(&self, value: f64) -> f64 {
        let v = value.clamp(0.0, self.y_max);
        self.height - v / self.y_max * self.height
    }

    /// `M x,y L x,y ...` through every value; empty for an empty series.
    pub fn line_path(&self, values: &[f64]) -> String {
        let n = values.len();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{}{},{}", cmd, coord(self.x(i, n)), coord(self.y(*v)))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The line path closed down to the baseline.
    pub fn area_path(&self, values: &[f64]) -> String {
        if values.is_empty() {
            return String::new();
        }
        let n = values.len();
        let baseline = coord(self.height);
        format!(
            "{} L{},{} L{},{} Z",
            self.line_path(values),
            coord(self.x(n - 1, n)),
            baseline,
            coord(self.x(0, n)),
            baseline
        )
    }
}

/// Polyline points for a decorative sparkline in a 100x40 box; values are on
/// a 0-100 scale and use the lower 30 units.
pub fn sparkline_points(values: &[f64]) -> String {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = if n <= 1 {
                50.0
            } else {
                i as f64 / (n - 1) as f64 * 100.0
            };
            let y = 40.0 - v.clamp(0.0, 100.0) / 100.0 * 30.0;
            format!("{},{}", coord(x), coord(y))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Bars scaled to the series maximum, one slot per value, `gap` being the
/// fraction of each slot left empty.
pub fn bar_rects(values: &[f64], width: f64, height: f64, gap: f64) -> Vec<BarRect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().fold(0.0, f64::max);
    let max = if max > 0.0 { max } else { 1.0 };
    let slot = width / values.len() as f64;
    let gap = gap.clamp(0.0, 0.9);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let h = v.clamp(0.0, max) / max * height;
            BarRect {
                x: slot * i as f64 + slot * gap / 2.0,
                y: height - h,
                width: slot * (1.0 - gap),
                height: h,
            }
        })
        .collect()
}

/// What a KPI card draws for its series.
#[derive(Debug, Clone, PartialEq)]
pub enum MiniChartShape {
    Line(String),
    Bars(Vec<BarRect>),
    Empty,
}

/// Headroom above the series maximum on mini charts.
const MINI_CHART_HEADROOM: f64 = 1.25;

pub fn mini_chart_shape(
    kind: ChartKind,
    values: &[f64],
    width: f64,
    height: f64,
) -> MiniChartShape {
    if values.is_empty() {
        return MiniChartShape::Empty;
    }
    match kind {
        ChartKind::Line => {
            let max = values.iter().copied().fold(0.0, f64::max);
            let plot = Plot::new(width, height, max * MINI_CHART_HEADROOM);
            MiniChartShape::Line(plot.line_path(values))
        }
        ChartKind::Bar => {
            let drawn = height / MINI_CHART_HEADROOM;
            let bars = bar_rects(values, width, drawn, 0.3)
                .into_iter()
                .map(|r| BarRect {
                    y: r.y + height - drawn,
                    ..r
                })
                .collect();
            MiniChartShape::Bars(bars)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adm_data::kpi::KPI_CARDS;

    #[test]
    fn test_coord() {
        assert_eq!(coord(0.0), "0");
        assert_eq!(coord(31.0), "31");
        assert_eq!(coord(16.666), "16.67");
        assert_eq!(coord(2.5), "2.5");
        assert_eq!(coord(-0.001), "0");
    }

    #[test]
    fn test_nice_ceiling() {
        assert_eq!(nice_ceiling(0.0), 1.0);
        assert_eq!(nice_ceiling(87.0), 100.0);
        assert_eq!(nice_ceiling(100.0), 100.0);
        assert_eq!(nice_ceiling(180.0), 200.0);
        assert_eq!(nice_ceiling(2400.0), 2500.0);
        assert_eq!(nice_ceiling(43000.0), 50000.0);
    }

    #[test]
    fn test_y_ticks() {
        assert_eq!(y_ticks(100.0, 4), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(y_ticks(10.0, 0), vec![0.0, 10.0]);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(850.0), "850");
        assert_eq!(format_tick(2000.0), "2k");
        assert_eq!(format_tick(2500.0), "2.5k");
    }

    #[test]
    fn test_label_stride() {
        assert_eq!(label_stride(30, 10), 3);
        assert_eq!(label_stride(24, 12), 2);
        assert_eq!(label_stride(12, 12), 1);
        assert_eq!(label_stride(0, 12), 1);
    }

    #[test]
    fn test_line_and_area_paths() {
        let plot = Plot::new(100.0, 10.0, 10.0);
        assert_eq!(plot.line_path(&[0.0, 10.0]), "M0,10 L100,0");
        assert_eq!(plot.area_path(&[0.0, 10.0]), "M0,10 L100,0 L100,10 L0,10 Z");
        assert_eq!(plot.line_path(&[]), "");
        assert_eq!(plot.area_path(&[]), "");
    }

    #[test]
    fn test_single_point_is_centered() {
        let plot = Plot::new(100.0, 10.0, 10.0);
        assert_eq!(plot.line_path(&[5.0]), "M50,5");
    }

    #[test]
    fn test_values_clamped_to_plot() {
        let plot = Plot::new(100.0, 10.0, 10.0);
        assert_eq!(plot.y(20.0), 0.0);
        assert_eq!(plot.y(-5.0), 10.0);
        assert_eq!(Plot::new(1.0, 1.0, 0.0).y_max, 1.0);
    }

    #[test]
    fn test_sparkline_points() {
        assert_eq!(sparkline_points(&[30.0, 50.0]), "0,31 100,25");
        assert_eq!(sparkline_points(&[100.0]), "50,10");
        assert_eq!(sparkline_points(&[]), "");
    }

    #[test]
    fn test_bar_rects() {
        let bars = bar_rects(&[10.0, 20.0], 100.0, 50.0, 0.2);
        assert_eq!(bars.len(), 2);
        assert_eq!(
            bars[0],
            BarRect {
                x: 5.0,
                y: 25.0,
                width: 40.0,
                height: 25.0
            }
        );
        assert_eq!(
            bars[1],
            BarRect {
                x: 55.0,
                y: 0.0,
                width: 40.0,
                height: 50.0
            }
        );
        assert!(bar_rects(&[], 100.0, 50.0, 0.2).is_empty());
    }

    #[test]
    fn test_kpi_chart_kind_matches_declaration() {
        for card in KPI_CARDS {
            let shape = mini_chart_shape(card.chart, &card.values(), 100.0, 60.0);
            match (card.chart, &shape) {
                (ChartKind::Line, MiniChartShape::Line(path)) => {
                    assert_eq!(path.matches('L').count(), card.series.len() - 1, "{}", card.id)
                }
                (ChartKind::Bar, MiniChartShape::Bars(bars)) => {
                    assert_eq!(bars.len(), card.series.len(), "{}", card.id)
                }
                _ => panic!("{} rendered {:?} for {:?}", card.id, shape, card.chart),
            }
        }
    }

    #[test]
    fn test_mini_chart_bars_sit_on_baseline() {
        let shape = mini_chart_shape(ChartKind::Bar, &[5.0, 10.0], 100.0, 60.0);
        if let MiniChartShape::Bars(bars) = shape {
            for bar in bars {
                assert!((bar.y + bar.height - 60.0).abs() < 1e-9);
            }
        } else {
            panic!("expected bars");
        }
    }

    #[test]
    fn test_empty_series_is_placeholder() {
        for kind in [ChartKind::Line, ChartKind::Bar] {
            assert_eq!(mini_chart_shape(kind, &[], 100.0, 60.0), MiniChartShape::Empty);
        }
    }
}
