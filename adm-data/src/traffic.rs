//! Traffic panel data: the period selector, the generated mock series and
//! the fixed summary metrics shown under the chart.
//!
//! The series is mock data drawn from a seeded [`StdRng`]. Only the point
//! count and value ranges per period are meaningful; the exact values are
//! not reproducible across sessions.

use std::fmt;
use std::str::FromStr;

use chrono::Month;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::tone::Tone;

/// Granularity of the traffic chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    #[default]
    Month,
    Year,
}

impl Period {
    /// Tab order.
    pub const ALL: [Period; 3] = [Period::Day, Period::Month, Period::Year];

    /// Tab caption.
    pub fn label(self) -> &'static str {
        match self {
            Period::Day => "Day",
            Period::Month => "Month",
            Period::Year => "Year",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Generation parameters for this period.
    pub fn profile(self) -> PeriodProfile {
        match self {
            Period::Day => PeriodProfile {
                points: 24,
                current: SeriesProfile::new(150, 50.0, Wave::Sin, 3.0, 30.0),
                previous: SeriesProfile::new(120, 40.0, Wave::Cos, 2.5, 25.0),
            },
            Period::Month => PeriodProfile {
                points: 30,
                current: SeriesProfile::new(2000, 500.0, Wave::Sin, 5.0, 500.0),
                previous: SeriesProfile::new(1800, 400.0, Wave::Cos, 4.0, 400.0),
            },
            Period::Year => PeriodProfile {
                points: 12,
                current: SeriesProfile::new(25000, 10000.0, Wave::Sin, 2.0, 8000.0),
                previous: SeriesProfile::new(22000, 8000.0, Wave::Cos, 1.5, 7000.0),
            },
        }
    }

    /// Category label for the point at `index`: `H:00`, day of month, or
    /// abbreviated month name.
    pub fn point_label(self, index: usize) -> String {
        match self {
            Period::Day => format!("{}:00", index),
            Period::Month => (index + 1).to_string(),
            Period::Year => Month::try_from((index % 12 + 1) as u8)
                .map(|m| m.name()[..3].to_string())
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Period::Day),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => anyhow::bail!("unknown period '{}'", other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wave {
    Sin,
    Cos,
}

/// `floor(r * spread) + base + wave(i / divisor) * amplitude`, with `r` in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesProfile {
    pub spread: u32,
    pub base: f64,
    pub wave: Wave,
    pub divisor: f64,
    pub amplitude: f64,
}

impl SeriesProfile {
    const fn new(spread: u32, base: f64, wave: Wave, divisor: f64, amplitude: f64) -> Self {
        Self {
            spread,
            base,
            wave,
            divisor,
            amplitude,
        }
    }

    fn sample<R: Rng>(&self, index: usize, rng: &mut R) -> f64 {
        let phase = index as f64 / self.divisor;
        let wave = match self.wave {
            Wave::Sin => phase.sin(),
            Wave::Cos => phase.cos(),
        };
        rng.gen_range(0..self.spread) as f64 + self.base + wave * self.amplitude
    }

    /// Closed interval every unadjusted sample falls in.
    pub fn raw_bounds(&self) -> (f64, f64) {
        (
            self.base - self.amplitude,
            self.base + (self.spread - 1) as f64 + self.amplitude,
        )
    }
}

/// Point count and per-series parameters for one period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodProfile {
    pub points: usize,
    pub current: SeriesProfile,
    pub previous: SeriesProfile,
}

impl PeriodProfile {
    /// Closed interval for generated current-period values, emphasis included.
    pub fn current_bounds(&self) -> (f64, f64) {
        scaled_bounds(self.current.raw_bounds(), EMPHASIS.iter().map(|e| e.current))
    }

    /// Closed interval for generated previous-period values, emphasis included.
    pub fn previous_bounds(&self) -> (f64, f64) {
        scaled_bounds(self.previous.raw_bounds(), EMPHASIS.iter().map(|e| e.previous))
    }
}

fn scaled_bounds((low, high): (f64, f64), factors: impl Iterator<Item = f64>) -> (f64, f64) {
    let (min_f, max_f) = factors.fold((1.0_f64, 1.0_f64), |(lo, hi), f| (lo.min(f), hi.max(f)));
    (low * min_f, high * max_f)
}

/// Position of an emphasized point within the series.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Anchor {
    Second,
    Middle,
    SecondToLast,
}

impl Anchor {
    fn index(self, len: usize) -> usize {
        match self {
            Anchor::Second => 1,
            Anchor::Middle => len / 2,
            Anchor::SecondToLast => len - 2,
        }
    }
}

struct Emphasis {
    anchor: Anchor,
    current: f64,
    previous: f64,
}

/// Fixed dips and peaks that keep the chart visually varied.
const EMPHASIS: [Emphasis; 3] = [
    Emphasis {
        anchor: Anchor::Second,
        current: 0.7,
        previous: 0.8,
    },
    Emphasis {
        anchor: Anchor::Middle,
        current: 1.5,
        previous: 1.3,
    },
    Emphasis {
        anchor: Anchor::SecondToLast,
        current: 0.6,
        previous: 0.7,
    },
];

/// Series shorter than this are left unadjusted.
const EMPHASIS_MIN_POINTS: usize = 6;

/// One category on the traffic chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficPoint {
    pub label: String,
    pub current: f64,
    pub previous: f64,
}

/// Generate a fresh mock series for `period`.
pub fn generate_series<R: Rng>(period: Period, rng: &mut R) -> Vec<TrafficPoint> {
    let profile = period.profile();
    let mut data: Vec<TrafficPoint> = (0..profile.points)
        .map(|i| TrafficPoint {
            label: period.point_label(i),
            current: profile.current.sample(i, rng),
            previous: profile.previous.sample(i, rng),
        })
        .collect();

    if data.len() >= EMPHASIS_MIN_POINTS {
        let len = data.len();
        for emphasis in &EMPHASIS {
            let point = &mut data[emphasis.anchor.index(len)];
            point.current *= emphasis.current;
            point.previous *= emphasis.previous;
        }
    }

    data
}

/// Seed for the traffic generator, taken from the clock (and, in the
/// browser, `Math.random`).
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now() as u64;
        let jitter = (js_sys::Math::random() * u32::MAX as f64) as u64;
        now ^ (jitter << 32)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }
}

/// State owned by the traffic panel: the selected period and its series.
#[derive(Debug, Clone)]
pub struct TrafficPanelState {
    period: Period,
    series: Vec<TrafficPoint>,
    rng: StdRng,
}

impl TrafficPanelState {
    pub fn new(period: Period, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let series = generate_series(period, &mut rng);
        Self {
            period,
            series,
            rng,
        }
    }

    pub fn with_entropy(period: Period) -> Self {
        Self::new(period, entropy_seed())
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn series(&self) -> &[TrafficPoint] {
        &self.series
    }

    /// Switch to `period` and regenerate. Returns `false` (and keeps the
    /// current series) when `period` is already selected.
    pub fn select_period(&mut self, period: Period) -> bool {
        if period == self.period {
            return false;
        }
        log::debug!("traffic period {} -> {}", self.period, period);
        self.period = period;
        self.refresh();
        true
    }

    /// Regenerate the series for the current period.
    pub fn refresh(&mut self) {
        self.series = generate_series(self.period, &mut self.rng);
        log::debug!("traffic series regenerated: {} points", self.series.len());
    }
}

/// Labeled percentage bar shown under the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSummaryStat {
    pub label: &'static str,
    pub value: &'static str,
    pub percentage: u8,
    pub tone: Tone,
}

pub const SUMMARY_STATS: &[TrafficSummaryStat] = &[
    TrafficSummaryStat {
        label: "Visits",
        value: "29.703 Users",
        percentage: 40,
        tone: Tone::Success,
    },
    TrafficSummaryStat {
        label: "Unique",
        value: "24.093 Users",
        percentage: 20,
        tone: Tone::Blue,
    },
    TrafficSummaryStat {
        label: "Pageviews",
        value: "78.706 Views",
        percentage: 60,
        tone: Tone::Warning,
    },
    TrafficSummaryStat {
        label: "New Users",
        value: "22.123 Users",
        percentage: 80,
        tone: Tone::Red,
    },
    TrafficSummaryStat {
        label: "Bounce Rate",
        value: "40.15%",
        percentage: 40,
        tone: Tone::Sky,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_in_bounds(period: Period, series: &[TrafficPoint]) {
        let profile = period.profile();
        let (cur_lo, cur_hi) = profile.current_bounds();
        let (prev_lo, prev_hi) = profile.previous_bounds();
        for p in series {
            assert!(
                p.current >= cur_lo && p.current <= cur_hi,
                "{} current {} outside [{}, {}]",
                period,
                p.current,
                cur_lo,
                cur_hi
            );
            assert!(
                p.previous >= prev_lo && p.previous <= prev_hi,
                "{} previous {} outside [{}, {}]",
                period,
                p.previous,
                prev_lo,
                prev_hi
            );
        }
    }

    #[test]
    fn test_point_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(generate_series(Period::Day, &mut rng).len(), 24);
        assert_eq!(generate_series(Period::Month, &mut rng).len(), 30);
        assert_eq!(generate_series(Period::Year, &mut rng).len(), 12);
    }

    #[test]
    fn test_labels() {
        let mut rng = StdRng::seed_from_u64(1);
        let day = generate_series(Period::Day, &mut rng);
        assert_eq!(day[0].label, "0:00");
        assert_eq!(day[23].label, "23:00");

        let month = generate_series(Period::Month, &mut rng);
        assert_eq!(month[0].label, "1");
        assert_eq!(month[29].label, "30");

        let year = generate_series(Period::Year, &mut rng);
        let labels: Vec<_> = year.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );
    }

    #[test]
    fn test_values_stay_in_range_across_seeds() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for period in Period::ALL {
                let series = generate_series(period, &mut rng);
                assert_in_bounds(period, &series);
            }
        }
    }

    #[test]
    fn test_values_are_non_negative() {
        for period in Period::ALL {
            let profile = period.profile();
            assert!(profile.current_bounds().0 >= 0.0);
            assert!(profile.previous_bounds().0 >= 0.0);
        }
    }

    #[test]
    fn test_default_period_is_month() {
        let state = TrafficPanelState::new(Period::default(), 3);
        assert_eq!(state.period(), Period::Month);
        assert_eq!(state.series().len(), 30);
    }

    #[test]
    fn test_select_period_regenerates() {
        let mut state = TrafficPanelState::new(Period::Month, 11);
        assert!(state.select_period(Period::Day));
        assert_eq!(state.period(), Period::Day);
        assert_eq!(state.series().len(), 24);
        assert_in_bounds(Period::Day, state.series());

        assert!(state.select_period(Period::Year));
        assert_eq!(state.series().len(), 12);
        assert_in_bounds(Period::Year, state.series());
    }

    #[test]
    fn test_select_same_period_is_noop() {
        let mut state = TrafficPanelState::new(Period::Year, 5);
        let before = state.series().to_vec();
        assert!(!state.select_period(Period::Year));
        assert_eq!(state.series(), before.as_slice());
    }

    #[test]
    fn test_refresh_keeps_shape() {
        let mut state = TrafficPanelState::new(Period::Month, 42);
        let before = state.series().to_vec();
        state.refresh();
        let after = state.series();
        assert_eq!(after.len(), before.len());
        assert_eq!(state.period(), Period::Month);
        assert_in_bounds(Period::Month, after);
        let labels_before: Vec<_> = before.iter().map(|p| &p.label).collect();
        let labels_after: Vec<_> = after.iter().map(|p| &p.label).collect();
        assert_eq!(labels_before, labels_after);
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("day".parse::<Period>().unwrap(), Period::Day);
        assert_eq!(" Month ".parse::<Period>().unwrap(), Period::Month);
        assert_eq!("YEAR".parse::<Period>().unwrap(), Period::Year);
        assert!("week".parse::<Period>().is_err());
    }

    #[test]
    fn test_summary_percentages() {
        assert_eq!(SUMMARY_STATS.len(), 5);
        assert!(SUMMARY_STATS.iter().all(|s| s.percentage <= 100));
    }
}
