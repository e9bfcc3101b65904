//! KPI cards: headline values paired with a small embedded chart.

use crate::icon::IconKind;
use crate::tone::Tone;

/// Shape of the embedded chart on a KPI card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// A `(category, value)` pair in a short fixed series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub name: &'static str,
    pub value: f64,
}

const fn pt(name: &'static str, value: f64) -> SeriesPoint {
    SeriesPoint { name, value }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub id: &'static str,
    pub title: &'static str,
    /// Pre-formatted headline value.
    pub value: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
    pub tone: Tone,
    pub chart: ChartKind,
    pub series: &'static [SeriesPoint],
}

impl KpiCard {
    pub fn values(&self) -> Vec<f64> {
        self.series.iter().map(|p| p.value).collect()
    }
}

pub const KPI_CARDS: &[KpiCard] = &[
    KpiCard {
        id: "membersOnline",
        title: "Members Online",
        value: "9,823",
        description: "+2.5% since last month",
        icon: IconKind::Users,
        tone: Tone::Blue,
        chart: ChartKind::Line,
        series: &[
            pt("Jan", 65.0),
            pt("Feb", 59.0),
            pt("Mar", 80.0),
            pt("Apr", 81.0),
            pt("May", 56.0),
            pt("Jun", 55.0),
            pt("Jul", 40.0),
            pt("Aug", 70.0),
            pt("Sep", 60.0),
        ],
    },
    KpiCard {
        id: "newSignups",
        title: "New Signups",
        value: "1,204",
        description: "+15% this week",
        icon: IconKind::Users,
        tone: Tone::Sky,
        chart: ChartKind::Line,
        series: &[
            pt("Mon", 30.0),
            pt("Tue", 45.0),
            pt("Wed", 20.0),
            pt("Thu", 60.0),
            pt("Fri", 75.0),
            pt("Sat", 50.0),
            pt("Sun", 90.0),
            pt("Mon+", 65.0),
        ],
    },
    KpiCard {
        id: "revenue",
        title: "Revenue",
        value: "$45,890",
        description: "-3.1% vs last period",
        icon: IconKind::Dollar,
        tone: Tone::Amber,
        chart: ChartKind::Line,
        series: &[
            pt("W1", 1200.0),
            pt("W2", 2100.0),
            pt("W3", 900.0),
            pt("W4", 1600.0),
            pt("W5", 1300.0),
            pt("W6", 2400.0),
            pt("W7", 1800.0),
            pt("W8", 2200.0),
        ],
    },
    KpiCard {
        id: "activeTickets",
        title: "Active Tickets",
        value: "287",
        description: "Avg. response: 2h",
        icon: IconKind::BarChartBig,
        tone: Tone::Red,
        chart: ChartKind::Bar,
        series: &[
            pt("A", 10.0),
            pt("B", 15.0),
            pt("C", 7.0),
            pt("D", 20.0),
            pt("E", 12.0),
            pt("F", 18.0),
            pt("G", 5.0),
            pt("H", 22.0),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_tickets_use_bars() {
        let bars: Vec<_> = KPI_CARDS
            .iter()
            .filter(|c| c.chart == ChartKind::Bar)
            .map(|c| c.id)
            .collect();
        assert_eq!(bars, vec!["activeTickets"]);
    }

    #[test]
    fn test_every_series_is_populated() {
        for card in KPI_CARDS {
            assert!(card.series.len() >= 8, "{} series too short", card.id);
            assert!(card.values().iter().all(|v| *v >= 0.0));
        }
    }
}
