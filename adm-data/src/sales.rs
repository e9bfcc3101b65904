//! Traffic & sales breakdown: headline stats, daily activity, demographics
//! and traffic sources.

use crate::icon::IconKind;
use crate::tone::Tone;

/// Headline figure with a colored underline.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficDetailStat {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

/// Percentage bar for one weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyActivityItem {
    pub id: &'static str,
    pub label: &'static str,
    pub value: u8,
    pub tone: Tone,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemographicItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: IconKind,
    pub percentage: u8,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceStat {
    pub id: &'static str,
    pub icon: IconKind,
    pub label: &'static str,
    pub value: &'static str,
    pub trend: Trend,
    pub trend_value: Option<&'static str>,
}

impl SourceStat {
    /// Trend icon and value, shown only for an up or down trend with a value.
    pub fn trend_badge(&self) -> Option<(IconKind, &'static str)> {
        let icon = match self.trend {
            Trend::Up => IconKind::TrendingUp,
            Trend::Down => IconKind::TrendingDown,
            Trend::Neutral => return None,
        };
        self.trend_value.map(|value| (icon, value))
    }
}

pub const MAIN_STATS: &[TrafficDetailStat] = &[
    TrafficDetailStat {
        label: "New Clients",
        value: "9,123",
        tone: Tone::Muted,
    },
    TrafficDetailStat {
        label: "Recurring Clients",
        value: "22,643",
        tone: Tone::Red,
    },
    TrafficDetailStat {
        label: "Pageviews",
        value: "78,623",
        tone: Tone::Warning,
    },
    TrafficDetailStat {
        label: "Organic",
        value: "49,123",
        tone: Tone::Success,
    },
];

pub const DAILY_ACTIVITY: &[DailyActivityItem] = &[
    DailyActivityItem {
        id: "monday",
        label: "Monday",
        value: 34,
        tone: Tone::Destructive,
    },
    DailyActivityItem {
        id: "tuesday",
        label: "Tuesday",
        value: 78,
        tone: Tone::Primary,
    },
    DailyActivityItem {
        id: "wednesday",
        label: "Wednesday",
        value: 52,
        tone: Tone::Accent,
    },
    DailyActivityItem {
        id: "thursday",
        label: "Thursday",
        value: 89,
        tone: Tone::Success,
    },
    DailyActivityItem {
        id: "friday",
        label: "Friday",
        value: 23,
        tone: Tone::Warning,
    },
];

pub const DEMOGRAPHICS: &[DemographicItem] = &[
    DemographicItem {
        id: "male",
        label: "Male",
        icon: IconKind::User,
        percentage: 43,
        tone: Tone::Primary,
    },
    DemographicItem {
        id: "female",
        label: "Female",
        icon: IconKind::User,
        percentage: 37,
        tone: Tone::Pink,
    },
];

pub const TRAFFIC_SOURCES: &[SourceStat] = &[
    SourceStat {
        id: "organic",
        icon: IconKind::SearchCheck,
        label: "Organic Search",
        value: "191,235",
        trend: Trend::Up,
        trend_value: Some("5%"),
    },
    SourceStat {
        id: "direct",
        icon: IconKind::Globe,
        label: "Direct",
        value: "120,543",
        trend: Trend::Down,
        trend_value: Some("2%"),
    },
    SourceStat {
        id: "referral",
        icon: IconKind::Users,
        label: "Referral",
        value: "88,002",
        trend: Trend::Neutral,
        trend_value: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_badges() {
        let badges: Vec<_> = TRAFFIC_SOURCES.iter().map(|s| s.trend_badge()).collect();
        assert_eq!(badges[0], Some((IconKind::TrendingUp, "5%")));
        assert_eq!(badges[1], Some((IconKind::TrendingDown, "2%")));
        assert_eq!(badges[2], None);
    }

    #[test]
    fn test_neutral_trend_hides_value() {
        let source = SourceStat {
            id: "x",
            icon: IconKind::Globe,
            label: "X",
            value: "1",
            trend: Trend::Neutral,
            trend_value: Some("9%"),
        };
        assert_eq!(source.trend_badge(), None);
    }

    #[test]
    fn test_trend_without_value_hides_badge() {
        let source = SourceStat {
            id: "x",
            icon: IconKind::Globe,
            label: "X",
            value: "1",
            trend: Trend::Up,
            trend_value: None,
        };
        assert_eq!(source.trend_badge(), None);
    }

    #[test]
    fn test_percentages_in_range() {
        assert!(DAILY_ACTIVITY.iter().all(|d| d.value <= 100));
        assert!(DEMOGRAPHICS.iter().all(|d| d.percentage <= 100));
    }
}
