//! Consistency checks over the static datasets.
//!
//! Nothing here is fatal: the app logs each problem at startup and the
//! rendering primitives clamp or placeholder whatever slips through.

use std::collections::HashSet;

use crate::error::{DatasetError, Problem};
use crate::kpi::{KpiCard, KPI_CARDS};
use crate::navigation::{self, NavItem, UtilizationMetric, NAVIGATION, SYSTEM_UTILIZATION};
use crate::sales::{DailyActivityItem, DemographicItem, DAILY_ACTIVITY, DEMOGRAPHICS};
use crate::social::{SocialPlatformStat, SOCIAL_STATS};
use crate::traffic::{TrafficSummaryStat, SUMMARY_STATS};

/// Collect problems from `(record, percentage)` pairs.
pub fn check_percentages<'a>(
    dataset: &'static str,
    values: impl IntoIterator<Item = (&'a str, f64)>,
) -> Vec<DatasetError> {
    values
        .into_iter()
        .filter(|(_, v)| !(0.0..=100.0).contains(v))
        .map(|(record, v)| DatasetError::new(dataset, record, Problem::PercentageOutOfRange(v)))
        .collect()
}

fn check_unique_ids<'a>(
    dataset: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Vec<DatasetError> {
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| !seen.insert(*id))
        .map(|id| DatasetError::new(dataset, id, Problem::DuplicateId))
        .collect()
}

pub fn check_navigation(items: &'static [NavItem]) -> Vec<DatasetError> {
    let all = navigation::walk(items);
    let mut errors = check_unique_ids("navigation", all.iter().map(|(_, item)| item.id));
    errors.extend(
        all.iter()
            .filter(|(_, item)| item.is_group() && item.children().is_empty())
            .map(|(_, item)| DatasetError::new("navigation", item.id, Problem::EmptyGroup)),
    );
    errors
}

pub fn check_utilization(metrics: &[UtilizationMetric]) -> Vec<DatasetError> {
    check_percentages(
        "system utilization",
        metrics.iter().map(|m| (m.id, f64::from(m.value))),
    )
}

pub fn check_kpi_cards(cards: &[KpiCard]) -> Vec<DatasetError> {
    let mut errors = check_unique_ids("kpi cards", cards.iter().map(|c| c.id));
    errors.extend(
        cards
            .iter()
            .filter(|c| c.series.is_empty())
            .map(|c| DatasetError::new("kpi cards", c.id, Problem::EmptySeries)),
    );
    errors
}

pub fn check_social(stats: &[SocialPlatformStat]) -> Vec<DatasetError> {
    let mut errors = check_unique_ids("social stats", stats.iter().map(|s| s.id));
    for stat in stats {
        if stat.metrics.is_empty() {
            errors.push(DatasetError::new("social stats", stat.id, Problem::EmptyMetrics));
        }
        if matches!(stat.sparkline, Some(line) if line.is_empty()) {
            errors.push(DatasetError::new("social stats", stat.id, Problem::EmptySeries));
        }
    }
    errors
}

pub fn check_summary(stats: &[TrafficSummaryStat]) -> Vec<DatasetError> {
    check_percentages(
        "traffic summary",
        stats.iter().map(|s| (s.label, f64::from(s.percentage))),
    )
}

pub fn check_daily_activity(items: &[DailyActivityItem]) -> Vec<DatasetError> {
    check_percentages(
        "daily activity",
        items.iter().map(|d| (d.id, f64::from(d.value))),
    )
}

pub fn check_demographics(items: &[DemographicItem]) -> Vec<DatasetError> {
    check_percentages(
        "demographics",
        items.iter().map(|d| (d.id, f64::from(d.percentage))),
    )
}

/// Run every check over the built-in datasets.
pub fn validate_all() -> Vec<DatasetError> {
    let mut errors = check_navigation(NAVIGATION);
    errors.extend(check_utilization(SYSTEM_UTILIZATION));
    errors.extend(check_kpi_cards(KPI_CARDS));
    errors.extend(check_social(SOCIAL_STATS));
    errors.extend(check_summary(SUMMARY_STATS));
    errors.extend(check_daily_activity(DAILY_ACTIVITY));
    errors.extend(check_demographics(DEMOGRAPHICS));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconKind;
    use crate::kpi::ChartKind;
    use crate::tone::Tone;

    #[test]
    fn test_builtin_datasets_are_clean() {
        let errors = validate_all();
        assert!(errors.is_empty(), "unexpected: {:?}", errors);
    }

    #[test]
    fn test_percentage_out_of_range() {
        let errors = check_percentages("demo", [("ok", 50.0), ("high", 101.0), ("low", -1.0)]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].record, "high");
        assert_eq!(errors[0].problem, Problem::PercentageOutOfRange(101.0));
        assert_eq!(errors[1].record, "low");
    }

    #[test]
    fn test_percentage_bounds_inclusive() {
        assert!(check_percentages("demo", [("zero", 0.0), ("full", 100.0)]).is_empty());
    }

    #[test]
    fn test_empty_kpi_series() {
        let cards = [KpiCard {
            id: "empty",
            title: "Empty",
            value: "0",
            description: "",
            icon: IconKind::Users,
            tone: Tone::Blue,
            chart: ChartKind::Line,
            series: &[],
        }];
        let errors = check_kpi_cards(&cards);
        assert_eq!(errors, vec![DatasetError::new("kpi cards", "empty", Problem::EmptySeries)]);
    }

    #[test]
    fn test_duplicate_ids() {
        let stats = [
            SocialPlatformStat {
                id: "dup",
                platform: "A",
                icon: IconKind::Facebook,
                tone: Tone::Facebook,
                metrics: &[],
                sparkline: Some(&[]),
            },
            SocialPlatformStat {
                id: "dup",
                platform: "B",
                icon: IconKind::Twitter,
                tone: Tone::Twitter,
                metrics: &[],
                sparkline: None,
            },
        ];
        let problems: Vec<_> = check_social(&stats).into_iter().map(|e| e.problem).collect();
        assert!(problems.contains(&Problem::DuplicateId));
        assert!(problems.contains(&Problem::EmptyMetrics));
        assert!(problems.contains(&Problem::EmptySeries));
    }

    #[test]
    fn test_error_display() {
        let err = DatasetError::new("demographics", "male", Problem::PercentageOutOfRange(120.0));
        assert_eq!(
            err.to_string(),
            "Dataset error in demographics [male]: percentage 120 outside 0-100"
        );
    }
}
