//! Social-media stat tiles.

use crate::icon::IconKind;
use crate::tone::Tone;

/// A pre-formatted `(value, label)` pair shown on a tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocialMetric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialPlatformStat {
    pub id: &'static str,
    pub platform: &'static str,
    pub icon: IconKind,
    pub tone: Tone,
    pub metrics: &'static [SocialMetric],
    /// Decorative background sparkline, values on a 0-100 scale.
    pub sparkline: Option<&'static [f64]>,
}

pub const SOCIAL_STATS: &[SocialPlatformStat] = &[
    SocialPlatformStat {
        id: "facebook",
        platform: "Facebook",
        icon: IconKind::Facebook,
        tone: Tone::Facebook,
        metrics: &[
            SocialMetric {
                value: "89k",
                label: "FRIENDS",
            },
            SocialMetric {
                value: "459",
                label: "FEEDS",
            },
        ],
        sparkline: Some(&[30.0, 50.0, 40.0, 60.0, 50.0, 70.0, 60.0]),
    },
    SocialPlatformStat {
        id: "twitter",
        platform: "Twitter",
        icon: IconKind::Twitter,
        tone: Tone::Twitter,
        metrics: &[
            SocialMetric {
                value: "973k",
                label: "FOLLOWERS",
            },
            SocialMetric {
                value: "1.792",
                label: "TWEETS",
            },
        ],
        sparkline: Some(&[60.0, 40.0, 55.0, 35.0, 65.0, 45.0, 70.0]),
    },
    SocialPlatformStat {
        id: "linkedin",
        platform: "LinkedIn",
        icon: IconKind::LinkedIn,
        tone: Tone::LinkedIn,
        metrics: &[
            SocialMetric {
                value: "500+",
                label: "CONTACTS",
            },
            SocialMetric {
                value: "292",
                label: "FEEDS",
            },
        ],
        sparkline: Some(&[20.0, 45.0, 30.0, 50.0, 40.0, 60.0, 55.0]),
    },
    SocialPlatformStat {
        id: "instagram",
        platform: "Instagram",
        icon: IconKind::Instagram,
        tone: Tone::Instagram,
        metrics: &[
            SocialMetric {
                value: "894",
                label: "FOLLOWERS",
            },
            SocialMetric {
                value: "92",
                label: "POSTS",
            },
        ],
        sparkline: Some(&[50.0, 30.0, 60.0, 40.0, 70.0, 50.0, 65.0]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiles_have_two_metrics() {
        assert_eq!(SOCIAL_STATS.len(), 4);
        for stat in SOCIAL_STATS {
            assert_eq!(stat.metrics.len(), 2, "{}", stat.id);
        }
    }

    #[test]
    fn test_sparklines_fit_scale() {
        for stat in SOCIAL_STATS {
            let line = stat.sparkline.unwrap_or(&[]);
            assert!(line.iter().all(|v| (0.0..=100.0).contains(v)), "{}", stat.id);
        }
    }
}
