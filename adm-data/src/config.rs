//! Dashboard configuration.
//!
//! The app embeds `fixtures/dashboard.json` at compile time. Every field has
//! a default, so `{}` is a valid configuration; anything that fails to parse
//! or validate falls back to [`DashboardConfig::default`].

use anyhow::{ensure, Context};
use serde::Deserialize;

use crate::traffic::Period;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Brand text in the sidebar header
    pub brand: String,
    /// Console log level: trace, debug, info, warn or error
    pub log_level: String,
    /// Caption under the traffic chart title
    pub traffic_caption: String,
    /// Period selected when the traffic panel mounts
    pub default_period: Period,
    pub layout: LayoutConfig,
    pub user: UserProfile,
    /// Breadcrumb trail; the last entry is the current page
    pub breadcrumbs: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            brand: "COREUI".to_string(),
            log_level: "info".to_string(),
            traffic_caption: "November 2017".to_string(),
            default_period: Period::Month,
            layout: LayoutConfig::default(),
            user: UserProfile::default(),
            breadcrumbs: vec!["Home".to_string(), "Admin".to_string(), "Dashboard".to_string()],
        }
    }
}

/// Fixed offsets of the layout shell, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub sidebar_width_px: u32,
    pub header_height_px: u32,
    pub content_padding_px: u32,
    /// Below this viewport width the sidebar goes off-canvas
    pub mobile_breakpoint_px: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sidebar_width_px: 256,
            header_height_px: 60,
            content_padding_px: 24,
            mobile_breakpoint_px: 768,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            avatar_url: None,
        }
    }
}

impl UserProfile {
    /// Avatar fallback: first letter of the name, upper-cased.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

impl DashboardConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let config: DashboardConfig =
            serde_json::from_str(raw).context("Failed to parse dashboard configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_json`](Self::from_json), but falls back to defaults.
    /// The error, if any, is returned alongside so the caller can log it once
    /// a logger is up.
    pub fn from_json_or_default(raw: &str) -> (Self, Option<anyhow::Error>) {
        match Self::from_json(raw) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let layout = &self.layout;
        ensure!(layout.sidebar_width_px > 0, "layout.sidebar_width_px must be positive");
        ensure!(layout.header_height_px > 0, "layout.header_height_px must be positive");
        ensure!(
            layout.mobile_breakpoint_px > 0,
            "layout.mobile_breakpoint_px must be positive"
        );
        ensure!(!self.breadcrumbs.is_empty(), "breadcrumbs must not be empty");
        ensure!(
            matches!(
                self.log_level.to_ascii_lowercase().as_str(),
                "trace" | "debug" | "info" | "warn" | "error"
            ),
            "unknown log_level '{}'",
            self.log_level
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.layout.sidebar_width_px, 256);
        assert_eq!(config.layout.header_height_px, 60);
        assert_eq!(config.default_period, Period::Month);
        assert_eq!(config.breadcrumbs.last().map(String::as_str), Some("Dashboard"));
    }

    #[test]
    fn test_partial_override() {
        let raw = r#"{
            "brand": "ACME",
            "default_period": "year",
            "layout": { "sidebar_width_px": 280 },
            "user": { "name": "jane doe" }
        }"#;
        let config = DashboardConfig::from_json(raw).unwrap();
        assert_eq!(config.brand, "ACME");
        assert_eq!(config.default_period, Period::Year);
        assert_eq!(config.layout.sidebar_width_px, 280);
        assert_eq!(config.layout.header_height_px, 60);
        assert_eq!(config.user.email, "admin@example.com");
        assert_eq!(config.user.initial(), "J");
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = DashboardConfig::from_json("{ brand: ").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_rejects_unknown_period() {
        assert!(DashboardConfig::from_json(r#"{ "default_period": "week" }"#).is_err());
    }

    #[test]
    fn test_rejects_zero_layout() {
        let err = DashboardConfig::from_json(r#"{ "layout": { "header_height_px": 0 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("header_height_px"));
    }

    #[test]
    fn test_rejects_empty_breadcrumbs() {
        assert!(DashboardConfig::from_json(r#"{ "breadcrumbs": [] }"#).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(DashboardConfig::from_json(r#"{ "log_level": "loud" }"#).is_err());
        assert!(DashboardConfig::from_json(r#"{ "log_level": "DEBUG" }"#).is_ok());
    }

    #[test]
    fn test_fallback_keeps_error() {
        let (config, err) = DashboardConfig::from_json_or_default("not json");
        assert_eq!(config, DashboardConfig::default());
        assert!(err.is_some());

        let (_, err) = DashboardConfig::from_json_or_default("{}");
        assert!(err.is_none());
    }

    #[test]
    fn test_initial_fallback() {
        let user = UserProfile {
            name: String::new(),
            ..UserProfile::default()
        };
        assert_eq!(user.initial(), "U");
    }
}
