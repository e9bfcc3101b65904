//! Display records and static datasets for the admin dashboard.
//!
//! Everything the dashboard shows is defined here as plain Rust literals:
//! navigation entries, KPI cards, social tiles and the traffic/sales
//! breakdown. The only computed data is the traffic series, which is
//! regenerated from a seeded pseudo-random source whenever the selected
//! period changes.
//!
//! This crate has no UI dependency so that every dataset invariant and
//! state transition can be tested natively.

pub mod config;
pub mod error;
pub mod icon;
pub mod kpi;
pub mod navigation;
pub mod sales;
pub mod shell;
pub mod social;
pub mod tone;
pub mod traffic;
pub mod validate;

pub use config::DashboardConfig;
pub use icon::IconKind;
pub use tone::Tone;
pub use traffic::{Period, TrafficPanelState, TrafficPoint};
