//! Admin Dashboard
//!
//! Static single-page admin dashboard: navigation sidebar, top bar, KPI
//! cards, a traffic chart with a period selector, social tiles and a
//! traffic & sales breakdown.
//!
//! Startup:
//! 1. `build.rs` stages `fixtures/dashboard.json` into `OUT_DIR`.
//! 2. `include_str!` embeds it; a bad file falls back to defaults.
//! 3. The logger is initialized at the configured level.
//! 4. The literal datasets are checked once and any problem is logged.
//! 5. The page mounts with the configuration provided as context.

use adm_data::validate::validate_all;
use adm_data::DashboardConfig;
use adm_ui::page::DashboardPage;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

// Embed the dashboard configuration at compile time.
const DASHBOARD_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/dashboard.json"));

fn main() {
    let (config, config_error) = DashboardConfig::from_json_or_default(DASHBOARD_JSON);
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);

    dioxus_logger::init(level).expect("failed to init logger");

    if let Some(e) = config_error {
        log::warn!("Using default dashboard configuration: {:#}", e);
    }
    for problem in validate_all() {
        log::warn!("{}", problem);
    }
    log::info!(
        "Launching {} dashboard ({} period, log level {})",
        config.brand,
        config.default_period,
        level
    );

    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("admin-dashboard-root"))
        .with_context(config)
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<DashboardConfig>();

    rsx! {
        DashboardPage { config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = DashboardConfig::from_json(DASHBOARD_JSON).unwrap();
        assert!(config.log_level.parse::<Level>().is_ok());
    }

    #[test]
    fn test_bundled_datasets_are_clean() {
        assert!(validate_all().is_empty());
    }
}
