//! The dashboard widgets. Each renders one literal dataset and owns any
//! state it needs.

mod kpi_card_grid;
mod social_stats_grid;
mod traffic_panel;
mod traffic_sales_details;

pub use kpi_card_grid::KpiCardGrid;
pub use social_stats_grid::SocialStatsGrid;
pub use traffic_panel::TrafficPanel;
pub use traffic_sales_details::TrafficSalesDetails;
