//! Generic building blocks shared by the shell and the widgets.

mod area_chart;
mod card;
mod empty_state;
mod icon;
mod mini_chart;
mod progress_bar;
mod sparkline;

pub use area_chart::{AreaChart, AreaChartModel, AxisLabel};
pub use card::Card;
pub use empty_state::EmptyState;
pub use icon::{icon_paths, Icon};
pub use mini_chart::MiniChart;
pub use progress_bar::{clamp_percent, ProgressBar};
pub use sparkline::Sparkline;
