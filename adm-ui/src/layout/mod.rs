//! The layout shell: fixed sidebar, fixed top bar and the offset content area.

mod app_layout;
mod sidebar;
mod top_bar;

pub use app_layout::AppLayout;
pub use sidebar::{NavEntry, Sidebar};
pub use top_bar::TopBar;
