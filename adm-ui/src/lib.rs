//! Dioxus components for the admin dashboard.
//!
//! This crate provides:
//! - `geometry`: pure SVG path/shape math for the charts
//! - `theme`: the global stylesheet and tone-to-color lookup
//! - `components`: generic primitives (card, progress bar, icon, charts)
//! - `layout`: the shell (sidebar, top bar, content offset)
//! - `widgets`: the four dashboard widgets
//! - `page`: the dashboard page composing shell and widgets

pub mod components;
pub mod geometry;
pub mod layout;
pub mod page;
pub mod theme;
pub mod widgets;
