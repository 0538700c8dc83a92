//! Terminal dashboard.
//!
//! Five tabs over the core probes, rendered with ratatui.

mod app;
mod event_handler;
mod render;
mod runtime;
mod widgets;

pub use app::{run_dashboard_app, AppAction, DashboardApp, DashboardUpdate, Panel, Tab};
pub use event_handler::{map_key, DashboardEvent};
pub use runtime::DashboardRuntime;
