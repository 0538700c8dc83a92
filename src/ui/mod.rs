// UI and formatting module

pub mod dashboard_tui;
pub mod formatters;
pub mod output;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_load, format_percent, format_size};
