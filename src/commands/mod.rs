// Command handlers module
pub mod browse;
pub mod completions;
pub mod config;
pub mod dashboard;
pub mod geo;
pub mod metrics;
pub mod net;
pub mod time;
pub mod version;
