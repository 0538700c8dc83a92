//! Host utilization probing.
//!
//! Reads CPU, memory and load average as immutable snapshots. No history is
//! kept between samples.

mod metrics;
mod probe;

pub use metrics::{
    clamp_percent, usage_percent, MetricsSnapshot, SampleMode, DEFAULT_CPU_WINDOW,
};
pub use probe::HostMetricsProbe;
