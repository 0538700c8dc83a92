use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default CPU sampling window for windowed reads
pub const DEFAULT_CPU_WINDOW: Duration = Duration::from_secs(1);

/// Point-in-time host utilization
///
/// Created fresh on every poll and discarded after display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub cpu_percent: f32,
    pub memory_percent: f32,
    pub load_average: (f64, f64, f64), // 1, 5, 15 min
    pub memory_used_bytes: u64,
    pub memory_total_bytes: u64,
    pub taken_at: DateTime<Utc>,
}

/// How the CPU percentage is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleMode {
    /// Block for the given window between two CPU reads
    Windowed(Duration),
    /// Never block; report usage since the probe's previous read
    Instant,
}

impl Default for SampleMode {
    fn default() -> Self {
        SampleMode::Windowed(DEFAULT_CPU_WINDOW)
    }
}

/// Clamp a percentage into [0, 100], mapping NaN to 0
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Percentage of `used` over `total`, `None` when total is zero
pub fn usage_percent(used: u64, total: u64) -> Option<f32> {
    if total == 0 {
        None
    } else {
        Some(clamp_percent((used as f64 / total as f64 * 100.0) as f32))
    }
}
