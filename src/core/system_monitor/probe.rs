use std::time::Duration;

use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};

use crate::error::{DashError, Result};

use super::metrics::{clamp_percent, usage_percent, MetricsSnapshot, SampleMode};

/// Reads CPU, memory and load average from the local OS
///
/// Each probe owns its own `sysinfo::System`. Nothing is shared between two
/// probes, so independent callers each create their own.
pub struct HostMetricsProbe {
    system: System,
}

impl HostMetricsProbe {
    pub fn new() -> Self {
        let refresh_kind = RefreshKind::nothing()
            .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
            .with_memory(MemoryRefreshKind::nothing().with_ram());

        Self {
            system: System::new_with_specifics(refresh_kind),
        }
    }

    /// Take one snapshot.
    ///
    /// `SampleMode::Windowed` blocks for the window (never shorter than
    /// `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`). `SampleMode::Instant` returns
    /// immediately with usage since this probe's previous refresh; the first
    /// instant sample of a fresh probe reads 0%.
    pub fn sample(&mut self, mode: SampleMode) -> Result<MetricsSnapshot> {
        let cpu_percent = self.read_cpu(mode);

        self.system.refresh_memory();
        let total = self.system.total_memory();
        let used = self.system.used_memory();
        let memory_percent = usage_percent(used, total)
            .ok_or_else(|| DashError::probe_unavailable("total memory reported as zero"))?;

        let load_average = read_load_average()?;

        Ok(MetricsSnapshot {
            cpu_percent,
            memory_percent,
            load_average,
            memory_used_bytes: used,
            memory_total_bytes: total,
            taken_at: chrono::Utc::now(),
        })
    }

    fn read_cpu(&mut self, mode: SampleMode) -> f32 {
        match mode {
            SampleMode::Windowed(window) => {
                self.system.refresh_cpu_usage();
                std::thread::sleep(effective_window(window));
                self.system.refresh_cpu_usage();
            }
            SampleMode::Instant => self.system.refresh_cpu_usage(),
        }
        clamp_percent(self.system.global_cpu_usage())
    }
}

impl Default for HostMetricsProbe {
    fn default() -> Self {
        Self::new()
    }
}

fn effective_window(window: Duration) -> Duration {
    window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL)
}

#[cfg(unix)]
fn read_load_average() -> Result<(f64, f64, f64)> {
    let load = System::load_average();
    validate_load((load.one, load.five, load.fifteen))
}

#[cfg(not(unix))]
fn read_load_average() -> Result<(f64, f64, f64)> {
    Err(DashError::probe_unavailable(
        "load average is not exposed on this platform",
    ))
}

fn validate_load(load: (f64, f64, f64)) -> Result<(f64, f64, f64)> {
    let (one, five, fifteen) = load;
    if [one, five, fifteen]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    {
        Ok(load)
    } else {
        Err(DashError::probe_unavailable(format!(
            "invalid load average {:?}",
            load
        )))
    }
}
