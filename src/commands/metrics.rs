//! One-shot and streaming host metrics.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::ArgMatches;
use serde_json::json;
use tokio::sync::mpsc;

use crate::core::system_monitor::DEFAULT_CPU_WINDOW;
use crate::core::{spawn_ticker, DashboardConfig, HostMetricsProbe, MetricsSnapshot, SampleMode};
use crate::error::Result as DashResult;
use crate::ui::output;
use crate::ui::{format_load, format_percent, format_size};

pub fn execute(matches: &ArgMatches, config: &DashboardConfig) -> Result<()> {
    let mode = if matches.get_flag("instant") {
        SampleMode::Instant
    } else {
        let window = matches
            .get_one::<u64>("window")
            .map(|ms| Duration::from_millis(*ms))
            .unwrap_or(DEFAULT_CPU_WINDOW);
        SampleMode::Windowed(window)
    };
    let json_output = matches.get_flag("json");

    if matches.get_flag("watch") {
        return run_watch(config.refresh_interval(), json_output);
    }

    let mut probe = HostMetricsProbe::new();
    print_sample(&probe.sample(mode), json_output)
}

fn print_sample(sample: &DashResult<MetricsSnapshot>, json_output: bool) -> Result<()> {
    if json_output {
        let value = match sample {
            Ok(snapshot) => serde_json::to_value(snapshot)?,
            Err(e) => json!({ "error": e.to_string() }),
        };
        println!("{}", serde_json::to_string(&value)?);
        return Ok(());
    }

    match sample {
        Ok(snapshot) => {
            output::heading("System Metrics");
            output::field("CPU", &format_percent(snapshot.cpu_percent));
            output::field(
                "Memory",
                &format!(
                    "{} ({} / {})",
                    format_percent(snapshot.memory_percent),
                    format_size(snapshot.memory_used_bytes),
                    format_size(snapshot.memory_total_bytes)
                ),
            );
            output::field("Load (1/5/15)", &format_load(snapshot.load_average));
        }
        Err(e) => {
            output::heading("System Metrics");
            output::degraded("Metrics", &e.notice());
        }
    }
    Ok(())
}

/// Sample on a ticker until Ctrl+C
fn run_watch(period: Duration, json_output: bool) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .thread_name("sysdash-watch")
        .build()
        .context("Failed to start runtime")?;

    let (stop_tx, mut stop_rx) = mpsc::unbounded_channel::<()>();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .context("Failed to install Ctrl+C handler")?;

    let mut probe = HostMetricsProbe::new();
    let mut primed = false;
    let ticker = spawn_ticker(runtime.handle(), period, move || {
        let mode = if primed {
            SampleMode::Instant
        } else {
            primed = true;
            SampleMode::Windowed(Duration::ZERO)
        };

        if let Err(e) = print_sample(&probe.sample(mode), json_output) {
            log::warn!("Failed to print sample: {}", e);
        }
        if !json_output {
            println!();
        }
    });

    // Blocks until Ctrl+C
    let _ = stop_rx.blocking_recv();

    ticker.cancel();
    runtime.shutdown_background();
    if !json_output {
        output::dimmed("Stopped.");
    }
    Ok(())
}
