//! Interactive dashboard command.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::clock::parse_timezone;
use crate::core::DashboardConfig;
use crate::ui::dashboard_tui::run_dashboard_app;

pub fn execute(matches: Option<&ArgMatches>, config: &DashboardConfig) -> Result<()> {
    let mut config = config.clone();

    if let Some(matches) = matches {
        if let Some(interval) = matches.get_one::<u64>("interval") {
            config.refresh_interval_ms = *interval;
        }
        if let Some(tz) = matches.get_one::<String>("tz") {
            parse_timezone(tz)?;
            config.timezone = tz.clone();
        }
    }

    run_dashboard_app(config).context("Failed to run dashboard")
}
