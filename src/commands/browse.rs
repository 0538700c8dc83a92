//! Browser launch command.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::{launch_browser, DashboardConfig};
use crate::ui::output;

pub fn execute(matches: &ArgMatches, config: &DashboardConfig) -> Result<()> {
    let target = matches.get_one::<String>("url").map(String::as_str);

    launch_browser(target, &config.browser_command).context("Failed to launch browser")?;

    match target {
        Some(url) => output::success(&format!("Opened {}", url)),
        None => output::success(&format!("{} launched", config.browser_command)),
    }
    Ok(())
}
