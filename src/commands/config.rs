//! Settings management command.

use anyhow::{Context, Result};
use clap::ArgMatches;

use crate::core::DashboardConfig;
use crate::ui::output;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => {
            let config = DashboardConfig::load().context("Failed to load config")?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Some(("path", _)) => {
            println!("{}", DashboardConfig::get_config_path()?.display());
        }
        Some(("reset", _)) => {
            DashboardConfig::default()
                .save()
                .context("Failed to save config")?;
            output::success("Settings restored to defaults");
        }
        Some(("set", sub_matches)) => {
            let key = sub_matches
                .get_one::<String>("key")
                .context("KEY is required")?;
            let value = sub_matches
                .get_one::<String>("value")
                .context("VALUE is required")?;

            let mut config = DashboardConfig::load().context("Failed to load config")?;
            config.set(key, value)?;
            config.save().context("Failed to save config")?;
            output::success(&format!("{} = {}", key, value));
        }
        _ => {
            println!("Use 'sysdash config --help' for more information.");
        }
    }
    Ok(())
}
