//! World clock command.

use anyhow::Result;
use clap::ArgMatches;

use crate::core::clock::{self, HourFormat};
use crate::core::DashboardConfig;
use crate::ui::output;

pub fn execute(matches: &ArgMatches, config: &DashboardConfig) -> Result<()> {
    if let Some(filter) = matches.get_one::<String>("list") {
        let filter = filter.to_lowercase();
        clock::timezones()
            .into_iter()
            .filter(|tz| tz.to_lowercase().contains(&filter))
            .for_each(|tz| println!("{}", tz));
        return Ok(());
    }

    let timezone = matches
        .get_one::<String>("tz")
        .cloned()
        .unwrap_or_else(|| config.timezone.clone());

    let hour_format = if matches.get_flag("12h") {
        HourFormat::H12
    } else if matches.get_flag("24h") {
        HourFormat::H24
    } else {
        config.hour_format
    };

    output::heading(&format!("Current Time │ {}", timezone));
    match clock::now(&timezone, hour_format) {
        Ok(reading) => {
            output::field("Time", &reading.formatted);
            output::field("Date", &reading.date_line);
            output::field("UTC", &reading.instant.format("%Y-%m-%d %H:%M:%S").to_string());
        }
        Err(e) => {
            output::degraded("Time", &e.notice());
            output::dimmed("  Use 'sysdash time --list <filter>' to find a valid identifier");
        }
    }

    Ok(())
}
