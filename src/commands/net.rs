//! Network identity command.

use anyhow::Result;
use clap::ArgMatches;

use crate::core::DashboardConfig;
use crate::ui::output;

pub fn execute(matches: &ArgMatches, config: &DashboardConfig) -> Result<()> {
    let snapshot = config.network_probe().snapshot();

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    output::heading("Network Overview");
    match &snapshot.public_ip_error {
        None => output::field("Public IP", &snapshot.public_ip),
        Some(notice) => output::degraded("Public IP", notice),
    }

    println!();
    output::heading("Local Interfaces");
    if snapshot.interfaces.is_empty() {
        output::dimmed("  no IPv4 addresses configured");
    }
    for iface in &snapshot.interfaces {
        output::field(&iface.name, &iface.cidr());
    }

    Ok(())
}
