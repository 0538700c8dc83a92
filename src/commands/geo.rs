//! IP geolocation command.

use anyhow::Result;
use clap::ArgMatches;
use serde_json::json;

use crate::core::DashboardConfig;
use crate::ui::output;

pub fn execute(matches: &ArgMatches, config: &DashboardConfig) -> Result<()> {
    let ip = match matches.get_one::<String>("ip").map(|s| s.trim()) {
        Some(ip) if !ip.is_empty() => ip.to_string(),
        _ => resolve_default_ip(config),
    };

    let result = config.geo_lookup().locate(&ip);

    if matches.get_flag("json") {
        let value = match &result {
            Ok(record) => serde_json::to_value(record)?,
            Err(e) => json!({ "ip": ip, "error": e.to_string() }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    output::heading(&format!("Geolocation for {}", ip));
    match result {
        Ok(record) => {
            output::field("Location", &record.place());
            output::field(
                "Coordinates",
                &format!("{:.4}, {:.4}", record.latitude, record.longitude),
            );
            for (key, value) in &record.fields {
                output::field(key, &value.to_string());
            }
        }
        Err(e) => output::degraded("Location", &e.notice()),
    }

    Ok(())
}

/// Public IP when reachable, the configured fallback otherwise
fn resolve_default_ip(config: &DashboardConfig) -> String {
    match config.network_probe().public_ip() {
        Ok(ip) => ip,
        Err(e) => {
            log::warn!("{}; using fallback {}", e, config.fallback_ip);
            config.fallback_ip.clone()
        }
    }
}
