use anyhow::Result;

use sysdash::cli::build_cli;
use sysdash::commands;
use sysdash::core::DashboardConfig;
use sysdash::ui::output;

fn main() -> Result<()> {
    sysdash::init_logging();

    let matches = build_cli().get_matches();

    if matches.get_flag("version") {
        return commands::version::execute();
    }

    // A broken settings file should never keep the dashboard from starting
    let config = DashboardConfig::load().unwrap_or_else(|e| {
        output::warn(&format!("{}; using default settings", e));
        DashboardConfig::default()
    });

    match matches.subcommand() {
        Some(("dashboard", sub_matches)) => {
            commands::dashboard::execute(Some(sub_matches), &config)?;
        }
        Some(("metrics", sub_matches)) => {
            commands::metrics::execute(sub_matches, &config)?;
        }
        Some(("net", sub_matches)) => {
            commands::net::execute(sub_matches, &config)?;
        }
        Some(("geo", sub_matches)) => {
            commands::geo::execute(sub_matches, &config)?;
        }
        Some(("time", sub_matches)) => {
            commands::time::execute(sub_matches, &config)?;
        }
        Some(("browse", sub_matches)) => {
            commands::browse::execute(sub_matches, &config)?;
        }
        Some(("config", sub_matches)) => {
            commands::config::execute(sub_matches)?;
        }
        Some(("version", _)) => {
            commands::version::execute()?;
        }
        Some(("completions", sub_matches)) => {
            let mut cli = build_cli();
            commands::completions::execute(sub_matches, &mut cli)?;
        }
        _ => {
            commands::dashboard::execute(None, &config)?;
        }
    }

    Ok(())
}
