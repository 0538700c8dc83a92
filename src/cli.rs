// Command-line definition

use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("sysdash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Operator dashboard: network identity, IP geolocation, world clock and live load")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Open the interactive dashboard (default)")
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("MS")
                        .help("Metrics refresh interval in milliseconds")
                        .value_parser(clap::value_parser!(u64).range(100..)),
                )
                .arg(
                    Arg::new("tz")
                        .long("tz")
                        .value_name("TIMEZONE")
                        .help("Initial timezone (IANA identifier)"),
                ),
        )
        .subcommand(
            Command::new("metrics")
                .about("Sample CPU, memory and load average")
                .arg(
                    Arg::new("instant")
                        .long("instant")
                        .help("Do not wait for a CPU sampling window")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("window"),
                )
                .arg(
                    Arg::new("window")
                        .short('w')
                        .long("window")
                        .value_name("MS")
                        .help("CPU sampling window in milliseconds (default: 1000)")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("watch")
                        .long("watch")
                        .help("Keep sampling at the configured interval until Ctrl+C")
                        .action(ArgAction::SetTrue),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("net")
                .about("Show the public IP and local IPv4 interfaces")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("geo")
                .about("Geolocate an IP (defaults to the public IP)")
                .arg(
                    Arg::new("ip")
                        .value_name("IP")
                        .help("Address to locate; forwarded to the provider as-is"),
                )
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("time")
                .about("Show the current time in a timezone")
                .arg(
                    Arg::new("tz")
                        .long("tz")
                        .value_name("TIMEZONE")
                        .help("IANA identifier (default: configured timezone)"),
                )
                .arg(
                    Arg::new("12h")
                        .long("12h")
                        .help("12-hour clock")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("24h"),
                )
                .arg(
                    Arg::new("24h")
                        .long("24h")
                        .help("24-hour clock")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("list")
                        .long("list")
                        .value_name("FILTER")
                        .help("List timezones, optionally only those containing FILTER")
                        .num_args(0..=1)
                        .default_missing_value(""),
                ),
        )
        .subcommand(
            Command::new("browse")
                .about("Launch the browser, optionally at a URL")
                .arg(Arg::new("url").value_name("URL").help("Page to open")),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings (use 'sysdash config --help' for subcommands)")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("Print the current settings"))
                .subcommand(Command::new("path").about("Print the config file location"))
                .subcommand(Command::new("reset").about("Restore default settings"))
                .subcommand(
                    Command::new("set")
                        .about("Change one setting")
                        .arg(Arg::new("key").value_name("KEY").required(true))
                        .arg(Arg::new("value").value_name("VALUE").required(true)),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("bash, zsh, fish, powershell or elvish")
                        .required(true),
                ),
        )
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print JSON instead of text")
        .action(ArgAction::SetTrue)
}
