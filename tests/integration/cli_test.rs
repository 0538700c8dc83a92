use sysdash::cli::build_cli;

#[test]
fn test_no_subcommand_is_accepted() {
    let matches = build_cli().try_get_matches_from(["sysdash"]).unwrap();
    assert!(matches.subcommand().is_none());
}

#[test]
fn test_metrics_arguments() {
    let matches = build_cli()
        .try_get_matches_from(["sysdash", "metrics", "--window", "250", "--json"])
        .unwrap();
    let (name, sub) = matches.subcommand().unwrap();

    assert_eq!(name, "metrics");
    assert_eq!(sub.get_one::<u64>("window"), Some(&250));
    assert!(sub.get_flag("json"));
    assert!(!sub.get_flag("instant"));
}

#[test]
fn test_dashboard_interval_lower_bound() {
    assert!(build_cli()
        .try_get_matches_from(["sysdash", "dashboard", "--interval", "10"])
        .is_err());
    assert!(build_cli()
        .try_get_matches_from(["sysdash", "dashboard", "--interval", "500"])
        .is_ok());
}

#[test]
fn test_geo_optional_ip() {
    let matches = build_cli()
        .try_get_matches_from(["sysdash", "geo", "1.1.1.1"])
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    assert_eq!(sub.get_one::<String>("ip").map(String::as_str), Some("1.1.1.1"));

    let matches = build_cli().try_get_matches_from(["sysdash", "geo"]).unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    assert!(sub.get_one::<String>("ip").is_none());
}

#[test]
fn test_time_list_filter() {
    let matches = build_cli()
        .try_get_matches_from(["sysdash", "time", "--list", "europe"])
        .unwrap();
    let (_, sub) = matches.subcommand().unwrap();
    assert_eq!(sub.get_one::<String>("list").map(String::as_str), Some("europe"));
}

#[test]
fn test_config_set_requires_key_and_value() {
    assert!(build_cli()
        .try_get_matches_from(["sysdash", "config", "set", "timezone"])
        .is_err());
    assert!(build_cli()
        .try_get_matches_from(["sysdash", "config", "set", "timezone", "UTC"])
        .is_ok());
    assert!(build_cli().try_get_matches_from(["sysdash", "config"]).is_err());
}
