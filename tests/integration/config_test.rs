use std::fs;

use sysdash::core::clock::HourFormat;
use sysdash::DashboardConfig;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = DashboardConfig::default();
    assert_eq!(config.timezone, "America/New_York");
    assert_eq!(config.hour_format, HourFormat::H24);
    assert_eq!(config.fallback_ip, "8.8.8.8");
    assert_eq!(config.browser_command, "firefox");
    assert_eq!(config.quick_links.len(), 2);
    assert!(config.geo_cache_ttl_secs.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.json");

    let mut config = DashboardConfig::default();
    config.set("timezone", "Asia/Tokyo").unwrap();
    config.set("hour_format", "12h").unwrap();
    config.set("geo_cache_ttl_secs", "300").unwrap();
    config.save_to(&path).unwrap();

    let loaded = DashboardConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.hour_format, HourFormat::H12);
}

#[test]
fn test_config_missing_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let loaded = DashboardConfig::load_from(&temp_dir.path().join("absent.json")).unwrap();
    assert_eq!(loaded, DashboardConfig::default());
}

#[test]
fn test_config_partial_file_fills_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{ "timezone": "Europe/Paris" }"#).unwrap();

    let loaded = DashboardConfig::load_from(&path).unwrap();
    assert_eq!(loaded.timezone, "Europe/Paris");
    assert_eq!(loaded.refresh_interval_ms, 1000);
}

#[test]
fn test_config_corrupt_file_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, "not json at all").unwrap();

    let loaded = DashboardConfig::load_from(&path).unwrap();
    assert_eq!(loaded, DashboardConfig::default());
}

#[test]
fn test_config_rejects_invalid_values() {
    let mut config = DashboardConfig::default();

    assert!(config.set("timezone", "Nowhere/Special").is_err());
    assert!(config.set("refresh_interval_ms", "fast").is_err());
    assert!(config.set("geo_url_template", "http://ip-api.com/json/").is_err());
    assert!(config.set("no_such_key", "1").is_err());
}

#[test]
fn test_config_save_refuses_invalid() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    let config = DashboardConfig {
        refresh_interval_ms: 0,
        ..Default::default()
    };
    assert!(config.save_to(&path).is_err());
    assert!(!path.exists());
}

#[test]
fn test_config_zero_interval_on_disk_gives_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"refresh_interval_ms":0}"#).unwrap();

    let loaded = DashboardConfig::load_from(&path).unwrap();
    assert_eq!(loaded, DashboardConfig::default());
    assert!(!loaded.refresh_interval().is_zero());
}

#[test]
fn test_config_invalid_values_on_disk_give_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{"refresh_interval_ms":0,"http_timeout_secs":0,"timezone":"Bogus/Zone"}"#,
    )
    .unwrap();

    let loaded = DashboardConfig::load_from(&path).unwrap();
    assert_eq!(loaded.refresh_interval_ms, 1000);
    assert_eq!(loaded.http_timeout_secs, 8);
    assert_eq!(loaded.timezone, "America/New_York");
}
