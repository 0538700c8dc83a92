use chrono::{TimeZone, Utc};
use sysdash::core::clock::{self, HourFormat, DEFAULT_TIMEZONE};
use sysdash::DashError;

#[test]
fn test_default_timezone_renders() {
    let reading = clock::now(DEFAULT_TIMEZONE, HourFormat::H24).unwrap();
    assert_eq!(reading.timezone_name, "America/New_York");
    assert!(reading.formatted.ends_with(']'));
    assert!(reading.abbreviation == "EST" || reading.abbreviation == "EDT");
}

#[test]
fn test_same_instant_in_two_zones() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();

    let london = clock::at(instant, "Europe/London", HourFormat::H24).unwrap();
    let kolkata = clock::at(instant, "Asia/Kolkata", HourFormat::H24).unwrap();

    assert_eq!(london.formatted, "12:00:00 [GMT]");
    assert_eq!(kolkata.formatted, "17:30:00 [IST]");
    assert_eq!(london.instant, kolkata.instant);
}

#[test]
fn test_hour_format_switch() {
    let instant = Utc.with_ymd_and_hms(2024, 1, 10, 20, 15, 30).unwrap();

    let h24 = clock::at(instant, "UTC", HourFormat::H24).unwrap();
    let h12 = clock::at(instant, "UTC", HourFormat::H12).unwrap();

    assert_eq!(h24.formatted, "20:15:30 [UTC]");
    assert_eq!(h12.formatted, "08:15:30 PM [UTC]");
}

#[test]
fn test_unknown_timezone_is_reported() {
    let err = clock::now("Mars/Olympus_Mons", HourFormat::H24).unwrap_err();
    assert!(matches!(err, DashError::UnknownTimezone(_)));
    assert!(err.notice().contains("Mars/Olympus_Mons"));
}

#[test]
fn test_timezone_catalogue() {
    let zones = clock::timezones();
    assert!(zones.len() > 300);
    assert!(zones.contains(&"UTC"));
    assert!(zones.contains(&DEFAULT_TIMEZONE));
    assert!(zones.windows(2).all(|w| w[0] <= w[1]));
}
