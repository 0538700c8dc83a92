//! Current time in an arbitrary IANA timezone.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

pub const DEFAULT_TIMEZONE: &str = "America/New_York";

/// 12 or 24 hour rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HourFormat {
    H12,
    #[default]
    H24,
}

impl HourFormat {
    fn pattern(self) -> &'static str {
        match self {
            HourFormat::H12 => "%I:%M:%S %p [%Z]",
            HourFormat::H24 => "%H:%M:%S [%Z]",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            HourFormat::H12 => HourFormat::H24,
            HourFormat::H24 => HourFormat::H12,
        }
    }
}

impl fmt::Display for HourFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourFormat::H12 => f.write_str("12-hour"),
            HourFormat::H24 => f.write_str("24-hour"),
        }
    }
}

impl FromStr for HourFormat {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "12" | "12h" | "h12" | "12-hour" => Ok(HourFormat::H12),
            "24" | "24h" | "h24" | "24-hour" => Ok(HourFormat::H24),
            other => Err(DashError::config(format!(
                "unknown hour format '{}' (expected 12h or 24h)",
                other
            ))),
        }
    }
}

/// The current time as shown in one zone
#[derive(Debug, Clone, Serialize)]
pub struct ClockReading {
    pub timezone_name: String,
    pub instant: DateTime<Utc>,
    /// Time of day per the hour format, e.g. `14:03:07 [EST]`
    pub formatted: String,
    pub abbreviation: String,
    /// Long date in the same zone, e.g. `Monday, January 01, 2024`
    pub date_line: String,
}

/// Look up an IANA identifier
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| DashError::unknown_timezone(name))
}

/// Render `instant` in `timezone_name`. Pure: same inputs, same reading.
pub fn at(instant: DateTime<Utc>, timezone_name: &str, hour_format: HourFormat) -> Result<ClockReading> {
    let tz = parse_timezone(timezone_name)?;
    let local = instant.with_timezone(&tz);

    Ok(ClockReading {
        timezone_name: tz.name().to_string(),
        instant,
        formatted: local.format(hour_format.pattern()).to_string(),
        abbreviation: local.format("%Z").to_string(),
        date_line: local.format("%A, %B %d, %Y").to_string(),
    })
}

/// Render the current instant in `timezone_name`
pub fn now(timezone_name: &str, hour_format: HourFormat) -> Result<ClockReading> {
    at(Utc::now(), timezone_name, hour_format)
}

/// Every identifier in the bundled timezone database, sorted
pub fn timezones() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
    names.sort_unstable();
    names
}
