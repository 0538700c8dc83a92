use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::browser::{default_quick_links, QuickLink, DEFAULT_BROWSER_COMMAND};
use crate::core::clock::{parse_timezone, HourFormat, DEFAULT_TIMEZONE};
use crate::core::geo::{
    build_lookup_url, CachedGeoLocator, GeoLocator, GeoLookup, DEFAULT_CACHE_CAPACITY,
    DEFAULT_GEO_URL_TEMPLATE,
};
use crate::core::network::{NetworkInfoProbe, DEFAULT_PUBLIC_IP_URL};
use crate::error::{DashError, Result};

pub const DEFAULT_FALLBACK_IP: &str = "8.8.8.8";
const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1000;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 8;

/// Keys accepted by `sysdash config set`
pub const SETTABLE_KEYS: &[&str] = &[
    "timezone",
    "hour_format",
    "refresh_interval_ms",
    "http_timeout_secs",
    "public_ip_url",
    "geo_url_template",
    "fallback_ip",
    "browser_command",
    "geo_cache_ttl_secs",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub timezone: String,
    pub hour_format: HourFormat,
    pub refresh_interval_ms: u64,
    pub http_timeout_secs: u64,
    pub public_ip_url: String,
    /// Must contain an `{ip}` path segment
    pub geo_url_template: String,
    /// Used for geolocation when no IP was typed and the public IP is unknown
    pub fallback_ip: String,
    pub browser_command: String,
    pub quick_links: Vec<QuickLink>,
    /// Wrap geolocation in a time-expiring cache; off when unset
    pub geo_cache_ttl_secs: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            hour_format: HourFormat::default(),
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            public_ip_url: DEFAULT_PUBLIC_IP_URL.to_string(),
            geo_url_template: DEFAULT_GEO_URL_TEMPLATE.to_string(),
            fallback_ip: DEFAULT_FALLBACK_IP.to_string(),
            browser_command: DEFAULT_BROWSER_COMMAND.to_string(),
            quick_links: default_quick_links(),
            geo_cache_ttl_secs: None,
        }
    }
}

impl DashboardConfig {
    /// Load from the user config directory, falling back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Load from `path`. A missing, empty, unreadable-as-JSON or invalid file
    /// yields the defaults; an I/O failure on an existing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(e) => {
                // Happens when the config format changes between versions
                log::warn!("Ignoring unreadable config {:?}: {}", path, e);
                return Ok(Self::default());
            }
        };

        if let Err(e) = config.validate() {
            log::warn!("Ignoring invalid config {:?}: {}", path, e);
            return Ok(Self::default());
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DashError::config("Could not determine config directory"))?;

        Ok(config_dir.join("sysdash").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        parse_timezone(&self.timezone)?;

        if self.refresh_interval_ms == 0 {
            return Err(DashError::config("refresh_interval_ms must be greater than 0"));
        }
        if self.http_timeout_secs == 0 {
            return Err(DashError::config("http_timeout_secs must be greater than 0"));
        }
        if self.geo_cache_ttl_secs == Some(0) {
            return Err(DashError::config("geo_cache_ttl_secs must be greater than 0"));
        }
        if self.fallback_ip.trim().is_empty() {
            return Err(DashError::config("fallback_ip must not be empty"));
        }

        url::Url::parse(&self.public_ip_url)
            .map_err(|e| DashError::config(format!("invalid public_ip_url: {}", e)))?;
        build_lookup_url(&self.geo_url_template, &self.fallback_ip)?;

        Ok(())
    }

    /// Update one setting from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "timezone" => {
                parse_timezone(value)?;
                self.timezone = value.to_string();
            }
            "hour_format" => self.hour_format = value.parse()?,
            "refresh_interval_ms" => self.refresh_interval_ms = parse_number(key, value)?,
            "http_timeout_secs" => self.http_timeout_secs = parse_number(key, value)?,
            "public_ip_url" => self.public_ip_url = value.to_string(),
            "geo_url_template" => self.geo_url_template = value.to_string(),
            "fallback_ip" => self.fallback_ip = value.to_string(),
            "browser_command" => self.browser_command = value.to_string(),
            "geo_cache_ttl_secs" => {
                self.geo_cache_ttl_secs = match value {
                    "" | "off" | "none" => None,
                    _ => Some(parse_number(key, value)?),
                }
            }
            _ => {
                return Err(DashError::config(format!(
                    "unknown setting '{}' (expected one of: {})",
                    key,
                    SETTABLE_KEYS.join(", ")
                )))
            }
        }
        self.validate()
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn network_probe(&self) -> NetworkInfoProbe {
        NetworkInfoProbe::new(self.public_ip_url.clone(), self.http_timeout())
    }

    /// The geolocation backend, cached when `geo_cache_ttl_secs` is set
    pub fn geo_lookup(&self) -> Arc<dyn GeoLookup> {
        let locator = GeoLocator::new(self.geo_url_template.clone(), self.http_timeout());
        match self.geo_cache_ttl_secs {
            Some(ttl) => Arc::new(CachedGeoLocator::new(
                locator,
                Duration::from_secs(ttl),
                DEFAULT_CACHE_CAPACITY,
            )),
            None => Arc::new(locator),
        }
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| DashError::config(format!("{} expects a whole number, got '{}'", key, value)))
}
