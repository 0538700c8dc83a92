use std::time::Duration;

use url::Url;

use crate::core::network::{get_text, DEFAULT_HTTP_TIMEOUT};
use crate::error::{DashError, Result};

use super::record::{parse_geo_response, GeoRecord};

/// Default provider, keyed by the `{ip}` path segment
pub const DEFAULT_GEO_URL_TEMPLATE: &str = "http://ip-api.com/json/{ip}";

const IP_PLACEHOLDER: &str = "{ip}";
const SEGMENT_MARKER: &str = "__sysdash_ip__";

/// Anything that can resolve an IP string to a [`GeoRecord`]
pub trait GeoLookup: Send + Sync {
    fn locate(&self, ip: &str) -> Result<GeoRecord>;
}

/// Geolocation through a third-party HTTP provider
///
/// The input is not validated as an IP: it is forwarded as-is and the
/// provider's verdict is passed through. Nothing is cached.
#[derive(Debug, Clone)]
pub struct GeoLocator {
    url_template: String,
    timeout: Duration,
}

impl GeoLocator {
    pub fn new<S: Into<String>>(url_template: S, timeout: Duration) -> Self {
        Self {
            url_template: url_template.into(),
            timeout,
        }
    }

    /// Expand the template for one lookup. The IP becomes a single,
    /// percent-encoded path segment.
    pub fn lookup_url(&self, ip: &str) -> Result<Url> {
        build_lookup_url(&self.url_template, ip)
    }
}

impl Default for GeoLocator {
    fn default() -> Self {
        Self::new(DEFAULT_GEO_URL_TEMPLATE, DEFAULT_HTTP_TIMEOUT)
    }
}

impl GeoLookup for GeoLocator {
    fn locate(&self, ip: &str) -> Result<GeoRecord> {
        let url = self.lookup_url(ip)?;

        let (status, body) = get_text(url.as_str(), self.timeout).map_err(|e| match e {
            DashError::NetworkUnreachable(msg) => DashError::geo_lookup_failed(msg),
            other => other,
        })?;

        if !status.is_success() {
            log::warn!("Geolocation provider returned {} for '{}'", status, ip);
            return Err(DashError::geo_lookup_failed(format!(
                "provider returned status {}",
                status
            )));
        }

        parse_geo_response(ip, &body)
    }
}

/// Substitute `ip` for the `{ip}` path segment of `template`
///
/// Blank input and the dot segments `.`/`..` cannot be carried as a path
/// segment (URL parsing removes them, even percent-encoded), so they fail
/// the lookup instead of silently querying the bare endpoint.
pub fn build_lookup_url(template: &str, ip: &str) -> Result<Url> {
    if ip.trim().is_empty() {
        return Err(DashError::geo_lookup_failed("no IP address given"));
    }
    if ip == "." || ip == ".." {
        return Err(DashError::geo_lookup_failed(format!(
            "'{}' is not a valid IP address",
            ip
        )));
    }

    let mut url = Url::parse(&template.replace(IP_PLACEHOLDER, SEGMENT_MARKER))
        .map_err(|e| DashError::config(format!("invalid geolocation URL '{}': {}", template, e)))?;

    let segments: Vec<String> = url
        .path_segments()
        .map(|segs| segs.map(str::to_string).collect())
        .unwrap_or_default();

    if !segments.iter().any(|s| s == SEGMENT_MARKER) {
        return Err(DashError::config(format!(
            "geolocation URL '{}' has no {} path segment",
            template, IP_PLACEHOLDER
        )));
    }

    url.path_segments_mut()
        .map_err(|_| DashError::config(format!("geolocation URL '{}' cannot have a path", template)))?
        .clear()
        .extend(
            segments
                .iter()
                .map(|s| if s == SEGMENT_MARKER { ip } else { s.as_str() }),
        );

    Ok(url)
}
