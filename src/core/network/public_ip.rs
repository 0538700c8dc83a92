use std::net::Ipv4Addr;
use std::time::Duration;

use crate::error::{DashError, Result};

use super::http::get_text;

/// Default plain-text "what is my IP" endpoint
pub const DEFAULT_PUBLIC_IP_URL: &str = "https://api.ipify.org";

/// Resolve the public-facing IPv4 address with a single GET to `url`.
///
/// Any failure, including a body that is not a dotted quad, is
/// `NetworkUnreachable`. A partial or garbled body is never returned.
pub fn fetch_public_ip(url: &str, timeout: Duration) -> Result<String> {
    let (status, body) = get_text(url, timeout)?;

    if !status.is_success() {
        return Err(DashError::network_unreachable(format!(
            "{} returned status {}",
            url, status
        )));
    }

    parse_public_ip(&body)
}

/// Validate an echo-service body as an IPv4 dotted quad
pub fn parse_public_ip(body: &str) -> Result<String> {
    let trimmed = body.trim();
    trimmed
        .parse::<Ipv4Addr>()
        .map(|ip| ip.to_string())
        .map_err(|_| {
            let preview: String = trimmed.chars().take(40).collect();
            DashError::network_unreachable(format!("unexpected response '{}'", preview))
        })
}
