use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{DashError, Result};

/// Default timeout for every outbound lookup
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(8);

fn user_agent() -> String {
    format!("sysdash/{}", env!("CARGO_PKG_VERSION"))
}

/// Build a one-shot client. Probes never keep a client (or its connection
/// pool) between calls.
pub fn build_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(user_agent())
        .build()
}

/// Single GET returning `(status, body)`.
///
/// Transport failures (DNS, connect, TLS, timeout) map to `NetworkUnreachable`;
/// status handling is left to the caller.
pub fn get_text(url: &str, timeout: Duration) -> Result<(reqwest::StatusCode, String)> {
    log::debug!("GET {}", url);

    let client = build_client(timeout)
        .map_err(|e| DashError::network_unreachable(format!("HTTP client setup failed: {}", e)))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| DashError::network_unreachable(describe_transport_error(&e)))?;

    let status = response.status();
    let body = response
        .text()
        .map_err(|e| DashError::network_unreachable(describe_transport_error(&e)))?;

    Ok((status, body))
}

fn describe_transport_error(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else if e.is_connect() {
        "connection failed".to_string()
    } else {
        e.to_string()
    }
}
