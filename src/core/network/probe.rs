use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::list_ipv4_interfaces;

use super::http::DEFAULT_HTTP_TIMEOUT;
use super::interfaces::InterfaceAddress;
use super::public_ip::{fetch_public_ip, DEFAULT_PUBLIC_IP_URL};

/// Host network identity at one instant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    /// Dotted quad, empty when the lookup failed
    pub public_ip: String,
    pub interfaces: Vec<InterfaceAddress>,
    /// Why `public_ip` is empty, if it is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_ip_error: Option<String>,
}

impl NetworkSnapshot {
    /// The public IP, or `fallback` when the lookup failed
    pub fn public_ip_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.public_ip.is_empty() {
            fallback
        } else {
            &self.public_ip
        }
    }
}

/// Local interfaces plus the public-facing address
///
/// Holds only its settings. Every call is a fresh, single attempt.
#[derive(Debug, Clone)]
pub struct NetworkInfoProbe {
    public_ip_url: String,
    timeout: Duration,
}

impl NetworkInfoProbe {
    pub fn new<S: Into<String>>(public_ip_url: S, timeout: Duration) -> Self {
        Self {
            public_ip_url: public_ip_url.into(),
            timeout,
        }
    }

    /// IPv4 addresses bound to local interfaces, in OS order
    pub fn interfaces(&self) -> Vec<InterfaceAddress> {
        list_ipv4_interfaces()
    }

    /// Public IPv4 address via the echo service. No retries.
    pub fn public_ip(&self) -> Result<String> {
        fetch_public_ip(&self.public_ip_url, self.timeout)
    }

    /// Both readings. A failed public-IP lookup leaves the address empty and
    /// records why instead of failing the whole snapshot.
    pub fn snapshot(&self) -> NetworkSnapshot {
        let interfaces = self.interfaces();

        let (public_ip, public_ip_error) = match self.public_ip() {
            Ok(ip) => (ip, None),
            Err(e) => {
                log::warn!("Public IP lookup failed: {}", e);
                (String::new(), Some(e.notice()))
            }
        };

        NetworkSnapshot {
            public_ip,
            interfaces,
            public_ip_error,
        }
    }
}

impl Default for NetworkInfoProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_IP_URL, DEFAULT_HTTP_TIMEOUT)
    }
}
