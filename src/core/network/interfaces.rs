use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

/// One IPv4 address bound to a local interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceAddress {
    pub name: String,
    pub address: Ipv4Addr,
    pub prefix_len: Option<u8>,
}

impl InterfaceAddress {
    /// CIDR form when the prefix is known, bare address otherwise
    pub fn cidr(&self) -> String {
        match self.prefix_len {
            Some(prefix) => format!("{}/{}", self.address, prefix),
            None => self.address.to_string(),
        }
    }
}

/// Parse the output of `ip -br -4 addr`.
///
/// Each line is `NAME STATE ADDR/PREFIX [ADDR/PREFIX ...]`. Lines without a
/// usable IPv4 address are skipped; an interface with several addresses
/// yields one entry per address, in the order printed.
pub fn parse_ip_brief(output: &str) -> Vec<InterfaceAddress> {
    let mut entries = Vec::new();

    for line in output.lines() {
        let mut fields = line.split_whitespace();

        let name = match fields.next() {
            // veth pairs are printed as "veth0@if5"
            Some(raw) => raw.split('@').next().unwrap_or(raw),
            None => continue,
        };
        if name.is_empty() {
            continue;
        }

        // Operational state
        if fields.next().is_none() {
            continue;
        }

        for token in fields {
            if let Some((address, prefix_len)) = parse_cidr(token) {
                entries.push(InterfaceAddress {
                    name: name.to_string(),
                    address,
                    prefix_len,
                });
            }
        }
    }

    entries
}

fn parse_cidr(token: &str) -> Option<(Ipv4Addr, Option<u8>)> {
    match token.split_once('/') {
        Some((addr, prefix)) => {
            let address = addr.parse().ok()?;
            let prefix = prefix.parse::<u8>().ok().filter(|p| *p <= 32)?;
            Some((address, Some(prefix)))
        }
        None => token.parse().ok().map(|address| (address, None)),
    }
}
