// IPv4 interface enumeration
//
// Linux hosts get the `ip` utility's own listing, which keeps kernel order.
// Everywhere else (or when `ip` is missing or fails) sysinfo's enumeration
// is used, sorted by interface name since it has no stable order.

use std::net::IpAddr;
use std::process::Command;

use sysinfo::Networks;

use crate::core::network::{parse_ip_brief, InterfaceAddress};

/// List IPv4 addresses bound to local interfaces. Never fails; an empty list
/// means nothing is configured or nothing could be read.
pub fn list_ipv4_interfaces() -> Vec<InterfaceAddress> {
    match list_with_ip_utility() {
        Some(entries) => entries,
        None => list_with_sysinfo(),
    }
}

fn list_with_ip_utility() -> Option<Vec<InterfaceAddress>> {
    let ip = which::which("ip").ok()?;

    let output = match Command::new(&ip).args(["-br", "-4", "addr"]).output() {
        Ok(output) => output,
        Err(e) => {
            log::debug!("Failed to run {:?}: {}", ip, e);
            return None;
        }
    };

    if !output.status.success() {
        log::debug!("`ip -br -4 addr` exited with {}", output.status);
        return None;
    }

    Some(parse_ip_brief(&String::from_utf8_lossy(&output.stdout)))
}

fn list_with_sysinfo() -> Vec<InterfaceAddress> {
    let networks = Networks::new_with_refreshed_list();

    let mut entries: Vec<InterfaceAddress> = networks
        .iter()
        .filter(|(name, _)| !name.is_empty())
        .flat_map(|(name, data)| {
            data.ip_networks().iter().filter_map(move |net| match net.addr {
                IpAddr::V4(address) => Some(InterfaceAddress {
                    name: name.to_string(),
                    address,
                    prefix_len: Some(net.prefix),
                }),
                IpAddr::V6(_) => None,
            })
        })
        .collect();

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}
