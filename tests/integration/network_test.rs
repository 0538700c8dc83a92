use std::net::Ipv4Addr;
use std::time::Duration;

use sysdash::core::network::{fetch_public_ip, parse_ip_brief};
use sysdash::core::NetworkInfoProbe;
use sysdash::platform::list_ipv4_interfaces;
use sysdash::DashError;

use super::http_stub::serve_once;

const IP_BRIEF_OUTPUT: &str = "\
lo               UNKNOWN        127.0.0.1/8
eth0             UP             192.168.1.20/24
docker0          DOWN           172.17.0.1/16
wlan0            DOWN
";

#[test]
fn test_parse_ip_brief_keeps_order() {
    let interfaces = parse_ip_brief(IP_BRIEF_OUTPUT);

    let names: Vec<&str> = interfaces.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["lo", "eth0", "docker0"]);
    assert_eq!(interfaces[1].address, Ipv4Addr::new(192, 168, 1, 20));
    assert_eq!(interfaces[1].cidr(), "192.168.1.20/24");
}

#[test]
fn test_local_interfaces_are_ipv4() {
    // The result may be empty in a sandbox; every entry must still be well-formed
    for iface in list_ipv4_interfaces() {
        assert!(!iface.name.is_empty());
        if let Some(prefix) = iface.prefix_len {
            assert!(prefix <= 32);
        }
    }
}

#[test]
fn test_snapshot_degrades_when_unreachable() {
    let probe = NetworkInfoProbe::new("http://127.0.0.1:9/", Duration::from_secs(2));
    let snapshot = probe.snapshot();

    assert!(snapshot.public_ip.is_empty());
    assert!(snapshot.public_ip_error.is_some());
    assert_eq!(snapshot.public_ip_or("8.8.8.8"), "8.8.8.8");
}

#[test]
fn test_public_ip_from_echo_service() {
    let url = serve_once("200 OK", "203.0.113.7\n");
    let ip = fetch_public_ip(&url, Duration::from_secs(5)).unwrap();
    assert_eq!(ip, "203.0.113.7");
}

#[test]
fn test_public_ip_service_error_status() {
    let url = serve_once("503 Service Unavailable", "try later");
    let err = fetch_public_ip(&url, Duration::from_secs(5)).unwrap_err();
    assert!(matches!(err, DashError::NetworkUnreachable(_)));
    assert!(err.to_string().contains("503"));
}

#[test]
fn test_public_ip_garbled_body() {
    let url = serve_once("200 OK", "<html>captive portal</html>");
    let probe = NetworkInfoProbe::new(url, Duration::from_secs(5));

    let err = probe.public_ip().unwrap_err();
    assert!(matches!(err, DashError::NetworkUnreachable(_)));
}
