//! Host network identity: local IPv4 interfaces and the public address.

mod http;
mod interfaces;
mod probe;
mod public_ip;

pub use http::{get_text, DEFAULT_HTTP_TIMEOUT};
pub use interfaces::{parse_ip_brief, InterfaceAddress};
pub use probe::{NetworkInfoProbe, NetworkSnapshot};
pub use public_ip::{fetch_public_ip, parse_public_ip, DEFAULT_PUBLIC_IP_URL};
