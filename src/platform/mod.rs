// Platform-specific code module

pub mod interfaces;

pub use interfaces::list_ipv4_interfaces;
