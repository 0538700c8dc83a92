// Core probes, clock and polling

pub mod browser;
pub mod clock;
pub mod config;
pub mod geo;
pub mod network;
pub mod system_monitor;
pub mod ticker;

// Re-export commonly used items
pub use browser::{launch_browser, QuickLink};
pub use clock::{ClockReading, HourFormat};
pub use config::DashboardConfig;
pub use geo::{GeoLocator, GeoLookup, GeoRecord};
pub use network::{InterfaceAddress, NetworkInfoProbe, NetworkSnapshot};
pub use system_monitor::{HostMetricsProbe, MetricsSnapshot, SampleMode};
pub use ticker::{spawn_ticker, TickerHandle};
