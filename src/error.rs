use std::io;
use thiserror::Error;

/// Custom error type for sysdash
///
/// The first four variants are the probe failures. They are never fatal:
/// the dashboard turns them into an "unavailable" notice and tries again on
/// the next refresh.
#[derive(Error, Debug)]
pub enum DashError {
    #[error("Probe unavailable: {0}")]
    ProbeUnavailable(String),

    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("Geolocation lookup failed: {0}")]
    GeoLookupFailed(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Browser launch failed: {0}")]
    BrowserLaunch(String),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for sysdash
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    pub fn probe_unavailable<S: Into<String>>(msg: S) -> Self {
        DashError::ProbeUnavailable(msg.into())
    }

    pub fn network_unreachable<S: Into<String>>(msg: S) -> Self {
        DashError::NetworkUnreachable(msg.into())
    }

    pub fn geo_lookup_failed<S: Into<String>>(msg: S) -> Self {
        DashError::GeoLookupFailed(msg.into())
    }

    pub fn unknown_timezone<S: Into<String>>(name: S) -> Self {
        DashError::UnknownTimezone(name.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        DashError::Config(msg.into())
    }

    pub fn browser_launch<S: Into<String>>(msg: S) -> Self {
        DashError::BrowserLaunch(msg.into())
    }

    pub fn tui<S: Into<String>>(msg: S) -> Self {
        DashError::Tui(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DashError::Other(msg.into())
    }

    /// True for probe failures that a later refresh may clear.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            DashError::ProbeUnavailable(_)
                | DashError::NetworkUnreachable(_)
                | DashError::GeoLookupFailed(_)
                | DashError::UnknownTimezone(_)
        )
    }

    /// Short label used by the dashboard when a panel has to fall back.
    pub fn notice(&self) -> String {
        match self {
            DashError::ProbeUnavailable(msg) => format!("unavailable ({})", msg),
            DashError::NetworkUnreachable(msg) => format!("unreachable ({})", msg),
            DashError::GeoLookupFailed(msg) => format!("lookup failed ({})", msg),
            DashError::UnknownTimezone(name) => format!("unknown timezone '{}'", name),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_errors_are_transient() {
        assert!(DashError::probe_unavailable("no loadavg").is_transient());
        assert!(DashError::network_unreachable("timeout").is_transient());
        assert!(DashError::geo_lookup_failed("invalid query").is_transient());
        assert!(DashError::unknown_timezone("Invalid/Zone").is_transient());
        assert!(!DashError::config("bad").is_transient());
    }

    #[test]
    fn test_notice_mentions_cause() {
        let err = DashError::unknown_timezone("Mars/Olympus");
        assert_eq!(err.notice(), "unknown timezone 'Mars/Olympus'");

        let err = DashError::network_unreachable("timed out");
        assert!(err.notice().contains("timed out"));
    }
}
