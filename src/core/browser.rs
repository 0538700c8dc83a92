// Fire-and-forget browser launching
//
// A URL goes to the desktop's default handler. Without one, the configured
// browser executable is started bare. Neither waits for the browser or reads
// its output.

use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};

use crate::error::{DashError, Result};

pub const DEFAULT_BROWSER_COMMAND: &str = "firefox";

/// A labelled bookmark shown in the browser panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub label: String,
    pub url: String,
}

impl QuickLink {
    pub fn new<L: Into<String>, U: Into<String>>(label: L, url: U) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

pub fn default_quick_links() -> Vec<QuickLink> {
    vec![
        QuickLink::new("Red Hat Portal", "https://redhat.com"),
        QuickLink::new(
            "RHEL Documentation",
            "https://access.redhat.com/documentation",
        ),
    ]
}

/// Open `target` in the default browser, or start `browser_command` when
/// there is no target. Returns as soon as the process is spawned.
pub fn launch_browser(target: Option<&str>, browser_command: &str) -> Result<()> {
    match target.map(str::trim).filter(|t| !t.is_empty()) {
        Some(url) => open_url(url),
        None => spawn_browser(browser_command),
    }
}

fn open_url(url: &str) -> Result<()> {
    let parsed = url::Url::parse(url)
        .map_err(|e| DashError::browser_launch(format!("invalid URL '{}': {}", url, e)))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DashError::browser_launch(format!(
            "refusing to open non-web URL '{}'",
            url
        )));
    }

    log::info!("Opening {} in the default browser", parsed);
    open::that_detached(parsed.as_str())
        .map_err(|e| DashError::browser_launch(format!("could not open '{}': {}", url, e)))
}

fn spawn_browser(browser_command: &str) -> Result<()> {
    let executable = which::which(browser_command).map_err(|_| {
        DashError::browser_launch(format!("'{}' was not found in PATH", browser_command))
    })?;

    log::info!("Starting {:?}", executable);
    let mut child = Command::new(&executable)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| DashError::browser_launch(format!("failed to start {:?}: {}", executable, e)))?;

    // Reap in the background so the browser never lingers as a zombie
    std::thread::spawn(move || {
        let _ = child.wait();
    });

    Ok(())
}
