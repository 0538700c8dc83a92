//! Background work for the dashboard.
//!
//! Metrics are polled by a ticker; network, geolocation and browser requests
//! run once on the blocking pool. Everything reports back over one channel
//! that the render loop drains between frames.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::geo::GeoLookup;
use crate::core::{
    launch_browser, spawn_ticker, DashboardConfig, HostMetricsProbe, NetworkInfoProbe,
    SampleMode, TickerHandle,
};

use super::app::{AppAction, DashboardUpdate};

pub struct DashboardRuntime {
    runtime: tokio::runtime::Runtime,
    updates_tx: UnboundedSender<DashboardUpdate>,
    updates_rx: UnboundedReceiver<DashboardUpdate>,
    network_probe: NetworkInfoProbe,
    geo: Arc<dyn GeoLookup>,
    browser_command: String,
    metrics_ticker: Option<TickerHandle>,
}

impl DashboardRuntime {
    pub fn new(config: &DashboardConfig) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_time()
            .thread_name("sysdash-worker")
            .build()?;

        let (updates_tx, updates_rx) = mpsc::unbounded_channel();

        let metrics_ticker = spawn_metrics_ticker(
            runtime.handle(),
            config.refresh_interval(),
            updates_tx.clone(),
        );

        Ok(Self {
            runtime,
            updates_tx,
            updates_rx,
            network_probe: config.network_probe(),
            geo: config.geo_lookup(),
            browser_command: config.browser_command.clone(),
            metrics_ticker: Some(metrics_ticker),
        })
    }

    /// Start the work for `action`; its result arrives through `drain`
    pub fn dispatch(&self, action: AppAction) {
        let tx = self.updates_tx.clone();

        match action {
            AppAction::RefreshNetwork => {
                let probe = self.network_probe.clone();
                self.runtime.spawn_blocking(move || {
                    let _ = tx.send(DashboardUpdate::Network(probe.snapshot()));
                });
            }
            AppAction::Locate(ip) => {
                let geo = Arc::clone(&self.geo);
                self.runtime.spawn_blocking(move || {
                    let result = geo.locate(&ip);
                    let _ = tx.send(DashboardUpdate::Geo { ip, result });
                });
            }
            AppAction::LaunchBrowser(target) => {
                let command = self.browser_command.clone();
                self.runtime.spawn_blocking(move || {
                    let result = launch_browser(target.as_deref(), &command);
                    let _ = tx.send(DashboardUpdate::BrowserLaunched { target, result });
                });
            }
        }
    }

    /// Everything that finished since the last call
    pub fn drain(&mut self) -> Vec<DashboardUpdate> {
        let mut updates = Vec::new();
        while let Ok(update) = self.updates_rx.try_recv() {
            updates.push(update);
        }
        updates
    }

    /// Stop polling and abandon in-flight lookups
    pub fn shutdown(mut self) {
        if let Some(ticker) = self.metrics_ticker.take() {
            ticker.cancel();
        }
        self.runtime.shutdown_background();
    }
}

fn spawn_metrics_ticker(
    handle: &tokio::runtime::Handle,
    period: Duration,
    updates_tx: UnboundedSender<DashboardUpdate>,
) -> TickerHandle {
    let mut probe = HostMetricsProbe::new();
    let mut primed = false;

    spawn_ticker(handle, period, move || {
        // A fresh probe has no previous CPU reading to compare against
        let mode = if primed {
            SampleMode::Instant
        } else {
            primed = true;
            SampleMode::Windowed(Duration::ZERO)
        };

        let _ = updates_tx.send(DashboardUpdate::Metrics(probe.sample(mode)));
    })
}
