//! Periodic job runner with a cancellation handle.
//!
//! Replaces poll-forever loops: the owner decides the cadence, the job does
//! one blocking unit of work per tick, and dropping the handle stops it.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Shortest accepted period; `interval` panics on zero
pub const MINIMUM_TICK_PERIOD: Duration = Duration::from_millis(1);

/// Cancellation handle returned by [`spawn_ticker`]
///
/// The ticker stops when `cancel` is called or when the handle is dropped.
pub struct TickerHandle {
    shutdown_tx: broadcast::Sender<()>,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Stop the ticker. A job that is already running finishes on the
    /// blocking pool but its result is dropped.
    pub fn cancel(&self) {
        // send() only fails once the loop has already exited
        let _ = self.shutdown_tx.send(());
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `job` on the blocking pool once per `period`, starting immediately.
///
/// Runs never overlap; ticks missed while a run is in progress are skipped.
pub fn spawn_ticker<F>(handle: &Handle, period: Duration, job: F) -> TickerHandle
where
    F: FnMut() + Send + 'static,
{
    let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
    let job = Arc::new(Mutex::new(job));

    let task = handle.spawn(ticker_loop(period.max(MINIMUM_TICK_PERIOD), job, shutdown_rx));

    TickerHandle { shutdown_tx, task }
}

async fn ticker_loop<F>(
    period: Duration,
    job: Arc<Mutex<F>>,
    mut shutdown: broadcast::Receiver<()>,
) where
    F: FnMut() + Send + 'static,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let job = Arc::clone(&job);
                let run = tokio::task::spawn_blocking(move || {
                    let mut job = job.lock();
                    (*job)()
                });

                tokio::select! {
                    result = run => {
                        if let Err(e) = result {
                            log::warn!("Ticker job panicked: {}", e);
                        }
                    }
                    _ = shutdown.recv() => break,
                }
            }
            _ = shutdown.recv() => break,
        }
    }

    log::debug!("Ticker stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_ticker_runs_until_cancelled() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);

        let handle = spawn_ticker(&Handle::current(), Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.cancel();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(handle.is_finished());
        let after_cancel = runs.load(Ordering::SeqCst);
        assert!(after_cancel >= 2, "expected several runs, got {}", after_cancel);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(runs.load(Ordering::SeqCst), after_cancel);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_dropping_handle_stops_ticker() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);

        let handle = spawn_ticker(&Handle::current(), Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(30)).await;
        drop(handle);
        tokio::time::sleep(Duration::from_millis(30)).await;

        let after_drop = runs.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(runs.load(Ordering::SeqCst), after_drop);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_cancel_abandons_slow_job() {
        let handle = spawn_ticker(&Handle::current(), Duration::from_millis(10), || {
            std::thread::sleep(Duration::from_millis(500));
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        handle.cancel();
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(handle.is_finished());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_zero_period_still_ticks() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);

        let handle = spawn_ticker(&Handle::current(), Duration::ZERO, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!handle.is_finished());
        assert!(runs.load(Ordering::SeqCst) >= 2);
        handle.cancel();
    }
}
