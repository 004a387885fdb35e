//! Repeating router poll with an explicit start/stop lifecycle.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use crate::ports::{DashboardView, HttpClient};
use crate::services::dashboard_poller::DashboardPoller;

/// How often the router list is refreshed.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Background task calling [`DashboardPoller::fetch_routers`] once right
/// away and then every `period`.
///
/// Each tick starts its own fetch, so a slow or stalled request never holds
/// back the next one. There is no backoff: a failed fetch (already logged and
/// bannered by the poller) is simply followed by the next tick. Stopping or
/// dropping the handle cancels the loop along with any fetch still in flight.
pub struct PollTask {
    handle: Option<JoinHandle<()>>,
}

impl PollTask {
    /// Spawn the poll loop on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn start<C, V>(poller: Arc<DashboardPoller<C, V>>, period: Duration) -> Self
    where
        C: HttpClient + Send + Sync + 'static,
        V: DashboardView + Send + Sync + 'static,
    {
        assert!(!period.is_zero(), "poll period must be non-zero");

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // Dropped with this task on abort, which aborts its fetches too.
            let mut in_flight = JoinSet::new();
            loop {
                ticker.tick().await;
                while in_flight.try_join_next().is_some() {}
                let poller = Arc::clone(&poller);
                in_flight.spawn(async move {
                    // Failures are reported by the poller itself.
                    let _ = poller.fetch_routers().await;
                });
                tracing::trace!(in_flight = in_flight.len(), "router fetch started");
            }
        });
        tracing::info!(period_secs = period.as_secs(), "router poll started");

        Self {
            handle: Some(handle),
        }
    }

    /// Whether the loop is still scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Cancel the loop. Idempotent.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::info!("router poll stopped");
        }
    }
}

impl Drop for PollTask {
    fn drop(&mut self) {
        self.stop();
    }
}
