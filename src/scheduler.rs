//! Refresh Scheduler
//!
//! A single repeating timer that reloads whatever the active view shows.
//! The browser front end drives it with a JS interval; native front ends use
//! [`RefreshScheduler::run`].

use std::time::Duration;

use crate::loader::Loader;
use crate::view::View;

/// Default refresh period
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Which loader a refresh tick re-runs for `view`
///
/// The order-detail overlay is never refreshed by the timer.
pub fn dispatch(view: View) -> Loader {
    match view {
        View::Overview => Loader::Stats,
        View::Products => Loader::Products,
        View::Clients => Loader::Clients,
        View::Orders => Loader::Orders,
    }
}

/// Periodic refresh of the active view
#[derive(Debug, Clone, Copy)]
pub struct RefreshScheduler {
    period: Duration,
}

impl RefreshScheduler {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Tick until `shutdown` resolves
    ///
    /// The first refresh happens one full period after the call; the initial
    /// load is the caller's job. Returns the number of refreshes performed.
    #[cfg(feature = "native")]
    pub async fn run<T, B>(
        &self,
        dashboard: &crate::dashboard::DashboardClient<T, B>,
        shutdown: impl std::future::Future<Output = ()>,
    ) -> u64
    where
        T: crate::api::Transport,
        B: crate::charts::ChartBackend,
    {
        let mut interval = tokio::time::interval(self.period);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // First tick completes immediately
        interval.tick().await;

        tokio::pin!(shutdown);
        let mut ticks = 0;

        loop {
            tokio::select! {
                _ = interval.tick() => {}
                _ = &mut shutdown => break,
            }
            ticks += 1;

            // A slow backend must not hold up shutdown
            tokio::select! {
                _ = dashboard.refresh() => {}
                _ = &mut shutdown => {
                    tracing::debug!("Abandoning in-flight refresh");
                    break;
                }
            }
        }

        tracing::info!("Refresh scheduler stopped after {} ticks", ticks);
        ticks
    }
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(REFRESH_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_table() {
        assert_eq!(dispatch(View::Overview), Loader::Stats);
        assert_eq!(dispatch(View::Products), Loader::Products);
        assert_eq!(dispatch(View::Clients), Loader::Clients);
        assert_eq!(dispatch(View::Orders), Loader::Orders);
    }

    #[test]
    fn test_default_period() {
        assert_eq!(RefreshScheduler::default().period(), Duration::from_secs(30));
    }

    #[cfg(feature = "native")]
    #[tokio::test(start_paused = true)]
    async fn test_run_ticks_every_period() {
        use crate::api::testing::FakeTransport;
        use crate::api::{paths, DashboardApi};
        use crate::charts::testing::CountingBackend;
        use crate::dashboard::{testing::recording_targets, DashboardClient};

        let (targets, _recorded) = recording_targets();
        let transport = FakeTransport::new().respond(paths::PRODUCTS, "[]");
        let dashboard =
            DashboardClient::new(DashboardApi::new(transport), CountingBackend::default(), targets);
        dashboard.select_view("products").await;

        let ticks = RefreshScheduler::default()
            .run(&dashboard, tokio::time::sleep(Duration::from_secs(95)))
            .await;

        assert_eq!(ticks, 3);
        assert_eq!(dashboard.api().transport().call_count(paths::PRODUCTS), 3);
    }

    #[cfg(feature = "native")]
    #[tokio::test(start_paused = true)]
    async fn test_shutdown_interrupts_stalled_refresh() {
        use crate::api::testing::FakeTransport;
        use crate::api::{paths, DashboardApi};
        use crate::charts::testing::CountingBackend;
        use crate::dashboard::{testing::recording_targets, DashboardClient};

        let (targets, _recorded) = recording_targets();
        let transport = FakeTransport::new().respond(paths::PRODUCTS, "[]");
        let dashboard =
            DashboardClient::new(DashboardApi::new(transport), CountingBackend::default(), targets);
        dashboard.select_view("products").await;

        // The first timer refresh never gets an answer
        let _pending = dashboard.api().transport().gate(paths::PRODUCTS);

        let ticks = RefreshScheduler::default()
            .run(&dashboard, tokio::time::sleep(Duration::from_secs(45)))
            .await;

        assert_eq!(ticks, 1);
        assert_eq!(dashboard.api().transport().call_count(paths::PRODUCTS), 1);
    }
}
