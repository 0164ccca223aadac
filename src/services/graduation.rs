//! Periodic auto-graduation sweep

use crate::config::GraduationConfig;
use crate::core::batch::{BatchRecord, BatchService};
use crate::utils::error::Result;
use chrono::NaiveDate;
use std::future::Future;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Runs [`BatchService::auto_graduate_completed_batches`] on an interval
#[derive(Debug, Clone)]
pub struct GraduationScheduler {
    batches: BatchService,
    config: GraduationConfig,
}

impl GraduationScheduler {
    pub fn new(batches: BatchService, config: GraduationConfig) -> Self {
        Self { batches, config }
    }

    /// One sweep as of `today`
    pub async fn run_once(&self, today: NaiveDate) -> Result<Vec<BatchRecord>> {
        self.batches.auto_graduate_completed_batches(today).await
    }

    /// Sweep on every tick until `shutdown` resolves.
    ///
    /// A failed sweep is logged and retried on the next tick. Each sweep uses
    /// the local calendar date at the moment it runs.
    pub async fn run_until<F>(&self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        if !self.config.enabled {
            info!("Auto-graduation scheduler disabled");
            shutdown.await;
            return;
        }

        info!(
            "Auto-graduation scheduler started (every {}s)",
            self.config.interval_secs
        );

        let mut interval = tokio::time::interval(self.config.interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        if !self.config.run_on_startup {
            // The first tick completes immediately
            interval.tick().await;
        }

        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Auto-graduation scheduler stopping");
                    break;
                }
                _ = interval.tick() => {
                    let today = chrono::Local::now().date_naive();
                    debug!("Auto-graduation tick for {}", today);
                    match self.run_once(today).await {
                        Ok(graduated) if !graduated.is_empty() => {
                            info!("Scheduled sweep graduated {} batches", graduated.len());
                        }
                        Ok(_) => {}
                        Err(e) => warn!("Scheduled auto-graduation sweep failed: {}", e),
                    }
                }
            }
        }
    }
}

/// Resolve when `signal` fires.
///
/// A listener that fails to register never resolves, so the scheduler keeps
/// running instead of stopping at once.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
