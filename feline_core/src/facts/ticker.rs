//! Periodic ticker with an explicit cancellation handle.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::CoreError;

/// Owns a running ticker task. Dropping the handle cancels the task.
#[derive(Debug)]
pub struct TickerHandle {
    task: JoinHandle<()>,
}

/// Send `event` into `sender` every `period`, starting one period from now.
///
/// The task ends when the handle is cancelled or the receiving side is gone.
/// `period` must be non-zero. Must be called from within a tokio runtime.
pub fn spawn_ticker<T>(
    period: Duration,
    sender: mpsc::Sender<T>,
    event: T,
) -> Result<TickerHandle, CoreError>
where
    T: Clone + Send + 'static,
{
    if period.is_zero() {
        return Err(CoreError::ZeroPeriod);
    }

    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            if sender.send(event.clone()).await.is_err() {
                debug!("ticker receiver closed, stopping");
                break;
            }
        }
    });

    info!(period_ms = period.as_millis() as u64, "ticker started");
    Ok(TickerHandle { task })
}

impl TickerHandle {
    /// Stop the ticker. Safe to call more than once.
    pub fn cancel(&self) {
        if !self.task.is_finished() {
            self.task.abort();
            info!("ticker cancelled");
        }
    }

    /// Check if the task has stopped.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
