use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::action_queue::{Action, ActionTx};

/// Periodically asks the event loop to refresh the timer list.
///
/// Owns a background task that can be stopped and started again; dropping the
/// scheduler stops it.
pub(crate) struct RefreshScheduler {
    period: Duration,
    action_tx: ActionTx,
    handle: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    pub(crate) fn new(period: Duration, action_tx: ActionTx) -> Self {
        Self {
            period,
            action_tx,
            handle: None,
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Start ticking. The first tick comes one period from now; the startup
    /// load happens separately. Restarting resets the phase.
    pub(crate) fn start(&mut self) {
        self.stop();

        let period = self.period;
        let action_tx = self.action_tx.clone();
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                if action_tx.send(Action::Refresh).is_err() {
                    tracing::debug!("action queue closed, refresh scheduler exiting");
                    break;
                }
            }
        }));
        tracing::debug!(?period, "refresh scheduler started");
    }

    pub(crate) fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("refresh scheduler stopped");
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}
