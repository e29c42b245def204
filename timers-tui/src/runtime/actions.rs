use crate::api::{self, TimerGateway};
use crate::app::App;
use crate::store::{GatewayRequest, RefreshTicket};
use crate::time_utils::now_millis;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::action_queue::{Action, ActionTx};

/// Fires gateway calls off the event loop and routes their outcome back
/// through the action queue.
///
/// Writes go through a single writer task so the server sees them in the
/// order they were applied locally. Refresh fetches run on their own.
pub(crate) struct Dispatcher {
    gateway: Arc<dyn TimerGateway>,
    action_tx: ActionTx,
    write_tx: UnboundedSender<GatewayRequest>,
    writer: JoinHandle<()>,
}

impl Dispatcher {
    pub(crate) fn new(gateway: Arc<dyn TimerGateway>, action_tx: ActionTx) -> Self {
        let (write_tx, write_rx) = mpsc::unbounded_channel();
        let writer = tokio::spawn(run_writer(gateway.clone(), write_rx, action_tx.clone()));
        Self {
            gateway,
            action_tx,
            write_tx,
            writer,
        }
    }

    /// Tell the server about a local mutation. Nobody waits for the answer;
    /// only a failure comes back, as [`Action::RequestFailed`].
    pub(crate) fn fire(&self, request: GatewayRequest) {
        if let Err(mpsc::error::SendError(request)) = self.write_tx.send(request) {
            tracing::warn!(call = request.describe(), "writer gone, request dropped");
        }
    }

    pub(crate) fn fetch(&self, ticket: RefreshTicket) -> JoinHandle<()> {
        let gateway = self.gateway.clone();
        let action_tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = gateway.get_timers().await;
            let _ = action_tx.send(Action::RefreshLoaded { ticket, result });
        })
    }

    /// Stop accepting writes and wait for the queued ones to be sent.
    pub(crate) async fn close(self) {
        let Self { write_tx, writer, .. } = self;
        drop(write_tx);
        if let Err(e) = writer.await {
            tracing::warn!(error = %e, "request writer ended abnormally");
        }
    }
}

async fn run_writer(
    gateway: Arc<dyn TimerGateway>,
    mut write_rx: UnboundedReceiver<GatewayRequest>,
    action_tx: ActionTx,
) {
    while let Some(request) = write_rx.recv().await {
        let call = request.describe();
        match api::send_request(gateway.as_ref(), &request).await {
            Ok(()) => tracing::debug!(call, "request accepted"),
            Err(error) => {
                let _ = action_tx.send(Action::RequestFailed { call, error });
            }
        }
    }
    tracing::debug!("request writer drained");
}

pub(crate) fn run_action(action: Action, app: &mut App, dispatcher: &Dispatcher) {
    match action {
        Action::Execute(command) => {
            if let Some(request) = app.execute(command, now_millis()) {
                dispatcher.fire(request);
            }
        }
        Action::Refresh => {
            if let Some(ticket) = app.refresh_in_flight {
                tracing::debug!(?ticket, "refresh still in flight, skipping tick");
                return;
            }
            let ticket = app.begin_refresh();
            dispatcher.fetch(ticket);
        }
        Action::RefreshLoaded { ticket, result } => match result {
            Ok(timers) => {
                let count = timers.len();
                if app.apply_refresh(ticket, timers, now_millis()) {
                    tracing::trace!(count, "applied server snapshot");
                }
            }
            Err(error) => {
                app.finish_refresh(ticket);
                tracing::warn!(%error, "refresh failed");
                app.set_status(format!("Refresh failed: {}", error));
            }
        },
        Action::RequestFailed { call, error } => {
            tracing::warn!(call, %error, "server rejected optimistic update");
            app.set_status(format!("Could not {}: {}", call, error));
        }
    }
}
