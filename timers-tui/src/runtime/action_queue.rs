use crate::api::GatewayError;
use crate::store::{Command, RefreshTicket};
use crate::types::Timer;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug)]
pub(crate) enum Action {
    /// A user command against the canonical list.
    Execute(Command),
    /// Fetch a fresh snapshot from the server.
    Refresh,
    RefreshLoaded {
        ticket: RefreshTicket,
        result: Result<Vec<Timer>, GatewayError>,
    },
    /// A fire-and-forget write failed on the server side.
    RequestFailed {
        call: &'static str,
        error: GatewayError,
    },
}

pub(crate) type ActionTx = UnboundedSender<Action>;
pub(crate) type ActionRx = UnboundedReceiver<Action>;

pub(crate) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
