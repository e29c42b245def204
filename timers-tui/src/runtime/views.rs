use crate::app::App;
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod timer_form;
mod timer_list;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

/// Route a key press to the open form under the cursor, or to the list.
pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.active_form_target() {
        Some(target) => timer_form::handle_form_key(key, target, app, action_tx),
        None => timer_list::handle_list_key(key, app, action_tx),
    }
}
