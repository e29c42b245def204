use crate::store::{Command, GatewayRequest, RefreshTicket, TimerStore};
use crate::types::Timer;

mod form;
mod state;
mod visibility;

pub use form::{FormDraft, FormTarget};
pub use state::{FormField, SelectedRow, TextInput};
pub use visibility::Forms;

/// Everything the UI renders from. The timer list itself lives in `store`
/// and is only changed through [`App::execute`] and [`App::apply_refresh`].
pub struct App {
    pub running: bool,
    pub store: TimerStore,
    pub forms: Forms,
    pub selected: SelectedRow,
    pub status_message: Option<String>,

    // Refresh bookkeeping
    pub refresh_in_flight: Option<RefreshTicket>,
    pub last_refreshed_at: Option<i64>,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            running: true,
            store: TimerStore::new(),
            forms: Forms::new(),
            selected: SelectedRow::Create,
            status_message: None,
            refresh_in_flight: None,
            last_refreshed_at: None,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn timers(&self) -> &[Timer] {
        self.store.timers()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Apply a user command to the canonical list.
    pub fn execute(&mut self, command: Command, now: i64) -> Option<GatewayRequest> {
        let previous = self.selected_index();
        let request = self.store.execute(command, now);
        self.after_list_change(previous);
        request
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        let ticket = self.store.begin_refresh();
        self.refresh_in_flight = Some(ticket);
        ticket
    }

    /// Install a server snapshot. Returns `false` if the response was stale.
    pub fn apply_refresh(&mut self, ticket: RefreshTicket, timers: Vec<Timer>, now: i64) -> bool {
        self.finish_refresh(ticket);
        let previous = self.selected_index();
        if !self.store.apply_refresh(ticket, timers) {
            return false;
        }
        self.last_refreshed_at = Some(now);
        self.after_list_change(previous);
        true
    }

    pub fn finish_refresh(&mut self, ticket: RefreshTicket) {
        if self.refresh_in_flight == Some(ticket) {
            self.refresh_in_flight = None;
        }
    }

    fn after_list_change(&mut self, previous_index: usize) {
        self.forms.retain_timers(self.store.timers());

        // A selected timer that vanished hands the cursor to whatever now
        // sits at its old position.
        if let SelectedRow::Timer(id) = &self.selected {
            if self.store.get(id).is_none() {
                let last = self.store.timers().len().saturating_sub(1);
                self.select_index(previous_index.min(last));
            }
        }
    }

    // Selection

    fn row_count(&self) -> usize {
        self.store.timers().len() + 1
    }

    /// Position of the selected row, with the create row last.
    pub fn selected_index(&self) -> usize {
        let timers = self.store.timers();
        match &self.selected {
            SelectedRow::Timer(id) => timers
                .iter()
                .position(|timer| &timer.id == id)
                .unwrap_or(timers.len()),
            SelectedRow::Create => timers.len(),
        }
    }

    fn select_index(&mut self, idx: usize) {
        self.selected = match self.store.timers().get(idx) {
            Some(timer) => SelectedRow::Timer(timer.id.clone()),
            None => SelectedRow::Create,
        };
    }

    pub fn select_next(&mut self) {
        let next = (self.selected_index() + 1) % self.row_count();
        self.select_index(next);
    }

    pub fn select_previous(&mut self) {
        let rows = self.row_count();
        let prev = (self.selected_index() + rows - 1) % rows;
        self.select_index(prev);
    }

    pub fn selected_timer(&self) -> Option<&Timer> {
        match &self.selected {
            SelectedRow::Timer(id) => self.store.get(id),
            SelectedRow::Create => None,
        }
    }

    /// The form slot belonging to the selected row.
    pub fn selected_target(&self) -> FormTarget {
        match self.selected_timer() {
            Some(timer) => FormTarget::Edit(timer.id.clone()),
            None => FormTarget::Create,
        }
    }

    /// The selected row's form, if it is open. Keystrokes go here.
    pub fn active_form_target(&self) -> Option<FormTarget> {
        let target = self.selected_target();
        self.forms.is_open(&target).then_some(target)
    }

    pub fn active_form_mut(&mut self) -> Option<&mut FormDraft> {
        let target = self.active_form_target()?;
        self.forms.draft_mut(&target)
    }

    // Form intents

    pub fn open_selected_form(&mut self) {
        match self.selected_timer().cloned() {
            Some(timer) => self.forms.open_edit(&timer),
            None => self.forms.open_create(),
        }
    }

    pub fn open_create_form(&mut self) {
        self.selected = SelectedRow::Create;
        self.forms.open_create();
    }

    pub fn cancel_form(&mut self, target: &FormTarget) {
        self.forms.cancel(target);
    }

    pub fn submit_form(&mut self, target: &FormTarget) -> Option<Command> {
        self.forms.submit(target).map(Command::from)
    }

    // Timer intents

    /// Start the selected timer if stopped, stop it if running.
    pub fn toggle_selected_command(&self) -> Option<Command> {
        let timer = self.selected_timer()?;
        Some(if timer.is_running() {
            Command::Stop(timer.id.clone())
        } else {
            Command::Start(timer.id.clone())
        })
    }

    pub fn delete_selected_command(&self) -> Option<Command> {
        self.selected_timer()
            .map(|timer| Command::Delete(timer.id.clone()))
    }
}
