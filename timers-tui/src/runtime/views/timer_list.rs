use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        // Edit icon on a timer card, "+" on the create row
        KeyCode::Enter | KeyCode::Char('e') => app.open_selected_form(),
        KeyCode::Char('n') | KeyCode::Char('+') => app.open_create_form(),
        KeyCode::Char(' ') => {
            if let Some(command) = app.toggle_selected_command() {
                enqueue_action(action_tx, Action::Execute(command));
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(command) = app.delete_selected_command() {
                enqueue_action(action_tx, Action::Execute(command));
            }
        }
        KeyCode::Char('r') => {
            app.clear_status();
            enqueue_action(action_tx, Action::Refresh);
        }
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{FormTarget, SelectedRow};
    use crate::runtime::action_queue::channel;
    use crate::store::Command;
    use crate::types::{Timer, TimerId};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let mut app = App::new();
        let ticket = app.begin_refresh();
        app.apply_refresh(
            ticket,
            vec![
                Timer {
                    id: TimerId::new("a"),
                    title: "Stopped".to_string(),
                    project: "p".to_string(),
                    elapsed: 0,
                    running_since: None,
                },
                Timer {
                    id: TimerId::new("b"),
                    title: "Running".to_string(),
                    project: "p".to_string(),
                    elapsed: 0,
                    running_since: Some(1),
                },
            ],
            0,
        );
        app.selected = SelectedRow::Timer(TimerId::new("a"));
        app
    }

    fn press(code: KeyCode, app: &mut App) -> Option<Action> {
        let (tx, mut rx) = channel();
        handle_list_key(key(code), app, &tx);
        rx.try_recv().ok()
    }

    #[test]
    fn space_starts_stopped_and_stops_running() {
        let mut app = test_app();
        assert!(matches!(
            press(KeyCode::Char(' '), &mut app),
            Some(Action::Execute(Command::Start(id))) if id == TimerId::new("a")
        ));

        app.selected = SelectedRow::Timer(TimerId::new("b"));
        assert!(matches!(
            press(KeyCode::Char(' '), &mut app),
            Some(Action::Execute(Command::Stop(id))) if id == TimerId::new("b")
        ));
    }

    #[test]
    fn delete_targets_selected_timer() {
        let mut app = test_app();
        assert!(matches!(
            press(KeyCode::Char('d'), &mut app),
            Some(Action::Execute(Command::Delete(id))) if id == TimerId::new("a")
        ));
    }

    #[test]
    fn space_on_create_row_does_nothing() {
        let mut app = test_app();
        app.selected = SelectedRow::Create;
        assert!(press(KeyCode::Char(' '), &mut app).is_none());
    }

    #[test]
    fn enter_opens_edit_form_of_selected_timer() {
        let mut app = test_app();
        assert!(press(KeyCode::Enter, &mut app).is_none());
        assert_eq!(
            app.active_form_target(),
            Some(FormTarget::Edit(TimerId::new("a")))
        );
    }

    #[test]
    fn plus_opens_create_form() {
        let mut app = test_app();
        press(KeyCode::Char('+'), &mut app);
        assert_eq!(app.selected, SelectedRow::Create);
        assert_eq!(app.active_form_target(), Some(FormTarget::Create));
    }

    #[test]
    fn r_requests_refresh() {
        let mut app = test_app();
        assert!(matches!(
            press(KeyCode::Char('r'), &mut app),
            Some(Action::Refresh)
        ));
    }

    #[test]
    fn q_quits() {
        let mut app = test_app();
        press(KeyCode::Char('q'), &mut app);
        assert!(!app.running);
    }
}
