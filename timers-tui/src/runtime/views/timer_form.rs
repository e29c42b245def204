use crate::app::{App, FormTarget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_form_key(
    key: KeyEvent,
    target: FormTarget,
    app: &mut App,
    action_tx: &ActionTx,
) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Enter => {
            if let Some(command) = app.submit_form(&target) {
                enqueue_action(action_tx, Action::Execute(command));
            }
        }
        KeyCode::Esc => app.cancel_form(&target),
        // Leaving the row keeps the draft; the slot stays open
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        _ => {
            let Some(draft) = app.forms.draft_mut(&target) else {
                return;
            };
            match key.code {
                KeyCode::Tab | KeyCode::BackTab => draft.focus_next(),
                KeyCode::Backspace => draft.backspace(),
                KeyCode::Delete => draft.delete(),
                KeyCode::Left => draft.move_left(),
                KeyCode::Right => draft.move_right(),
                KeyCode::Home => draft.home(),
                KeyCode::End => draft.end(),
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    draft.input_char(c);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{FormField, SelectedRow};
    use crate::runtime::action_queue::channel;
    use crate::store::Command;
    use crate::types::{Timer, TimerAttrs, TimerDraft, TimerId};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(s: &str, target: &FormTarget, app: &mut App, tx: &ActionTx) {
        for c in s.chars() {
            handle_form_key(key(KeyCode::Char(c)), target.clone(), app, tx);
        }
    }

    fn app_with_timer() -> App {
        let mut app = App::new();
        let ticket = app.begin_refresh();
        app.apply_refresh(
            ticket,
            vec![Timer {
                id: TimerId::new("a"),
                title: "Old".to_string(),
                project: "Proj".to_string(),
                elapsed: 300,
                running_since: None,
            }],
            0,
        );
        app.selected = SelectedRow::Timer(TimerId::new("a"));
        app
    }

    #[test]
    fn typing_and_enter_submit_create() {
        let mut app = App::new();
        app.open_create_form();
        let (tx, mut rx) = channel();
        let target = FormTarget::Create;

        type_str("Run", &target, &mut app, &tx);
        handle_form_key(key(KeyCode::Tab), target.clone(), &mut app, &tx);
        type_str("Health", &target, &mut app, &tx);
        handle_form_key(key(KeyCode::Enter), target.clone(), &mut app, &tx);

        match rx.try_recv() {
            Ok(Action::Execute(Command::Create(draft))) => assert_eq!(
                draft,
                TimerDraft {
                    title: "Run".to_string(),
                    project: "Health".to_string(),
                }
            ),
            other => panic!("unexpected action: {other:?}"),
        }
        assert!(!app.forms.is_open(&target));
    }

    #[test]
    fn edit_submit_carries_timer_id() {
        let mut app = app_with_timer();
        app.open_selected_form();
        let (tx, mut rx) = channel();
        let target = FormTarget::Edit(TimerId::new("a"));

        handle_form_key(key(KeyCode::Backspace), target.clone(), &mut app, &tx);
        type_str("d!", &target, &mut app, &tx);
        handle_form_key(key(KeyCode::Enter), target.clone(), &mut app, &tx);

        match rx.try_recv() {
            Ok(Action::Execute(Command::Update(attrs))) => assert_eq!(
                attrs,
                TimerAttrs {
                    id: TimerId::new("a"),
                    title: "Old!".to_string(),
                    project: "Proj".to_string(),
                }
            ),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn escape_cancels_without_mutation() {
        let mut app = app_with_timer();
        app.open_selected_form();
        let (tx, mut rx) = channel();
        let target = FormTarget::Edit(TimerId::new("a"));

        type_str("xyz", &target, &mut app, &tx);
        handle_form_key(key(KeyCode::Esc), target.clone(), &mut app, &tx);

        assert!(rx.try_recv().is_err());
        assert!(!app.forms.is_open(&target));
        assert_eq!(app.timers()[0].title, "Old");
    }

    #[test]
    fn list_shortcuts_are_plain_text_inside_form() {
        let mut app = App::new();
        app.open_create_form();
        let (tx, mut rx) = channel();
        let target = FormTarget::Create;

        type_str("q d", &target, &mut app, &tx);

        assert!(app.running);
        assert!(rx.try_recv().is_err());
        let draft = app.forms.draft(&target).unwrap();
        assert_eq!(draft.title.value, "q d");
        assert_eq!(draft.focused_field, FormField::Title);
    }
}
