//! Draft state for one open create-or-edit form.

use super::state::{FormField, TextInput};
use crate::store::Command;
use crate::types::{Timer, TimerAttrs, TimerDraft, TimerId};

/// What a form submits to: a new timer, or an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    Create,
    Edit(TimerId),
}

/// Transient field values of an open form. Never shared with other forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub target: FormTarget,
    pub title: TextInput,
    pub project: TextInput,
    pub focused_field: FormField,
}

/// The mutation an accepted form hands to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Create(TimerDraft),
    Update(TimerAttrs),
}

impl From<FormSubmission> for Command {
    fn from(submission: FormSubmission) -> Self {
        match submission {
            FormSubmission::Create(draft) => Command::Create(draft),
            FormSubmission::Update(attrs) => Command::Update(attrs),
        }
    }
}

impl FormDraft {
    pub fn for_create() -> Self {
        Self {
            target: FormTarget::Create,
            title: TextInput::new(),
            project: TextInput::new(),
            focused_field: FormField::Title,
        }
    }

    pub fn for_edit(timer: &Timer) -> Self {
        Self {
            target: FormTarget::Edit(timer.id.clone()),
            title: TextInput::from_str(&timer.title),
            project: TextInput::from_str(&timer.project),
            focused_field: FormField::Title,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.target, FormTarget::Edit(_))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_edit() {
            "Update"
        } else {
            "Create"
        }
    }

    pub fn focused_input(&self) -> &TextInput {
        match self.focused_field {
            FormField::Title => &self.title,
            FormField::Project => &self.project,
        }
    }

    fn focused_input_mut(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Title => &mut self.title,
            FormField::Project => &mut self.project,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.focused_input_mut().insert(c);
    }

    pub fn backspace(&mut self) {
        self.focused_input_mut().backspace();
    }

    pub fn delete(&mut self) {
        self.focused_input_mut().delete();
    }

    pub fn move_left(&mut self) {
        self.focused_input_mut().move_left();
    }

    pub fn move_right(&mut self) {
        self.focused_input_mut().move_right();
    }

    pub fn home(&mut self) {
        self.focused_input_mut().home();
    }

    pub fn end(&mut self) {
        self.focused_input_mut().end();
    }

    pub fn focus_next(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Consume the draft into the mutation it stands for.
    pub fn into_submission(self) -> FormSubmission {
        let title = self.title.value;
        let project = self.project.value;
        match self.target {
            FormTarget::Create => FormSubmission::Create(TimerDraft { title, project }),
            FormTarget::Edit(id) => FormSubmission::Update(TimerAttrs { id, title, project }),
        }
    }
}
