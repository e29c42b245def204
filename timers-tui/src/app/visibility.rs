//! Open/collapsed state of the create form and of each timer's edit form.

use std::collections::HashMap;

use super::form::{FormDraft, FormSubmission, FormTarget};
use crate::types::{Timer, TimerId};

/// One form slot. A draft only exists while the slot is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormSlot {
    #[default]
    Collapsed,
    Open(FormDraft),
}

impl FormSlot {
    pub fn is_open(&self) -> bool {
        matches!(self, FormSlot::Open(_))
    }

    /// `collapsed -> open`. Opening an open slot keeps the draft in progress.
    pub fn open(&mut self, draft: FormDraft) {
        if let FormSlot::Collapsed = self {
            *self = FormSlot::Open(draft);
        }
    }

    /// `open -> collapsed`, handing back the draft that was discarded.
    pub fn close(&mut self) -> Option<FormDraft> {
        match std::mem::take(self) {
            FormSlot::Open(draft) => Some(draft),
            FormSlot::Collapsed => None,
        }
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match self {
            FormSlot::Open(draft) => Some(draft),
            FormSlot::Collapsed => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut FormDraft> {
        match self {
            FormSlot::Open(draft) => Some(draft),
            FormSlot::Collapsed => None,
        }
    }
}

/// The create slot plus one edit slot per timer. Slots never affect each other.
#[derive(Debug, Default)]
pub struct Forms {
    create: FormSlot,
    edits: HashMap<TimerId, FormSlot>,
}

impl Forms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create(&mut self) {
        self.create.open(FormDraft::for_create());
    }

    pub fn open_edit(&mut self, timer: &Timer) {
        self.edits
            .entry(timer.id.clone())
            .or_default()
            .open(FormDraft::for_edit(timer));
    }

    pub fn slot(&self, target: &FormTarget) -> Option<&FormSlot> {
        match target {
            FormTarget::Create => Some(&self.create),
            FormTarget::Edit(id) => self.edits.get(id),
        }
    }

    fn slot_mut(&mut self, target: &FormTarget) -> Option<&mut FormSlot> {
        match target {
            FormTarget::Create => Some(&mut self.create),
            FormTarget::Edit(id) => self.edits.get_mut(id),
        }
    }

    pub fn is_open(&self, target: &FormTarget) -> bool {
        self.slot(target).is_some_and(FormSlot::is_open)
    }

    pub fn draft(&self, target: &FormTarget) -> Option<&FormDraft> {
        self.slot(target).and_then(FormSlot::draft)
    }

    pub fn draft_mut(&mut self, target: &FormTarget) -> Option<&mut FormDraft> {
        self.slot_mut(target).and_then(FormSlot::draft_mut)
    }

    /// Cancel: collapse the slot and drop its draft without emitting anything.
    pub fn cancel(&mut self, target: &FormTarget) {
        self.close_slot(target);
    }

    /// Submit: collapse the slot and return the mutation its draft describes.
    pub fn submit(&mut self, target: &FormTarget) -> Option<FormSubmission> {
        self.close_slot(target).map(FormDraft::into_submission)
    }

    fn close_slot(&mut self, target: &FormTarget) -> Option<FormDraft> {
        let draft = self.slot_mut(target).and_then(FormSlot::close);
        if let FormTarget::Edit(id) = target {
            self.edits.remove(id);
        }
        draft
    }

    /// Drop edit slots whose timer is gone from the list.
    pub fn retain_timers(&mut self, timers: &[Timer]) {
        self.edits
            .retain(|id, _| timers.iter().any(|timer| &timer.id == id));
    }

    pub fn open_count(&self) -> usize {
        usize::from(self.create.is_open()) + self.edits.values().filter(|s| s.is_open()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(id: &str) -> Timer {
        Timer {
            id: TimerId::new(id),
            title: format!("title {id}"),
            project: "p".to_string(),
            elapsed: 0,
            running_since: None,
        }
    }

    #[test]
    fn slots_start_collapsed() {
        let forms = Forms::new();
        assert!(!forms.is_open(&FormTarget::Create));
        assert!(!forms.is_open(&FormTarget::Edit(TimerId::new("1"))));
        assert_eq!(forms.open_count(), 0);
    }

    #[test]
    fn cancel_discards_draft() {
        let mut forms = Forms::new();
        forms.open_create();
        forms
            .draft_mut(&FormTarget::Create)
            .unwrap()
            .input_char('x');

        forms.cancel(&FormTarget::Create);
        assert!(!forms.is_open(&FormTarget::Create));

        forms.open_create();
        assert_eq!(forms.draft(&FormTarget::Create).unwrap().title.value, "");
    }

    #[test]
    fn reopening_an_open_slot_keeps_the_draft() {
        let mut forms = Forms::new();
        forms.open_create();
        forms
            .draft_mut(&FormTarget::Create)
            .unwrap()
            .input_char('x');

        forms.open_create();
        assert_eq!(forms.draft(&FormTarget::Create).unwrap().title.value, "x");
    }

    #[test]
    fn submit_collapses_and_returns_submission() {
        let mut forms = Forms::new();
        let t = timer("1");
        let target = FormTarget::Edit(t.id.clone());
        forms.open_edit(&t);

        let submission = forms.submit(&target);

        assert!(matches!(submission, Some(FormSubmission::Update(_))));
        assert!(!forms.is_open(&target));
        assert_eq!(forms.submit(&target), None);
    }

    #[test]
    fn slots_are_independent() {
        let mut forms = Forms::new();
        let (a, b) = (timer("a"), timer("b"));
        forms.open_create();
        forms.open_edit(&a);
        forms.open_edit(&b);

        forms.cancel(&FormTarget::Edit(a.id.clone()));

        assert!(forms.is_open(&FormTarget::Create));
        assert!(forms.is_open(&FormTarget::Edit(b.id.clone())));
        assert!(!forms.is_open(&FormTarget::Edit(a.id)));
        assert_eq!(forms.open_count(), 2);
    }

    #[test]
    fn edit_slot_goes_away_with_its_timer() {
        let mut forms = Forms::new();
        let (a, b) = (timer("a"), timer("b"));
        forms.open_edit(&a);
        forms.open_edit(&b);

        forms.retain_timers(&[b.clone()]);

        assert!(!forms.is_open(&FormTarget::Edit(a.id)));
        assert!(forms.is_open(&FormTarget::Edit(b.id)));
    }
}
