use crate::types::TimerId;

/// Which input of a timer form has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Project,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Project,
            FormField::Project => FormField::Title,
        }
    }
}

/// Row under the list cursor: a timer card or the trailing "+" create row.
///
/// Timers are held by id so the cursor stays on the same record when a
/// refresh reorders or replaces the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectedRow {
    Timer(TimerId),
    Create,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let end = self.next_boundary(self.cursor);
        self.value.drain(self.cursor..end);
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos - 1;
        while !self.value.is_char_boundary(p) {
            p -= 1;
        }
        p
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p < self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_respect_multibyte_chars() {
        let mut input = TextInput::from_str("kö");
        input.insert('k');
        assert_eq!(input.value, "kök");

        input.backspace();
        input.backspace();
        assert_eq!(input.value, "k");
        assert_eq!(input.cursor, 1);
    }

    #[test]
    fn editing_in_the_middle() {
        let mut input = TextInput::from_str("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.split_at_cursor(), ("ab", "c"));

        input.home();
        input.delete();
        assert_eq!(input.value, "bc");

        input.end();
        input.delete();
        assert_eq!(input.value, "bc");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::from_str("x");
        input.home();
        input.backspace();
        assert_eq!(input.value, "x");
    }
}
