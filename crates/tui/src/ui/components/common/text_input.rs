//! Reusable UTF-8 safe text input state with cursor management.
//!
//! Backs every editable field in the provider form, including the
//! multi-line certificate area (newlines are ordinary characters here; the
//! line/column lookup supports cursor placement in multi-line renders).

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, Default)]
pub struct TextInputState {
    /// The underlying text buffer
    input: String,
    /// Cursor byte index into `input` (always on a UTF-8 boundary)
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor: 0,
        }
    }

    // ----- Getters -----
    pub fn input(&self) -> &str {
        &self.input
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn is_empty(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Display width of the text before the cursor, for single-line fields.
    pub fn cursor_columns(&self) -> usize {
        self.input[..self.cursor].width()
    }

    /// `(line, column-width)` of the cursor, for multi-line fields.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.input[..self.cursor];
        let line = before.matches('\n').count();
        let col = before.rsplit('\n').next().unwrap_or("").width();
        (line, col)
    }

    // ----- Setters -----
    pub fn set_input<S: Into<String>>(&mut self, s: S) {
        self.input = s.into();
        self.cursor = self.input.len().min(self.cursor);
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.input.len());
    }

    /// Load new content with the cursor parked at the end.
    pub fn load(&mut self, s: impl Into<String>) {
        self.input = s.into();
        self.cursor = self.input.len();
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    // ----- Editing primitives (UTF-8 safe) -----

    /// Move cursor one Unicode scalar to the left.
    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev_len = self.input[..self.cursor]
            .chars()
            .last()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
        self.cursor = self.cursor.saturating_sub(prev_len);
    }

    /// Move cursor one Unicode scalar to the right.
    pub fn move_right(&mut self) {
        if self.cursor >= self.input.len() {
            return;
        }
        let mut iter = self.input[self.cursor..].chars();
        if let Some(next) = iter.next() {
            self.cursor = self.cursor.saturating_add(next.len_utf8());
        }
    }

    /// Insert a char at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Backspace the char immediately before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.input[..self.cursor]
            .chars()
            .last()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
        let start = self.cursor - prev;
        self.input.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Delete the char at the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.input.len() {
            return;
        }
        let len = self.input[self.cursor..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(1);
        self.input.drain(self.cursor..self.cursor + len);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_move_insert_backspace() {
        let mut st = TextInputState::new();
        st.set_input("h🙂llo"); // emoji is 4 bytes
        st.set_cursor(1); // between h and 🙂
        st.insert_char('e');
        assert_eq!(st.input(), "he🙂llo");
        st.move_right(); // step over 🙂
        st.backspace(); // delete 🙂
        assert_eq!(st.input(), "hello");
        st.move_left();
        st.backspace();
        assert_eq!(st.input(), "ello");
    }

    #[test]
    fn delete_removes_char_at_cursor() {
        let mut st = TextInputState::new();
        st.load("abc");
        st.set_cursor(1);
        st.delete();
        assert_eq!(st.input(), "ac");
        st.set_cursor(2);
        st.delete(); // cursor at end, no-op
        assert_eq!(st.input(), "ac");
    }

    #[test]
    fn cursor_line_col_tracks_newlines() {
        let mut st = TextInputState::new();
        st.load("line one\nline two");
        assert_eq!(st.cursor_line_col(), (1, 8));
        st.set_cursor(4);
        assert_eq!(st.cursor_line_col(), (0, 4));
    }
}
