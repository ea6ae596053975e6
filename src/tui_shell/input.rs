/// Single-line text field. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

impl Input {
    pub(super) fn with_text(s: &str) -> Self {
        let mut input = Self::default();
        input.set(s.to_string());
        input
    }

    pub(super) fn insert_char(&mut self, c: char) {
        self.buf.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub(super) fn backspace(&mut self) {
        let Some(prev) = self.prev_boundary() else {
            return;
        };
        self.buf.remove(prev);
        self.cursor = prev;
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.buf.len() {
            return;
        }
        self.buf.remove(self.cursor);
    }

    pub(super) fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub(super) fn move_right(&mut self) {
        if let Some(c) = self.buf[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub(super) fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub(super) fn move_end(&mut self) {
        self.cursor = self.buf.len();
    }

    pub(super) fn set(&mut self, s: String) {
        self.buf = s;
        self.cursor = self.buf.len();
    }

    /// Column of the cursor in characters, for placing the terminal cursor.
    pub(super) fn cursor_col(&self) -> usize {
        self.buf[..self.cursor].chars().count()
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buf[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/input_tests.rs"]
mod tests;
