//! Single-line text buffer with cursor and selection.
//!
//! Indices are codepoint offsets into the buffer, never byte offsets, so every
//! position `0..=len` is a valid place to split the text. The selection is the
//! span between `selection_anchor` and `cursor`; when they are equal nothing is
//! selected.

use std::ops::Range;

use tessel_core::Direction;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextEditState {
    buffer: Vec<char>,
    cursor: usize,
    anchor: usize,
    revision: u64,
}

impl TextEditState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let mut st = Self::new();
        st.set_text(text);
        st
    }

    pub fn text(&self) -> String {
        self.buffer.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection_anchor(&self) -> usize {
        self.anchor
    }

    /// Bumped on every buffer mutation; unchanged by cursor motion.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn has_selection(&self) -> bool {
        self.anchor != self.cursor
    }

    pub fn selection_range(&self) -> Range<usize> {
        self.anchor.min(self.cursor)..self.anchor.max(self.cursor)
    }

    /// Text of the first `n` codepoints.
    pub fn prefix(&self, n: usize) -> String {
        self.buffer[..n.min(self.buffer.len())].iter().collect()
    }

    pub fn slice(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.buffer.len());
        let start = range.start.min(end);
        self.buffer[start..end].iter().collect()
    }

    /// Replace the whole buffer. Cursor and anchor are clamped, not reset.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = text.chars().collect();
        self.touch();
        self.clamp_indices();
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn clamp_indices(&mut self) {
        let len = self.buffer.len();
        self.cursor = self.cursor.min(len);
        self.anchor = self.anchor.min(len);
    }

    pub fn move_cursor(&mut self, pos: usize, extend_selection: bool) {
        self.cursor = pos.min(self.buffer.len());
        if !extend_selection {
            self.anchor = self.cursor;
        }
    }

    /// Step `delta` codepoints, stopping at either end.
    pub fn move_cursor_by(&mut self, delta: isize, extend_selection: bool) {
        let target = self.cursor.saturating_add_signed(delta);
        self.move_cursor(target, extend_selection);
    }

    /// Word-wise motion.
    ///
    /// Backward scans from the codepoint before the cursor down to the nearest
    /// space and lands on it (or on 0). Forward scans from the cursor up to the
    /// nearest space and lands one past it (or on the end).
    pub fn move_cursor_by_word(&mut self, direction: Direction, extend_selection: bool) {
        let len = self.buffer.len();
        let target = match direction {
            Direction::Backward => {
                if self.cursor == 0 || len == 0 {
                    0
                } else {
                    let mut x = (self.cursor - 1).min(len - 1);
                    while x > 0 && self.buffer[x] != ' ' {
                        x -= 1;
                    }
                    x
                }
            }
            Direction::Forward => {
                let mut x = self.cursor;
                while x < len && self.buffer[x] != ' ' {
                    x += 1;
                }
                (x + 1).min(len)
            }
        };
        self.move_cursor(target, extend_selection);
    }

    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.cursor = self.buffer.len();
    }

    fn delete_selection(&mut self) -> Option<String> {
        if !self.has_selection() {
            return None;
        }
        let range = self.selection_range();
        let removed: String = self.buffer.drain(range.clone()).collect();
        self.cursor = range.start;
        self.anchor = range.start;
        self.touch();
        Some(removed)
    }

    /// Replace the selection (if any) with `s`; the caret ends after it.
    pub fn insert_text(&mut self, s: &str) {
        self.clamp_indices();
        self.delete_selection();
        let at = self.cursor;
        let inserted: Vec<char> = s.chars().collect();
        let n = inserted.len();
        if n > 0 {
            self.buffer.splice(at..at, inserted);
            self.touch();
        }
        self.cursor = at + n;
        self.anchor = self.cursor;
    }

    /// Delete the selection, or one codepoint on the given side of the caret.
    pub fn delete_selection_or_char(&mut self, direction: Direction) {
        self.clamp_indices();
        if self.delete_selection().is_some() {
            return;
        }
        match direction {
            Direction::Backward if self.cursor > 0 => {
                self.buffer.remove(self.cursor - 1);
                self.cursor -= 1;
                self.anchor = self.cursor;
                self.touch();
            }
            Direction::Forward if self.cursor < self.buffer.len() => {
                self.buffer.remove(self.cursor);
                self.anchor = self.cursor;
                self.touch();
            }
            _ => {}
        }
    }

    pub fn copy_selection(&self) -> Option<String> {
        if !self.has_selection() {
            return None;
        }
        Some(self.slice(self.selection_range()))
    }

    pub fn cut_selection(&mut self) -> Option<String> {
        self.clamp_indices();
        self.delete_selection()
    }

    pub fn paste_at(&mut self, s: &str) {
        self.insert_text(s);
    }
}
