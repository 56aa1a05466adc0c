//! Single-line input editor with submission history.
//!
//! The cursor is a char index into the buffer, clamped to `0..=len` under
//! every operation. History recall snapshots the in-progress draft when it
//! starts, so stepping past the newest entry restores exactly what was being
//! typed.

use crate::tokenizer::tokenize;

/// An active history-recall session.
///
/// Lives from the first recall step until the draft is restored or the line
/// is submitted; editing a recalled entry does not end it. The draft is
/// valid by construction, with no sentinel index to keep in sync.
#[derive(Debug)]
struct Recall {
    /// Index into `history` of the entry currently shown.
    index: usize,
    /// The unsubmitted text captured when recall began.
    draft: String,
}

/// A submitted line, raw and tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The line exactly as typed.
    pub line: String,
    /// The line split by [`tokenize`]. Never empty.
    pub tokens: Vec<String>,
}

/// The console's editable input line.
#[derive(Debug, Default)]
pub struct InputLine {
    buffer: String,
    /// Char index, always in `0..=buffer.chars().count()`.
    cursor: usize,
    history: Vec<String>,
    recall: Option<Recall>,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current buffer text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position as a char index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Past submissions, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Byte offset of char index `pos`, or the buffer length past the end.
    fn byte_pos(&self, pos: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(self.buffer.len())
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    /// Insert `ch` at the cursor if it is printable (space through tilde).
    ///
    /// Control characters and anything outside the ASCII printable band are
    /// ignored. Editing leaves any recall session in place: stepping through
    /// history afterwards discards the edits, and stepping past the newest
    /// entry still restores the saved draft.
    pub fn insert_char(&mut self, ch: char) {
        if !(ch == ' ' || ch.is_ascii_graphic()) {
            return;
        }
        let at = self.byte_pos(self.cursor);
        self.buffer.insert(at, ch);
        self.cursor += 1;
    }

    /// Remove the char before the cursor, if any.
    pub fn delete_before_cursor(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_pos(self.cursor - 1);
        self.buffer.remove(at);
        self.cursor -= 1;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.char_count());
    }

    /// Step one entry back in history, saving the draft on the first step.
    ///
    /// No-op on empty history. At the oldest entry it stays put.
    pub fn recall_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match &mut self.recall {
            None => {
                let draft = std::mem::replace(
                    &mut self.buffer,
                    self.history[self.history.len() - 1].clone(),
                );
                self.recall = Some(Recall {
                    index: self.history.len() - 1,
                    draft,
                });
            },
            Some(recall) => {
                if recall.index > 0 {
                    recall.index -= 1;
                    self.buffer = self.history[recall.index].clone();
                }
            },
        }
        self.clamp_cursor();
    }

    /// Step one entry forward in history, restoring the draft past the
    /// newest entry.
    ///
    /// No-op when no recall session is active.
    pub fn recall_next(&mut self) {
        let Some(mut recall) = self.recall.take() else {
            return;
        };
        if recall.index + 1 < self.history.len() {
            recall.index += 1;
            self.buffer = self.history[recall.index].clone();
            self.recall = Some(recall);
        } else {
            self.buffer = recall.draft;
        }
        self.clamp_cursor();
    }

    /// Submit the buffer.
    ///
    /// The raw line is appended to history as typed, whitespace included.
    /// A buffer that tokenizes to nothing is left in place and yields
    /// `None`; otherwise the buffer is cleared and handed back with its
    /// tokens. Submitting always ends any recall session.
    pub fn submit(&mut self) -> Option<Submission> {
        self.recall = None;
        self.history.push(self.buffer.clone());
        let tokens = tokenize(&self.buffer);
        if tokens.is_empty() {
            return None;
        }
        let line = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        Some(Submission { line, tokens })
    }
}
