//! Append-only output scrollback.
//!
//! Lines accumulate for the lifetime of the console; the renderer only ever
//! sees a bottom-anchored window of the most recent entries. Scrolling moves
//! that window back through history without mutating the lines themselves.

/// Output history with a bottom-anchored visible window.
///
/// `scroll` counts how many lines the window is lifted above the newest
/// entry. Zero means the window is pinned to the bottom, which is also where
/// every `push` snaps it back to so fresh output is always seen.
#[derive(Debug, Default)]
pub struct Scrollback {
    lines: Vec<String>,
    scroll: usize,
}

impl Scrollback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line and snap the window back to the newest output.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.scroll = 0;
    }

    /// Discard all output lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll = 0;
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lift the window `n` lines toward older output.
    ///
    /// Clamped so the window never scrolls past the oldest line; a no-op
    /// when the whole history already fits in `capacity`.
    pub fn scroll_up(&mut self, n: usize, capacity: usize) {
        let max_scroll = self.lines.len().saturating_sub(capacity);
        self.scroll = (self.scroll + n).min(max_scroll);
    }

    /// Move the window `n` lines back toward the newest output.
    pub fn scroll_down(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    /// The slice of lines currently visible in a window of `max_lines`.
    ///
    /// Always the most recent lines when the window is at the bottom: with
    /// 25 lines stored and room for 10, this is lines 16 through 25. Returns
    /// everything when the history is shorter than the window, and an empty
    /// slice when `max_lines` is zero.
    pub fn visible_window(&self, max_lines: usize) -> &[String] {
        let len = self.lines.len();
        // Re-clamp in case the capacity shrank since the last scroll.
        let scroll = self.scroll.min(len.saturating_sub(max_lines));
        let end = len - scroll;
        let start = end.saturating_sub(max_lines);
        &self.lines[start..end]
    }
}
