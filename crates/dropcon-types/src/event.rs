//! Logical console events.
//!
//! The host decodes its platform input (key codes, text entry, bindings)
//! into these events. The console engine never sees raw platform input.

/// A logical editing or control event fed to the console engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleEvent {
    /// A printable character typed into the input line.
    InsertChar(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Move the cursor one character left.
    CursorLeft,
    /// Move the cursor one character right.
    CursorRight,
    /// Move the cursor to the start of the input line.
    CursorHome,
    /// Move the cursor to the end of the input line.
    CursorEnd,
    /// Recall the previous (older) input history entry.
    HistoryUp,
    /// Recall the next (newer) input history entry, or the saved draft.
    HistoryDown,
    /// Page the output log toward older entries.
    ScrollPageUp,
    /// Page the output log toward newer entries.
    ScrollPageDown,
    /// Submit the current input line for dispatch.
    Submit,
    /// Open or close the console. Accepted even while the console is closed.
    ToggleVisibility,
}
