//! The console engine façade.
//!
//! Owns the editor, registry, scrollback, and slide animation and routes
//! logical events between them. Hosts drive it with three calls per frame:
//! feed translated events into `handle_event`, tick `advance`, then read the
//! accessors to paint.

use dropcon_types::event::ConsoleEvent;
use dropcon_types::state::VisibilityState;
use dropcon_types::style::Style;

use crate::editor::InputLine;
use crate::registry::{CommandHandler, CommandRegistry};
use crate::scrollback::Scrollback;
use crate::visibility::Visibility;

/// Embeddable developer console.
#[derive(Debug)]
pub struct ConsoleEngine {
    style: Style,
    width: u32,
    height: u32,
    editor: InputLine,
    registry: CommandRegistry,
    scrollback: Scrollback,
    visibility: Visibility,
}

impl ConsoleEngine {
    /// Create a closed console sized to a `width` by `height` pixel window.
    pub fn new(width: u32, height: u32, style: Style) -> Self {
        let panel_height = height as f32 * style.height_fraction;
        let visibility = Visibility::new(panel_height, style.slide_speed);
        log::info!("console created ({width}x{height}, panel height {panel_height})");
        Self {
            style,
            width,
            height,
            editor: InputLine::new(),
            registry: CommandRegistry::new(),
            scrollback: Scrollback::new(),
            visibility,
        }
    }

    /// Route one logical event.
    ///
    /// `ToggleVisibility` is always honored; every other event is dropped
    /// unless the console is opening or open.
    pub fn handle_event(&mut self, event: ConsoleEvent) {
        if event == ConsoleEvent::ToggleVisibility {
            self.visibility.toggle();
            return;
        }
        if !self.visibility.is_enabled() {
            return;
        }
        match event {
            ConsoleEvent::InsertChar(ch) => self.editor.insert_char(ch),
            ConsoleEvent::Backspace => self.editor.delete_before_cursor(),
            ConsoleEvent::CursorLeft => self.editor.move_cursor_left(),
            ConsoleEvent::CursorRight => self.editor.move_cursor_right(),
            ConsoleEvent::CursorHome => self.editor.move_cursor_to_start(),
            ConsoleEvent::CursorEnd => self.editor.move_cursor_to_end(),
            ConsoleEvent::HistoryUp => {
                self.editor.recall_previous();
                self.editor.move_cursor_to_end();
            },
            ConsoleEvent::HistoryDown => {
                self.editor.recall_next();
                self.editor.move_cursor_to_end();
            },
            ConsoleEvent::ScrollPageUp => {
                let capacity = self.visible_line_capacity();
                self.scrollback.scroll_up(capacity.max(1), capacity);
            },
            ConsoleEvent::ScrollPageDown => {
                let page = self.visible_line_capacity().max(1);
                self.scrollback.scroll_down(page);
            },
            ConsoleEvent::Submit => self.submit(),
            // Handled before the enabled gate.
            ConsoleEvent::ToggleVisibility => {},
        }
    }

    fn submit(&mut self) {
        let Some(submission) = self.editor.submit() else {
            return;
        };
        // Echo the line as typed before any command output.
        self.scrollback.push(submission.line.clone());
        // tokens is never empty for a successful submission
        let Some((name, args)) = submission.tokens.split_first() else {
            return;
        };
        if !self.registry.dispatch(name, args, &mut self.scrollback) {
            self.scrollback.push(format!("Unknown command \"{name}\""));
            log::debug!("unknown console command {name:?}");
        }
    }

    /// Advance the slide animation by one tick. Call once per frame.
    pub fn advance(&mut self) {
        self.visibility.advance();
    }

    /// Append a line to the scrollback regardless of visibility, so hosts
    /// can log to a closed console.
    pub fn print(&mut self, line: impl Into<String>) {
        self.scrollback.push(line);
    }

    /// Discard all scrollback lines.
    pub fn clear_output(&mut self) {
        self.scrollback.clear();
    }

    /// Register a command. The handler receives the tokens after the
    /// command name plus the output sink. Returns false and prints a
    /// diagnostic if the name is taken.
    pub fn register_command<F>(&mut self, name: impl Into<String>, handler: F) -> bool
    where
        F: FnMut(&[String], &mut Scrollback) + 'static,
    {
        self.registry
            .register(name, Box::new(handler) as CommandHandler, &mut self.scrollback)
    }

    /// Unregister a command. Returns false and prints a diagnostic if no
    /// such command exists.
    pub fn unregister_command(&mut self, name: &str) -> bool {
        self.registry.unregister(name, &mut self.scrollback)
    }

    pub fn is_command(&self, name: &str) -> bool {
        self.registry.is_registered(name)
    }

    /// Registered command names, sorted.
    pub fn command_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    // Render accessors. The host paints the panel from these; the engine
    // itself never draws.

    /// Current input buffer text.
    pub fn input_text(&self) -> &str {
        self.editor.text()
    }

    /// Cursor position in the input buffer, as a char index.
    pub fn cursor_position(&self) -> usize {
        self.editor.cursor()
    }

    /// A string of spaces with the cursor glyph at the cursor column, for
    /// hosts that draw the cursor as a text overlay under the input line.
    pub fn cursor_mask(&self) -> String {
        let mut mask = " ".repeat(self.editor.cursor());
        mask.push(self.style.cursor_char);
        mask
    }

    pub fn prompt(&self) -> char {
        self.style.prompt_char
    }

    /// Scrollback lines currently in view, oldest first.
    pub fn visible_lines(&self) -> &[String] {
        self.scrollback.visible_window(self.visible_line_capacity())
    }

    /// Vertical offset of the panel top in pixels; `0.0` when fully open.
    pub fn offset_y(&self) -> f32 {
        self.visibility.offset_y()
    }

    pub fn state(&self) -> VisibilityState {
        self.visibility.state()
    }

    pub fn is_enabled(&self) -> bool {
        self.visibility.is_enabled()
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn scrollback(&self) -> &Scrollback {
        &self.scrollback
    }

    fn panel_height(&self) -> f32 {
        self.height as f32 * self.style.height_fraction
    }

    /// Output lines that fit in the panel above the input row.
    ///
    /// The panel keeps a margin at top and bottom plus headroom for the
    /// input line and cursor row, three font heights in all.
    pub fn visible_line_capacity(&self) -> usize {
        let font = f32::from(self.style.font_size);
        let usable =
            self.panel_height() - 2.0 * self.style.margin as f32 - 3.0 * font;
        if usable <= 0.0 {
            return 0;
        }
        (usable / font) as usize
    }

    /// Replace the style, re-deriving panel geometry.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
        self.apply_geometry();
    }

    /// Track a host window resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.apply_geometry();
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn apply_geometry(&mut self) {
        self.visibility.set_panel_height(self.panel_height());
        self.visibility.set_slide_speed(self.style.slide_speed);
    }
}
