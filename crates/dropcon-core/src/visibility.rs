//! Open/close slide animation.
//!
//! The panel slides down from above the window. Its vertical offset runs
//! from `-panel_height` (fully hidden) to `0.0` (fully shown) and moves by
//! `slide_speed` pixels per `advance` call. State transitions happen only in
//! `show`/`hide`/`toggle` and at the travel endpoints in `advance`, so the
//! state and the offset can never disagree about which way the panel moves.

use dropcon_types::state::VisibilityState;

/// Slide animation state for the console panel.
#[derive(Debug)]
pub struct Visibility {
    state: VisibilityState,
    /// Top of the panel relative to the window top, `-panel_height..=0`.
    offset: f32,
    slide_speed: f32,
    panel_height: f32,
}

impl Visibility {
    /// Starts fully closed.
    pub fn new(panel_height: f32, slide_speed: f32) -> Self {
        Self {
            state: VisibilityState::Closed,
            offset: -panel_height,
            slide_speed,
            panel_height,
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// True while the console accepts editing events.
    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    /// Current vertical offset of the panel top, in pixels.
    pub fn offset_y(&self) -> f32 {
        self.offset
    }

    /// Begin sliding in. No-op if already open or opening.
    pub fn show(&mut self) {
        if matches!(
            self.state,
            VisibilityState::Closed | VisibilityState::Closing
        ) {
            self.state = VisibilityState::Opening;
            log::debug!("console opening");
        }
    }

    /// Begin sliding out. No-op if already closed or closing.
    pub fn hide(&mut self) {
        if matches!(self.state, VisibilityState::Open | VisibilityState::Opening) {
            self.state = VisibilityState::Closing;
            log::debug!("console closing");
        }
    }

    /// Reverse direction: a closing or closed panel opens, anything else
    /// closes. Mid-slide toggles reverse from the current offset, so rapid
    /// toggling never snaps the panel.
    pub fn toggle(&mut self) {
        match self.state {
            VisibilityState::Closed | VisibilityState::Closing => self.show(),
            VisibilityState::Open | VisibilityState::Opening => self.hide(),
        }
    }

    /// Advance the slide by one tick. Idle in `Closed` and `Open`.
    pub fn advance(&mut self) {
        match self.state {
            VisibilityState::Opening => {
                self.offset = (self.offset + self.slide_speed).min(0.0);
                if self.offset >= 0.0 {
                    self.state = VisibilityState::Open;
                }
            },
            VisibilityState::Closing => {
                self.offset = (self.offset - self.slide_speed).max(-self.panel_height);
                if self.offset <= -self.panel_height {
                    self.state = VisibilityState::Closed;
                }
            },
            VisibilityState::Closed | VisibilityState::Open => {},
        }
    }

    /// Update the travel distance after a resize or style change.
    ///
    /// A resting panel is re-anchored to its endpoint; a mid-slide panel
    /// keeps its offset, clamped into the new range.
    pub fn set_panel_height(&mut self, panel_height: f32) {
        self.panel_height = panel_height;
        match self.state {
            VisibilityState::Closed => self.offset = -panel_height,
            VisibilityState::Open => self.offset = 0.0,
            VisibilityState::Opening | VisibilityState::Closing => {
                self.offset = self.offset.clamp(-panel_height, 0.0);
            },
        }
    }

    pub fn set_slide_speed(&mut self, slide_speed: f32) {
        self.slide_speed = slide_speed;
    }
}
