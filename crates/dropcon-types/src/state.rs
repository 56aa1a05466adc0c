//! Console visibility state.

/// The panel's visibility, one authoritative value.
///
/// Whether the console handles input is derived from this state (it does
/// while `Opening` or `Open`), never tracked as a separate flag that could
/// drift out of sync with the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityState {
    /// Fully off-screen. Initial state.
    #[default]
    Closed,
    /// Sliding into view.
    Opening,
    /// Fully on-screen.
    Open,
    /// Sliding out of view.
    Closing,
}

impl VisibilityState {
    /// True while the console accepts editing events.
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Opening | Self::Open)
    }
}
