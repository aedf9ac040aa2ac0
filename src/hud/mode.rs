//! Mode State Machine
//!
//! Tracks the display mode between frames and reports the edges the HUD
//! cares about. The simulation owns the mode; this only remembers what the
//! HUD last saw so it can build or tear down per-mode widgets.

use crate::sim::DisplayMode;

/// Edge observed between the previous and current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeChange {
    Unchanged,
    EnteredFocused,
    LeftFocused,
    /// Any other transition
    Switched { from: DisplayMode, to: DisplayMode },
}

#[derive(Debug, Clone, Default)]
pub struct ModeMachine {
    current: DisplayMode,
}

impl ModeMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> DisplayMode {
        self.current
    }

    /// Records the mode for this frame and classifies the transition
    pub fn observe(&mut self, mode: DisplayMode) -> ModeChange {
        let previous = std::mem::replace(&mut self.current, mode);
        if previous == mode {
            return ModeChange::Unchanged;
        }

        tracing::info!(from = ?previous, to = ?mode, "display mode changed");
        match (previous, mode) {
            (_, DisplayMode::Focused) => ModeChange::EnteredFocused,
            (DisplayMode::Focused, _) => ModeChange::LeftFocused,
            (from, to) => ModeChange::Switched { from, to },
        }
    }

    /// Abilities stay usable in every live mode except FOCUSED, where the
    /// number keys belong to the body-part menu
    pub fn abilities_usable(&self) -> bool {
        !matches!(self.current, DisplayMode::Focused | DisplayMode::Dead)
    }

    /// Panels keep refreshing until the run ends
    pub fn panels_live(&self) -> bool {
        !self.current.is_terminal()
    }
}
