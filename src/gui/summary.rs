//! End-of-Run Summary
//!
//! Modal dialog shown when the player dies. It is built from the run
//! statistics exactly once, takes input focus away from the HUD, and offers
//! two choices: return to the main menu or quit.
//!
//! # Example
//!
//! ```rust
//! use xibalba_hud::gui::{ActionRegistry, FocusScope, RunSummary};
//! use xibalba_hud::sim::RunStatistics;
//!
//! let mut registry = ActionRegistry::new();
//! let mut summary = RunSummary::new();
//!
//! let stats = RunStatistics { lowest_depth: 3, ..Default::default() };
//! assert!(summary.trigger(&stats, &mut registry));
//! assert!(!summary.trigger(&stats, &mut registry));
//!
//! assert_eq!(summary.builds(), 1);
//! assert_eq!(registry.focus(), FocusScope::Summary);
//! ```

use super::button::{ActionId, ActionRegistry, FocusScope, HudAction};
use crate::input::KeyChord;
use crate::sim::RunStatistics;
use crate::ui::{Line, Tone};

pub const SUMMARY_TITLE: &str = "YOU HAVE FAILED";

/// One-shot end-of-run dialog
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    lines: Vec<Line>,
    shown: bool,
    builds: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds and shows the dialog the first time it is called
    ///
    /// Later calls do nothing and return false.
    pub fn trigger(&mut self, stats: &RunStatistics, registry: &mut ActionRegistry) -> bool {
        if self.shown {
            return false;
        }

        self.lines = summary_lines(stats);
        registry.register(
            ActionId::SummaryConfirm,
            KeyChord::Enter,
            "Return to Main Menu",
            HudAction::ReturnToMainMenu,
            FocusScope::Summary,
        );
        registry.register(
            ActionId::SummaryQuit,
            KeyChord::letter('q'),
            "Quit",
            HudAction::Quit,
            FocusScope::Summary,
        );
        registry.set_focus(FocusScope::Summary);

        self.shown = true;
        self.builds += 1;
        true
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// How many times the dialog content was built (0 or 1)
    pub fn builds(&self) -> usize {
        self.builds
    }

    /// Dialog body, title first
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
}

/// Dialog body for a finished run
pub fn summary_lines(stats: &RunStatistics) -> Vec<Line> {
    vec![
        Line::toned(SUMMARY_TITLE, Tone::Normal),
        Line::toned("You made it to depth ", Tone::Muted)
            .push(stats.lowest_depth.to_string(), Tone::Normal),
        Line::toned("You hit enemies ", Tone::Muted)
            .push(stats.total_hits.to_string(), Tone::Normal)
            .push(" times and missed ", Tone::Muted)
            .push(stats.total_misses.to_string(), Tone::Normal),
        Line::toned("You did ", Tone::Muted)
            .push(stats.total_damage_done.to_string(), Tone::Normal)
            .push(" damage, took ", Tone::Muted)
            .push(stats.total_damage_received.to_string(), Tone::Normal)
            .push(", and healed ", Tone::Muted)
            .push(stats.total_damage_healed.to_string(), Tone::Normal),
        Line::toned("You killed ", Tone::Muted)
            .push(stats.total_kills.to_string(), Tone::Normal)
            .push(" enemies", Tone::Muted),
    ]
}
