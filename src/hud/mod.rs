//! HUD Core
//!
//! Owns every HUD widget and keeps them in step with the simulation, one
//! frame at a time.
//!
//! # Frame order
//!
//! Each call to [`Hud::tick`]:
//! 1. Reads the current mode and builds or tears down per-mode widgets
//! 2. Re-renders the visible panels and the ability bar; once dead, shows
//!    the end-of-run summary instead, which takes input focus
//! 3. Dispatches this frame's input to the focused buttons and handles the
//!    resulting actions
//!
//! An action that commits a turn (resting, striking a body part) ends input
//! handling for the frame; any further events in the same frame are dropped.
//!
//! # Example Usage
//!
//! ```rust
//! use xibalba_hud::config::HudConfig;
//! use xibalba_hud::hud::Hud;
//! use xibalba_hud::input::{InputEvent, KeyChord};
//! use xibalba_hud::sim::ScriptedSimulation;
//!
//! let sim = ScriptedSimulation::new("Ixchel");
//! let mut hud = Hud::new(sim, HudConfig::default());
//!
//! hud.tick(&[]);
//! assert_eq!(hud.panels().player.len(), 5);
//!
//! hud.tick(&[InputEvent::Key(KeyChord::letter('z'))]);
//! assert!(hud.simulation().turn_requested());
//! ```

pub mod focused;
pub mod mode;
pub mod panels;

pub use focused::commit_focused_attack;
pub use mode::{ModeChange, ModeMachine};
pub use panels::HudPanels;

use crate::config::HudConfig;
use crate::gui::{ActionId, ActionRegistry, FocusScope, FocusedTargetMenu, HudAction, RunSummary};
use crate::input::{InputEvent, KeyChord};
use crate::sim::{DisplayMode, Simulation};
use crate::ui::Line;
use crate::ui::format::ability_label;

/// Navigation the HUD asks its host to perform
///
/// Screens outside the HUD (character sheet, pause menu, main menu) belong
/// to the host, so the HUD only reports the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudRequest {
    OpenCharacterScreen,
    OpenPauseMenu,
    ReturnToMainMenu,
    Quit,
}

/// The in-game heads-up display
pub struct Hud<S: Simulation> {
    sim: S,
    config: HudConfig,
    modes: ModeMachine,
    panels: HudPanels,
    registry: ActionRegistry,
    focused_menu: Option<FocusedTargetMenu>,
    summary: RunSummary,
    frame_rate: Option<u32>,
    frames: u64,
}

impl<S: Simulation> Hud<S> {
    /// Builds the permanent widgets: menu bar and ability bar
    pub fn new(sim: S, config: HudConfig) -> Self {
        let mut registry = ActionRegistry::new();

        let player = sim.player_snapshot();
        registry.register(
            ActionId::Character,
            KeyChord::letter('c'),
            player.name,
            HudAction::OpenCharacter,
            FocusScope::Hud,
        );
        registry.register(
            ActionId::Rest,
            KeyChord::letter('z'),
            "Rest",
            HudAction::Rest,
            FocusScope::Hud,
        );
        registry.register(
            ActionId::Pause,
            KeyChord::Escape,
            "Pause",
            HudAction::Pause,
            FocusScope::Hud,
        );

        let mut hud = Hud {
            sim,
            config,
            modes: ModeMachine::new(),
            panels: HudPanels::new(),
            registry,
            focused_menu: None,
            summary: RunSummary::new(),
            frame_rate: None,
            frames: 0,
        };
        hud.refresh_abilities();
        hud
    }

    /// Runs one display frame; returns navigation requests for the host
    pub fn tick(&mut self, events: &[InputEvent]) -> Vec<HudRequest> {
        self.frames += 1;

        let mode = self.sim.current_mode();
        self.apply_mode(mode);

        if self.modes.panels_live() {
            self.panels
                .refresh(&self.sim, mode, &self.config, self.frame_rate);
            self.refresh_abilities();
        } else {
            // Before dispatch, so the dead frame's input reaches only the summary
            self.show_summary();
        }

        let mut requests = Vec::new();
        'events: for event in events {
            for action in self.registry.dispatch(event) {
                tracing::debug!(?event, ?action, "button pressed");
                match self.handle(action) {
                    Outcome::Continue => {}
                    Outcome::Request(request) => requests.push(request),
                    Outcome::TurnCommitted => break 'events,
                }
            }
        }

        // Input may have changed the mode (a committed focused attack)
        self.apply_mode(self.sim.current_mode());

        requests
    }

    /// Builds the summary on the first dead frame; later calls do nothing
    fn show_summary(&mut self) {
        let stats = self.sim.player_snapshot().stats;
        if self.summary.trigger(&stats, &mut self.registry) {
            tracing::info!(
                depth = stats.lowest_depth,
                kills = stats.total_kills,
                "run over; showing summary"
            );
        }
    }

    /// Host-measured frame rate, shown in the debug row
    pub fn set_frame_rate(&mut self, fps: u32) {
        self.frame_rate = Some(fps);
    }

    /// Brings per-mode widgets in line with `mode`
    ///
    /// The body-part menu is built on the edge into FOCUSED and torn down on
    /// the edge out of it, so it exists exactly while the mode is FOCUSED.
    fn apply_mode(&mut self, mode: DisplayMode) {
        match self.modes.observe(mode) {
            ModeChange::EnteredFocused if self.focused_menu.is_none() => {
                let entity = self.sim.player_snapshot().focused_entity;
                let parts = entity
                    .map(|entity| self.sim.body_part_list(entity))
                    .unwrap_or_default();
                tracing::debug!(?entity, parts = parts.len(), "building focused menu");
                self.focused_menu = Some(FocusedTargetMenu::build(&mut self.registry, entity, parts));
            }
            ModeChange::LeftFocused => {
                if let Some(menu) = self.focused_menu.take() {
                    tracing::debug!("tearing down focused menu");
                    menu.teardown(&mut self.registry);
                }
            }
            _ => {}
        }
    }

    /// Re-labels and gates the ability bar from recharge progress
    ///
    /// Slots are added when the list grows and never removed; a slot whose
    /// ability disappeared is blanked and disabled.
    fn refresh_abilities(&mut self) {
        let abilities = self.sim.ability_list();

        for (slot, ability) in abilities.iter().enumerate() {
            let id = ActionId::Ability(slot);
            if !self.registry.contains(id) {
                self.registry.register(
                    id,
                    KeyChord::for_slot(slot),
                    Line::new(),
                    HudAction::UseAbility(slot),
                    FocusScope::Hud,
                );
            }
            self.registry.set_label(id, ability_label(ability));
            self.registry.set_enabled(id, ability.is_ready());
        }

        let stale: Vec<ActionId> = self
            .registry
            .buttons_where(|id| matches!(id, ActionId::Ability(slot) if slot >= abilities.len()))
            .iter()
            .map(|button| button.id)
            .collect();
        for id in stale {
            self.registry.set_label(id, Line::new());
            self.registry.set_enabled(id, false);
        }
    }

    fn handle(&mut self, action: HudAction) -> Outcome {
        match action {
            HudAction::OpenCharacter => Outcome::Request(HudRequest::OpenCharacterScreen),
            HudAction::Pause => Outcome::Request(HudRequest::OpenPauseMenu),
            HudAction::ReturnToMainMenu => Outcome::Request(HudRequest::ReturnToMainMenu),
            HudAction::Quit => Outcome::Request(HudRequest::Quit),
            HudAction::Rest => {
                self.sim.request_turn();
                Outcome::TurnCommitted
            }
            HudAction::UseAbility(slot) => {
                if self.modes.abilities_usable() {
                    self.sim.perform_ability(slot);
                }
                Outcome::Continue
            }
            HudAction::StrikeBodyPart(part) => {
                if self.focused_menu.is_none() {
                    return Outcome::Continue;
                }
                commit_focused_attack(&mut self.sim, &part);
                Outcome::TurnCommitted
            }
        }
    }

    pub fn simulation(&self) -> &S {
        &self.sim
    }

    /// Mutable access for the host to advance the simulation between frames
    pub fn simulation_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    /// Mode as of the last frame
    pub fn mode(&self) -> DisplayMode {
        self.modes.current()
    }

    pub fn panels(&self) -> &HudPanels {
        &self.panels
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn focused_menu(&self) -> Option<&FocusedTargetMenu> {
        self.focused_menu.as_ref()
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    /// Frames ticked so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

enum Outcome {
    Continue,
    Request(HudRequest),
    TurnCommitted,
}
