//! Per-frame panel content
//!
//! Computes the text for every HUD panel from a fresh simulation snapshot
//! and pushes it through [`Panel::sync`]. Row indices here are the slot
//! contract for each panel; they never move.

use crate::config::HudConfig;
use crate::sim::{DisplayMode, Inspection, PlayerSnapshot, Simulation, inspect};
use crate::ui::format::{
    favor_bar, health_bar, name_line, oxygen_bar, status_line, wrap,
};
use crate::ui::{FADED, Label, Line, OPAQUE, Panel, Tone};

pub mod player_slot {
    pub const NAME: usize = 0;
    pub const HEALTH: usize = 1;
    pub const FAVOR: usize = 2;
    pub const OXYGEN: usize = 3;
    pub const STATUS: usize = 4;
}

pub mod enemy_slot {
    pub const NAME: usize = 0;
    pub const HEALTH: usize = 1;
    pub const OXYGEN: usize = 2;
    pub const STATUS: usize = 3;
}

pub mod game_slot {
    pub const CLOCK: usize = 0;
    pub const PERFORMANCE: usize = 1;
    pub const POSITION: usize = 2;
}

pub mod area_slot {
    pub const TITLE: usize = 0;
    pub const DESCRIPTION: usize = 1;
}

const UNIDENTIFIED: &str = "You're not sure what this does";

/// The text panels of the HUD
#[derive(Debug, Clone)]
pub struct HudPanels {
    pub player: Panel,
    pub enemy: Panel,
    pub game: Panel,
    pub log: Panel,
    pub area: Panel,
}

impl HudPanels {
    pub fn new() -> Self {
        HudPanels {
            player: Panel::new("player"),
            enemy: Panel::new("enemy"),
            game: Panel::new("game"),
            log: Panel::new("log"),
            area: Panel::new("area"),
        }
    }

    /// Re-renders every panel from the simulation
    pub fn refresh<S: Simulation + ?Sized>(
        &mut self,
        sim: &S,
        mode: DisplayMode,
        config: &HudConfig,
        frame_rate: Option<u32>,
    ) {
        let player = sim.player_snapshot();
        self.refresh_player(&player, mode);
        self.refresh_enemy(sim, &player);
        self.refresh_game(sim, &player, config, frame_rate);
        self.refresh_log(sim, config);
        self.refresh_area(sim, &player, config);
    }

    fn refresh_player(&mut self, player: &PlayerSnapshot, mode: DisplayMode) {
        self.player.sync([
            (player_slot::NAME, name_line(&player.name, mode)),
            (player_slot::HEALTH, health_bar(player.health, player.max_health)),
            (player_slot::FAVOR, favor_bar(player.favor)),
            (player_slot::OXYGEN, oxygen_bar(player.oxygen, player.max_oxygen)),
            (player_slot::STATUS, status_line(&player.status)),
        ]);
    }

    /// Shows the last enemy the player hit; clears when there is none or the
    /// reference went stale
    fn refresh_enemy<S: Simulation + ?Sized>(&mut self, sim: &S, player: &PlayerSnapshot) {
        let Some(enemy) = player
            .last_hit_entity
            .and_then(|entity| sim.tracked_entity_snapshot(entity))
        else {
            if !self.enemy.is_empty() {
                self.enemy.clear();
            }
            return;
        };

        self.enemy.sync([
            (enemy_slot::NAME, Line::toned(enemy.name.as_str(), Tone::Normal)),
            (enemy_slot::HEALTH, health_bar(enemy.health, enemy.max_health)),
            (enemy_slot::OXYGEN, oxygen_bar(enemy.oxygen, enemy.max_oxygen)),
            (enemy_slot::STATUS, status_line(&enemy.status)),
        ]);
    }

    fn refresh_game<S: Simulation + ?Sized>(
        &mut self,
        sim: &S,
        player: &PlayerSnapshot,
        config: &HudConfig,
        frame_rate: Option<u32>,
    ) {
        let clock = format!(
            "{}, Depth {}, Turn {}",
            sim.time_of_day(),
            sim.current_depth(),
            sim.turn_count()
        );

        let (performance, position) = if config.debug_ui {
            let fps = frame_rate.map_or_else(|| "-".to_string(), |fps| fps.to_string());
            let position = match player.target {
                Some(target) => format!("{}, {}", player.position, target),
                None => player.position.to_string(),
            };
            (format!("{} FPS {}", config.version_label, fps), position)
        } else {
            (String::new(), String::new())
        };

        self.game.sync([
            (game_slot::CLOCK, Line::toned(clock, Tone::Faint)),
            (game_slot::PERFORMANCE, Line::toned(performance, Tone::Faint)),
            (game_slot::POSITION, Line::toned(position, Tone::Normal)),
        ]);
    }

    /// Newest entry at full opacity, older ones faded
    fn refresh_log<S: Simulation + ?Sized>(&mut self, sim: &S, config: &HudConfig) {
        let entries = sim.recent_log_entries();
        self.log.sync(entries.iter().take(config.log_rows).enumerate().map(|(i, entry)| {
            let opacity = if i == 0 { OPAQUE } else { FADED };
            (i, Label::with_opacity(Line::from(wrap(entry, config.wrap_column)), opacity))
        }));
    }

    fn refresh_area<S: Simulation + ?Sized>(&mut self, sim: &S, player: &PlayerSnapshot, config: &HudConfig) {
        if self.area.is_empty() {
            self.area.sync([(area_slot::TITLE, Line::new()), (area_slot::DESCRIPTION, Line::new())]);
        }

        let (title, description) = match inspect(sim, player.position, player.target) {
            // Out-of-range cell: keep last frame's text
            Inspection::Nothing => return,
            Inspection::Cell {
                description,
                standing,
                forgotten,
            } => {
                let verb = if standing {
                    "You stand on"
                } else if forgotten {
                    "You remember seeing"
                } else {
                    "You see"
                };
                (Line::new(), Line::from(format!("{} {}", verb, description)))
            }
            Inspection::Item { name, description } => {
                let description = match description {
                    Some(text) => wrap(&text, config.wrap_column),
                    None => UNIDENTIFIED.to_string(),
                };
                (Line::toned(name, Tone::Item), Line::from(description))
            }
            Inspection::Enemy {
                name,
                ai_state,
                description,
            } => (
                Line::toned(name, Tone::Hostile).push(format!(" {}", ai_state), Tone::Faint),
                Line::from(wrap(&description, config.wrap_column)),
            ),
            Inspection::Unrecognized => (Line::new(), Line::new()),
        };

        self.area
            .sync([(area_slot::TITLE, title), (area_slot::DESCRIPTION, description)]);
    }
}

impl Default for HudPanels {
    fn default() -> Self {
        Self::new()
    }
}
