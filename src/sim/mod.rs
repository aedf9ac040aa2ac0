//! Simulation Snapshot Interface
//!
//! The HUD never owns game state. Everything it shows is read through the
//! [`Simulation`] trait once per frame, and the only things it writes back
//! are the hand-off requests listed on the trait.
//!
//! # Architecture
//!
//! - `Simulation` - the read-only query surface plus the hand-off writes
//! - Snapshot types - plain values copied out of the simulation per call
//! - [`inspect`] - folds map cell, entity and visibility queries into one
//!   [`Inspection`] value for the area-details panel
//! - [`ScriptedSimulation`] - in-memory implementation for tests and the demo
//!
//! # Example Usage
//!
//! ```rust
//! use xibalba_hud::sim::{DisplayMode, ScriptedSimulation, Simulation};
//!
//! let mut sim = ScriptedSimulation::new("Ixchel");
//! assert_eq!(sim.current_mode(), DisplayMode::Playing);
//!
//! sim.request_turn();
//! assert!(sim.turn_requested());
//! ```

pub mod inspect;
pub mod scripted;

pub use inspect::{Inspection, inspect};
pub use scripted::{ScriptedEntity, ScriptedSimulation};

use crate::error::AttackError;

/// Interaction mode of the game screen
///
/// Owned by the simulation. The HUD reads it every frame and writes it back
/// in exactly one case: committing a focused attack returns to `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    #[default]
    Playing,
    Looking,
    Targeting,
    Focused,
    Dead,
}

impl DisplayMode {
    /// Suffix appended to the player name while in this mode
    pub fn name_suffix(&self) -> Option<&'static str> {
        match self {
            DisplayMode::Looking => Some("[LOOKING]"),
            DisplayMode::Targeting => Some("[TARGETING]"),
            DisplayMode::Focused => Some("[FOCUSED]"),
            DisplayMode::Playing | DisplayMode::Dead => None,
        }
    }

    /// Terminal state: the run is over
    pub fn is_terminal(&self) -> bool {
        matches!(self, DisplayMode::Dead)
    }
}

/// Opaque handle to an entity owned by the simulation
///
/// A handle may go stale between frames; every lookup through it returns
/// `Option`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityRef(pub u32);

/// Map cell coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Active condition flags of an entity
///
/// Each flag is independent. The status line lists the set ones in field
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags {
    pub encumbered: bool,
    pub crippled: bool,
    pub bleeding: bool,
    pub poisoned: bool,
    pub sick: bool,
    pub drowning: bool,
    pub stuck: bool,
}

impl StatusFlags {
    /// Names of the set flags, in display order
    pub fn active(&self) -> Vec<&'static str> {
        [
            (self.encumbered, "ENCUMBERED"),
            (self.crippled, "CRIPPLED"),
            (self.bleeding, "BLEEDING"),
            (self.poisoned, "POISONED"),
            (self.sick, "SICK"),
            (self.drowning, "DROWNING"),
            (self.stuck, "STUCK"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// How the player intends to hit the focused entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedAction {
    #[default]
    Melee,
    Throwing,
    Ranged,
}

impl FocusedAction {
    pub fn name(&self) -> &'static str {
        match self {
            FocusedAction::Melee => "melee",
            FocusedAction::Throwing => "throwing",
            FocusedAction::Ranged => "ranged",
        }
    }
}

/// Counters accumulated over the player's lifetime
///
/// Read verbatim into the end-of-run summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStatistics {
    pub lowest_depth: u32,
    pub total_hits: u32,
    pub total_misses: u32,
    pub total_damage_done: u32,
    pub total_damage_received: u32,
    pub total_damage_healed: u32,
    pub total_kills: u32,
}

/// Per-frame copy of the player's attributes
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub favor: i32,
    pub oxygen: i32,
    pub max_oxygen: i32,
    pub status: StatusFlags,
    pub position: Position,
    /// Cell under the look/target cursor, if any
    pub target: Option<Position>,
    pub focused_entity: Option<EntityRef>,
    pub focused_action: FocusedAction,
    /// Most recent enemy the player struck; drives the enemy-info panel
    pub last_hit_entity: Option<EntityRef>,
    pub stats: RunStatistics,
}

/// Per-frame copy of a tracked (inspected or focused) entity
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySnapshot {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub oxygen: i32,
    pub max_oxygen: i32,
    pub status: StatusFlags,
    pub position: Position,
    pub description: String,
    pub ai_state: String,
}

/// What kind of thing an entity is, as far as the HUD cares
#[derive(Debug, Clone, PartialEq)]
pub enum EntityDetails {
    Item {
        /// Name as the player knows it (may be an unidentified alias)
        name: String,
        identified: bool,
        description: String,
    },
    Enemy {
        name: String,
        ai_state: String,
        description: String,
    },
    /// Anything else (decorations, the player)
    Other,
}

/// One ability slot on the ability bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilitySlot {
    pub name: String,
    /// Recharge progress; the ability is ready when it equals `recharge`
    pub counter: u32,
    pub recharge: u32,
}

impl AbilitySlot {
    pub fn is_ready(&self) -> bool {
        self.counter == self.recharge
    }
}

/// Contents of a map cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapCell {
    pub description: String,
    /// Seen before but not currently in view
    pub forgotten: bool,
}

/// Where a prepared attack is aimed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackTarget {
    Entity(EntityRef),
    Position(Position),
}

/// The combat-preparation hand-off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackRequest {
    pub kind: FocusedAction,
    pub target: AttackTarget,
    pub body_part: String,
    pub player_initiated: bool,
}

/// Everything the HUD reads from and hands off to the game simulation
///
/// Reads take `&self` and are snapshot copies with no cross-call
/// consistency guarantee. The `&mut self` methods are the complete list of
/// writes the HUD performs.
pub trait Simulation {
    fn current_mode(&self) -> DisplayMode;

    fn player_snapshot(&self) -> PlayerSnapshot;

    /// `None` when the reference no longer resolves
    fn tracked_entity_snapshot(&self, entity: EntityRef) -> Option<EntitySnapshot>;

    fn entity_details(&self, entity: EntityRef) -> Option<EntityDetails>;

    /// `None` when the position is outside the current map
    fn map_cell(&self, position: Position) -> Option<MapCell>;

    fn entity_at(&self, position: Position) -> Option<EntityRef>;

    fn can_see(&self, observer: Position, target: EntityRef) -> bool;

    fn ability_list(&self) -> Vec<AbilitySlot>;

    /// Body-part identifiers in the entity's own iteration order
    fn body_part_list(&self, entity: EntityRef) -> Vec<String>;

    /// Newest first
    fn recent_log_entries(&self) -> Vec<String>;

    fn turn_count(&self) -> u64;

    /// 1-based depth of the current map
    fn current_depth(&self) -> u32;

    fn time_of_day(&self) -> String;

    fn set_mode(&mut self, mode: DisplayMode);

    fn request_turn(&mut self);

    fn prepare_attack(&mut self, request: AttackRequest) -> Result<(), AttackError>;

    fn perform_ability(&mut self, index: usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_suffixes() {
        assert_eq!(DisplayMode::Playing.name_suffix(), None);
        assert_eq!(DisplayMode::Looking.name_suffix(), Some("[LOOKING]"));
        assert_eq!(DisplayMode::Targeting.name_suffix(), Some("[TARGETING]"));
        assert_eq!(DisplayMode::Focused.name_suffix(), Some("[FOCUSED]"));
        assert_eq!(DisplayMode::Dead.name_suffix(), None);
        assert!(DisplayMode::Dead.is_terminal());
    }

    #[test]
    fn test_status_flags_keep_order() {
        let flags = StatusFlags {
            stuck: true,
            bleeding: true,
            encumbered: true,
            ..Default::default()
        };
        assert_eq!(flags.active(), vec!["ENCUMBERED", "BLEEDING", "STUCK"]);
        assert!(StatusFlags::default().active().is_empty());
    }

    #[test]
    fn test_ability_ready() {
        let mut slot = AbilitySlot {
            name: "Obsidian Skin".to_string(),
            counter: 3,
            recharge: 5,
        };
        assert!(!slot.is_ready());
        slot.counter = 5;
        assert!(slot.is_ready());
    }
}
