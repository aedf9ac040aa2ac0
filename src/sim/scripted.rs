//! Scripted in-memory simulation
//!
//! A small stand-in for the real world engine. Tests set its fields directly
//! to stage a frame, and it records every hand-off call the HUD makes so the
//! tests can assert on them. The demo binary uses it as its world.

use super::{
    AbilitySlot, AttackRequest, AttackTarget, DisplayMode, EntityDetails, EntityRef,
    EntitySnapshot, FocusedAction, MapCell, PlayerSnapshot, Position, RunStatistics,
    Simulation, StatusFlags,
};
use crate::error::AttackError;
use std::collections::{BTreeMap, HashMap, HashSet};

/// An entity living in a [`ScriptedSimulation`]
#[derive(Debug, Clone)]
pub struct ScriptedEntity {
    pub snapshot: EntitySnapshot,
    pub details: EntityDetails,
    pub body_parts: Vec<String>,
}

impl ScriptedEntity {
    /// A hostile creature with a humanoid body plan
    pub fn enemy(name: &str, position: Position) -> Self {
        ScriptedEntity {
            snapshot: EntitySnapshot {
                name: name.to_string(),
                health: 20,
                max_health: 20,
                oxygen: 16,
                max_oxygen: 16,
                status: StatusFlags::default(),
                position,
                description: String::new(),
                ai_state: "WANDERING".to_string(),
            },
            details: EntityDetails::Enemy {
                name: name.to_string(),
                ai_state: "WANDERING".to_string(),
                description: String::new(),
            },
            body_parts: ["head", "body", "left arm", "right arm", "left leg", "right leg"]
                .iter()
                .map(|part| part.to_string())
                .collect(),
        }
    }

    pub fn with_details(mut self, details: EntityDetails) -> Self {
        self.details = details;
        self
    }

    pub fn with_body_parts(mut self, parts: &[&str]) -> Self {
        self.body_parts = parts.iter().map(|part| part.to_string()).collect();
        self
    }
}

/// In-memory [`Simulation`] with public, directly editable state
#[derive(Debug, Clone)]
pub struct ScriptedSimulation {
    pub mode: DisplayMode,
    pub player: PlayerSnapshot,
    pub abilities: Vec<AbilitySlot>,
    /// Newest first
    pub log: Vec<String>,
    pub turn: u64,
    pub depth: u32,
    pub time_of_day: String,
    /// When set, every `prepare_attack` call fails with this error
    pub attack_failure: Option<AttackError>,
    entities: BTreeMap<EntityRef, ScriptedEntity>,
    hidden: HashSet<EntityRef>,
    cells: HashMap<Position, MapCell>,
    next_entity: u32,
    turn_requested: bool,
    attack_requests: Vec<AttackRequest>,
    abilities_used: Vec<usize>,
}

impl ScriptedSimulation {
    /// A fresh run on depth 1 with a full-health player
    pub fn new(player_name: &str) -> Self {
        ScriptedSimulation {
            mode: DisplayMode::Playing,
            player: PlayerSnapshot {
                name: player_name.to_string(),
                health: 40,
                max_health: 40,
                favor: 100,
                oxygen: 16,
                max_oxygen: 16,
                status: StatusFlags::default(),
                position: Position::default(),
                target: None,
                focused_entity: None,
                focused_action: FocusedAction::Melee,
                last_hit_entity: None,
                stats: RunStatistics {
                    lowest_depth: 1,
                    ..Default::default()
                },
            },
            abilities: Vec::new(),
            log: Vec::new(),
            turn: 0,
            depth: 1,
            time_of_day: "Morning".to_string(),
            attack_failure: None,
            entities: BTreeMap::new(),
            hidden: HashSet::new(),
            cells: HashMap::new(),
            next_entity: 1,
            turn_requested: false,
            attack_requests: Vec::new(),
            abilities_used: Vec::new(),
        }
    }

    /// Adds an entity and returns its handle
    pub fn spawn(&mut self, entity: ScriptedEntity) -> EntityRef {
        let handle = EntityRef(self.next_entity);
        self.next_entity += 1;
        self.entities.insert(handle, entity);
        handle
    }

    /// Removes an entity; existing handles to it go stale
    pub fn despawn(&mut self, entity: EntityRef) {
        self.entities.remove(&entity);
        self.hidden.remove(&entity);
    }

    pub fn entity_mut(&mut self, entity: EntityRef) -> Option<&mut ScriptedEntity> {
        self.entities.get_mut(&entity)
    }

    /// Takes an entity out of the player's line of sight
    pub fn hide(&mut self, entity: EntityRef) {
        self.hidden.insert(entity);
    }

    pub fn set_cell(&mut self, position: Position, description: &str, forgotten: bool) {
        self.cells.insert(
            position,
            MapCell {
                description: description.to_string(),
                forgotten,
            },
        );
    }

    /// Adds a message as the newest log entry
    pub fn push_log(&mut self, message: impl Into<String>) {
        self.log.insert(0, message.into());
    }

    /// Enters body-part targeting against `entity`
    pub fn focus_on(&mut self, entity: EntityRef, action: FocusedAction) {
        self.player.focused_entity = Some(entity);
        self.player.focused_action = action;
        self.mode = DisplayMode::Focused;
    }

    /// Consumes a pending turn request, advancing the turn counter
    ///
    /// Returns whether a turn was executed.
    pub fn advance_turn(&mut self) -> bool {
        if !self.turn_requested {
            return false;
        }
        self.turn_requested = false;
        self.turn += 1;
        for ability in &mut self.abilities {
            ability.counter = (ability.counter + 1).min(ability.recharge);
        }
        true
    }

    pub fn turn_requested(&self) -> bool {
        self.turn_requested
    }

    pub fn attack_requests(&self) -> &[AttackRequest] {
        &self.attack_requests
    }

    pub fn abilities_used(&self) -> &[usize] {
        &self.abilities_used
    }
}

impl Simulation for ScriptedSimulation {
    fn current_mode(&self) -> DisplayMode {
        self.mode
    }

    fn player_snapshot(&self) -> PlayerSnapshot {
        self.player.clone()
    }

    fn tracked_entity_snapshot(&self, entity: EntityRef) -> Option<EntitySnapshot> {
        self.entities.get(&entity).map(|e| e.snapshot.clone())
    }

    fn entity_details(&self, entity: EntityRef) -> Option<EntityDetails> {
        self.entities.get(&entity).map(|e| e.details.clone())
    }

    fn map_cell(&self, position: Position) -> Option<MapCell> {
        self.cells.get(&position).cloned()
    }

    fn entity_at(&self, position: Position) -> Option<EntityRef> {
        self.entities
            .iter()
            .find(|(_, e)| e.snapshot.position == position)
            .map(|(handle, _)| *handle)
    }

    fn can_see(&self, _observer: Position, target: EntityRef) -> bool {
        self.entities.contains_key(&target) && !self.hidden.contains(&target)
    }

    fn ability_list(&self) -> Vec<AbilitySlot> {
        self.abilities.clone()
    }

    fn body_part_list(&self, entity: EntityRef) -> Vec<String> {
        self.entities
            .get(&entity)
            .map(|e| e.body_parts.clone())
            .unwrap_or_default()
    }

    fn recent_log_entries(&self) -> Vec<String> {
        self.log.clone()
    }

    fn turn_count(&self) -> u64 {
        self.turn
    }

    fn current_depth(&self) -> u32 {
        self.depth
    }

    fn time_of_day(&self) -> String {
        self.time_of_day.clone()
    }

    fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    fn request_turn(&mut self) {
        self.turn_requested = true;
    }

    fn prepare_attack(&mut self, request: AttackRequest) -> Result<(), AttackError> {
        let target = request.target;
        self.attack_requests.push(request);

        if let Some(error) = &self.attack_failure {
            return Err(error.clone());
        }
        match target {
            AttackTarget::Entity(entity) if !self.entities.contains_key(&entity) => {
                Err(AttackError::TargetGone)
            }
            _ => Ok(()),
        }
    }

    fn perform_ability(&mut self, index: usize) {
        if let Some(ability) = self.abilities.get_mut(index) {
            ability.counter = 0;
        }
        self.abilities_used.push(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_despawn() {
        let mut sim = ScriptedSimulation::new("Ixchel");
        let bat = sim.spawn(ScriptedEntity::enemy("Bat", Position::new(3, 4)));

        assert_eq!(sim.entity_at(Position::new(3, 4)), Some(bat));
        assert!(sim.tracked_entity_snapshot(bat).is_some());

        sim.despawn(bat);
        assert_eq!(sim.entity_at(Position::new(3, 4)), None);
        assert!(sim.tracked_entity_snapshot(bat).is_none());
        assert!(sim.body_part_list(bat).is_empty());
    }

    #[test]
    fn test_turn_request_is_consumed_once() {
        let mut sim = ScriptedSimulation::new("Ixchel");
        assert!(!sim.advance_turn());

        sim.request_turn();
        assert!(sim.advance_turn());
        assert!(!sim.turn_requested());
        assert!(!sim.advance_turn());
        assert_eq!(sim.turn, 1);
    }

    #[test]
    fn test_log_is_newest_first() {
        let mut sim = ScriptedSimulation::new("Ixchel");
        sim.push_log("first");
        sim.push_log("second");
        assert_eq!(sim.recent_log_entries(), vec!["second", "first"]);
    }

    #[test]
    fn test_prepare_attack_on_stale_entity_fails() {
        let mut sim = ScriptedSimulation::new("Ixchel");
        let result = sim.prepare_attack(AttackRequest {
            kind: FocusedAction::Melee,
            target: AttackTarget::Entity(EntityRef(99)),
            body_part: "head".to_string(),
            player_initiated: true,
        });
        assert_eq!(result, Err(AttackError::TargetGone));
        assert_eq!(sim.attack_requests().len(), 1);
    }

    #[test]
    fn test_abilities_recharge_per_turn() {
        let mut sim = ScriptedSimulation::new("Ixchel");
        sim.abilities.push(AbilitySlot {
            name: "Jaguar Dash".to_string(),
            counter: 5,
            recharge: 5,
        });

        sim.perform_ability(0);
        assert_eq!(sim.abilities[0].counter, 0);

        sim.request_turn();
        sim.advance_turn();
        assert_eq!(sim.abilities[0].counter, 1);
        assert_eq!(sim.abilities_used(), &[0]);
    }
}
