//! Focused-Attack Flow
//!
//! Turns a body-part pick from the focused menu into exactly one
//! combat-preparation request, then hands control back to the simulation.

use crate::sim::{AttackRequest, AttackTarget, DisplayMode, FocusedAction, Simulation};

/// Commits a focused attack on `body_part`
///
/// Melee aims at the focused entity itself; throwing and ranged aim at the
/// cell it stands on. Whatever happens to the preparation (a stale target,
/// a refusal from the simulation), the mode returns to PLAYING and a turn is
/// requested. An invalid focus therefore costs the player a turn.
///
/// Returns the request that was sent, if one could be formed.
pub fn commit_focused_attack<S: Simulation + ?Sized>(sim: &mut S, body_part: &str) -> Option<AttackRequest> {
    tracing::debug!(body_part, "focusing attack");

    let request = build_request(&*sim, body_part);
    if let Some(request) = &request {
        if let Err(error) = sim.prepare_attack(request.clone()) {
            tracing::warn!(%error, kind = request.kind.name(), body_part, "attack preparation rejected");
        }
    } else {
        tracing::warn!(body_part, "focused entity is gone; skipping preparation");
    }

    sim.set_mode(DisplayMode::Playing);
    sim.request_turn();
    request
}

fn build_request<S: Simulation + ?Sized>(sim: &S, body_part: &str) -> Option<AttackRequest> {
    let player = sim.player_snapshot();
    let entity = player.focused_entity?;

    let target = match player.focused_action {
        FocusedAction::Melee => AttackTarget::Entity(entity),
        FocusedAction::Throwing | FocusedAction::Ranged => {
            AttackTarget::Position(sim.tracked_entity_snapshot(entity)?.position)
        }
    };

    Some(AttackRequest {
        kind: player.focused_action,
        target,
        body_part: body_part.to_string(),
        player_initiated: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttackError;
    use crate::sim::{Position, ScriptedEntity, ScriptedSimulation};

    #[test]
    fn test_melee_targets_entity() {
        let mut sim = ScriptedSimulation::new("Ixchel");
        let bat = sim.spawn(ScriptedEntity::enemy("Bat", Position::new(2, 2)));
        sim.focus_on(bat, FocusedAction::Melee);

        let sent = commit_focused_attack(&mut sim, "head").unwrap();
        assert_eq!(sent.target, AttackTarget::Entity(bat));
        assert_eq!(sim.attack_requests(), &[sent]);
        assert_eq!(sim.mode, DisplayMode::Playing);
        assert!(sim.turn_requested());
    }

    #[test]
    fn test_ranged_targets_position() {
        let mut sim = ScriptedSimulation::new("Ixchel");
        let bat = sim.spawn(ScriptedEntity::enemy("Bat", Position::new(5, 7)));
        sim.focus_on(bat, FocusedAction::Ranged);

        let sent = commit_focused_attack(&mut sim, "body").unwrap();
        assert_eq!(sent.kind, FocusedAction::Ranged);
        assert_eq!(sent.target, AttackTarget::Position(Position::new(5, 7)));
        assert!(sent.player_initiated);
    }

    #[test]
    fn test_rejected_preparation_still_requests_turn() {
        let mut sim = ScriptedSimulation::new("Ixchel");
        let bat = sim.spawn(ScriptedEntity::enemy("Bat", Position::new(2, 2)));
        sim.focus_on(bat, FocusedAction::Throwing);
        sim.attack_failure = Some(AttackError::NothingEquipped("throwing"));

        assert!(commit_focused_attack(&mut sim, "head").is_some());
        assert_eq!(sim.attack_requests().len(), 1);
        assert_eq!(sim.mode, DisplayMode::Playing);
        assert!(sim.turn_requested());
    }

    #[test]
    fn test_vanished_ranged_target_skips_preparation() {
        let mut sim = ScriptedSimulation::new("Ixchel");
        let bat = sim.spawn(ScriptedEntity::enemy("Bat", Position::new(2, 2)));
        sim.focus_on(bat, FocusedAction::Ranged);
        sim.despawn(bat);

        assert_eq!(commit_focused_attack(&mut sim, "head"), None);
        assert!(sim.attack_requests().is_empty());
        assert_eq!(sim.mode, DisplayMode::Playing);
        assert!(sim.turn_requested());
    }
}
