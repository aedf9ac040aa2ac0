//! Area inspection
//!
//! Resolves what the player is looking at into a single tagged value so the
//! area-details panel renders it with one `match`.

use super::{EntityDetails, Position, Simulation};

/// What the area-details panel should describe this frame
#[derive(Debug, Clone, PartialEq)]
pub enum Inspection {
    /// The cell under inspection has no data; keep the previous text
    Nothing,
    /// A bare cell, possibly remembered rather than seen
    Cell { description: String, standing: bool, forgotten: bool },
    Item {
        name: String,
        description: Option<String>,
    },
    Enemy {
        name: String,
        ai_state: String,
        description: String,
    },
    /// A visible entity that is neither item nor enemy; the panel goes blank
    Unrecognized,
}

/// Work out what the player is inspecting
///
/// With no look/target cursor the player's own cell is described. With a
/// cursor, a visible entity on that cell takes precedence over the cell
/// itself. Entities the player cannot see are treated as absent.
pub fn inspect<S: Simulation + ?Sized>(sim: &S, player_position: Position, target: Option<Position>) -> Inspection {
    let Some(target) = target else {
        return match sim.map_cell(player_position) {
            Some(cell) => Inspection::Cell {
                description: cell.description,
                standing: true,
                forgotten: false,
            },
            None => Inspection::Nothing,
        };
    };

    let Some(cell) = sim.map_cell(target) else {
        return Inspection::Nothing;
    };

    let details = sim
        .entity_at(target)
        .filter(|entity| sim.can_see(player_position, *entity))
        .and_then(|entity| sim.entity_details(entity));

    match details {
        Some(EntityDetails::Item {
            name,
            identified,
            description,
        }) => Inspection::Item {
            name,
            description: identified.then_some(description),
        },
        Some(EntityDetails::Enemy {
            name,
            ai_state,
            description,
        }) => Inspection::Enemy {
            name,
            ai_state,
            description,
        },
        Some(EntityDetails::Other) => Inspection::Unrecognized,
        None => Inspection::Cell {
            description: cell.description,
            standing: false,
            forgotten: cell.forgotten,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{EntityDetails, ScriptedEntity, ScriptedSimulation};

    fn sim_with_cells() -> ScriptedSimulation {
        let mut sim = ScriptedSimulation::new("Ixchel");
        sim.set_cell(Position::new(1, 1), "a mossy floor", false);
        sim.set_cell(Position::new(2, 1), "a cracked altar", true);
        sim.player.position = Position::new(1, 1);
        sim
    }

    #[test]
    fn test_no_target_describes_own_cell() {
        let sim = sim_with_cells();
        let seen = inspect(&sim, Position::new(1, 1), None);
        assert_eq!(
            seen,
            Inspection::Cell {
                description: "a mossy floor".to_string(),
                standing: true,
                forgotten: false,
            }
        );
    }

    #[test]
    fn test_missing_cell_is_nothing() {
        let sim = sim_with_cells();
        assert_eq!(inspect(&sim, Position::new(9, 9), None), Inspection::Nothing);
        assert_eq!(
            inspect(&sim, Position::new(1, 1), Some(Position::new(40, 40))),
            Inspection::Nothing
        );
    }

    #[test]
    fn test_hidden_entity_is_ignored() {
        let mut sim = sim_with_cells();
        let jaguar = sim.spawn(
            ScriptedEntity::enemy("Jaguar", Position::new(2, 1)).with_details(EntityDetails::Enemy {
                name: "Jaguar".to_string(),
                ai_state: "HUNTING".to_string(),
                description: "A spotted cat".to_string(),
            }),
        );
        sim.hide(jaguar);

        let seen = inspect(&sim, Position::new(1, 1), Some(Position::new(2, 1)));
        assert_eq!(
            seen,
            Inspection::Cell {
                description: "a cracked altar".to_string(),
                standing: false,
                forgotten: true,
            }
        );
    }

    #[test]
    fn test_unidentified_item_has_no_description() {
        let mut sim = sim_with_cells();
        sim.spawn(
            ScriptedEntity::enemy("Vial", Position::new(2, 1)).with_details(EntityDetails::Item {
                name: "Murky vial".to_string(),
                identified: false,
                description: "Cures poison".to_string(),
            }),
        );

        match inspect(&sim, Position::new(1, 1), Some(Position::new(2, 1))) {
            Inspection::Item { name, description } => {
                assert_eq!(name, "Murky vial");
                assert_eq!(description, None);
            }
            other => panic!("expected item, got {:?}", other),
        }
    }

    #[test]
    fn test_unrecognized_entity_blanks_area() {
        let mut sim = sim_with_cells();
        sim.spawn(ScriptedEntity::enemy("Brazier", Position::new(2, 1)).with_details(EntityDetails::Other));

        assert_eq!(
            inspect(&sim, Position::new(1, 1), Some(Position::new(2, 1))),
            Inspection::Unrecognized
        );
    }
}
