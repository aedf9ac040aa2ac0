//! Focused-attack body-part menu
//!
//! While the player is focusing an attack, the bottom bar shows one button
//! per body part of the focused entity, numbered in the order the simulation
//! lists the parts. The menu is built when FOCUSED is entered and torn down
//! when it is left; it never outlives the mode.

use super::button::{ActionId, ActionRegistry, FocusScope, HudAction};
use crate::input::KeyChord;
use crate::sim::EntityRef;
use crate::ui::format::capitalize;

/// Buttons laid out per row when drawn
pub const BUTTONS_PER_ROW: usize = 2;

/// The live body-part menu
#[derive(Debug, Clone, PartialEq)]
pub struct FocusedTargetMenu {
    entity: Option<EntityRef>,
    parts: Vec<String>,
}

impl FocusedTargetMenu {
    /// Registers one button per part and returns the menu owning them
    ///
    /// `entity` may be `None` (or `parts` empty) when the focused entity is
    /// already gone; the menu then exists with no buttons.
    pub fn build(registry: &mut ActionRegistry, entity: Option<EntityRef>, parts: Vec<String>) -> Self {
        for (slot, part) in parts.iter().enumerate() {
            registry.register(
                ActionId::BodyPart(slot),
                KeyChord::for_slot(slot),
                capitalize(part),
                HudAction::StrikeBodyPart(part.clone()),
                FocusScope::Hud,
            );
        }

        FocusedTargetMenu { entity, parts }
    }

    /// Unregisters every body-part button
    pub fn teardown(self, registry: &mut ActionRegistry) {
        registry.unregister_where(|id| matches!(id, ActionId::BodyPart(_)));
    }

    pub fn entity(&self) -> Option<EntityRef> {
        self.entity
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Button ids grouped into display rows
    pub fn layout(&self) -> Vec<Vec<ActionId>> {
        (0..self.parts.len())
            .map(ActionId::BodyPart)
            .collect::<Vec<_>>()
            .chunks(BUTTONS_PER_ROW)
            .map(|row| row.to_vec())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;

    fn parts(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_one_button_per_part_in_order() {
        let mut registry = ActionRegistry::new();
        let menu = FocusedTargetMenu::build(
            &mut registry,
            Some(EntityRef(4)),
            parts(&["head", "body", "left arm"]),
        );

        assert_eq!(menu.len(), 3);
        assert_eq!(registry.buttons().len(), 3);

        let third = registry.get(ActionId::BodyPart(2)).unwrap();
        assert_eq!(third.label.plain(), "Left Arm");
        assert_eq!(third.chord, KeyChord::Digit(3));
        assert_eq!(
            registry.dispatch(&InputEvent::Key(KeyChord::Digit(1))),
            vec![HudAction::StrikeBodyPart("head".to_string())]
        );
    }

    #[test]
    fn test_teardown_removes_only_body_parts() {
        let mut registry = ActionRegistry::new();
        registry.register(
            ActionId::Rest,
            KeyChord::letter('z'),
            "Rest",
            HudAction::Rest,
            FocusScope::Hud,
        );
        let menu = FocusedTargetMenu::build(&mut registry, Some(EntityRef(4)), parts(&["head"]));
        menu.teardown(&mut registry);

        assert_eq!(registry.buttons().len(), 1);
        assert!(registry.contains(ActionId::Rest));
    }

    #[test]
    fn test_empty_menu_for_missing_entity() {
        let mut registry = ActionRegistry::new();
        let menu = FocusedTargetMenu::build(&mut registry, None, Vec::new());
        assert!(menu.is_empty());
        assert_eq!(menu.entity(), None);
        assert!(registry.buttons().is_empty());
    }

    #[test]
    fn test_layout_two_per_row() {
        let mut registry = ActionRegistry::new();
        let menu = FocusedTargetMenu::build(
            &mut registry,
            Some(EntityRef(1)),
            parts(&["head", "body", "tail"]),
        );
        assert_eq!(
            menu.layout(),
            vec![
                vec![ActionId::BodyPart(0), ActionId::BodyPart(1)],
                vec![ActionId::BodyPart(2)],
            ]
        );
    }
}
