//! Action Button Registry
//!
//! Every interactive HUD element is an [`ActionButton`]: a label, a key
//! chord, an enabled flag and an [`HudAction`] descriptor. Buttons are
//! created once when their bar is built and then only re-labeled or toggled.
//!
//! Buttons do not run code. Dispatching an input event returns the
//! descriptors of the buttons it triggered, and the HUD core handles them in
//! one place.
//!
//! # Example
//!
//! ```rust
//! use xibalba_hud::gui::{ActionId, ActionRegistry, FocusScope, HudAction};
//! use xibalba_hud::input::{InputEvent, KeyChord};
//!
//! let mut registry = ActionRegistry::new();
//! registry.register(
//!     ActionId::Rest,
//!     KeyChord::Char('z'),
//!     "Rest",
//!     HudAction::Rest,
//!     FocusScope::Hud,
//! );
//!
//! let fired = registry.dispatch(&InputEvent::Key(KeyChord::Char('z')));
//! assert_eq!(fired, vec![HudAction::Rest]);
//! ```

use crate::input::{InputEvent, KeyChord};
use crate::ui::{Line, Tone};

/// Stable identity of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionId {
    Character,
    Rest,
    Pause,
    /// Slot on the ability bar (0-based)
    Ability(usize),
    /// Slot on the focused body-part menu (0-based)
    BodyPart(usize),
    SummaryConfirm,
    SummaryQuit,
}

/// What pressing a button asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HudAction {
    OpenCharacter,
    Rest,
    Pause,
    UseAbility(usize),
    StrikeBodyPart(String),
    ReturnToMainMenu,
    Quit,
}

/// Which widget tree a button belongs to
///
/// Only one scope holds input focus at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusScope {
    /// The bottom bar: menu buttons, ability bar, body-part menu
    #[default]
    Hud,
    /// The end-of-run summary dialog
    Summary,
}

/// A labeled, key-bound, toggleable button
#[derive(Debug, Clone, PartialEq)]
pub struct ActionButton {
    pub id: ActionId,
    pub chord: KeyChord,
    pub label: Line,
    pub enabled: bool,
    pub action: HudAction,
    pub scope: FocusScope,
}

impl ActionButton {
    /// Key hint followed by the label, e.g. `[Z] Rest`
    pub fn caption(&self) -> Line {
        let label_tone = if self.enabled { None } else { Some(Tone::Faint) };
        let mut caption = Line::toned("[", Tone::Faint)
            .push(self.chord.hint(), Tone::Key)
            .push("] ", Tone::Faint);
        for span in self.label.spans() {
            caption = caption.push(span.text.clone(), label_tone.unwrap_or(span.tone));
        }
        caption
    }

    fn matches(&self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(chord) => *chord == self.chord,
            InputEvent::Click(id) => *id == self.id,
        }
    }
}

/// All live buttons plus the current input focus
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    buttons: Vec<ActionButton>,
    focus: FocusScope,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a button, replacing any existing button with the same id
    pub fn register(
        &mut self,
        id: ActionId,
        chord: KeyChord,
        label: impl Into<Line>,
        action: HudAction,
        scope: FocusScope,
    ) {
        let button = ActionButton {
            id,
            chord,
            label: label.into(),
            enabled: true,
            action,
            scope,
        };
        match self.buttons.iter_mut().find(|b| b.id == id) {
            Some(existing) => *existing = button,
            None => self.buttons.push(button),
        }
    }

    /// Removes every button matching the predicate
    pub fn unregister_where(&mut self, predicate: impl Fn(ActionId) -> bool) {
        self.buttons.retain(|b| !predicate(b.id));
    }

    /// Replaces a button's label; returns false when the id is unknown
    pub fn set_label(&mut self, id: ActionId, label: impl Into<Line>) -> bool {
        match self.get_mut(id) {
            Some(button) => {
                button.label = label.into();
                true
            }
            None => false,
        }
    }

    /// Enables or disables a button; returns false when the id is unknown
    pub fn set_enabled(&mut self, id: ActionId, enabled: bool) -> bool {
        match self.get_mut(id) {
            Some(button) => {
                button.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: ActionId) -> Option<&ActionButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: ActionId) -> Option<&mut ActionButton> {
        self.buttons.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: ActionId) -> bool {
        self.get(id).is_some()
    }

    /// Buttons in registration order
    pub fn buttons(&self) -> &[ActionButton] {
        &self.buttons
    }

    /// Buttons whose id satisfies the predicate, in registration order
    pub fn buttons_where(&self, predicate: impl Fn(ActionId) -> bool) -> Vec<&ActionButton> {
        self.buttons.iter().filter(|b| predicate(b.id)).collect()
    }

    pub fn focus(&self) -> FocusScope {
        self.focus
    }

    /// Moves input focus; takes effect for the next dispatched event
    pub fn set_focus(&mut self, scope: FocusScope) {
        self.focus = scope;
    }

    /// Actions of every enabled, focused button the event triggers
    ///
    /// Each button fires at most once per event. Several buttons may share a
    /// chord (ability slot 1 and body-part slot 1 both sit on `1`); they fire
    /// in registration order.
    pub fn dispatch(&self, event: &InputEvent) -> Vec<HudAction> {
        self.buttons
            .iter()
            .filter(|b| b.enabled && b.scope == self.focus && b.matches(event))
            .map(|b| b.action.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ActionRegistry {
        let mut registry = ActionRegistry::new();
        registry.register(
            ActionId::Rest,
            KeyChord::Char('z'),
            "Rest",
            HudAction::Rest,
            FocusScope::Hud,
        );
        registry.register(
            ActionId::Ability(0),
            KeyChord::for_slot(0),
            "Jaguar Dash",
            HudAction::UseAbility(0),
            FocusScope::Hud,
        );
        registry.register(
            ActionId::SummaryQuit,
            KeyChord::Char('q'),
            "Quit",
            HudAction::Quit,
            FocusScope::Summary,
        );
        registry
    }

    #[test]
    fn test_key_dispatch() {
        let registry = registry();
        assert_eq!(
            registry.dispatch(&InputEvent::Key(KeyChord::Digit(1))),
            vec![HudAction::UseAbility(0)]
        );
        assert!(registry.dispatch(&InputEvent::Key(KeyChord::Digit(2))).is_empty());
    }

    #[test]
    fn test_click_dispatch() {
        let registry = registry();
        assert_eq!(
            registry.dispatch(&InputEvent::Click(ActionId::Rest)),
            vec![HudAction::Rest]
        );
    }

    #[test]
    fn test_disabled_button_is_inert() {
        let mut registry = registry();
        assert!(registry.set_enabled(ActionId::Ability(0), false));
        assert!(registry.dispatch(&InputEvent::Key(KeyChord::Digit(1))).is_empty());
        assert!(registry.dispatch(&InputEvent::Click(ActionId::Ability(0))).is_empty());
    }

    #[test]
    fn test_out_of_focus_button_is_inert() {
        let mut registry = registry();
        assert!(registry.dispatch(&InputEvent::Key(KeyChord::Char('q'))).is_empty());

        registry.set_focus(FocusScope::Summary);
        assert_eq!(
            registry.dispatch(&InputEvent::Key(KeyChord::Char('q'))),
            vec![HudAction::Quit]
        );
        assert!(registry.dispatch(&InputEvent::Key(KeyChord::Char('z'))).is_empty());
    }

    #[test]
    fn test_relabel_keeps_chord() {
        let mut registry = registry();
        assert!(registry.set_label(ActionId::Ability(0), "Smoke Mirror"));
        let button = registry.get(ActionId::Ability(0)).unwrap();
        assert_eq!(button.chord, KeyChord::Digit(1));
        assert_eq!(button.label.plain(), "Smoke Mirror");
        assert!(!registry.set_label(ActionId::Ability(7), "Nothing"));
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut registry = registry();
        registry.register(
            ActionId::Rest,
            KeyChord::Char('r'),
            "Wait",
            HudAction::Rest,
            FocusScope::Hud,
        );
        assert_eq!(registry.buttons().len(), 3);
        assert_eq!(registry.get(ActionId::Rest).unwrap().chord, KeyChord::Char('r'));
    }

    #[test]
    fn test_shared_chord_fires_each_button_once() {
        let mut registry = registry();
        registry.register(
            ActionId::BodyPart(0),
            KeyChord::for_slot(0),
            "Head",
            HudAction::StrikeBodyPart("head".to_string()),
            FocusScope::Hud,
        );
        assert_eq!(
            registry.dispatch(&InputEvent::Key(KeyChord::Digit(1))),
            vec![
                HudAction::UseAbility(0),
                HudAction::StrikeBodyPart("head".to_string())
            ]
        );

        registry.unregister_where(|id| matches!(id, ActionId::BodyPart(_)));
        assert!(!registry.contains(ActionId::BodyPart(0)));
    }

    #[test]
    fn test_caption_shows_key_hint() {
        let registry = registry();
        let button = registry.get(ActionId::Rest).unwrap();
        assert_eq!(button.caption().plain(), "[Z] Rest");
        assert_eq!(button.caption().tone_of("Z"), Some(Tone::Key));
    }
}
