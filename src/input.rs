//! Input events as seen by the HUD
//!
//! The HUD does not poll devices. The host hands it a list of
//! [`InputEvent`]s each frame: key presses already reduced to a
//! [`KeyChord`], or pointer clicks already resolved to the button under the
//! cursor.
//!
//! With the `sdl` feature, [`InputSystem`] performs that reduction for SDL2
//! events.

use crate::gui::ActionId;

/// A key the HUD binds actions to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyChord {
    /// Number row key, 0-9
    Digit(u8),
    /// Letter key, stored lower-case
    Char(char),
    Escape,
    Enter,
}

impl KeyChord {
    /// Chord for a numbered slot: slot `i` sits on digit `(i + 1) % 10`
    ///
    /// Positional only: slot 9 wraps to `0`, and slots past 9 reuse digits.
    pub fn for_slot(slot: usize) -> Self {
        KeyChord::Digit(((slot + 1) % 10) as u8)
    }

    /// Letter chord, case-insensitive
    pub fn letter(c: char) -> Self {
        KeyChord::Char(c.to_ascii_lowercase())
    }

    /// Short text shown inside a button's key hint
    pub fn hint(&self) -> String {
        match self {
            KeyChord::Digit(d) => d.to_string(),
            KeyChord::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyChord::Escape => "ESC".to_string(),
            KeyChord::Enter => "ENTER".to_string(),
        }
    }
}

/// One discrete input delivered to the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyChord),
    /// Pointer click on a button
    Click(ActionId),
}

#[cfg(feature = "sdl")]
pub use sdl_input::InputSystem;

#[cfg(feature = "sdl")]
mod sdl_input {
    use super::{InputEvent, KeyChord};
    use crate::gui::ActionId;
    use sdl2::EventPump;
    use sdl2::event::Event;
    use sdl2::keyboard::Keycode;
    use sdl2::mouse::MouseButton;

    /// Translates SDL2 events into HUD input events
    ///
    /// Clicks are resolved through a hit-test callback supplied by the
    /// renderer, since only it knows where buttons were drawn.
    pub struct InputSystem {
        quit_requested: bool,
    }

    impl InputSystem {
        pub fn new() -> Self {
            InputSystem {
                quit_requested: false,
            }
        }

        /// Whether the window was closed during the last poll
        pub fn quit_requested(&self) -> bool {
            self.quit_requested
        }

        /// Drains pending SDL events for this frame
        pub fn poll_events(
            &mut self,
            event_pump: &mut EventPump,
            hit_test: impl Fn(i32, i32) -> Option<ActionId>,
        ) -> Vec<InputEvent> {
            let mut events = Vec::new();

            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => self.quit_requested = true,
                    Event::KeyDown {
                        keycode: Some(key),
                        repeat: false,
                        ..
                    } => {
                        if let Some(chord) = chord_for(key) {
                            events.push(InputEvent::Key(chord));
                        }
                    }
                    Event::MouseButtonDown {
                        mouse_btn: MouseButton::Left,
                        x,
                        y,
                        ..
                    } => {
                        if let Some(id) = hit_test(x, y) {
                            events.push(InputEvent::Click(id));
                        }
                    }
                    _ => {}
                }
            }

            events
        }
    }

    impl Default for InputSystem {
        fn default() -> Self {
            Self::new()
        }
    }

    fn chord_for(key: Keycode) -> Option<KeyChord> {
        let chord = match key {
            Keycode::Num0 => KeyChord::Digit(0),
            Keycode::Num1 => KeyChord::Digit(1),
            Keycode::Num2 => KeyChord::Digit(2),
            Keycode::Num3 => KeyChord::Digit(3),
            Keycode::Num4 => KeyChord::Digit(4),
            Keycode::Num5 => KeyChord::Digit(5),
            Keycode::Num6 => KeyChord::Digit(6),
            Keycode::Num7 => KeyChord::Digit(7),
            Keycode::Num8 => KeyChord::Digit(8),
            Keycode::Num9 => KeyChord::Digit(9),
            Keycode::Escape => KeyChord::Escape,
            Keycode::Return | Keycode::KpEnter => KeyChord::Enter,
            other => {
                let name = other.name();
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => KeyChord::letter(c),
                    _ => return None,
                }
            }
        };
        Some(chord)
    }
}
