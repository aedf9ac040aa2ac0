//! Interactive HUD Elements
//!
//! Buttons and the dialogs built from them. Unlike the text panels in
//! [`crate::ui`], these react to input.
//!
//! # Available Components
//!
//! - [`ActionRegistry`] / [`ActionButton`] - key-bound buttons and input focus
//! - [`FocusedTargetMenu`] - per-body-part buttons while focusing an attack
//! - [`RunSummary`] - one-shot end-of-run dialog

pub mod button;
pub mod focused_menu;
pub mod summary;

pub use button::{ActionButton, ActionId, ActionRegistry, FocusScope, HudAction};
pub use focused_menu::FocusedTargetMenu;
pub use summary::RunSummary;
