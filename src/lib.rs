//! Heads-up display core for a turn-based roguelike
//!
//! Keeps the on-screen panels, the button bar, the focused-attack body-part
//! menu and the end-of-run summary consistent with the simulation, one
//! frame at a time. The simulation is reached only through the
//! [`sim::Simulation`] trait.
//!
//! # Modules
//!
//! - [`sim`] - simulation contract, snapshots, scripted test world
//! - [`ui`] - text lines, tones, panels, formatting
//! - [`gui`] - buttons, body-part menu, run summary
//! - [`hud`] - the per-frame core tying it all together
//! - [`input`] - key chords and input events
//! - [`config`] - JSON-backed HUD settings
//! - [`error`] - crate error types
//!
//! Drawing to an SDL2 window lives behind the `sdl` feature in `text` and
//! `render`.

pub mod config;
pub mod error;
pub mod gui;
pub mod hud;
pub mod input;
pub mod sim;
pub mod ui;

#[cfg(feature = "sdl")]
pub mod render;
#[cfg(feature = "sdl")]
pub mod text;

pub use config::HudConfig;
pub use error::{AttackError, HudError, Result};
pub use hud::{Hud, HudRequest};
pub use sim::{DisplayMode, Simulation};
