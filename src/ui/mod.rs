//! HUD Text Components
//!
//! Building blocks for the text side of the HUD. Everything here is plain
//! data: no simulation access, no drawing.
//!
//! # Available Components
//!
//! - [`Panel`] - fixed-slot rows updated in place every frame
//! - [`Line`] / [`Span`] - toned text held by each row
//! - [`Tone`] / [`Theme`] - semantic colors and their palette
//! - [`format`] - bars, status lines, labels, word wrap

pub mod format;
pub mod line;
pub mod panel;
pub mod theme;

pub use line::{Line, Span};
pub use panel::{FADED, Label, OPAQUE, Panel};
pub use theme::{Rgb, Theme, Tone};
