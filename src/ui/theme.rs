//! Semantic text tones and the palette they map to
//!
//! HUD text never carries raw colors. Formatting code picks a [`Tone`] for
//! each span and the renderer resolves it through a [`Theme`], so the
//! palette can be swapped from config without touching formatting.

use serde::{Deserialize, Serialize};

/// Meaning of a piece of HUD text, resolved to a color at draw time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    /// Primary readouts (white)
    #[default]
    Normal,
    /// Labels and punctuation (light gray)
    Muted,
    /// Empty bar ticks, mode suffixes, cooldown counters (dark gray)
    Faint,
    /// Low values (red)
    Warning,
    /// Half-depleted favor (yellow)
    Caution,
    /// Oxygen ticks and readout (cyan)
    Oxygen,
    /// Item names in the area panel (yellow)
    Item,
    /// Enemy names in the area panel (red)
    Hostile,
    /// Key hints on buttons (cyan)
    Key,
}

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Color for every tone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub normal: Rgb,
    pub muted: Rgb,
    pub faint: Rgb,
    pub warning: Rgb,
    pub caution: Rgb,
    pub oxygen: Rgb,
    pub item: Rgb,
    pub hostile: Rgb,
    pub key: Rgb,
    /// Panel backdrop behind modal dialogs
    pub backdrop: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Rgb(255, 255, 255),
            muted: Rgb(191, 191, 191),
            faint: Rgb(64, 64, 64),
            warning: Rgb(255, 0, 0),
            caution: Rgb(255, 255, 0),
            oxygen: Rgb(0, 255, 255),
            item: Rgb(255, 255, 0),
            hostile: Rgb(255, 0, 0),
            key: Rgb(0, 255, 255),
            backdrop: Rgb(30, 30, 40),
        }
    }
}

impl Theme {
    pub fn color(&self, tone: Tone) -> Rgb {
        match tone {
            Tone::Normal => self.normal,
            Tone::Muted => self.muted,
            Tone::Faint => self.faint,
            Tone::Warning => self.warning,
            Tone::Caution => self.caution,
            Tone::Oxygen => self.oxygen,
            Tone::Item => self.item,
            Tone::Hostile => self.hostile,
            Tone::Key => self.key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        assert_eq!(theme.color(Tone::Normal), Rgb(255, 255, 255));
        assert_eq!(theme.color(Tone::Warning), Rgb(255, 0, 0));
        assert_eq!(theme.color(Tone::Oxygen), Rgb(0, 255, 255));
    }

    #[test]
    fn test_partial_theme_fills_defaults() {
        let theme: Theme = serde_json::from_str(r#"{ "warning": [200, 0, 0] }"#).unwrap();
        assert_eq!(theme.warning, Rgb(200, 0, 0));
        assert_eq!(theme.normal, Theme::default().normal);
    }
}
