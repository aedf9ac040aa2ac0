//! Error types for the HUD crate
//!
//! The per-frame HUD update never fails: absent or stale simulation data is
//! rendered as "nothing to show". Errors only surface from the edges of the
//! crate: loading configuration, drawing to a real canvas, and the
//! simulation's answer to a combat-preparation request.

use thiserror::Error;

/// Unified result type for fallible HUD setup and rendering.
pub type Result<T> = std::result::Result<T, HudError>;

/// Errors surfaced while configuring or drawing the HUD
#[derive(Debug, Error)]
pub enum HudError {
    #[error("failed to read HUD config: {0}")]
    Config(#[from] std::io::Error),

    #[error("failed to parse HUD config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("render backend error: {0}")]
    Render(String),
}

impl From<String> for HudError {
    fn from(message: String) -> Self {
        HudError::Render(message)
    }
}

/// Why the simulation refused to prepare an attack
///
/// Returned by [`crate::sim::Simulation::prepare_attack`]. The HUD logs it and
/// moves on; the turn is still requested.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttackError {
    /// The focused entity died or was removed since the menu was built
    #[error("attack target is no longer valid")]
    TargetGone,

    /// Throwing or ranged attack with nothing suitable in hand
    #[error("nothing equipped for a {0} attack")]
    NothingEquipped(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_from_string() {
        let error: HudError = String::from("canvas lost").into();
        assert_eq!(error.to_string(), "render backend error: canvas lost");
    }

    #[test]
    fn test_attack_error_messages() {
        assert_eq!(
            AttackError::TargetGone.to_string(),
            "attack target is no longer valid"
        );
        assert_eq!(
            AttackError::NothingEquipped("ranged").to_string(),
            "nothing equipped for a ranged attack"
        );
    }
}
