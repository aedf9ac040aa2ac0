//! Derived text for HUD rows
//!
//! Pure functions from snapshot values to [`Line`]s. Nothing here touches
//! panels or the simulation, which keeps the formatting rules testable on
//! their own.
//!
//! # Bars
//!
//! Health, favor and oxygen render as a label, a tick strip and a numeric
//! readout:
//!
//! ```text
//! HP [xx] 19/20
//! ```
//!
//! The strip has `floor(max / unit)` ticks. Tick `i` is filled while
//! `value >= i * unit`.

use super::line::Line;
use super::theme::Tone;
use crate::sim::{AbilitySlot, DisplayMode, StatusFlags};

/// Divine favor is always out of 100
pub const FAVOR_MAX: i32 = 100;

/// Shape of one resource bar
#[derive(Debug, Clone, Copy)]
pub struct BarStyle {
    pub label: &'static str,
    /// Resource points per tick
    pub unit: i32,
    pub filled: Tone,
    /// Readout tone when the value is healthy
    pub readout: Tone,
}

pub const HEALTH_BAR: BarStyle = BarStyle {
    label: "HP",
    unit: 10,
    filled: Tone::Normal,
    readout: Tone::Normal,
};

pub const FAVOR_BAR: BarStyle = BarStyle {
    label: "DF",
    unit: 10,
    filled: Tone::Normal,
    readout: Tone::Normal,
};

pub const OXYGEN_BAR: BarStyle = BarStyle {
    label: "OX",
    unit: 4,
    filled: Tone::Oxygen,
    readout: Tone::Oxygen,
};

/// Number of ticks for a bar of the given maximum
pub fn tick_count(max: i32, unit: i32) -> usize {
    if unit <= 0 || max <= 0 {
        return 0;
    }
    (max / unit) as usize
}

/// Tone for the numeric part of a health or oxygen readout
///
/// Warning once the value drops below half (integer division) of maximum.
pub fn readout_tone(value: i32, max: i32, healthy: Tone) -> Tone {
    if value < max / 2 { Tone::Warning } else { healthy }
}

/// Three-tier tone for favor: depleted, at or below half, normal
pub fn favor_tone(favor: i32) -> Tone {
    if favor <= 0 {
        Tone::Warning
    } else if favor * 2 <= FAVOR_MAX {
        Tone::Caution
    } else {
        Tone::Normal
    }
}

fn bar(style: BarStyle, value: i32, max: i32, readout: Tone) -> Line {
    let mut line = Line::toned(format!("{} [", style.label), Tone::Muted);
    for i in 0..tick_count(max, style.unit) {
        let tone = if value < i as i32 * style.unit {
            Tone::Faint
        } else {
            style.filled
        };
        line = line.push("x", tone);
    }
    line.push("] ", Tone::Muted)
        .push(value.to_string(), readout)
        .push(format!("/{}", max), Tone::Muted)
}

pub fn health_bar(health: i32, max_health: i32) -> Line {
    let tone = readout_tone(health, max_health, HEALTH_BAR.readout);
    bar(HEALTH_BAR, health, max_health, tone)
}

pub fn oxygen_bar(oxygen: i32, max_oxygen: i32) -> Line {
    let tone = readout_tone(oxygen, max_oxygen, OXYGEN_BAR.readout);
    bar(OXYGEN_BAR, oxygen, max_oxygen, tone)
}

pub fn favor_bar(favor: i32) -> Line {
    bar(FAVOR_BAR, favor, FAVOR_MAX, favor_tone(favor))
}

/// Active conditions joined with `", "`; empty when none are set
pub fn status_line(flags: &StatusFlags) -> Line {
    let mut line = Line::new();
    for (i, name) in flags.active().into_iter().enumerate() {
        if i > 0 {
            line = line.push(", ", Tone::Muted);
        }
        line = line.push(name, Tone::Faint);
    }
    line
}

/// Entity name followed by the mode suffix, if the mode has one
pub fn name_line(name: &str, mode: DisplayMode) -> Line {
    let line = Line::toned(name, Tone::Normal);
    match mode.name_suffix() {
        Some(suffix) => line.push(format!(" {}", suffix), Tone::Faint),
        None => line,
    }
}

/// Ability button label: the bare name when ready, otherwise the name and
/// recharge progress
pub fn ability_label(slot: &AbilitySlot) -> Line {
    if slot.is_ready() {
        Line::toned(slot.name.as_str(), Tone::Normal)
    } else {
        Line::toned(slot.name.as_str(), Tone::Normal)
            .push(format!(" {}/{}", slot.counter, slot.recharge), Tone::Faint)
    }
}

/// Upper-cases the first letter of every word (`"left arm"` -> `"Left Arm"`)
pub fn capitalize(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Greedy word wrap at `width` columns
///
/// Breaks only at spaces; a word longer than the column stays whole on its
/// own line. Existing newlines are kept.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for raw in text.split('\n') {
        let mut current = String::new();
        for word in raw.split(' ').filter(|w| !w.is_empty()) {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines.join("\n")
}
