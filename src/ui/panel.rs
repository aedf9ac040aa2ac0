//! Panel Synchronizer
//!
//! A [`Panel`] is a named, indexable group of text rows. Each frame the HUD
//! hands it freshly formatted text keyed by row index, and the panel updates
//! the rows it already has in place instead of rebuilding them. Rows are only
//! ever created by growing past the end and only ever removed by an explicit
//! [`Panel::clear`].
//!
//! # Example
//!
//! ```rust
//! use xibalba_hud::ui::{Line, Panel};
//!
//! let mut panel = Panel::new("player");
//! panel.sync([(0, Line::from("Ixchel")), (1, Line::from("HP [xx] 20/20"))]);
//! panel.sync([(0, Line::from("Ixchel")), (1, Line::from("HP [xx] 19/20"))]);
//!
//! assert_eq!(panel.len(), 2);
//! assert_eq!(panel.rows_created(), 2);
//! assert_eq!(panel.text(1), Some("HP [xx] 19/20".to_string()));
//! ```

use super::line::Line;

/// Full opacity, used for current entries
pub const OPAQUE: f32 = 1.0;

/// Opacity for older action-log entries
pub const FADED: f32 = 0.5;

/// One text row inside a panel
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: Line,
    /// 0.0 (invisible) to 1.0 (opaque)
    pub opacity: f32,
}

impl Label {
    pub fn new(text: Line) -> Self {
        Label {
            text,
            opacity: OPAQUE,
        }
    }

    pub fn with_opacity(text: Line, opacity: f32) -> Self {
        Label {
            text,
            opacity: opacity.clamp(0.0, 1.0),
        }
    }
}

impl From<Line> for Label {
    fn from(text: Line) -> Self {
        Label::new(text)
    }
}

/// A named, append-only group of rows keyed by position
#[derive(Debug, Clone)]
pub struct Panel {
    name: &'static str,
    rows: Vec<Label>,
    rows_created: usize,
}

impl Panel {
    pub fn new(name: &'static str) -> Self {
        Panel {
            name,
            rows: Vec::new(),
            rows_created: 0,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Writes every `(index, text)` pair into the panel
    ///
    /// Indices past the end grow the panel; a gap is filled with empty rows
    /// so a row's index always names the same slot. Rows absent from the
    /// mapping keep their current content.
    pub fn sync<I, L>(&mut self, rows: I)
    where
        I: IntoIterator<Item = (usize, L)>,
        L: Into<Label>,
    {
        for (index, label) in rows {
            self.sync_row(index, label.into());
        }
    }

    /// Writes one row, growing the panel if needed
    pub fn sync_row(&mut self, index: usize, label: Label) {
        if let Some(row) = self.rows.get_mut(index) {
            if *row != label {
                *row = label;
            }
            return;
        }

        while self.rows.len() < index {
            self.rows.push(Label::new(Line::new()));
            self.rows_created += 1;
        }
        self.rows.push(label);
        self.rows_created += 1;
    }

    /// Drops every row; the next sync starts from an empty panel
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn rows(&self) -> &[Label] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Label> {
        self.rows.get(index)
    }

    /// Plain text of a row
    pub fn text(&self, index: usize) -> Option<String> {
        self.rows.get(index).map(|row| row.text.plain())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total rows ever appended over the panel's lifetime
    ///
    /// Stays flat while the panel is only updated in place; grows again
    /// after a `clear`.
    pub fn rows_created(&self) -> usize {
        self.rows_created
    }
}
