//! HUD canvas renderer
//!
//! Draws a [`Hud`] onto an SDL2 canvas every frame and remembers where each
//! button landed, so mouse clicks can be resolved back to an [`ActionId`].
//!
//! # Layout
//!
//! - Player and enemy panels stacked in the top-left corner
//! - Game panel in the top-right corner
//! - Area panel along the top, centered
//! - Action log above the bottom bar, left-aligned
//! - Bottom bar: menu buttons, then the ability bar
//! - Body-part menu above the bottom bar, right-aligned, while focusing
//! - End-of-run summary as a centered modal over everything else
//!
//! # Usage Example
//!
//! ```rust,ignore
//! let mut renderer = HudRenderer::new(2);
//! renderer.render(&mut canvas, &hud)?;
//! let clicked = renderer.hit_test(x, y);
//! ```

use crate::error::Result;
use crate::gui::{ActionButton, ActionId, FocusScope};
use crate::hud::Hud;
use crate::sim::Simulation;
use crate::text::{LINE_ADVANCE, draw_line, text_width, to_color};
use crate::ui::{Label, Line, OPAQUE, Panel, Theme, Tone};
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

const MARGIN: i32 = 8;
const BUTTON_PADDING: u32 = 4;
const BUTTON_GAP: i32 = 6;
/// Columns reserved for the game panel on the right
const GAME_PANEL_COLUMNS: usize = 28;

pub struct HudRenderer {
    scale: u32,
    hit_boxes: Vec<(Rect, ActionId)>,
}

impl HudRenderer {
    /// `scale` multiplies the 5x7 font; 1 is the native glyph size
    pub fn new(scale: u32) -> Self {
        HudRenderer {
            scale: scale.max(1),
            hit_boxes: Vec::new(),
        }
    }

    fn line_height(&self) -> i32 {
        (LINE_ADVANCE * self.scale) as i32
    }

    /// Button under the point, if it is clickable this frame
    pub fn hit_test(&self, x: i32, y: i32) -> Option<ActionId> {
        self.hit_boxes
            .iter()
            .find(|(rect, _)| rect.contains_point((x, y)))
            .map(|(_, id)| *id)
    }

    pub fn render<S: Simulation>(&mut self, canvas: &mut Canvas<Window>, hud: &Hud<S>) -> Result<()> {
        self.hit_boxes.clear();

        let theme = &hud.config().theme;
        let (width, height) = canvas.logical_size();
        let (width, height) = (width as i32, height as i32);
        let line_height = self.line_height();
        let panels = hud.panels();

        let below_player = self.draw_panel(canvas, &panels.player, MARGIN, MARGIN, theme)?;
        self.draw_panel(canvas, &panels.enemy, MARGIN, below_player + line_height, theme)?;

        let game_x = width - MARGIN - text_width(GAME_PANEL_COLUMNS, self.scale) as i32;
        self.draw_panel(canvas, &panels.game, game_x, MARGIN, theme)?;

        let area_x = width / 2 - text_width(hud.config().wrap_column, self.scale) as i32 / 2;
        self.draw_panel(canvas, &panels.area, area_x.max(MARGIN), MARGIN, theme)?;

        let bar_y = height - MARGIN - line_height - 2 * BUTTON_PADDING as i32;
        let log_height = self.panel_height(&panels.log);
        self.draw_panel(canvas, &panels.log, MARGIN, bar_y - MARGIN - log_height, theme)?;

        let registry = hud.registry();
        let hud_focused = registry.focus() == FocusScope::Hud;
        let bar = registry.buttons_where(|id| {
            matches!(id, ActionId::Character | ActionId::Rest | ActionId::Pause | ActionId::Ability(_))
        });
        let mut x = MARGIN;
        for button in bar {
            x = self.draw_button(canvas, button, x, bar_y, theme, hud_focused)? + BUTTON_GAP;
        }

        if let Some(menu) = hud.focused_menu() {
            let rows = menu.layout();
            let row_height = line_height + 2 * BUTTON_PADDING as i32 + BUTTON_GAP;
            let widest = Line::from("[0] ").append(Line::from(longest(menu.parts())));
            let column_width = self.button_width(&widest);
            let menu_x = width - MARGIN - 2 * (column_width as i32 + BUTTON_GAP);
            let mut y = bar_y - row_height * rows.len() as i32;
            for row in rows {
                let mut x = menu_x;
                for id in row {
                    if let Some(button) = registry.get(id) {
                        self.draw_button(canvas, button, x, y, theme, hud_focused)?;
                    }
                    x += column_width as i32 + BUTTON_GAP;
                }
                y += row_height;
            }
        }

        if hud.summary().is_shown() {
            self.draw_summary(canvas, hud, width, height)?;
        }

        Ok(())
    }

    /// Height in pixels of a panel's rows, counting wrapped lines
    fn panel_height(&self, panel: &Panel) -> i32 {
        panel
            .rows()
            .iter()
            .map(|label| visual_lines(&label.text) as i32)
            .sum::<i32>()
            * self.line_height()
    }

    /// Draws every row of a panel; returns the y coordinate below it
    fn draw_panel(&self, canvas: &mut Canvas<Window>, panel: &Panel, x: i32, y: i32, theme: &Theme) -> Result<i32> {
        let mut y = y;
        for label in panel.rows() {
            y = self.draw_label(canvas, label, x, y, theme)?;
        }
        Ok(y)
    }

    /// Draws a label, breaking on embedded newlines; returns the next y
    fn draw_label(&self, canvas: &mut Canvas<Window>, label: &Label, x: i32, y: i32, theme: &Theme) -> Result<i32> {
        let line_height = self.line_height();
        let mut y = y;
        let mut cursor = x;
        for span in label.text.spans() {
            for (i, piece) in span.text.split('\n').enumerate() {
                if i > 0 {
                    y += line_height;
                    cursor = x;
                }
                cursor = draw_line(
                    canvas,
                    &Line::toned(piece, span.tone),
                    cursor,
                    y,
                    theme,
                    label.opacity,
                    self.scale,
                )?;
            }
        }
        Ok(y + line_height)
    }

    fn button_width(&self, caption: &Line) -> u32 {
        text_width(caption.plain().chars().count(), self.scale) + 2 * BUTTON_PADDING
    }

    /// Draws a button and records its hit box when clickable; returns its
    /// right edge
    fn draw_button(
        &mut self,
        canvas: &mut Canvas<Window>,
        button: &ActionButton,
        x: i32,
        y: i32,
        theme: &Theme,
        in_focus: bool,
    ) -> Result<i32> {
        let caption = button.caption();
        let rect = Rect::new(
            x,
            y,
            self.button_width(&caption),
            (LINE_ADVANCE * self.scale) + 2 * BUTTON_PADDING,
        );

        let border = if button.enabled { Tone::Muted } else { Tone::Faint };
        canvas.set_draw_color(to_color(theme.backdrop, OPAQUE));
        canvas.fill_rect(rect)?;
        canvas.set_draw_color(to_color(theme.color(border), OPAQUE));
        canvas.draw_rect(rect)?;

        let pad = BUTTON_PADDING as i32;
        draw_line(canvas, &caption, x + pad, y + pad, theme, OPAQUE, self.scale)?;

        if button.enabled && in_focus && button.scope == FocusScope::Hud {
            self.hit_boxes.push((rect, button.id));
        }
        Ok(rect.right())
    }

    fn draw_summary<S: Simulation>(
        &mut self,
        canvas: &mut Canvas<Window>,
        hud: &Hud<S>,
        width: i32,
        height: i32,
    ) -> Result<()> {
        let theme = &hud.config().theme;
        let line_height = self.line_height();

        // Dark overlay
        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(sdl2::pixels::Color::RGBA(0, 0, 0, 200));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);

        let lines = hud.summary().lines();
        let widest = lines.iter().map(|l| l.plain().chars().count()).max().unwrap_or(0);
        let dialog_width = text_width(widest, self.scale) as i32 + 4 * MARGIN;
        let dialog_height = (lines.len() as i32 + 3) * line_height + 4 * MARGIN;
        let dialog = Rect::new(
            (width - dialog_width) / 2,
            (height - dialog_height) / 2,
            dialog_width as u32,
            dialog_height as u32,
        );

        canvas.set_draw_color(to_color(theme.backdrop, OPAQUE));
        canvas.fill_rect(dialog)?;
        canvas.set_draw_color(to_color(theme.muted, OPAQUE));
        canvas.draw_rect(dialog)?;

        let mut y = dialog.y() + 2 * MARGIN;
        for line in lines {
            draw_line(canvas, line, dialog.x() + 2 * MARGIN, y, theme, OPAQUE, self.scale)?;
            y += line_height;
        }

        let registry = hud.registry();
        let in_focus = registry.focus() == FocusScope::Summary;
        let mut x = dialog.x() + 2 * MARGIN;
        y += line_height;
        for button in registry.buttons_where(|id| matches!(id, ActionId::SummaryConfirm | ActionId::SummaryQuit)) {
            let caption = button.caption();
            let rect = Rect::new(
                x,
                y,
                self.button_width(&caption),
                (LINE_ADVANCE * self.scale) + 2 * BUTTON_PADDING,
            );
            canvas.set_draw_color(to_color(theme.muted, OPAQUE));
            canvas.draw_rect(rect)?;
            let pad = BUTTON_PADDING as i32;
            draw_line(canvas, &caption, x + pad, y + pad, theme, OPAQUE, self.scale)?;
            if in_focus && button.enabled {
                self.hit_boxes.push((rect, button.id));
            }
            x = rect.right() + BUTTON_GAP;
        }

        Ok(())
    }
}

fn longest(parts: &[String]) -> String {
    parts
        .iter()
        .max_by_key(|part| part.chars().count())
        .cloned()
        .unwrap_or_default()
}

/// Number of drawn lines a label occupies
fn visual_lines(line: &Line) -> usize {
    line.plain().matches('\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_test_finds_recorded_box() {
        let mut renderer = HudRenderer::new(2);
        renderer.hit_boxes.push((Rect::new(10, 10, 40, 20), ActionId::Rest));
        assert_eq!(renderer.hit_test(15, 15), Some(ActionId::Rest));
        assert_eq!(renderer.hit_test(60, 15), None);
    }

    #[test]
    fn test_visual_lines_counts_wraps() {
        assert_eq!(visual_lines(&Line::from("one")), 1);
        assert_eq!(visual_lines(&Line::from("one\ntwo\nthree")), 3);
    }

    #[test]
    fn test_longest_part() {
        let parts = vec!["head".to_string(), "left arm".to_string()];
        assert_eq!(longest(&parts), "left arm");
        assert_eq!(longest(&[]), "");
    }
}
