//! Control rows widget - labels and values at their canvas anchors

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use vimode_core::RenderRow;

use crate::theme::Theme;

/// Width of the logical canvas control anchors are expressed in
const CANVAS_WIDTH: i32 = 640;
/// Logical units per terminal line
const UNITS_PER_LINE: i32 = 20;

/// Draws every control row, highlighting the active one
pub struct ControlsWidget<'a> {
    rows: &'a [RenderRow],
    theme: &'a Theme,
}

impl<'a> ControlsWidget<'a> {
    pub fn new(rows: &'a [RenderRow], theme: &'a Theme) -> Self {
        Self { rows, theme }
    }

    fn band_height(&self) -> u16 {
        self.rows
            .iter()
            .map(|row| row.position.1.max(0) / UNITS_PER_LINE + 1)
            .max()
            .unwrap_or(0) as u16
    }
}

impl Widget for ControlsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        // Rows are laid out in a band centred vertically in the area
        let top = area.y + area.height.saturating_sub(self.band_height()) / 2;

        for row in self.rows {
            let (x, y) = row.position;
            let col = area.x
                + (x.clamp(0, CANVAS_WIDTH) as i64 * area.width as i64 / CANVAS_WIDTH as i64) as u16;
            let line = top + (y.max(0) / UNITS_PER_LINE) as u16;
            if line >= area.bottom() || col >= area.right() {
                continue;
            }

            let style = if row.is_active {
                self.theme.active()
            } else {
                self.theme.normal()
            };
            let text = format!("{}{}", row.label.unwrap_or(""), row.value);
            buf.set_stringn(col, line, text, (area.right() - col) as usize, style);
        }
    }
}
