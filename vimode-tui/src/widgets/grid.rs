//! Background alignment grid with corner-to-corner diagonals

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::theme::Theme;

const GRID_COLUMNS: u16 = 8;
const GRID_ROWS: u16 = 4;

pub struct GridWidget<'a> {
    theme: &'a Theme,
}

impl<'a> GridWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for GridWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let style = self.theme.grid();
        let last_col = area.width - 1;
        let last_row = area.height - 1;

        for dy in 0..area.height {
            for dx in 0..area.width {
                let on_grid = (dx % GRID_COLUMNS == 0 || dx == last_col)
                    && (dy % GRID_ROWS == 0 || dy == last_row);
                // Diagonals scaled to the area's aspect ratio
                let diag = dx as u32 * last_row as u32 / last_col as u32;
                let on_diagonal = dy as u32 == diag || (last_row - dy) as u32 == diag;

                let ch = if on_grid {
                    '+'
                } else if on_diagonal {
                    '·'
                } else {
                    ' '
                };
                buf[(area.x + dx, area.y + dy)].set_char(ch).set_style(style);
            }
        }
    }
}
