//! Corner coordinate labels for the applied framebuffer size

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::theme::Theme;

/// Shows `(0, 0)`, `(w, 0)`, `(w, h)` and `(0, h)` in the four corners
pub struct CornerLabelsWidget<'a> {
    width: u16,
    height: u16,
    theme: &'a Theme,
}

impl<'a> CornerLabelsWidget<'a> {
    pub fn new(width: u16, height: u16, theme: &'a Theme) -> Self {
        Self {
            width,
            height,
            theme,
        }
    }
}

impl Widget for CornerLabelsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 2 || area.width < 8 {
            return;
        }
        let style = self.theme.corner();
        let top = area.y;
        let bottom = area.bottom() - 1;

        let labels = [
            ("(0, 0)".to_string(), top, false),
            (format!("({}, 0)", self.width), top, true),
            (format!("({}, {})", self.width, self.height), bottom, true),
            (format!("(0, {})", self.height), bottom, false),
        ];
        for (text, y, right_aligned) in labels {
            let len = text.len() as u16;
            let x = if right_aligned {
                area.right().saturating_sub(len).max(area.x)
            } else {
                area.x
            };
            buf.set_stringn(x, y, &text, area.width as usize, style);
        }
    }
}
