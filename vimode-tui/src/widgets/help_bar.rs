//! Help bar - key hints along the bottom of the screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

pub struct HelpBarWidget<'a> {
    theme: &'a Theme,
}

impl<'a> HelpBarWidget<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = self.theme;
        let line = Line::from(vec![
            Span::styled("A", t.key(t.widescreen_key)),
            Span::styled(" - Toggle widescreen   ", t.normal()),
            Span::styled("1", t.key(t.apply_key)),
            Span::styled(" - Apply   ", t.normal()),
            Span::styled("2", t.key(t.reset_key)),
            Span::styled(" - Reset   ", t.normal()),
            Span::styled("Esc", t.dim()),
            Span::styled(" - Quit", t.normal()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::line_text;

    #[test]
    fn test_help_text() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        HelpBarWidget::new(&theme).render(area, &mut buf);

        let text = line_text(&buf, 0);
        assert!(text.contains("A - Toggle widescreen   1 - Apply   2 - Reset   Esc - Quit"));
        let key_x = text.find("1 - Apply").unwrap() as u16;
        assert_eq!(buf[(key_x, 0)].fg, theme.apply_key);
    }
}
