//! Status bar widget - pending state, last message and aspect ratio

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

pub struct StatusBarWidget<'a> {
    dirty: bool,
    widescreen: bool,
    message: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(dirty: bool, theme: &'a Theme) -> Self {
        Self {
            dirty,
            widescreen: false,
            message: None,
            theme,
        }
    }

    pub fn widescreen(mut self, widescreen: bool) -> Self {
        self.widescreen = widescreen;
        self
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let chunks = Layout::horizontal([
            Constraint::Length(12), // Pending state
            Constraint::Min(10),    // Message
            Constraint::Length(6),  // Aspect
        ])
        .split(area);

        let state = if self.dirty {
            Span::styled("[MODIFIED]", self.theme.warning())
        } else {
            Span::styled("[APPLIED]", self.theme.dim())
        };
        Paragraph::new(Line::from(state)).render(chunks[0], buf);

        if let Some(msg) = self.message {
            Paragraph::new(Line::from(Span::styled(msg, self.theme.normal())))
                .render(chunks[1], buf);
        }

        let aspect = if self.widescreen { "16:9" } else { "4:3" };
        Paragraph::new(Line::from(Span::styled(aspect, self.theme.dim())))
            .alignment(Alignment::Right)
            .render(chunks[2], buf);
    }
}
