//! Color themes for the editor screen

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    /// Control labels and values
    pub fg: Color,
    /// Secondary text
    pub fg_dim: Color,
    pub bg: Color,
    /// The control receiving edits
    pub active: Color,
    /// Coordinate labels in the screen corners
    pub corner: Color,
    /// Background grid
    pub grid: Color,
    /// Help-bar key for applying
    pub apply_key: Color,
    /// Help-bar key for resetting
    pub reset_key: Color,
    /// Help-bar key for the widescreen toggle
    pub widescreen_key: Color,
    /// Unapplied edits marker
    pub warning: Color,
}

impl Theme {
    /// Look a theme up by its config name
    pub fn by_name(name: &str) -> Option<Theme> {
        match name {
            "classic" => Some(CLASSIC),
            "phosphor-green" | "green" => Some(PHOSPHOR_GREEN),
            "amber" => Some(AMBER),
            _ => None,
        }
    }

    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    pub fn active(&self) -> Style {
        Style::default()
            .fg(self.active)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn corner(&self) -> Style {
        Style::default().fg(self.corner).bg(self.bg)
    }

    pub fn grid(&self) -> Style {
        Style::default().fg(self.grid).bg(self.bg)
    }

    pub fn key(&self, color: Color) -> Style {
        Style::default()
            .fg(color)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning).bg(self.bg)
    }
}

/// White on black with a yellow selection, like the console screen
pub const CLASSIC: Theme = Theme {
    name: "classic",
    fg: Color::Rgb(255, 255, 255),
    fg_dim: Color::Rgb(128, 128, 128),
    bg: Color::Rgb(0, 0, 0),
    active: Color::Rgb(255, 255, 0),
    corner: Color::Rgb(0, 0, 255),
    grid: Color::Rgb(64, 64, 64),
    apply_key: Color::Rgb(0, 255, 0),
    reset_key: Color::Rgb(255, 0, 0),
    widescreen_key: Color::Rgb(192, 192, 0),
    warning: Color::Rgb(255, 176, 0),
};

/// Classic phosphor green CRT theme
pub const PHOSPHOR_GREEN: Theme = Theme {
    name: "phosphor-green",
    fg: Color::Rgb(51, 255, 51),        // #33ff33 - phosphor green
    fg_dim: Color::Rgb(25, 128, 25),    // dimmed green
    bg: Color::Rgb(0, 10, 0),           // near black with green tint
    active: Color::Rgb(180, 255, 180),  // bright green
    corner: Color::Rgb(100, 255, 150),  // green-cyan
    grid: Color::Rgb(15, 60, 15),
    apply_key: Color::Rgb(100, 255, 100),
    reset_key: Color::Rgb(255, 100, 100),
    widescreen_key: Color::Rgb(255, 255, 100),
    warning: Color::Rgb(255, 255, 100),
};

/// Amber CRT theme (1980s monochrome)
pub const AMBER: Theme = Theme {
    name: "amber",
    fg: Color::Rgb(255, 176, 0),        // #ffb000 - amber
    fg_dim: Color::Rgb(128, 88, 0),     // dimmed amber
    bg: Color::Rgb(10, 5, 0),           // near black with amber tint
    active: Color::Rgb(255, 220, 128),  // bright amber
    corner: Color::Rgb(255, 180, 50),
    grid: Color::Rgb(60, 40, 0),
    apply_key: Color::Rgb(255, 200, 64),
    reset_key: Color::Rgb(255, 100, 100),
    widescreen_key: Color::Rgb(255, 220, 100),
    warning: Color::Rgb(255, 255, 100),
};

impl Default for Theme {
    fn default() -> Self {
        CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("amber").map(|t| t.name), Some("amber"));
        assert_eq!(Theme::by_name("green").map(|t| t.name), Some("phosphor-green"));
        assert!(Theme::by_name("neon").is_none());
    }

    #[test]
    fn test_active_differs_from_normal() {
        let theme = Theme::default();
        assert_ne!(theme.active(), theme.normal());
    }
}
