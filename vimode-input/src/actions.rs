//! Editor-level actions triggered by button edges

use vimode_core::{Buttons, Direction};

/// What the event loop should do this tick, besides editing the active field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Navigate(Direction),
    Apply,
    Reset,
    ToggleWidescreen,
}

impl Action {
    /// Pick at most one action from this tick's press edges
    ///
    /// Quit always wins; otherwise the first of UP, DOWN, ONE, TWO, A.
    /// LEFT/RIGHT never produce an action, they are field edits.
    pub fn from_pressed(pressed: Buttons) -> Option<Action> {
        if pressed.contains(Buttons::HOME) {
            Some(Action::Quit)
        } else if pressed.contains(Buttons::UP) {
            Some(Action::Navigate(Direction::Up))
        } else if pressed.contains(Buttons::DOWN) {
            Some(Action::Navigate(Direction::Down))
        } else if pressed.contains(Buttons::ONE) {
            Some(Action::Apply)
        } else if pressed.contains(Buttons::TWO) {
            Some(Action::Reset)
        } else if pressed.contains(Buttons::A) {
            Some(Action::ToggleWidescreen)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::Quit => "quit",
            Action::Navigate(Direction::Up) => "up",
            Action::Navigate(Direction::Down) => "down",
            Action::Apply => "apply",
            Action::Reset => "reset",
            Action::ToggleWidescreen => "widescreen",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_has_priority() {
        let pressed = Buttons::HOME | Buttons::UP | Buttons::ONE;
        assert_eq!(Action::from_pressed(pressed), Some(Action::Quit));
    }

    #[test]
    fn test_navigation_before_apply() {
        let pressed = Buttons::DOWN | Buttons::ONE;
        assert_eq!(
            Action::from_pressed(pressed),
            Some(Action::Navigate(Direction::Down))
        );
        assert_eq!(Action::from_pressed(Buttons::ONE | Buttons::TWO), Some(Action::Apply));
        assert_eq!(Action::from_pressed(Buttons::TWO | Buttons::A), Some(Action::Reset));
        assert_eq!(Action::from_pressed(Buttons::A), Some(Action::ToggleWidescreen));
    }

    #[test]
    fn test_edits_are_not_actions() {
        assert_eq!(Action::from_pressed(Buttons::LEFT | Buttons::RIGHT), None);
        assert_eq!(Action::from_pressed(Buttons::empty()), None);
    }
}
