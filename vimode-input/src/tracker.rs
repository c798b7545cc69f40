//! Key event tracking: edges and levels per tick

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;
use vimode_core::{Buttons, InputSnapshot};

/// How long a key stays held after its last press/repeat when the terminal
/// does not report releases. Kept under the 500ms repeat dead zone so a
/// single tap never produces a repeat step.
pub const DEFAULT_HOLD_TIMEOUT: Duration = Duration::from_millis(450);

/// Map a key to the remote button it stands for
pub fn button_for_key(key: &KeyEvent) -> Option<Buttons> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Buttons::HOME)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(Buttons::UP),
        KeyCode::Down | KeyCode::Char('j') => Some(Buttons::DOWN),
        KeyCode::Left | KeyCode::Char('h') => Some(Buttons::LEFT),
        KeyCode::Right | KeyCode::Char('l') => Some(Buttons::RIGHT),
        KeyCode::Char('1') => Some(Buttons::ONE),
        KeyCode::Char('2') => Some(Buttons::TWO),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Buttons::A),
        KeyCode::Esc | KeyCode::Char('q') => Some(Buttons::HOME),
        _ => None,
    }
}

/// Accumulates key events between ticks
///
/// Terminals without keyboard enhancement report auto-repeat as more
/// presses and never report releases, so a press on a key that is still
/// considered down only refreshes it, and keys expire after `hold_timeout`
/// without events. On such terminals two taps of the same key closer than
/// `hold_timeout` count as one press; with release events every tap counts.
#[derive(Debug)]
pub struct KeyTracker {
    hold_timeout: Duration,
    /// Keys currently down with the instant they were last seen
    down: Vec<(Buttons, Instant)>,
    /// Press edges since the last snapshot
    edges: Buttons,
}

impl KeyTracker {
    pub fn new(hold_timeout: Duration) -> Self {
        Self {
            hold_timeout,
            down: Vec::with_capacity(8),
            edges: Buttons::empty(),
        }
    }

    /// Record one key event observed at `now`
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        let Some(button) = button_for_key(&key) else {
            return;
        };
        self.expire(now);

        match key.kind {
            KeyEventKind::Press => {
                if !self.is_down(button) {
                    self.edges |= button;
                    trace!(?button, "press");
                }
                self.touch(button, now);
            }
            KeyEventKind::Repeat => self.touch(button, now),
            KeyEventKind::Release => {
                self.down.retain(|(b, _)| *b != button);
                trace!(?button, "release");
            }
        }
    }

    /// Input for the tick happening at `now`; clears the press edges
    ///
    /// A key pressed and released between two ticks still shows up as both
    /// pressed and held for that tick.
    pub fn snapshot(&mut self, now: Instant) -> InputSnapshot {
        self.expire(now);
        let held = self
            .down
            .iter()
            .fold(self.edges, |acc, (button, _)| acc | *button);
        let pressed = std::mem::take(&mut self.edges);
        InputSnapshot::new(pressed, held)
    }

    fn is_down(&self, button: Buttons) -> bool {
        self.down.iter().any(|(b, _)| *b == button)
    }

    fn touch(&mut self, button: Buttons, now: Instant) {
        match self.down.iter_mut().find(|(b, _)| *b == button) {
            Some((_, seen)) => *seen = now,
            None => self.down.push((button, now)),
        }
    }

    fn expire(&mut self, now: Instant) {
        let timeout = self.hold_timeout;
        self.down
            .retain(|(_, seen)| now.saturating_duration_since(*seen) < timeout);
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HOLD_TIMEOUT)
    }
}
