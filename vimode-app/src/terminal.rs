//! Terminal restoration

use std::io::{self, stdout, Write};

use crossterm::{
    cursor::Show, event::PopKeyboardEnhancementFlags, execute, terminal::disable_raw_mode,
    terminal::LeaveAlternateScreen,
};

/// Undoes terminal setup on drop, best effort
///
/// Create it right after raw mode is enabled and set each flag once the
/// matching setup step succeeded.
#[derive(Debug, Default)]
pub struct TerminalGuard {
    pub alternate_screen: bool,
    pub keyboard_enhancement: bool,
}

impl TerminalGuard {
    fn restore_screen<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.keyboard_enhancement {
            execute!(out, PopKeyboardEnhancementFlags)?;
        }
        if self.alternate_screen {
            execute!(out, LeaveAlternateScreen, Show)?;
        }
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = self.restore_screen(&mut stdout());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_undoes_each_step() {
        let mut guard = TerminalGuard {
            alternate_screen: true,
            keyboard_enhancement: true,
        };
        let mut out = Vec::new();
        guard.restore_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[<1u"));
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));

        // Keep the test harness output clean
        guard.alternate_screen = false;
        guard.keyboard_enhancement = false;
    }

    #[test]
    fn test_restore_skips_steps_never_taken() {
        let guard = TerminalGuard::default();
        let mut out = Vec::new();
        guard.restore_screen(&mut out).unwrap();
        assert!(out.is_empty());
    }
}
