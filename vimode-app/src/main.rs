//! vimode - interactive video-mode editor
//!
//! Edit a video mode field by field in the terminal, then apply or discard it.

mod config;
mod editor;
mod logging;
mod terminal;

use std::io::{self, stdout};
use std::time::Instant;

use crossterm::{
    event::{self, Event, KeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute,
    terminal::{enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing::{info, warn};

use vimode_input::KeyTracker;
use vimode_tui::{
    ControlsWidget, CornerLabelsWidget, GridWidget, HelpBarWidget, StatusBarWidget, Theme,
};

use crate::config::Config;
use crate::editor::Editor;
use crate::terminal::TerminalGuard;

fn main() -> anyhow::Result<()> {
    let (config, config_error) = Config::load();
    if let Err(e) = logging::init(&config.log_path()) {
        eprintln!("vimode: logging disabled: {:#}", e);
    }
    if let Some(e) = &config_error {
        warn!(path = %Config::config_path().display(), error = %e, "ignoring config file");
    }
    info!(fps = config.fps, theme = %config.theme, "starting");

    // Initialize terminal; the guard restores it however we leave
    enable_raw_mode()?;
    let mut guard = TerminalGuard::default();
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    guard.alternate_screen = true;

    // Release events make held keys precise; without them holds time out
    if matches!(supports_keyboard_enhancement(), Ok(true)) {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
        guard.keyboard_enhancement = true;
    } else {
        warn!("terminal does not report key releases, falling back to hold timeout");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let startup_message = config_error.map(|e| format!("Config ignored: {}", e));
    let result = run_app(&mut terminal, &config, startup_message);

    drop(guard);
    info!("exiting");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    startup_message: Option<String>,
) -> anyhow::Result<()> {
    let theme = config.theme();
    let mut editor = Editor::new(config.initial_mode());
    if let Some(message) = startup_message {
        editor.set_message(message);
    }
    let mut tracker = KeyTracker::new(config.hold_timeout);
    let frame_duration = config.frame_duration();

    while !editor.should_quit() {
        let frame_start = Instant::now();

        terminal.draw(|frame| render_ui(frame, &editor, &theme))?;

        // Collect key events until the next frame is due
        loop {
            let timeout = frame_duration.saturating_sub(frame_start.elapsed());
            if !event::poll(timeout)? {
                break;
            }
            if let Event::Key(key) = event::read()? {
                tracker.handle_key(key, Instant::now());
            }
        }

        let input = tracker.snapshot(Instant::now());
        editor.tick(&input);
    }

    Ok(())
}

fn render_ui(frame: &mut ratatui::Frame, editor: &Editor, theme: &Theme) {
    let area = frame.area();

    // Clear with background
    let block = ratatui::widgets::Block::default().style(theme.normal());
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Min(5),    // Editor canvas
        Constraint::Length(1), // Help
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    let registry = editor.registry();
    let applied = registry.applied();
    let rows = registry.render_rows();

    frame.render_widget(GridWidget::new(theme), chunks[0]);
    frame.render_widget(
        CornerLabelsWidget::new(applied.fb_width, applied.efb_height, theme),
        chunks[0],
    );
    frame.render_widget(ControlsWidget::new(&rows, theme), chunks[0]);
    frame.render_widget(HelpBarWidget::new(theme), chunks[1]);
    frame.render_widget(
        StatusBarWidget::new(registry.is_dirty(), theme)
            .widescreen(editor.widescreen())
            .message(editor.message()),
        chunks[2],
    );
}
