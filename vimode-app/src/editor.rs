//! Editor state driven once per frame by the event loop

use tracing::{debug, info};
use vimode_core::{
    default_controls, set_widescreen, Clock, InputSnapshot, MonotonicClock, Registry, VideoMode,
};
use vimode_input::Action;

/// Everything the screen shows, plus the quit flag
pub struct Editor<C: Clock = MonotonicClock> {
    registry: Registry<VideoMode, C>,
    widescreen: bool,
    message: Option<String>,
    should_quit: bool,
}

impl Editor<MonotonicClock> {
    pub fn new(initial: VideoMode) -> Self {
        Self::with_clock(initial, MonotonicClock)
    }
}

impl<C: Clock> Editor<C> {
    pub fn with_clock(initial: VideoMode, clock: C) -> Self {
        Self {
            registry: Registry::with_clock(default_controls(), initial, clock),
            widescreen: false,
            message: None,
            should_quit: false,
        }
    }

    /// Handle one frame of input
    ///
    /// Quit ends the frame immediately. Any other action runs first, then
    /// the active control gets the chance to edit.
    pub fn tick(&mut self, input: &InputSnapshot) {
        if let Some(action) = Action::from_pressed(input.pressed) {
            debug!(action = action.name(), "action");
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return;
                }
                Action::Navigate(direction) => self.registry.navigate(direction),
                Action::Apply => self.apply(),
                Action::Reset => {
                    self.registry.reset();
                    self.set_message("Edits discarded");
                }
                Action::ToggleWidescreen => self.toggle_widescreen(),
            }
        }

        self.registry.dispatch_edit(input);
    }

    fn apply(&mut self) {
        let mode = *self.registry.apply();
        info!(
            mode = %mode.summary(),
            extra_vsync = mode.is_non_interlaced(),
            "applied video mode"
        );
        self.set_message(format!("Applied {}", mode.summary()));
    }

    fn toggle_widescreen(&mut self) {
        self.widescreen = !self.widescreen;
        set_widescreen(self.registry.pending_mut(), self.widescreen);
        let width = self.registry.pending().vi_width;
        info!(widescreen = self.widescreen, vi_width = width, "toggled widescreen");
        self.set_message(format!(
            "Widescreen {} (VI width {})",
            if self.widescreen { "on" } else { "off" },
            width
        ));
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn registry(&self) -> &Registry<VideoMode, C> {
        &self.registry
    }

    pub fn widescreen(&self) -> bool {
        self.widescreen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
