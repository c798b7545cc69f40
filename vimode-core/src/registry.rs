//! Ordered, navigable list of controls over a pending/applied settings pair

use tracing::{debug, trace};

use crate::buttons::{Direction, InputSnapshot};
use crate::clock::{Clock, MonotonicClock};
use crate::control::Control;

/// One line handed to the render sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    /// Anchor in the logical canvas
    pub position: (i32, i32),
    pub label: Option<&'static str>,
    pub value: String,
    pub is_active: bool,
}

/// Editor model: controls, the active selection and both settings copies
///
/// Edits only ever touch the pending copy. [`Registry::apply`] commits it
/// and [`Registry::reset`] discards it, each as a whole-record copy.
#[derive(Debug)]
pub struct Registry<R: 'static, C = MonotonicClock> {
    controls: Vec<Control<R>>,
    active: usize,
    pending: R,
    applied: R,
    clock: C,
}

impl<R: Clone + PartialEq + 'static> Registry<R, MonotonicClock> {
    pub fn new(controls: Vec<Control<R>>, applied: R) -> Self {
        Self::with_clock(controls, applied, MonotonicClock)
    }
}

impl<R: Clone + PartialEq + 'static, C: Clock> Registry<R, C> {
    /// Create a registry with its own time source
    ///
    /// `controls` should not be empty; an empty list gets a single blank
    /// read-only row so the active index always points at something.
    pub fn with_clock(mut controls: Vec<Control<R>>, applied: R, clock: C) -> Self {
        debug_assert!(!controls.is_empty(), "registry needs at least one control");
        if controls.is_empty() {
            controls.push(Control::info((0, 0), None, |_| String::new()));
        }
        Self {
            controls,
            active: 0,
            pending: applied.clone(),
            applied,
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Move the selection by `n` rows, wrapping in both directions
    pub fn select_delta(&mut self, n: isize) {
        let len = self.controls.len() as isize;
        // Reduce first so huge steps cannot overflow
        let step = n.rem_euclid(len);
        let next = ((self.active as isize + step) % len) as usize;
        if next != self.active {
            // A hold on the old row must not carry over when it is reselected
            self.controls[self.active].release();
        }
        self.active = next;
        debug!(active = self.active, "selected control");
    }

    pub fn navigate(&mut self, direction: Direction) {
        self.select_delta(direction.delta());
    }

    /// Current value of the active control
    pub fn format_active(&self) -> String {
        self.controls[self.active].format(&self.pending)
    }

    /// Current value of every control, in order
    pub fn format_all(&self) -> Vec<String> {
        self.controls
            .iter()
            .map(|control| control.format(&self.pending))
            .collect()
    }

    /// Feed one tick of input to the active control
    ///
    /// Read-only rows ignore it. Returns true if the pending settings changed.
    pub fn dispatch_edit(&mut self, input: &InputSnapshot) -> bool {
        let now = self.clock.now();
        let control = &mut self.controls[self.active];
        let changed = control.change(input, now, &mut self.pending);
        if changed {
            trace!(
                control = control.label().unwrap_or(""),
                value = %control.format(&self.pending),
                "edited"
            );
        }
        changed
    }

    /// Commit pending settings; returns the newly applied record
    pub fn apply(&mut self) -> &R {
        self.applied = self.pending.clone();
        debug!("applied pending settings");
        &self.applied
    }

    /// Discard pending edits
    pub fn reset(&mut self) {
        self.pending = self.applied.clone();
        debug!("reset pending settings");
    }

    /// Everything the render sink needs for this frame
    pub fn render_rows(&self) -> Vec<RenderRow> {
        self.controls
            .iter()
            .enumerate()
            .map(|(i, control)| RenderRow {
                position: control.position(),
                label: control.label(),
                value: control.format(&self.pending),
                is_active: i == self.active,
            })
            .collect()
    }

    pub fn pending(&self) -> &R {
        &self.pending
    }

    /// Direct access for caller-level actions (e.g. widescreen toggle)
    pub fn pending_mut(&mut self) -> &mut R {
        &mut self.pending
    }

    pub fn applied(&self) -> &R {
        &self.applied
    }

    /// Pending settings differ from the applied ones
    pub fn is_dirty(&self) -> bool {
        self.pending != self.applied
    }
}
