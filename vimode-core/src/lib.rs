//! Core of vimode - editable video-mode controls
//!
//! This crate holds everything that does not touch a terminal or a clock
//! device directly:
//! - Buttons: remote-style button masks and per-tick input snapshots
//! - Accel: time-based repeat acceleration for held directions
//! - Label: static value/name tables used for display and cycling
//! - Control: per-field format/change behaviour
//! - Registry: ordered, navigable control list with pending/applied settings
//! - Mode: the video-mode record, its lookup tables and the default layout

mod accel;
mod buttons;
mod clock;
mod control;
mod label;
pub mod mode;
mod registry;

pub use accel::{acceleration, RepeatState};
pub use buttons::{Buttons, Direction, InputSnapshot};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use control::{Accessor, Control, ControlKind, NumericField};
pub use label::LabelTable;
pub use mode::{default_controls, set_widescreen, VideoMode};
pub use registry::{Registry, RenderRow};
