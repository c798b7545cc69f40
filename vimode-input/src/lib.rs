//! Input handling for vimode
//!
//! Turns terminal key events into the per-tick pressed/held button
//! snapshots the editor core consumes, and pressed edges into editor actions.

mod actions;
mod tracker;

pub use actions::Action;
pub use tracker::{button_for_key, KeyTracker, DEFAULT_HOLD_TIMEOUT};
