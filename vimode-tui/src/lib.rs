//! Terminal UI for vimode - themes and widgets
//!
//! The editor core hands over plain rows; everything here only draws them.

mod theme;
pub mod widgets;

pub use theme::{Theme, AMBER, CLASSIC, PHOSPHOR_GREEN};
pub use widgets::{
    ControlsWidget, CornerLabelsWidget, GridWidget, HelpBarWidget, StatusBarWidget,
};
