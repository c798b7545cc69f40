//! UI widgets for vimode

mod controls;
mod corners;
mod grid;
mod help_bar;
mod status_bar;

pub use controls::ControlsWidget;
pub use corners::CornerLabelsWidget;
pub use grid::GridWidget;
pub use help_bar::HelpBarWidget;
pub use status_bar::StatusBarWidget;

#[cfg(test)]
pub(crate) fn line_text(buf: &ratatui::buffer::Buffer, y: u16) -> String {
    let area = buf.area;
    (area.x..area.x + area.width)
        .map(|x| buf[(x, y)].symbol())
        .collect()
}
