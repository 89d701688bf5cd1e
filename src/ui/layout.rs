// src/ui/layout.rs
//! Layout computation for the UI panes.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed layout areas for rendering.
pub struct ComputedLayout {
    /// Menu / file list pane
    pub list: Rect,
    /// Active tag pane
    pub panel: Rect,
    /// Status line at the bottom
    pub status: Rect,
}

/// Split the terminal into the list pane, the tag panel and a one-line
/// status bar.
pub fn compute_layout(area: Rect) -> ComputedLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[0]);

    ComputedLayout {
        list: cols[0],
        panel: cols[1],
        status: rows[1],
    }
}
