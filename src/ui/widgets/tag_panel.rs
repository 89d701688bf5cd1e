// src/ui/widgets/tag_panel.rs
//! Active tag panel: type, capacity and nickname of the emulated card.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::tag::ActiveTag;

/// Render the active tag pane.
pub fn render_tag_panel(f: &mut Frame<'_>, area: Rect, tag: &ActiveTag) {
    let name = if tag.label().is_empty() {
        "<unnamed>"
    } else {
        tag.label()
    };
    let lines = vec![
        format!("Type: {}", tag.tag_type().name()),
        format!("Size: {} bytes", tag.tag_type().data_size()),
        format!("Name: {}", name),
    ];

    let panel = Paragraph::new(lines.join("\n"))
        .block(Block::default().borders(Borders::ALL).title(" Active tag "))
        .wrap(Wrap { trim: true });

    f.render_widget(panel, area);
}
