// src/ui/widgets/file_list.rs
//! File browser list widget.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::browse::ListingEntry;
use crate::ui::icons::icon_glyph;

/// Render the browsing listing.
pub fn render_file_list(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    listing: &[ListingEntry],
    state: &mut ListState,
) {
    let items: Vec<ListItem> = listing
        .iter()
        .map(|entry| ListItem::new(format!("{} {}", icon_glyph(entry.icon()), entry.label())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol(">> ");

    f.render_stateful_widget(list, area, state);
}
