// src/ui/widgets/menu.rs
//! Plain menu list widget, shared by the non-browser scenes.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render a vertical menu.
pub fn render_menu(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    items: &[String],
    state: &mut ListState,
) {
    let items: Vec<ListItem> = items.iter().map(|item| ListItem::new(item.as_str())).collect();

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
