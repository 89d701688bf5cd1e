// src/ui/icons.rs
//! Glyphs for the listing's icon classes.

use crate::browse::Icon;

/// Get the glyph for an icon class.
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Home => "\u{f015}",   // home
        Icon::Folder => "\u{f07b}", // folder
        Icon::File => "\u{f1c6}",   // binary file
        Icon::Back => "\u{f112}",   // reply arrow
    }
}
