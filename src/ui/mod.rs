// src/ui/mod.rs
//! UI module - keybindings, layout, icons and widgets.

pub mod icons;
pub mod keybindings;
pub mod layout;
pub mod widgets;
