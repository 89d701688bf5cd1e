// src/ui/widgets/mod.rs
//! Individual UI widgets.

pub mod file_list;
pub mod menu;
pub mod tag_panel;

pub use file_list::render_file_list;
pub use menu::render_menu;
pub use tag_panel::render_tag_panel;
