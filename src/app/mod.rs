// src/app/mod.rs
//! Application module - scene stack, key handling and drawing.

pub mod state;

// Re-export the App struct
pub use state::{App, Scene};
