// src/browse/mod.rs
//! Card-dump browsing core: bounded path state, directory listing, guarded
//! loads into the tag buffer, and the screen state machine tying them
//! together.

pub mod controller;
pub mod listing;
pub mod loader;
pub mod path;

// Re-export commonly used types
pub use controller::{Browser, NavRequest};
pub use listing::{Icon, ListingEntry, build_listing, sort_entries};
pub use loader::{LoadError, load_into_tag};
pub use path::{BrowsePath, DUMP_FOLDER, MAX_PATH_LEN, PathOverflow};

use std::fmt;

/// User-visible status messages, one per recoverable failure plus the
/// success case. The firmware shows these as toasts; the TUI uses a
/// status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Loaded,
    FileNotFound,
    SizeMismatch,
    LoadFailed,
    LabelRejected,
    FolderUnavailable,
    PathTooLong,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Notice::Loaded => "Dump loaded",
            Notice::FileNotFound => "File not found",
            Notice::SizeMismatch => "File size does not match tag",
            Notice::LoadFailed => "Failed to load file",
            Notice::LabelRejected => "Failed to set tag name",
            Notice::FolderUnavailable => "Failed to open folder",
            Notice::PathTooLong => "Path too long",
        };
        write!(f, "{}", text)
    }
}

impl From<&LoadError> for Notice {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::NotFound => Notice::FileNotFound,
            LoadError::SizeMismatch { .. } => Notice::SizeMismatch,
            LoadError::Read(_) => Notice::LoadFailed,
            LoadError::Label(_) => Notice::LabelRejected,
        }
    }
}
