// src/browse/controller.rs
//! Browsing screen state machine.

use crate::fs::VfsDriver;
use crate::tag::TagSlot;

use super::Notice;
use super::listing::{ListingEntry, build_listing};
use super::loader::load_into_tag;
use super::path::BrowsePath;

/// What the host navigation stack should do after a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Stay,
    /// Pop this many levels off the navigation stack.
    Back(usize),
}

/// Owns the browse path and listing for exactly one active screen; both
/// are reset on entry and cleared on exit, unconditionally.
pub struct Browser<F: VfsDriver> {
    fs: F,
    path: BrowsePath,
    listing: Vec<ListingEntry>,
}

impl<F: VfsDriver> Browser<F> {
    pub fn new(fs: F) -> Self {
        Self {
            fs,
            path: BrowsePath::new(),
            listing: Vec::new(),
        }
    }

    /// Screen entry: root path, fresh listing.
    pub fn enter(&mut self) -> Option<Notice> {
        self.path.reset();
        self.reload()
    }

    /// Screen exit: drop listing and path state. Idempotent.
    pub fn exit(&mut self) {
        self.listing.clear();
        self.path.reset();
    }

    pub fn listing(&self) -> &[ListingEntry] {
        &self.listing
    }

    /// Resolved path of the directory being shown, for the screen title.
    pub fn location(&self) -> &str {
        self.path.resolve()
    }

    /// Route the selection of `listing()[index]`. Failures leave the
    /// screen operable; the caller applies the returned [`NavRequest`]
    /// and shows the notice, if any.
    pub fn select(&mut self, index: usize, tag: &mut dyn TagSlot) -> (NavRequest, Option<Notice>) {
        let Some(entry) = self.listing.get(index).cloned() else {
            return (NavRequest::Stay, None);
        };

        match entry {
            ListingEntry::Folder(name) => match self.path.descend(&name) {
                Ok(()) => (NavRequest::Stay, self.reload()),
                Err(_) => (NavRequest::Stay, Some(Notice::PathTooLong)),
            },
            ListingEntry::Parent => {
                self.path.ascend();
                (NavRequest::Stay, self.reload())
            }
            ListingEntry::File(name) => {
                match load_into_tag(&self.fs, self.path.resolve(), &name, tag) {
                    // Pop past both the file list and its parent menu
                    Ok(()) => (NavRequest::Back(2), Some(Notice::Loaded)),
                    Err(err) => (NavRequest::Stay, Some(Notice::from(&err))),
                }
            }
            ListingEntry::Back => (NavRequest::Back(1), None),
        }
    }

    /// Rebuild the listing for the current path. An unreadable directory
    /// resets the browser to root and re-lists there; if even the root is
    /// unreadable the listing degrades to the lone back entry so the
    /// screen stays usable.
    fn reload(&mut self) -> Option<Notice> {
        match build_listing(&self.fs, &self.path) {
            Ok(listing) => {
                self.listing = listing;
                None
            }
            Err(_) => {
                self.path.reset();
                self.listing = build_listing(&self.fs, &self.path)
                    .unwrap_or_else(|_| vec![ListingEntry::Back]);
                Some(Notice::FolderUnavailable)
            }
        }
    }
}
