// src/browse/path.rs
//! Bounded browse-path state. Pure string algebra, no I/O.

use thiserror::Error;

/// Fixed capacity for any resolved path, terminator included, so the
/// resolved length must always stay strictly below this.
pub const MAX_PATH_LEN: usize = 256;

/// Name of the fixed base folder the browser is rooted under.
pub const DUMP_FOLDER: &str = "dumps";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("path would exceed {MAX_PATH_LEN} bytes")]
pub struct PathOverflow;

/// Current browse location.
///
/// Stored empty at root (the root sentinel); otherwise the full relative
/// path starting with [`DUMP_FOLDER`]. Never ends with `/`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BrowsePath {
    buf: String,
}

impl BrowsePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the root sentinel.
    pub fn reset(&mut self) {
        self.buf.clear();
    }

    pub fn is_root(&self) -> bool {
        self.buf.is_empty()
    }

    /// The path to hand to the filesystem driver: the base-folder name at
    /// root, the stored value verbatim otherwise.
    pub fn resolve(&self) -> &str {
        if self.buf.is_empty() {
            DUMP_FOLDER
        } else {
            &self.buf
        }
    }

    /// Enter the sub-folder `name`. On overflow the path is left unchanged.
    pub fn descend(&mut self, name: &str) -> Result<(), PathOverflow> {
        let needed = self.resolve().len() + 1 + name.len();
        if needed >= MAX_PATH_LEN {
            return Err(PathOverflow);
        }
        if self.buf.is_empty() {
            self.buf.push_str(DUMP_FOLDER);
        }
        self.buf.push('/');
        self.buf.push_str(name);
        Ok(())
    }

    /// Drop the last segment. Collapses to the root sentinel when no
    /// separator remains or only the base-folder name would be left; a
    /// no-op at root.
    pub fn ascend(&mut self) {
        match self.buf.rfind('/') {
            Some(idx) => {
                self.buf.truncate(idx);
                if self.buf == DUMP_FOLDER {
                    self.buf.clear();
                }
            }
            None => self.buf.clear(),
        }
    }
}
