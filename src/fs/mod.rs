// src/fs/mod.rs
//! Virtual filesystem layer - the driver seam the browser talks through.

pub mod local;
pub mod memory;

// Re-export the available drivers
pub use local::LocalDriver;
pub use memory::MemoryDriver;

use thiserror::Error;

/// Errors surfaced by vfs drivers.
#[derive(Error, Debug)]
pub enum VfsError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("not a directory: {0}")]
    NotADirectory(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VfsResult<T> = Result<T, VfsError>;

/// Kind of a directory entry. Drivers only ever report these two; anything
/// else in the underlying store is skipped during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Folder,
    File,
}

/// One entry yielded while enumerating a directory.
#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

/// Directory stream. The iterator owns the underlying handle, so dropping
/// it releases the directory on every exit path out of an enumeration.
pub type DirStream<'a> = Box<dyn Iterator<Item = VfsResult<DirEntry>> + 'a>;

/// Driver seam for the storage backing the dump folder.
///
/// Paths are ASCII, `/`-separated, case-sensitive and relative to the
/// driver root; the first segment is always the base-folder name.
pub trait VfsDriver {
    /// Size in bytes of the file at `path`.
    fn stat(&self, path: &str) -> VfsResult<u64>;

    /// Open `path` for enumeration.
    fn open_dir(&self, path: &str) -> VfsResult<DirStream<'_>>;

    /// Read the file at `path` into `buf`, which must match the file size
    /// exactly. After a failed read the contents of `buf` are unspecified.
    fn read_file(&self, path: &str, buf: &mut [u8]) -> VfsResult<()>;
}
