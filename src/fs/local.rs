// src/fs/local.rs
//! Local-disk driver, mounting the virtual base folder onto a host directory.

use std::{
    fs::{self, File},
    io::{self, Read},
    path::PathBuf,
};

use super::{DirEntry, DirStream, EntryKind, VfsDriver, VfsError, VfsResult};

/// Driver backed by `std::fs`.
pub struct LocalDriver {
    root: PathBuf,
}

impl LocalDriver {
    /// `root` is the host directory the virtual base folder maps onto.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Virtual paths carry the base-folder name as their first segment;
    /// that segment is an alias for `root`.
    fn host_path(&self, vpath: &str) -> PathBuf {
        match vpath.split_once('/') {
            Some((_, rest)) => self.root.join(rest),
            None => self.root.clone(),
        }
    }
}

fn map_io(err: io::Error, path: &str) -> VfsError {
    if err.kind() == io::ErrorKind::NotFound {
        VfsError::NotFound(path.to_string())
    } else {
        VfsError::Io(err)
    }
}

impl VfsDriver for LocalDriver {
    fn stat(&self, path: &str) -> VfsResult<u64> {
        let meta = fs::metadata(self.host_path(path)).map_err(|e| map_io(e, path))?;
        if !meta.is_file() {
            return Err(VfsError::NotFound(path.to_string()));
        }
        Ok(meta.len())
    }

    fn open_dir(&self, path: &str) -> VfsResult<DirStream<'_>> {
        let read_dir = fs::read_dir(self.host_path(path)).map_err(|e| map_io(e, path))?;
        Ok(Box::new(read_dir.filter_map(|res| match res {
            Ok(entry) => {
                let name = entry.file_name().to_string_lossy().into_owned();
                match entry.file_type() {
                    Ok(t) if t.is_dir() => Some(Ok(DirEntry {
                        name,
                        kind: EntryKind::Folder,
                    })),
                    Ok(t) if t.is_file() => Some(Ok(DirEntry {
                        name,
                        kind: EntryKind::File,
                    })),
                    // Symlinks and other special entries are skipped
                    Ok(_) => None,
                    Err(e) => Some(Err(VfsError::Io(e))),
                }
            }
            Err(e) => Some(Err(VfsError::Io(e))),
        })))
    }

    fn read_file(&self, path: &str, buf: &mut [u8]) -> VfsResult<()> {
        let mut file = File::open(self.host_path(path)).map_err(|e| map_io(e, path))?;
        file.read_exact(buf)?;
        Ok(())
    }
}
