// src/fs/memory.rs
//! RAM-backed driver. Backs the test-suite and small demo trees; close
//! enough in shape to a flash driver to exercise every browse path.

use std::{collections::BTreeMap, io};

use super::{DirEntry, DirStream, EntryKind, VfsDriver, VfsError, VfsResult};

#[derive(Debug, Clone)]
enum Node {
    Dir,
    File(Vec<u8>),
}

/// In-memory filesystem keyed by full virtual path.
#[derive(Debug, Default)]
pub struct MemoryDriver {
    nodes: BTreeMap<String, Node>,
    poisoned: Vec<String>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a directory, along with any missing ancestors.
    pub fn add_dir(&mut self, path: &str) {
        self.ensure_parents(path);
        self.nodes.insert(path.to_string(), Node::Dir);
    }

    /// Create a file, along with any missing ancestor directories.
    pub fn add_file(&mut self, path: &str, data: &[u8]) {
        self.ensure_parents(path);
        self.nodes.insert(path.to_string(), Node::File(data.to_vec()));
    }

    /// Remove `path` and everything beneath it.
    pub fn remove(&mut self, path: &str) {
        let prefix = format!("{path}/");
        self.nodes.retain(|k, _| k != path && !k.starts_with(&prefix));
    }

    /// Make subsequent reads of `path` fail while stat still succeeds.
    pub fn poison_read(&mut self, path: &str) {
        self.poisoned.push(path.to_string());
    }

    fn ensure_parents(&mut self, path: &str) {
        let mut idx = 0;
        while let Some(pos) = path[idx..].find('/') {
            let end = idx + pos;
            self.nodes.entry(path[..end].to_string()).or_insert(Node::Dir);
            idx = end + 1;
        }
    }

    fn children(&self, path: &str) -> Vec<DirEntry> {
        let prefix = format!("{path}/");
        self.nodes
            .iter()
            .filter_map(|(key, node)| {
                let rest = key.strip_prefix(&prefix)?;
                if rest.contains('/') {
                    return None;
                }
                Some(DirEntry {
                    name: rest.to_string(),
                    kind: match node {
                        Node::Dir => EntryKind::Folder,
                        Node::File(_) => EntryKind::File,
                    },
                })
            })
            .collect()
    }
}

impl VfsDriver for MemoryDriver {
    fn stat(&self, path: &str) -> VfsResult<u64> {
        match self.nodes.get(path) {
            Some(Node::File(data)) => Ok(data.len() as u64),
            _ => Err(VfsError::NotFound(path.to_string())),
        }
    }

    fn open_dir(&self, path: &str) -> VfsResult<DirStream<'_>> {
        match self.nodes.get(path) {
            Some(Node::Dir) => Ok(Box::new(self.children(path).into_iter().map(Ok))),
            Some(Node::File(_)) => Err(VfsError::NotADirectory(path.to_string())),
            None => Err(VfsError::NotFound(path.to_string())),
        }
    }

    fn read_file(&self, path: &str, buf: &mut [u8]) -> VfsResult<()> {
        if self.poisoned.iter().any(|p| p == path) {
            return Err(VfsError::Io(io::Error::other("injected read failure")));
        }
        match self.nodes.get(path) {
            Some(Node::File(data)) if data.len() == buf.len() => {
                buf.copy_from_slice(data);
                Ok(())
            }
            Some(Node::File(_)) => Err(VfsError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "length mismatch",
            ))),
            _ => Err(VfsError::NotFound(path.to_string())),
        }
    }
}
