// src/browse/listing.rs
//! Directory listing: enumeration, deterministic order, navigation markers.

use crate::fs::{DirEntry, EntryKind, VfsDriver, VfsResult};

use super::path::BrowsePath;

/// Presentation icon classes. The numeric order of the folder and file
/// classes is what the sort comparator keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Icon {
    Home = 0,
    Folder = 1,
    File = 2,
    Back = 3,
}

/// One row of the browsing screen.
///
/// `Parent` and `Back` are synthetic; only `Folder` and `File` come from
/// the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEntry {
    Parent,
    Folder(String),
    File(String),
    Back,
}

impl ListingEntry {
    pub fn icon(&self) -> Icon {
        match self {
            ListingEntry::Parent => Icon::Home,
            ListingEntry::Folder(_) => Icon::Folder,
            ListingEntry::File(_) => Icon::File,
            ListingEntry::Back => Icon::Back,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ListingEntry::Parent => "..",
            ListingEntry::Folder(name) | ListingEntry::File(name) => name,
            ListingEntry::Back => "Return",
        }
    }
}

/// Enumerate one directory. Only folders and regular files are reported;
/// the stream's handle is released when it drops, on every exit path.
pub fn read_entries<F: VfsDriver + ?Sized>(fs: &F, path: &str) -> VfsResult<Vec<ListingEntry>> {
    let mut entries = Vec::new();
    for entry in fs.open_dir(path)? {
        let DirEntry { name, kind } = entry?;
        entries.push(match kind {
            EntryKind::Folder => ListingEntry::Folder(name),
            EntryKind::File => ListingEntry::File(name),
        });
    }
    Ok(entries)
}

/// Order real entries: icon class first (folders before files), then
/// byte-wise by name. Synthetic markers must never pass through here.
pub fn sort_entries(entries: &mut [ListingEntry]) {
    entries.sort_by(|a, b| {
        a.icon()
            .cmp(&b.icon())
            .then_with(|| a.label().as_bytes().cmp(b.label().as_bytes()))
    });
}

/// Build the full listing for `path`: sorted real entries with `Parent`
/// prepended when not at root and `Back` always last.
pub fn build_listing<F: VfsDriver + ?Sized>(
    fs: &F,
    path: &BrowsePath,
) -> VfsResult<Vec<ListingEntry>> {
    let mut entries = read_entries(fs, path.resolve())?;
    sort_entries(&mut entries);

    let mut listing = Vec::with_capacity(entries.len() + 2);
    if !path.is_root() {
        listing.push(ListingEntry::Parent);
    }
    listing.append(&mut entries);
    listing.push(ListingEntry::Back);
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryDriver;

    fn sample_fs() -> MemoryDriver {
        let mut fs = MemoryDriver::new();
        fs.add_dir("dumps/beta");
        fs.add_dir("dumps/alpha");
        fs.add_file("dumps/dump1.bin", &[0; 4]);
        fs.add_file("dumps/alpha/inner.bin", &[0; 4]);
        fs
    }

    #[test]
    fn test_folders_sort_before_files() {
        let mut entries = vec![
            ListingEntry::File("aaa.bin".into()),
            ListingEntry::Folder("zzz".into()),
        ];
        sort_entries(&mut entries);
        assert_eq!(entries[0], ListingEntry::Folder("zzz".into()));
        assert_eq!(entries[1], ListingEntry::File("aaa.bin".into()));
    }

    #[test]
    fn test_names_sort_byte_wise() {
        // 'B' (0x42) sorts before 'a' (0x61)
        let mut entries = vec![
            ListingEntry::File("alpha.bin".into()),
            ListingEntry::File("Beta.bin".into()),
        ];
        sort_entries(&mut entries);
        assert_eq!(entries[0].label(), "Beta.bin");
        assert_eq!(entries[1].label(), "alpha.bin");
    }

    #[test]
    fn test_root_listing_has_no_parent_and_back_last() {
        let fs = sample_fs();
        let listing = build_listing(&fs, &BrowsePath::new()).unwrap();
        assert_eq!(
            listing,
            vec![
                ListingEntry::Folder("alpha".into()),
                ListingEntry::Folder("beta".into()),
                ListingEntry::File("dump1.bin".into()),
                ListingEntry::Back,
            ]
        );
    }

    #[test]
    fn test_non_root_listing_has_parent_first() {
        let fs = sample_fs();
        let mut path = BrowsePath::new();
        path.descend("alpha").unwrap();
        let listing = build_listing(&fs, &path).unwrap();
        assert_eq!(listing.first(), Some(&ListingEntry::Parent));
        assert_eq!(listing.last(), Some(&ListingEntry::Back));
        assert_eq!(listing[1], ListingEntry::File("inner.bin".into()));
    }

    #[test]
    fn test_order_stable_across_repeated_listings() {
        let fs = sample_fs();
        let path = BrowsePath::new();
        let first = build_listing(&fs, &path).unwrap();
        let second = build_listing(&fs, &path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let fs = sample_fs();
        let mut path = BrowsePath::new();
        path.descend("gone").unwrap();
        assert!(build_listing(&fs, &path).is_err());
    }
}
