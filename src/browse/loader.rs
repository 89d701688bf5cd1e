// src/browse/loader.rs
//! Guarded file load into the active tag's buffer.

use thiserror::Error;

use crate::fs::{VfsDriver, VfsError};
use crate::tag::{LabelError, TagSlot};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("file not found")]
    NotFound,
    #[error("file is {actual} bytes, tag needs {expected}")]
    SizeMismatch { expected: usize, actual: u64 },
    #[error("read failed: {0}")]
    Read(VfsError),
    #[error("label rejected: {0}")]
    Label(LabelError),
}

/// Copy `dir/file_name` into the tag's buffer and name the tag after the
/// file.
///
/// The size check runs before any read, so a mismatch leaves the buffer
/// byte-for-byte untouched. A failed read leaves the buffer contents
/// unspecified. A rejected label does not roll the copied data back; the
/// load has taken effect even though the call reports failure.
pub fn load_into_tag<F: VfsDriver + ?Sized>(
    fs: &F,
    dir: &str,
    file_name: &str,
    tag: &mut dyn TagSlot,
) -> Result<(), LoadError> {
    let path = format!("{dir}/{file_name}");
    let size = fs.stat(&path).map_err(|_| LoadError::NotFound)?;

    let dest = tag.data();
    if size != dest.len() as u64 {
        return Err(LoadError::SizeMismatch {
            expected: dest.len(),
            actual: size,
        });
    }

    fs.read_file(&path, dest).map_err(LoadError::Read)?;
    tag.set_label(file_name).map_err(LoadError::Label)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryDriver;
    use crate::tag::{ActiveTag, TagType};

    // Small slot stub so tests control the buffer size directly.
    struct Slot {
        data: Vec<u8>,
        label: Option<String>,
    }

    impl Slot {
        fn with_len(len: usize) -> Self {
            Self {
                data: vec![0xAA; len],
                label: None,
            }
        }
    }

    impl TagSlot for Slot {
        fn data(&mut self) -> &mut [u8] {
            &mut self.data
        }

        fn set_label(&mut self, label: &str) -> Result<(), LabelError> {
            if label.len() > crate::tag::MAX_LABEL_LEN {
                return Err(LabelError::TooLong);
            }
            self.label = Some(label.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_missing_file_reports_not_found() {
        let fs = MemoryDriver::new();
        let mut slot = Slot::with_len(4);
        let err = load_into_tag(&fs, "dumps", "nope.bin", &mut slot).unwrap_err();
        assert!(matches!(err, LoadError::NotFound));
        assert_eq!(slot.data, vec![0xAA; 4]);
    }

    #[test]
    fn test_size_mismatch_leaves_buffer_untouched() {
        let mut fs = MemoryDriver::new();
        fs.add_file("dumps/small.bin", &[1, 2]);
        let mut slot = Slot::with_len(4);
        let err = load_into_tag(&fs, "dumps", "small.bin", &mut slot).unwrap_err();
        assert!(matches!(
            err,
            LoadError::SizeMismatch {
                expected: 4,
                actual: 2
            }
        ));
        assert_eq!(slot.data, vec![0xAA; 4]);
        assert_eq!(slot.label, None);
    }

    #[test]
    fn test_successful_load_copies_bytes_and_labels() {
        let mut fs = MemoryDriver::new();
        fs.add_file("dumps/dump1.bin", &[9, 8, 7, 6]);
        let mut slot = Slot::with_len(4);
        load_into_tag(&fs, "dumps", "dump1.bin", &mut slot).unwrap();
        assert_eq!(slot.data, vec![9, 8, 7, 6]);
        assert_eq!(slot.label.as_deref(), Some("dump1.bin"));
    }

    #[test]
    fn test_read_failure_is_reported() {
        let mut fs = MemoryDriver::new();
        fs.add_file("dumps/bad.bin", &[0; 4]);
        fs.poison_read("dumps/bad.bin");
        let mut slot = Slot::with_len(4);
        let err = load_into_tag(&fs, "dumps", "bad.bin", &mut slot).unwrap_err();
        assert!(matches!(err, LoadError::Read(_)));
    }

    #[test]
    fn test_rejected_label_keeps_loaded_data() {
        let long_name = format!("{}.bin", "x".repeat(40));
        let mut fs = MemoryDriver::new();
        fs.add_file(&format!("dumps/{long_name}"), &[5; 4]);
        let mut slot = Slot::with_len(4);
        let err = load_into_tag(&fs, "dumps", &long_name, &mut slot).unwrap_err();
        assert!(matches!(err, LoadError::Label(LabelError::TooLong)));
        // The copy is not rolled back
        assert_eq!(slot.data, vec![5; 4]);
        assert_eq!(slot.label, None);
    }

    #[test]
    fn test_load_works_against_active_tag() {
        let mut fs = MemoryDriver::new();
        fs.add_file("dumps/card.bin", &vec![0x11; 1024]);
        let mut tag = ActiveTag::new(TagType::Mifare1k);
        load_into_tag(&fs, "dumps", "card.bin", &mut tag).unwrap();
        assert_eq!(tag.label(), "card.bin");
        assert!(tag.data().iter().all(|&b| b == 0x11));
    }
}
