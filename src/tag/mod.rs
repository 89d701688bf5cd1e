// src/tag/mod.rs
//! Active-tag state: the emulation buffer and its nickname.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Nickname capacity in bytes.
pub const MAX_LABEL_LEN: usize = 32;

/// Tag types the device can emulate, each with a fixed dump size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagType {
    #[serde(rename = "mifare-mini")]
    MifareMini,
    #[serde(rename = "mifare-1k")]
    Mifare1k,
    #[serde(rename = "mifare-2k")]
    Mifare2k,
    #[serde(rename = "mifare-4k")]
    Mifare4k,
    #[serde(rename = "ntag-213")]
    Ntag213,
    #[serde(rename = "ntag-215")]
    Ntag215,
    #[serde(rename = "ntag-216")]
    Ntag216,
}

impl TagType {
    /// Exact dump size in bytes mandated by this tag type.
    pub fn data_size(self) -> usize {
        match self {
            TagType::MifareMini => 320,
            TagType::Mifare1k => 1024,
            TagType::Mifare2k => 2048,
            TagType::Mifare4k => 4096,
            TagType::Ntag213 => 180,
            TagType::Ntag215 => 540,
            TagType::Ntag216 => 924,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TagType::MifareMini => "MIFARE Mini",
            TagType::Mifare1k => "MIFARE Classic 1K",
            TagType::Mifare2k => "MIFARE Classic 2K",
            TagType::Mifare4k => "MIFARE Classic 4K",
            TagType::Ntag213 => "NTAG 213",
            TagType::Ntag215 => "NTAG 215",
            TagType::Ntag216 => "NTAG 216",
        }
    }

    /// Next type in the menu cycling order.
    pub fn next(self) -> Self {
        match self {
            TagType::MifareMini => TagType::Mifare1k,
            TagType::Mifare1k => TagType::Mifare2k,
            TagType::Mifare2k => TagType::Mifare4k,
            TagType::Mifare4k => TagType::Ntag213,
            TagType::Ntag213 => TagType::Ntag215,
            TagType::Ntag215 => TagType::Ntag216,
            TagType::Ntag216 => TagType::MifareMini,
        }
    }
}

/// Reasons a nickname can be rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelError {
    #[error("label exceeds {MAX_LABEL_LEN} bytes")]
    TooLong,
    #[error("label is not printable ASCII")]
    NotAscii,
}

/// Borrowed seam the loader works through: the emulation buffer plus the
/// naming capability. The buffer stays owned by the tag collaborator.
pub trait TagSlot {
    fn data(&mut self) -> &mut [u8];
    fn set_label(&mut self, label: &str) -> Result<(), LabelError>;
}

/// The in-memory representation of the currently emulated card.
pub struct ActiveTag {
    tag_type: TagType,
    data: Vec<u8>,
    label: String,
}

impl ActiveTag {
    pub fn new(tag_type: TagType) -> Self {
        Self {
            tag_type,
            data: vec![0; tag_type.data_size()],
            label: String::new(),
        }
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Switch the emulated type. The buffer is resized to the new dump
    /// size and zeroed, and the nickname is dropped with it.
    pub fn set_type(&mut self, tag_type: TagType) {
        self.tag_type = tag_type;
        self.data = vec![0; tag_type.data_size()];
        self.label.clear();
    }

    pub fn cycle_type(&mut self) {
        self.set_type(self.tag_type.next());
    }
}

impl TagSlot for ActiveTag {
    fn data(&mut self) -> &mut [u8] {
        &mut self.data
    }

    fn set_label(&mut self, label: &str) -> Result<(), LabelError> {
        if label.len() > MAX_LABEL_LEN {
            return Err(LabelError::TooLong);
        }
        if !label.bytes().all(|b| (0x20..0x7f).contains(&b)) {
            return Err(LabelError::NotAscii);
        }
        self.label.clear();
        self.label.push_str(label);
        Ok(())
    }
}
