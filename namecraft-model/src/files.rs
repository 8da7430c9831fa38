use crate::error::{ModelError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Immutable snapshot of a hashed file on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaFile {
    /// Name of the file as it currently exists, including its extension.
    pub file_name: String,
    /// Primary content hash (ED2K), hex encoded.
    pub ed2k: String,
    /// CRC32 of the content, hex encoded. Hashing CRC32 is optional upstream.
    pub crc32: Option<String>,
    pub size: u64,
    /// Resolution class of the primary video stream, e.g. `1920x1080`.
    pub resolution: Option<String>,
    /// Bit depth of the primary stream.
    pub bit_depth: Option<u32>,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, ed2k: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            ed2k: ed2k.into(),
            size,
            ..Self::default()
        }
    }

    pub fn with_crc32(mut self, crc32: impl Into<String>) -> Self {
        self.crc32 = Some(crc32.into());
        self
    }

    pub fn with_resolution(mut self, resolution: impl Into<String>) -> Self {
        self.resolution = Some(resolution.into());
        self
    }

    pub fn with_bit_depth(mut self, bit_depth: u32) -> Self {
        self.bit_depth = Some(bit_depth);
        self
    }

    /// Extension of the current file name including the leading dot
    /// (`.mkv`), or `None` when the name has no extension.
    ///
    /// A dot-file such as `.hidden` has no extension: the leading dot starts
    /// the stem. A trailing dot (`name.`) yields `None` as well.
    pub fn extension(&self) -> Option<&str> {
        let ext = Path::new(&self.file_name).extension()?.to_str()?;
        if ext.is_empty() {
            return None;
        }
        Some(&self.file_name[self.file_name.len() - ext.len() - 1..])
    }
}

/// Width and height parsed from a `<width>x<height>` resolution string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Resolution {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidResolution(raw.to_string());
        let (width, height) = raw.trim().split_once('x').ok_or_else(invalid)?;
        Ok(Resolution {
            width: width.trim().parse().map_err(|_| invalid())?,
            height: height.trim().parse().map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
