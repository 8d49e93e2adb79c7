use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{assets::timestamp::extract_timestamp, foundation::error::SatResult};

/// Encoded image bytes plus the filename they were selected under.
///
/// Cloning is cheap; the bytes are shared and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceImage {
    file_name: String,
    bytes: Arc<[u8]>,
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("file_name", &self.file_name)
            .field("bytes_len", &self.bytes.len())
            .finish()
    }
}

impl SourceImage {
    /// Wrap in-memory bytes.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping only its final path component as the name.
    pub fn from_path(path: &Path) -> SatResult<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read image bytes from '{}'", path.display()))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(Self::new(file_name, bytes))
    }

    /// Original filename.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Encoded image bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// A source image paired with the timestamp label drawn under it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledImage {
    /// The image being placed.
    pub image: SourceImage,
    /// Text drawn in the cell's label band.
    pub display_timestamp: String,
}

impl LabeledImage {
    /// Label `image` with the timestamp extracted from its filename.
    pub fn from_source(image: SourceImage) -> Self {
        let display_timestamp = extract_timestamp(image.file_name());
        Self {
            image,
            display_timestamp,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
