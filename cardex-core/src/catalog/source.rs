//! Byte sources a catalog can be loaded from

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::config::BundleConfig;

/// Where catalog bytes come from
#[derive(Debug, Clone)]
pub enum ByteSource {
    /// A blob already held in memory
    Memory { label: String, bytes: Vec<u8> },

    /// A file on disk, typically the bundled resource
    File(PathBuf),
}

impl ByteSource {
    /// In-memory source with a label used in logs and errors
    pub fn memory(label: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        ByteSource::Memory {
            label: label.into(),
            bytes: bytes.into(),
        }
    }

    pub fn file(path: impl AsRef<Path>) -> Self {
        ByteSource::File(path.as_ref().to_path_buf())
    }

    /// The conventional bundled resource described by `config`
    pub fn bundled(config: &BundleConfig) -> Self {
        ByteSource::File(config.resource_path())
    }

    /// Human-readable name of the source
    pub fn describe(&self) -> String {
        match self {
            ByteSource::Memory { label, .. } => format!("<memory:{label}>"),
            ByteSource::File(path) => path.display().to_string(),
        }
    }

    /// Read the full contents of the source
    ///
    /// In-memory blobs are borrowed rather than copied.
    pub fn read(&self) -> std::io::Result<Cow<'_, [u8]>> {
        match self {
            ByteSource::Memory { bytes, .. } => Ok(Cow::Borrowed(bytes.as_slice())),
            ByteSource::File(path) => std::fs::read(path).map(Cow::Owned),
        }
    }
}
