//! Catalog decoding
//!
//! Decoding is all-or-nothing: one bad record fails the whole load.

use super::{ByteSource, CardCatalog, LoadError};

/// Reads a byte source and decodes it into a [`CardCatalog`]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and decode a catalog from `source`
    pub fn load(source: &ByteSource) -> Result<CardCatalog, LoadError> {
        let source_name = source.describe();
        tracing::debug!("Loading catalog from {}", source_name);

        let bytes = source.read().map_err(|e| LoadError::SourceUnavailable {
            source_name: source_name.clone(),
            source: e,
        })?;
        let catalog = Self::decode_named(&bytes, &source_name)?;

        tracing::info!("Loaded {} cards from {}", catalog.len(), source_name);
        Ok(catalog)
    }

    /// Decode a catalog document from raw bytes
    pub fn decode(bytes: &[u8]) -> Result<CardCatalog, LoadError> {
        Self::decode_named(bytes, "<bytes>")
    }

    fn decode_named(bytes: &[u8], source_name: &str) -> Result<CardCatalog, LoadError> {
        serde_json::from_slice(bytes).map_err(|e| LoadError::MalformedDocument {
            source_name: source_name.to_string(),
            source: e,
        })
    }
}
