//! Catalog load errors

use thiserror::Error;

/// Errors raised while loading a catalog
///
/// Filtering never fails; only loading does. Errors are returned, not
/// logged, so the caller reports each failure once.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The byte source could not be opened or read
    #[error("Catalog source unavailable: {source_name}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not JSON, or do not have the catalog shape
    #[error("Malformed catalog document: {source_name}")]
    MalformedDocument {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, LoadError::SourceUnavailable { .. })
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, LoadError::MalformedDocument { .. })
    }

    /// Name of the source the error came from
    pub fn source_name(&self) -> &str {
        match self {
            LoadError::SourceUnavailable { source_name, .. }
            | LoadError::MalformedDocument { source_name, .. } => source_name,
        }
    }
}
