//! Cardex Catalog - bundled card catalog loading and search
//!
//! This module decodes the bundled catalog document into typed
//! card records and serves name searches over them.
//!
//! # Overview
//!
//! The catalog system allows callers to:
//! - Decode a catalog document from a bundled file or an in-memory blob
//! - Hold the decoded catalog behind a swappable, thread-safe index
//! - Filter cards by a case-insensitive name substring, in document order
//! - Look up a single card by id for a detail view
//!
//! # Architecture
//!
//! ```text
//! bundle/WOT-Scryfall.json   ← { "data": [ card, card, ... ] }
//!            │
//!            ▼
//!     CatalogLoader::load    ← all-or-nothing decode
//!            │
//!            ▼
//!     CardCatalog            ← ordered Vec<Card>
//!            │
//!            ▼
//!     CatalogIndex           ← Empty | Loaded(Arc<CardCatalog>)
//!            │
//!            ▼
//!     filter(query) / get(id)
//! ```

mod card;
mod error;
mod index;
mod loader;
mod matcher;
mod source;

pub use card::{Card, CardCatalog, CardId, ImageUris};
pub use error::LoadError;
pub use index::{CatalogIndex, IndexState};
pub use loader::CatalogLoader;
pub use matcher::contains_ignore_case;
pub use source::ByteSource;
