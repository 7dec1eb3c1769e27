//! Card records and the decoded catalog document
//!
//! The document shape is a single object with a `data` array:
//! `{ "data": [ { "id": ..., "name": ..., "type_line": ..., "oracle_text": ... } ] }`.
//! Keys beyond the ones modelled here are ignored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::matcher::contains_ignore_case;

/// Opaque card identifier
///
/// Catalog exports use string ids, but numeric ids are accepted and kept
/// in their canonical textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawCardId", into = "String")]
pub struct CardId(String);

/// Wire form of an id: either a JSON string or a JSON number
#[derive(Deserialize)]
#[serde(untagged)]
enum RawCardId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawCardId> for CardId {
    fn from(raw: RawCardId) -> Self {
        match raw {
            RawCardId::Text(s) => CardId(s),
            RawCardId::Number(n) => CardId(n.to_string()),
        }
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> Self {
        id.0
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        CardId(s.to_string())
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        CardId(s)
    }
}

impl CardId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Art references for a card
///
/// Only the `large` rendering is consumed; other sizes in the source are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUris {
    /// URL of the large card image
    pub large: String,
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Identifier, stable across loads
    pub id: CardId,

    /// Display name; the only key searched by the filter
    pub name: String,

    /// Classification line (e.g. "Legendary Creature — Elf")
    pub type_line: String,

    /// Rules text
    pub oracle_text: String,

    /// Art references, absent when the card has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageUris>,
}

impl Card {
    /// Large image URL, if the card has art
    pub fn image_url(&self) -> Option<&str> {
        self.image_uris.as_ref().map(|uris| uris.large.as_str())
    }

    /// Whether the name contains `query`, ignoring case
    pub fn matches_name(&self, query: &str) -> bool {
        contains_ignore_case(&self.name, query)
    }
}

/// The decoded catalog document
///
/// Card order is document order. Duplicate names are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCatalog {
    pub data: Vec<Card>,
}

impl CardCatalog {
    pub fn new(data: Vec<Card>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.data.iter()
    }

    /// First card carrying `id`
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.data.iter().find(|card| &card.id == id)
    }

    /// Cards whose name contains `query`, in document order
    ///
    /// An empty query returns every card.
    pub fn filter(&self, query: &str) -> Vec<&Card> {
        if query.is_empty() {
            return self.data.iter().collect();
        }

        self.data
            .iter()
            .filter(|card| card.matches_name(query))
            .collect()
    }
}

impl<'a> IntoIterator for &'a CardCatalog {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
