//! Catalog index
//!
//! Holds the currently loaded catalog and answers name searches.
//! A reload replaces the catalog wholesale: the new document is decoded
//! first and then swapped in atomically, so readers see either the old
//! catalog or the new one, never a mix. Readers never take a lock.

use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::Arc;

use super::{ByteSource, Card, CardCatalog, CardId, CatalogLoader, LoadError};

/// Lifecycle of a [`CatalogIndex`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexState {
    /// No catalog loaded yet
    Empty,
    /// One catalog is held
    Loaded,
}

/// Searchable view over the loaded catalog
pub struct CatalogIndex {
    current: ArcSwapOption<CardCatalog>,
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self {
            current: ArcSwapOption::from(None),
        }
    }
}

impl fmt::Debug for CatalogIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogIndex")
            .field("state", &self.state())
            .field("cards", &self.len())
            .finish()
    }
}

impl CatalogIndex {
    /// Create an index in the `Empty` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index already holding `catalog`
    pub fn from_catalog(catalog: CardCatalog) -> Self {
        Self {
            current: ArcSwapOption::from(Some(Arc::new(catalog))),
        }
    }

    /// Load a catalog from `source` and swap it in
    ///
    /// On error the previously held catalog (or the empty state) is kept
    /// and the error is returned to the caller unlogged.
    /// Returns the number of cards now held.
    pub fn load(&self, source: &ByteSource) -> Result<usize, LoadError> {
        let catalog = CatalogLoader::load(source)?;
        let count = catalog.len();
        self.replace(catalog);
        Ok(count)
    }

    /// Replace the held catalog, discarding the previous one
    pub fn replace(&self, catalog: CardCatalog) {
        let previous = self.current.swap(Some(Arc::new(catalog)));
        if let Some(previous) = previous {
            tracing::debug!("Replaced catalog of {} cards", previous.len());
        }
    }

    pub fn state(&self) -> IndexState {
        if self.current.load().is_some() {
            IndexState::Loaded
        } else {
            IndexState::Empty
        }
    }

    /// The currently held catalog, if any
    ///
    /// The snapshot stays valid even if the index is reloaded afterwards.
    pub fn snapshot(&self) -> Option<Arc<CardCatalog>> {
        self.current.load_full()
    }

    /// Cards whose name contains `query` (case-insensitive), in catalog order
    ///
    /// An empty query returns the whole catalog. The `Empty` state always
    /// yields an empty result.
    pub fn filter(&self, query: &str) -> Vec<Card> {
        let Some(catalog) = self.snapshot() else {
            return Vec::new();
        };

        let results: Vec<Card> = catalog.filter(query).into_iter().cloned().collect();
        tracing::trace!(
            "Filter {:?} matched {} of {} cards",
            query,
            results.len(),
            catalog.len()
        );
        results
    }

    /// The card with `id`, for a detail view
    pub fn get(&self, id: &CardId) -> Option<Card> {
        self.snapshot()?.get(id).cloned()
    }

    /// Number of cards held (0 when empty)
    pub fn len(&self) -> usize {
        self.snapshot().map_or(0, |catalog| catalog.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<CardCatalog> for CatalogIndex {
    fn from(catalog: CardCatalog) -> Self {
        Self::from_catalog(catalog)
    }
}

#[cfg(test)]
mod index_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_catalog_json() -> &'static str {
        r#"{"data":[
            {"id":"1","name":"Black Lotus","type_line":"Artifact","oracle_text":"Sacrifice..."},
            {"id":"2","name":"Black Vise","type_line":"Artifact","oracle_text":"..."}
        ]}"#
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    fn loaded_index() -> CatalogIndex {
        let index = CatalogIndex::new();
        index
            .load(&ByteSource::memory("sample", sample_catalog_json()))
            .unwrap();
        index
    }

    #[test]
    fn test_search_scenario() {
        let index = loaded_index();

        assert_eq!(ids(&index.filter("black")), vec!["1", "2"]);
        assert_eq!(ids(&index.filter("lotus")), vec!["1"]);
        assert_eq!(ids(&index.filter("")), vec!["1", "2"]);
        assert!(index.filter("dragon").is_empty());
    }

    #[test]
    fn test_empty_state() {
        let index = CatalogIndex::new();

        assert_eq!(index.state(), IndexState::Empty);
        assert!(index.filter("").is_empty());
        assert!(index.filter("black").is_empty());
        assert!(index.snapshot().is_none());
        assert!(index.get(&CardId::from("1")).is_none());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_load_transitions_to_loaded() {
        let index = loaded_index();
        assert_eq!(index.state(), IndexState::Loaded);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let index = loaded_index();
        assert_eq!(index.filter("vise"), index.filter("vise"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_whitespace_query_is_not_empty() {
        let index = loaded_index();
        // Both names contain a space
        assert_eq!(index.filter(" ").len(), 2);
        assert!(index.filter("  ").is_empty());
    }

    #[test]
    fn test_reload_replaces_catalog() {
        let index = loaded_index();

        let second = r#"{"data":[
            {"id":"9","name":"Shivan Dragon","type_line":"Creature — Dragon","oracle_text":"Flying"}
        ]}"#;
        let count = index.load(&ByteSource::memory("second", second)).unwrap();

        assert_eq!(count, 1);
        assert_eq!(ids(&index.filter("")), vec!["9"]);
        assert!(index.filter("black").is_empty());
    }

    #[test]
    fn test_failed_reload_keeps_previous_catalog() {
        let index = loaded_index();

        let err = index
            .load(&ByteSource::memory("truncated", r#"{"data":[{"id":"#))
            .unwrap_err();
        assert!(err.is_malformed());

        assert_eq!(index.state(), IndexState::Loaded);
        assert_eq!(ids(&index.filter("")), vec!["1", "2"]);
    }

    #[test]
    fn test_failed_first_load_stays_empty() {
        let index = CatalogIndex::new();
        assert!(index
            .load(&ByteSource::memory("bad", "{}"))
            .unwrap_err()
            .is_malformed());
        assert_eq!(index.state(), IndexState::Empty);
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let index = loaded_index();
        let before = index.snapshot().unwrap();

        index.replace(CardCatalog::default());

        assert_eq!(before.len(), 2);
        assert_eq!(index.len(), 0);
        assert_eq!(index.state(), IndexState::Loaded);
    }

    #[test]
    fn test_empty_name_only_matches_empty_query() {
        let json = r#"{"data":[
            {"id":"1","name":"","type_line":"Token","oracle_text":""},
            {"id":"2","name":"Apple","type_line":"Food","oracle_text":""}
        ]}"#;
        let index = CatalogIndex::new();
        index.load(&ByteSource::memory("unnamed", json)).unwrap();

        assert_eq!(ids(&index.filter("")), vec!["1", "2"]);
        assert_eq!(ids(&index.filter("a")), vec!["2"]);
    }

    #[test]
    fn test_folded_names_match() {
        let json = r#"{"data":[
            {"id":"1","name":"Straßenräuber","type_line":"Creature","oracle_text":""},
            {"id":"2","name":"Strass Gem","type_line":"Artifact","oracle_text":""}
        ]}"#;
        let index = CatalogIndex::new();
        index.load(&ByteSource::memory("folded", json)).unwrap();

        assert_eq!(ids(&index.filter("STRASS")), vec!["1", "2"]);
    }

    #[test]
    fn test_debug_reports_state() {
        let index = loaded_index();
        let debug = format!("{index:?}");
        assert!(debug.contains("Loaded"));
        assert!(debug.contains("cards: 2"));
    }

    #[test]
    fn test_get_by_id() {
        let index = loaded_index();

        let card = index.get(&CardId::from("2")).unwrap();
        assert_eq!(card.name, "Black Vise");
        assert!(index.get(&CardId::from("missing")).is_none());
    }

    #[test]
    fn test_filter_results_are_subsequence() {
        let json = r#"{"data":[
            {"id":"a","name":"Llanowar Elves","type_line":"Creature — Elf Druid","oracle_text":""},
            {"id":"b","name":"Giant Growth","type_line":"Instant","oracle_text":""},
            {"id":"c","name":"Elvish Mystic","type_line":"Creature — Elf Druid","oracle_text":""},
            {"id":"d","name":"ELVES of Deep Shadow","type_line":"Creature — Elf Druid","oracle_text":""}
        ]}"#;
        let index = CatalogIndex::new();
        index.load(&ByteSource::memory("elves", json)).unwrap();

        let all = index.filter("");
        let matched = index.filter("elv");
        assert_eq!(ids(&matched), vec!["a", "c", "d"]);

        let mut positions = matched
            .iter()
            .map(|card| all.iter().position(|c| c == card).unwrap());
        let mut last = positions.next().unwrap();
        for pos in positions {
            assert!(pos > last);
            last = pos;
        }

        for card in &all {
            assert_eq!(matched.contains(card), card.matches_name("elv"));
        }
    }
}
