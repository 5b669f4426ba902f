use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::filter::GameFilter;
use crate::model::{GameRecord, Listing};
use crate::parser;
use crate::stats::ListingStats;

/// Listing name → records in row order. Names iterate sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ListingCatalog {
    listings: BTreeMap<String, Vec<GameRecord>>,
}

impl ListingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract every document in order. A later document with the same
    /// listing name replaces the earlier one.
    pub fn from_documents<I, S>(docs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::new();
        for doc in docs {
            catalog.insert(parser::extract_listing(doc.as_ref()));
        }
        catalog
    }

    /// Insert a listing, returning the records it replaced.
    pub fn insert(&mut self, listing: Listing) -> Option<Vec<GameRecord>> {
        let replaced = self.listings.insert(listing.name.clone(), listing.records);
        if let Some(prev) = &replaced {
            warn!(
                listing = %listing.name,
                replaced = prev.len(),
                "duplicate listing name; keeping the later document"
            );
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&[GameRecord]> {
        self.listings.get(name).map(Vec::as_slice)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.listings.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[GameRecord])> {
        self.listings
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn stats(&self, name: &str) -> Option<ListingStats> {
        self.get(name)
            .map(|records| ListingStats::compute(name, records))
    }

    /// Stats for the first `limit` requested names, in request order. Unknown
    /// names inside that window are dropped, not replaced by later ones.
    pub fn compare<S: AsRef<str>>(&self, names: &[S], limit: usize) -> Vec<ListingStats> {
        if names.len() > limit {
            debug!(limit, requested = names.len(), "comparison limit reached");
        }
        names
            .iter()
            .take(limit)
            .map(AsRef::as_ref)
            .filter_map(|name| {
                let stats = self.stats(name);
                if stats.is_none() {
                    warn!(listing = %name, "unknown listing; skipped");
                }
                stats
            })
            .collect()
    }

    /// Records across all listings that pass `filter`, sorted by listing name
    /// then title.
    pub fn filter(&self, filter: &GameFilter) -> Vec<(&str, &GameRecord)> {
        let mut hits: Vec<(&str, &GameRecord)> = self
            .iter()
            .flat_map(|(name, records)| records.iter().map(move |r| (name, r)))
            .filter(|(_, r)| filter.matches(r))
            .collect();
        hits.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.title.cmp(&b.1.title)));
        hits
    }
}
