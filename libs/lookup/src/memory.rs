//! In-memory lookup backend.
//!
//! Deterministic, infallible backend used as the test substitute and by
//! embedded callers that ship their own place table.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{normalize_key, LookupError, PlaceCode, PlaceLookup};

/// One row of the place table: a `(province, place)` pair mapped to a
/// code, valid from a given date.
#[derive(Debug, Clone)]
pub struct PlaceRecord {
    pub province: String,
    pub place: String,
    pub code: PlaceCode,
    pub valid_from: NaiveDate,
}

/// In-memory place table keyed by normalized `(province, place)` pairs.
///
/// Read-only after construction, so concurrent reads through a shared
/// reference are safe without locking.
#[derive(Debug, Default)]
pub struct MemoryLookup {
    records: BTreeMap<(String, String), Vec<(NaiveDate, PlaceCode)>>,
}

impl MemoryLookup {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from an iterator of records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PlaceRecord>,
    {
        let mut table = Self::new();
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Inserts a record, normalizing its keys.
    pub fn insert(&mut self, record: PlaceRecord) {
        let key = (
            normalize_key(&record.province),
            normalize_key(&record.place),
        );
        self.records
            .entry(key)
            .or_default()
            .push((record.valid_from, record.code));
    }

    /// Number of `(province, place)` pairs in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl PlaceLookup for MemoryLookup {
    async fn resolve(
        &self,
        province: &str,
        place: &str,
    ) -> Result<Option<PlaceCode>, LookupError> {
        let key = (normalize_key(province), normalize_key(place));
        let code = self.records.get(&key).and_then(|rows| {
            rows.iter()
                .max_by_key(|(valid_from, _)| *valid_from)
                .map(|(_, code)| code.clone())
        });
        Ok(code)
    }

    async fn exists(&self, code: &PlaceCode) -> Result<bool, LookupError> {
        let found = self
            .records
            .values()
            .flatten()
            .any(|(_, candidate)| candidate == code);
        Ok(found)
    }
}
