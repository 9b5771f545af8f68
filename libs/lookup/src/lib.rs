//! # fisco-lookup
//!
//! Place-code lookup capability for Italian fiscal code validation.
//!
//! Fiscal codes embed a 4-character place code (historically called a
//! cadastral code) identifying the municipality or foreign country of
//! birth. This crate defines the lookup contract consumed by the codec,
//! a strongly typed [`PlaceCode`], and the backends that satisfy it:
//!
//! - [`MemoryLookup`] — in-memory table, infallible, deterministic; the
//!   substitute of choice in tests and embedded callers.
//! - [`PgLookup`] — Postgres-backed table queried via SQLx.
//! - [`CachedLookup`] — bounded memoizing wrapper around any backend.
//!
//! ## Design Principles
//!
//! - The lookup is an explicit, injectable capability object; callers
//!   construct it once and pass it to the codec.
//! - A miss (`Ok(None)` / `Ok(false)`) is a valid, final answer. Only
//!   genuine backend faults surface as [`LookupError`].
//! - When a place has several historical records, the one with the
//!   latest validity-start date wins.
//! - All backends are safe for concurrent reads.

mod cache;
mod code;
mod error;
mod memory;
mod postgres;

pub use cache::{CacheConfig, CachedLookup};
pub use code::{PlaceCode, FOREIGN_PROVINCE};
pub use error::{LookupError, PlaceCodeError};
pub use memory::{MemoryLookup, PlaceRecord};
pub use postgres::{DbConfig, PgLookup};

use async_trait::async_trait;

/// The place-code lookup contract.
///
/// String inputs are case-insensitive and whitespace-trimming;
/// implementations normalize before querying.
#[async_trait]
pub trait PlaceLookup: Send + Sync {
    /// Resolves a `(province, place name)` pair to its place code.
    ///
    /// Returns `Ok(None)` when the pair is unknown. When multiple
    /// validity-dated records match, returns the most recent one.
    async fn resolve(
        &self,
        province: &str,
        place: &str,
    ) -> Result<Option<PlaceCode>, LookupError>;

    /// Checks whether a place code exists in the table.
    async fn exists(&self, code: &PlaceCode) -> Result<bool, LookupError>;
}

#[async_trait]
impl<L: PlaceLookup + ?Sized> PlaceLookup for std::sync::Arc<L> {
    async fn resolve(
        &self,
        province: &str,
        place: &str,
    ) -> Result<Option<PlaceCode>, LookupError> {
        (**self).resolve(province, place).await
    }

    async fn exists(&self, code: &PlaceCode) -> Result<bool, LookupError> {
        (**self).exists(code).await
    }
}

/// Normalizes a lookup key: trimmed and upper-cased.
///
/// Shared by the backends and the cache so that keying is consistent
/// across layers.
pub(crate) fn normalize_key(s: &str) -> String {
    s.trim().to_uppercase()
}
