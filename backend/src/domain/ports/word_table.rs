//! Port for the key-value table store holding word entities.
//!
//! The table addresses each entity by a `(partition_key, row_key)` pair and
//! stamps a revision token (`etag`) and last-write timestamp on every write.
//! Reads after writes are eventually consistent.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::stream::BoxStream;

use super::define_port_error;

define_port_error! {
    /// Errors raised by word table adapters.
    pub enum WordTableError {
        /// No entity lives at the requested address.
        NotFound { partition_key: String, row_key: String } =>
            "entity not found: {partition_key}/{row_key}",
        /// The backend could not be reached.
        Connection { message: String } =>
            "word table connection failed: {message}",
        /// The backend rejected or failed the operation.
        Query { message: String } =>
            "word table query failed: {message}",
    }
}

/// Storage representation of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntity {
    pub partition_key: String,
    pub row_key: String,
    /// Revision token assigned by the backend on each write.
    pub etag: Option<String>,
    /// Last-write time assigned by the backend.
    pub timestamp: Option<DateTime<Utc>>,
    pub value: String,
    pub sounds_like: Option<String>,
    pub meaning: String,
}

/// Port for word entity storage.
///
/// Every method performs a single round-trip to the backend;
/// [`WordTable::query_entities`] is one full-table scan whose entities are
/// yielded lazily.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordTable: Send + Sync {
    /// Fetch one entity, returning `None` when the address is empty.
    async fn get_entity(
        &self,
        partition_key: &str,
        row_key: &str,
    ) -> Result<Option<WordEntity>, WordTableError>;

    /// Scan every entity in the table.
    fn query_entities(&self) -> BoxStream<'static, Result<WordEntity, WordTableError>>;

    /// Insert or fully replace the entity at its address.
    async fn upsert_entity(&self, entity: &WordEntity) -> Result<(), WordTableError>;

    /// Remove the entity at the address.
    ///
    /// Returns [`WordTableError::NotFound`] when nothing was removed.
    async fn delete_entity(&self, partition_key: &str, row_key: &str)
    -> Result<(), WordTableError>;
}
