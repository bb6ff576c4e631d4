//! Driven port for word persistence expressed in domain terms.

use async_trait::async_trait;

use crate::domain::{Error, Word};

/// Word repository contract.
///
/// Expected failures are returned as [`Error`] values: an absent record is
/// [`crate::domain::ErrorCode::NotFound`], an empty id on a mutation is
/// [`crate::domain::ErrorCode::InvalidRequest`], and backend faults carry the
/// backend's diagnostic text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordRepository: Send + Sync {
    /// Fetch one word by id.
    async fn get(&self, id: &str) -> Result<Word, Error>;

    /// Words whose value or meaning contains `query`, ignoring case.
    ///
    /// The result is capped at the configured maximum; excess matches are
    /// dropped.
    async fn search(&self, query: &str) -> Result<Vec<Word>, Error>;

    /// Write or overwrite the full record keyed by `word.id`.
    async fn upsert(&self, word: Word) -> Result<Word, Error>;

    /// Physically remove the record, returning `true` on success.
    async fn delete(&self, id: &str) -> Result<bool, Error>;
}
