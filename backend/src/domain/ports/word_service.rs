//! Driving port consumed by inbound adapters for word operations.

use async_trait::async_trait;

use crate::domain::{Error, Word};

/// Word use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordService: Send + Sync {
    /// Fetch one word by id.
    async fn get_word(&self, id: &str) -> Result<Word, Error>;

    /// Search words by case-insensitive substring.
    async fn search(&self, query: &str) -> Result<Vec<Word>, Error>;

    /// Create or replace a word, assigning an id when it has none.
    async fn upsert_word(&self, word: Word) -> Result<Word, Error>;

    /// Delete a word by id.
    async fn delete_word(&self, id: &str) -> Result<bool, Error>;
}
