//! Table-backed implementation of the word repository port.
//!
//! Translates between domain words and table entities and turns every
//! expected storage outcome into a domain [`Error`]. Nothing here retries:
//! a single backend failure is surfaced immediately.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use tracing::{debug, error};

use crate::domain::ports::{WordEntity, WordRepository, WordTable, WordTableError};
use crate::domain::{Error, Word};

const WORD_NOT_FOUND: &str = "Word not found";
const MISSING_ID: &str = "Missing Id";

/// Search behaviour knobs.
///
/// # Examples
/// ```
/// use wordbook::domain::SearchSettings;
///
/// let settings = SearchSettings::new(10).with_empty_query_matches_all(true);
/// assert_eq!(settings.max_results(), 10);
/// assert!(settings.empty_query_matches_all());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    max_results: usize,
    empty_query_matches_all: bool,
}

impl SearchSettings {
    /// Cap applied when none is configured.
    pub const DEFAULT_MAX_RESULTS: usize = 50;

    /// Settings with the given result cap; an empty query matches nothing.
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results,
            empty_query_matches_all: false,
        }
    }

    /// Choose whether an empty query returns every record (still capped).
    #[must_use]
    pub fn with_empty_query_matches_all(mut self, enabled: bool) -> Self {
        self.empty_query_matches_all = enabled;
        self
    }

    /// Maximum number of words a search returns.
    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Whether an empty query matches every record.
    pub fn empty_query_matches_all(&self) -> bool {
        self.empty_query_matches_all
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_RESULTS)
    }
}

fn map_table_error(context: &str, error: WordTableError) -> Error {
    match error {
        WordTableError::NotFound { .. } => Error::not_found(WORD_NOT_FOUND),
        WordTableError::Connection { message } => {
            Error::service_unavailable(format!("{context}: {message}"))
        }
        WordTableError::Query { message } => Error::storage(format!("{context}: {message}")),
    }
}

/// Word repository over a [`WordTable`], one record per partition.
#[derive(Clone)]
pub struct TableWordRepository<T: ?Sized> {
    table: Arc<T>,
    settings: SearchSettings,
}

impl<T: ?Sized> TableWordRepository<T> {
    /// Create a repository over the given table.
    pub fn new(table: Arc<T>, settings: SearchSettings) -> Self {
        Self { table, settings }
    }
}

#[async_trait]
impl<T> WordRepository for TableWordRepository<T>
where
    T: WordTable + ?Sized,
{
    async fn get(&self, id: &str) -> Result<Word, Error> {
        match self.table.get_entity(id, id).await {
            Ok(Some(entity)) => Ok(Word::from(entity)),
            Ok(None) | Err(WordTableError::NotFound { .. }) => {
                debug!(id, "word not found");
                Err(Error::not_found(WORD_NOT_FOUND))
            }
            Err(err) => {
                error!(id, error = %err, "error getting word");
                Err(map_table_error("Error getting word", err))
            }
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<Word>, Error> {
        if query.is_empty() && !self.settings.empty_query_matches_all() {
            return Ok(Vec::new());
        }

        let needle = query.to_lowercase();
        let limit = self.settings.max_results();
        let mut words = Vec::new();
        let mut entities = self.table.query_entities();
        while words.len() < limit {
            let Some(entity) = entities.next().await else {
                break;
            };
            let entity = entity.map_err(|err| {
                error!(query, error = %err, "error searching for words");
                map_table_error("Error searching for words", err)
            })?;
            let word = Word::from(entity);
            if word.matches_lowercase(&needle) {
                words.push(word);
            }
        }
        Ok(words)
    }

    async fn upsert(&self, word: Word) -> Result<Word, Error> {
        if !word.has_id() {
            return Err(Error::invalid_request(MISSING_ID));
        }

        let entity = WordEntity::from_word(&word);
        match self.table.upsert_entity(&entity).await {
            Ok(()) => Ok(word),
            Err(err) => {
                error!(id = %word.id, error = %err, "error upserting word");
                Err(map_table_error("Error upserting word", err))
            }
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, Error> {
        if id.is_empty() {
            return Err(Error::invalid_request(MISSING_ID));
        }

        match self.table.delete_entity(id, id).await {
            Ok(()) => Ok(true),
            Err(WordTableError::NotFound { .. }) => {
                debug!(id, "delete target not found");
                Err(Error::not_found(WORD_NOT_FOUND))
            }
            Err(err) => {
                error!(id, error = %err, "error deleting word");
                Err(map_table_error("Error deleting word", err))
            }
        }
    }
}

#[cfg(test)]
#[path = "word_repository_tests.rs"]
mod tests;
