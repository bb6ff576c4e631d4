//! Word domain service.
//!
//! A pass-through over the [`WordRepository`] except for upserts, where a
//! word without an id is given a fresh random one before it is stored.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{WordRepository, WordService};
use crate::domain::{Error, Word};

/// Word service implementing the [`WordService`] driving port.
#[derive(Clone)]
pub struct WordServiceImpl<R: ?Sized> {
    word_repo: Arc<R>,
}

impl<R: ?Sized> WordServiceImpl<R> {
    /// Create a new service with the word repository.
    pub fn new(word_repo: Arc<R>) -> Self {
        Self { word_repo }
    }
}

#[async_trait]
impl<R> WordService for WordServiceImpl<R>
where
    R: WordRepository + ?Sized,
{
    async fn get_word(&self, id: &str) -> Result<Word, Error> {
        self.word_repo.get(id).await
    }

    async fn search(&self, query: &str) -> Result<Vec<Word>, Error> {
        self.word_repo.search(query).await
    }

    async fn upsert_word(&self, mut word: Word) -> Result<Word, Error> {
        if !word.has_id() {
            word.id = Uuid::new_v4().to_string();
            debug!(id = %word.id, "assigned id to new word");
        }
        self.word_repo.upsert(word).await
    }

    async fn delete_word(&self, id: &str) -> Result<bool, Error> {
        self.word_repo.delete(id).await
    }
}
