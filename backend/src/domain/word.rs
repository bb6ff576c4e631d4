//! Word records managed by the service.
//!
//! A word pairs the term being learned with its meaning and an optional
//! phonetic hint. The storage representation ([`WordEntity`]) adds the
//! table addressing pair and backend bookkeeping; conversions between the
//! two are explicit and live here.

use serde::{Deserialize, Serialize};

use crate::domain::ports::WordEntity;

/// Fields supplied by a client when creating a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDraft {
    /// The term being learned.
    pub value: String,
    /// Optional phonetic hint.
    #[serde(default)]
    pub sounds_like: Option<String>,
    /// Definition of the term.
    pub meaning: String,
}

/// Domain word record.
///
/// ## Invariants
/// - Persisted words always carry a non-empty `id`, `value` and `meaning`.
///   An empty `id` only appears on words that have not been stored yet; the
///   word service assigns one before persisting.
///
/// # Examples
/// ```
/// use wordbook::domain::{Word, WordDraft};
///
/// let word = Word::from_draft(WordDraft {
///     value: "hello".into(),
///     sounds_like: None,
///     meaning: "greeting".into(),
/// });
/// assert!(!word.has_id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    /// Stable identifier, also used as partition and row key.
    #[serde(default)]
    pub id: String,
    /// The term being learned.
    pub value: String,
    /// Optional phonetic hint.
    #[serde(default)]
    pub sounds_like: Option<String>,
    /// Definition of the term.
    pub meaning: String,
}

impl Word {
    /// Build an unsaved word from client-supplied fields.
    pub fn from_draft(draft: WordDraft) -> Self {
        let WordDraft {
            value,
            sounds_like,
            meaning,
        } = draft;
        Self {
            id: String::new(),
            value,
            sounds_like,
            meaning,
        }
    }

    /// Whether an identifier has been assigned.
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Case-insensitive substring match against `value` or `meaning`.
    ///
    /// `needle` must already be lower-cased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.value.to_lowercase().contains(needle) || self.meaning.to_lowercase().contains(needle)
    }
}

impl From<WordEntity> for Word {
    fn from(entity: WordEntity) -> Self {
        let WordEntity {
            partition_key: _,
            row_key,
            etag: _,
            timestamp: _,
            value,
            sounds_like,
            meaning,
        } = entity;
        Self {
            id: row_key,
            value,
            sounds_like,
            meaning,
        }
    }
}

impl WordEntity {
    /// Map a word onto its single-record partition layout.
    ///
    /// Both keys equal the word id; `etag` and `timestamp` are left for the
    /// backend to assign.
    pub fn from_word(word: &Word) -> Self {
        Self {
            partition_key: word.id.clone(),
            row_key: word.id.clone(),
            etag: None,
            timestamp: None,
            value: word.value.clone(),
            sounds_like: word.sounds_like.clone(),
            meaning: word.meaning.clone(),
        }
    }
}
