//! Domain primitives, services and ports.
//!
//! Purpose: hold the word model, the error envelope every layer returns,
//! and the services that sit between inbound adapters and storage. Nothing
//! here depends on HTTP or on a concrete storage backend.
//!
//! Public surface:
//! - Error / ErrorCode: failure half of every domain result.
//! - CorrelationId: request-scoped correlation token.
//! - Word / WordDraft: the domain record and its client-supplied fields.
//! - TableWordRepository / SearchSettings: repository over a word table.
//! - WordServiceImpl: id-assigning service over a repository.

pub mod correlation_id;
pub mod error;
pub mod ports;
pub mod word;
pub mod word_repository;
pub mod word_service;

pub use self::correlation_id::{CorrelationId, CorrelationIdValidationError};
pub use self::error::{Error, ErrorCode};
pub use self::word::{Word, WordDraft};
pub use self::word_repository::{SearchSettings, TableWordRepository};
pub use self::word_service::WordServiceImpl;

/// HTTP header carrying the correlation identifier.
pub const CORRELATION_ID_HEADER: &str = "X-Correlation-Id";
