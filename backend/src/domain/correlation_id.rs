//! Request-scoped correlation identifier for tracing a request through logs
//! and error payloads.
//!
//! `CorrelationId` uses task-local storage so the current identifier is
//! available without explicit parameter threading.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Use
//! [`CorrelationId::scope`] when spawning new tasks or moving work onto
//! blocking threads to keep the identifier attached.

use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    /// Task-local storage for the current correlation identifier.
    pub(crate) static CORRELATION_ID: CorrelationId;
}

/// Maximum accepted length of an inbound correlation identifier.
pub const CORRELATION_ID_MAX_LEN: usize = 128;

/// Validation errors raised when accepting an inbound identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CorrelationIdValidationError {
    /// The identifier is empty or whitespace.
    #[error("correlation id must not be blank")]
    Blank,
    /// The identifier exceeds [`CORRELATION_ID_MAX_LEN`] bytes.
    #[error("correlation id must be at most {CORRELATION_ID_MAX_LEN} bytes")]
    TooLong,
    /// The identifier contains characters that cannot be echoed in a header.
    #[error("correlation id must contain only visible ASCII characters")]
    InvalidCharacters,
}

/// Opaque per-request correlation identifier.
///
/// # Examples
/// ```
/// use wordbook::CorrelationId;
///
/// async fn handler() {
///     if let Some(id) = CorrelationId::current() {
///         tracing::info!(correlation_id = %id, "handling request");
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Accept an identifier supplied by a caller.
    ///
    /// Surrounding whitespace is trimmed before validation.
    pub fn new(raw: &str) -> Result<Self, CorrelationIdValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CorrelationIdValidationError::Blank);
        }
        if trimmed.len() > CORRELATION_ID_MAX_LEN {
            return Err(CorrelationIdValidationError::TooLong);
        }
        if !trimmed.chars().all(|c| c.is_ascii_graphic()) {
            return Err(CorrelationIdValidationError::InvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Use the inbound value when it is acceptable, otherwise generate one.
    #[must_use]
    pub fn from_inbound(raw: Option<&str>) -> Self {
        raw.and_then(|value| Self::new(value).ok())
            .unwrap_or_else(Self::generate)
    }

    /// Returns the current identifier if one is in scope.
    #[must_use]
    pub fn current() -> Option<Self> {
        CORRELATION_ID.try_with(Clone::clone).ok()
    }

    /// Borrow the identifier text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Execute the provided future with the supplied identifier in scope.
    ///
    /// # Examples
    /// ```
    /// use wordbook::CorrelationId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id = CorrelationId::new("req-1").expect("valid id");
    /// let observed = CorrelationId::scope(id.clone(), async { CorrelationId::current() }).await;
    /// assert_eq!(observed, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut>(id: CorrelationId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CORRELATION_ID.scope(id, fut).await
    }

    /// Run a synchronous closure with the supplied identifier in scope.
    ///
    /// Middleware uses this so work done while constructing an inner
    /// service's future observes the identifier too.
    pub fn sync_scope<F, R>(id: CorrelationId, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CORRELATION_ID.sync_scope(id, f)
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CorrelationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
