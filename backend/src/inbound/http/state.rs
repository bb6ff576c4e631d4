//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on the word service port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::WordService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub words: Arc<dyn WordService>,
}

impl HttpState {
    pub fn new(words: Arc<dyn WordService>) -> Self {
        Self { words }
    }
}
