//! Request middleware.
//!
//! Purpose: request lifecycle concerns shared by every route, namely
//! correlation-id propagation and the catch-all error boundary.

pub mod correlation;
pub mod error_boundary;

pub use correlation::Correlation;
pub use error_boundary::{ErrorBoundary, UnhandledError};
