//! HTTP inbound adapter exposing the word REST endpoints.

pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;
pub mod words;

pub use error::ApiResult;
