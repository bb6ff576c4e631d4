//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`WordTable`], [`WordRepository`]) describe what the domain
//! needs from storage; the driving port ([`WordService`]) is what inbound
//! adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod word_repository;
mod word_service;
mod word_table;

pub use word_repository::WordRepository;
#[cfg(test)]
pub use word_repository::MockWordRepository;
pub use word_service::WordService;
#[cfg(test)]
pub use word_service::MockWordService;
pub use word_table::{WordEntity, WordTable, WordTableError};
#[cfg(test)]
pub use word_table::MockWordTable;
