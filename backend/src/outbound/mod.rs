//! Outbound adapters implementing the word table port.

pub mod memory;
pub mod persistence;
