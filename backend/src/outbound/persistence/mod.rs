//! PostgreSQL-backed word table built on Diesel.

mod diesel_word_table;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_word_table::DieselWordTable;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
