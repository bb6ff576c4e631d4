//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `WORDBOOK_*` environment variables, or a
//! config file. Unset values fall back to the defaults exposed by the
//! accessors below.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::SearchSettings;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Errors raised when loaded settings are unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
    #[error("max_search_results must be at least 1")]
    ZeroSearchLimit,
}

/// Configuration for the word service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WORDBOOK")]
pub struct AppSettings {
    /// Listener address, `host:port`.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without one the in-memory table is used.
    pub database_url: Option<String>,
    /// Upper bound on search results.
    pub max_search_results: Option<usize>,
    /// Whether an empty search query returns every word instead of none.
    #[ortho_config(default = false)]
    pub empty_query_matches_all: bool,
    /// Pool size for the PostgreSQL backend.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    /// Parse the listener address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// The configured connection string, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Search policy derived from the configured cap and empty-query switch.
    pub fn search_settings(&self) -> Result<SearchSettings, SettingsError> {
        let max_results = self
            .max_search_results
            .unwrap_or(SearchSettings::DEFAULT_MAX_RESULTS);
        if max_results == 0 {
            return Err(SettingsError::ZeroSearchLimit);
        }
        Ok(SearchSettings::new(max_results)
            .with_empty_query_matches_all(self.empty_query_matches_all))
    }
}
