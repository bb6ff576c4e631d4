//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use crate::domain::SearchSettings;
use crate::domain::ports::WordTable;

/// Builder-style configuration for creating the HTTP server.
#[derive(Clone)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) word_table: Arc<dyn WordTable>,
    pub(crate) search: SearchSettings,
}

impl ServerConfig {
    /// Serve words from `word_table` with the default search policy.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, word_table: Arc<dyn WordTable>) -> Self {
        Self {
            bind_addr,
            word_table,
            search: SearchSettings::default(),
        }
    }

    #[must_use]
    pub fn with_search_settings(mut self, search: SearchSettings) -> Self {
        self.search = search;
        self
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
