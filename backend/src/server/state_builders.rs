//! Wiring of the word table through repository and service into HTTP state.

use std::sync::Arc;

use actix_web::web;

use super::ServerConfig;
use crate::domain::{TableWordRepository, WordServiceImpl};
use crate::inbound::http::state::HttpState;

/// Compose repository and service over the configured word table.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let repository = TableWordRepository::new(Arc::clone(&config.word_table), config.search);
    let service = WordServiceImpl::new(Arc::new(repository));
    web::Data::new(HttpState::new(Arc::new(service)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::SearchSettings;
    use crate::outbound::memory::InMemoryWordTable;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn state_reads_through_to_the_configured_table() {
        let config = ServerConfig::new(
            "127.0.0.1:0".parse().expect("socket address"),
            Arc::new(InMemoryWordTable::default()),
        )
        .with_search_settings(SearchSettings::new(1));
        let state = build_http_state(&config);

        let err = state.words.get_word("missing").await.expect_err("empty table");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
