//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the word endpoints, the health probes and the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document is served by
//! Swagger UI in debug builds and printed by `openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, WordSchema};
use crate::inbound::http::validation::{CreateWordRequest, UpdateWordRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wordbook API",
        description = "Create, search, update and delete vocabulary words."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::words::search_words,
        crate::inbound::http::words::get_word,
        crate::inbound::http::words::create_word,
        crate::inbound::http::words::update_word,
        crate::inbound::http::words::delete_word,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        WordSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateWordRequest,
        UpdateWordRequest
    )),
    tags(
        (name = "words", description = "Vocabulary word records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
