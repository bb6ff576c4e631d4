//! Word HTTP handlers.
//!
//! ```text
//! GET    /word/search?query=
//! GET    /word/{id}
//! POST   /word
//! PUT    /word
//! DELETE /word/{id}
//! ```
//!
//! `search` must be registered before `get_word` so the literal segment is
//! not captured as an id.

use actix_web::{delete, get, post, put, web};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::domain::{Word, WordDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, WordSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{CreateWordRequest, UpdateWordRequest};

/// Query parameters for word search.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Case-insensitive substring matched against value and meaning.
    pub query: Option<String>,
}

/// Search words by value or meaning.
#[utoipa::path(
    get,
    path = "/word/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching words, capped at the configured maximum", body = [WordSchema]),
        (status = 500, description = "Storage failure", body = ErrorSchema),
        (status = 503, description = "Storage unreachable", body = ErrorSchema)
    ),
    tags = ["words"],
    operation_id = "searchWords"
)]
#[get("/word/search")]
pub async fn search_words(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<Word>>> {
    let query = params.into_inner().query.unwrap_or_default();
    let words = state.words.search(&query).await?;
    Ok(web::Json(words))
}

/// Fetch one word by id.
#[utoipa::path(
    get,
    path = "/word/{id}",
    params(("id" = String, Path, description = "Word identifier")),
    responses(
        (status = 200, description = "The word", body = WordSchema),
        (status = 404, description = "Word not found", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["words"],
    operation_id = "getWord"
)]
#[get("/word/{id}")]
pub async fn get_word(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<Word>> {
    let word = state.words.get_word(&id).await?;
    Ok(web::Json(word))
}

/// Create a word; the server assigns its id.
#[utoipa::path(
    post,
    path = "/word",
    request_body = CreateWordRequest,
    responses(
        (status = 200, description = "Created word", body = WordSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["words"],
    operation_id = "createWord"
)]
#[post("/word")]
pub async fn create_word(
    state: web::Data<HttpState>,
    payload: web::Json<CreateWordRequest>,
) -> ApiResult<web::Json<Word>> {
    let draft = WordDraft::try_from(payload.into_inner())?;
    let word = state.words.upsert_word(Word::from_draft(draft)).await?;
    Ok(web::Json(word))
}

/// Replace an existing word, or store it under the given id.
#[utoipa::path(
    put,
    path = "/word",
    request_body = UpdateWordRequest,
    responses(
        (status = 200, description = "Stored word", body = WordSchema),
        (status = 400, description = "Invalid request or missing id", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["words"],
    operation_id = "updateWord"
)]
#[put("/word")]
pub async fn update_word(
    state: web::Data<HttpState>,
    payload: web::Json<UpdateWordRequest>,
) -> ApiResult<web::Json<Word>> {
    let word = Word::try_from(payload.into_inner())?;
    let stored = state.words.upsert_word(word).await?;
    Ok(web::Json(stored))
}

/// Delete a word by id.
#[utoipa::path(
    delete,
    path = "/word/{id}",
    params(("id" = String, Path, description = "Word identifier")),
    responses(
        (status = 200, description = "Word deleted", body = bool),
        (status = 404, description = "Word not found", body = ErrorSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["words"],
    operation_id = "deleteWord"
)]
#[delete("/word/{id}")]
pub async fn delete_word(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<bool>> {
    let deleted = state.words.delete_word(&id).await?;
    Ok(web::Json(deleted))
}

/// Register the word handlers in routing order.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(search_words)
        .service(get_word)
        .service(create_word)
        .service(update_word)
        .service(delete_word);
}

#[cfg(test)]
#[path = "words_tests.rs"]
mod tests;
