//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`; the
//! wrappers here mirror their shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested word does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The storage backend failed the operation.
    #[schema(rename = "storage_failure")]
    StorageFailure,
    /// The storage backend could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    #[schema(example = "not_found")]
    code: ErrorCodeSchema,
    #[schema(example = "Word not found")]
    message: String,
    /// Correlation identifier of the failed request.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    correlation_id: Option<String>,
    /// Field-level validation detail, when present.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Word`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Word)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct WordSchema {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    #[schema(example = "serendipity")]
    value: String,
    #[schema(example = "ser-en-dip-i-tee")]
    sounds_like: Option<String>,
    #[schema(example = "a happy accident")]
    meaning: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "not_found",
            "storage_failure",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn word_schema_uses_camel_case_fields() {
        let schema_json = schema_to_json::<WordSchema>();
        assert_eq!(WordSchema::name(), "crate.domain.Word");
        assert!(schema_json.contains("soundsLike"));
    }

    #[test]
    fn error_schema_exposes_correlation_id() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("correlationId"));
    }
}
