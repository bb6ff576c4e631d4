//! Shape validation for inbound word payloads.
//!
//! Request bodies deserialize into DTOs whose fields are all optional so a
//! missing field is reported with field-level detail instead of an opaque
//! deserialization failure.

use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Word, WordDraft};

/// Validation error codes reported per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyField,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyField => "empty_field",
        }
    }
}

/// One field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FieldError {
    field: &'static str,
    code: ErrorCode,
}

impl FieldError {
    fn message(&self) -> String {
        match self.code {
            ErrorCode::MissingField => format!("missing required field: {}", self.field),
            ErrorCode::EmptyField => format!("{} must not be empty", self.field),
        }
    }
}

fn check_required(field: &'static str, value: Option<&str>, errors: &mut Vec<FieldError>) {
    let code = match value {
        None => ErrorCode::MissingField,
        Some(text) if text.trim().is_empty() => ErrorCode::EmptyField,
        Some(_) => return,
    };
    errors.push(FieldError { field, code });
}

fn validation_error(errors: &[FieldError]) -> Error {
    let details: Vec<_> = errors
        .iter()
        .map(|error| {
            json!({
                "field": error.field,
                "code": error.code.as_str(),
                "message": error.message(),
            })
        })
        .collect();
    let message = match errors {
        [single] => single.message(),
        _ => "request validation failed".to_owned(),
    };
    Error::invalid_request(message).with_details(json!({ "errors": details }))
}

/// Body of `POST /word`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWordRequest {
    #[schema(example = "serendipity")]
    pub value: Option<String>,
    #[schema(example = "ser-en-dip-i-tee")]
    pub sounds_like: Option<String>,
    #[schema(example = "a happy accident")]
    pub meaning: Option<String>,
}

impl TryFrom<CreateWordRequest> for WordDraft {
    type Error = Error;

    fn try_from(request: CreateWordRequest) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        check_required("value", request.value.as_deref(), &mut errors);
        check_required("meaning", request.meaning.as_deref(), &mut errors);
        if !errors.is_empty() {
            return Err(validation_error(&errors));
        }
        Ok(WordDraft {
            value: request.value.unwrap_or_default(),
            sounds_like: request.sounds_like,
            meaning: request.meaning.unwrap_or_default(),
        })
    }
}

/// Body of `PUT /word`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWordRequest {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: Option<String>,
    #[schema(example = "serendipity")]
    pub value: Option<String>,
    pub sounds_like: Option<String>,
    #[schema(example = "a happy accident")]
    pub meaning: Option<String>,
}

impl TryFrom<UpdateWordRequest> for Word {
    type Error = Error;

    fn try_from(request: UpdateWordRequest) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();
        check_required("id", request.id.as_deref(), &mut errors);
        check_required("value", request.value.as_deref(), &mut errors);
        check_required("meaning", request.meaning.as_deref(), &mut errors);
        if !errors.is_empty() {
            return Err(validation_error(&errors));
        }
        Ok(Word {
            id: request.id.unwrap_or_default(),
            value: request.value.unwrap_or_default(),
            sounds_like: request.sounds_like,
            meaning: request.meaning.unwrap_or_default(),
        })
    }
}
