#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assessment::session::SessionError;
use crate::guidance::parser::GuidanceParseError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every failure kind maps to its own code in the response envelope and the
/// message tells the caller what to do about it. None of them is retried
/// automatically anywhere in the service.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Parse(#[from] GuidanceParseError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
            AppError::Session(e) => session_response(e),
            AppError::Llm(e) => llm_response(e),
            AppError::Parse(e) => parse_response(e),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

/// Session state errors are client-correctable: a bad answer is 422, an
/// out-of-phase call is 409.
fn session_response(error: &SessionError) -> (StatusCode, &'static str, String) {
    match error {
        SessionError::InvalidOption { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "INVALID_OPTION",
            error.to_string(),
        ),
        SessionError::TrackAlreadyChosen => (
            StatusCode::CONFLICT,
            "TRACK_ALREADY_CHOSEN",
            error.to_string(),
        ),
        SessionError::NotAnswering => (StatusCode::CONFLICT, "NOT_ANSWERING", error.to_string()),
        SessionError::NotComplete => (
            StatusCode::CONFLICT,
            "ASSESSMENT_INCOMPLETE",
            "Answer the remaining questions before requesting guidance".to_string(),
        ),
    }
}

/// Generation-service failures. Details go to the log; the client gets a
/// short actionable message and a code it can branch on.
fn llm_response(error: &LlmError) -> (StatusCode, &'static str, String) {
    match error {
        LlmError::MissingCredential => (
            StatusCode::SERVICE_UNAVAILABLE,
            "MISSING_CREDENTIAL",
            "Guidance generation is not configured. Add GEMINI_API_KEY to the server environment."
                .to_string(),
        ),
        LlmError::Auth { status, message } => {
            tracing::error!("Generation service rejected credentials (status {status}): {message}");
            (
                StatusCode::BAD_GATEWAY,
                "AUTHENTICATION_ERROR",
                "The generation service rejected the configured API key. Verify GEMINI_API_KEY is valid."
                    .to_string(),
            )
        }
        LlmError::Http(e) => {
            tracing::error!("Generation service unreachable: {e}");
            (
                StatusCode::BAD_GATEWAY,
                "SERVICE_ERROR",
                "The generation service could not be reached. Try again.".to_string(),
            )
        }
        LlmError::Api { status, message } => {
            tracing::error!("Generation service error (status {status}): {message}");
            (
                StatusCode::BAD_GATEWAY,
                "SERVICE_ERROR",
                "The generation service failed to produce a response. Try again.".to_string(),
            )
        }
        LlmError::EmptyContent => {
            tracing::error!("Generation service returned no content");
            (
                StatusCode::BAD_GATEWAY,
                "SERVICE_ERROR",
                "The generation service returned an empty response. Try again.".to_string(),
            )
        }
    }
}

fn parse_response(error: &GuidanceParseError) -> (StatusCode, &'static str, String) {
    match error {
        GuidanceParseError::Malformed(e) => {
            tracing::warn!("Guidance response was not valid JSON: {e}");
            (
                StatusCode::BAD_GATEWAY,
                "MALFORMED_RESPONSE",
                "The generated guidance could not be parsed. Try generating again.".to_string(),
            )
        }
        GuidanceParseError::SchemaViolation { field } => {
            tracing::warn!("Guidance response failed schema validation at '{field}'");
            (
                StatusCode::BAD_GATEWAY,
                "SCHEMA_VIOLATION",
                format!(
                    "The generated guidance is missing or has an invalid field: {field}. Try generating again."
                ),
            )
        }
    }
}
