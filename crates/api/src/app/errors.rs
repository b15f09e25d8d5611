use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockmgr_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Duplicate(_) | DomainError::ReferentialIntegrity(_) => StatusCode::CONFLICT,
        DomainError::InsufficientStock { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    tracing::warn!(error = %err, "operation rejected");
    json_error(status, err.code(), err.to_string())
}

/// A request body that does not deserialize (missing field, fractional or
/// out-of-range number, malformed JSON) is a validation error.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    domain_error_to_response(DomainError::validation(rejection.body_text()))
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
