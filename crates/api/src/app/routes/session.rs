use std::sync::Arc;

use axum::{
    Extension, Json, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use stockmgr_core::{DomainError, DomainResult};

use crate::app::{dto, errors, services::AppServices};
use crate::context::SessionContext;

/// Placeholder credential check: any non-blank username with a non-empty
/// password is accepted. There is no user database.
pub fn check_credentials(username: &str, password: &str) -> DomainResult<String> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(DomainError::validation("username and password are required"));
    }
    Ok(username.to_string())
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    payload: Result<Json<dto::LoginRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match payload {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let username = match check_credentials(&body.username, &body.password) {
        Ok(u) => u,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let token = services.sessions().open(&username);
    tracing::info!(username = %username, "session opened");

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "token": token,
            "username": username,
        })),
    )
        .into_response()
}

pub async fn logout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> StatusCode {
    services.sessions().close(session.token());
    tracing::info!(username = session.username(), "session closed");
    StatusCode::NO_CONTENT
}
