use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use roster_types::errors::ApplicationError;

pub const PLAYER_NOT_FOUND: &str = "Player not found";

/// JSON error response: `{"error": "<message>"}` with a status code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, PLAYER_NOT_FOUND)
    }

    /// Missing players become 404; every other error gets the operation's
    /// `failure_status` and its raw message.
    pub fn from_app_error(err: ApplicationError, failure_status: StatusCode) -> Self {
        if err.is_not_found() {
            tracing::warn!("{err}");
            return Self::not_found();
        }

        if failure_status.is_server_error() {
            tracing::error!("Request failed: {err}");
        } else {
            tracing::warn!("Request rejected: {err}");
        }
        Self::new(failure_status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}
