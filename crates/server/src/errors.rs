use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const NOT_FOUND_BODY: &str = "entry not found";

/// Handler-level failure, converted to an HTTP response at the boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("entry not found")]
    NotFound,
    /// Body or query string that could not be extracted.
    #[error("{0}")]
    Rejected(String),
}

fn detail(status: StatusCode, msg: String) -> Response {
    (status, Json(json!({"detail": msg}))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let msg = self.to_string();
        match self {
            ApiError::Service(ServiceError::Validation(_) | ServiceError::InvalidId(_)) => {
                detail(StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Service(ServiceError::Db(_)) => {
                error!(error = %msg, "store error");
                detail(StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, Json(NOT_FOUND_BODY)).into_response(),
            ApiError::Rejected(_) => detail(StatusCode::UNPROCESSABLE_ENTITY, msg),
        }
    }
}
