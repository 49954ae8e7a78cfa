use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use blog_store::StoreError;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid JSON body: {0}")]
    BindJson(String),

    #[error("invalid path parameter: {0}")]
    BindPathParam(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

impl ServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(StoreError::CapacityExceeded { .. }) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::BindJson(_) | Self::BindPathParam(_) => StatusCode::BAD_REQUEST,
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable summary placed in the envelope's `message` field.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Store(StoreError::CapacityExceeded { .. }) => {
                "Failed to save, blog storage capacity reached"
            }
            Self::Store(StoreError::NotFound(_)) => {
                "Referenced resource does not found in the system"
            }
            Self::BindJson(_) => "Failed to bind JSON",
            Self::BindPathParam(_) => "Failed to bind path param",
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => "Failed to process your request",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }
        let body = ApiResponse::<()>::failure(status, self.message(), self.to_string());
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_client_statuses() {
        let full = ServerError::from(StoreError::CapacityExceeded { capacity: 1 });
        assert_eq!(full.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let missing = ServerError::from(StoreError::NotFound(3));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.to_string(), "item not found: 3");
    }

    #[test]
    fn bind_errors_are_bad_requests() {
        assert_eq!(
            ServerError::BindJson("eof".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::BindPathParam("abc".into()).message(),
            "Failed to bind path param"
        );
    }

    #[test]
    fn everything_else_is_internal() {
        let err = ServerError::Internal("boom".into());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Failed to process your request");
    }

    #[tokio::test]
    async fn into_response_uses_envelope() {
        let response = ServerError::from(StoreError::NotFound(1)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["error"], "item not found: 1");
        assert!(json.get("data").is_none());
    }
}
