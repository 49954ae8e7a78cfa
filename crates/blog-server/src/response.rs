use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use blog_store::PostId;

/// Envelope wrapped around every API response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A `"Success"` envelope carrying `data`, paired with its status code.
    pub fn success(status: StatusCode, data: T) -> (StatusCode, Json<Self>) {
        (
            status,
            Json(Self {
                status: status.as_u16(),
                message: "Success".into(),
                error: None,
                data: Some(data),
            }),
        )
    }

    pub fn failure(status: StatusCode, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            error: Some(error.into()),
            data: None,
        }
    }
}

/// `{ "id": n }` payload returned by create, delete and update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostIdBody {
    pub id: PostId,
}

impl From<PostId> for PostIdBody {
    fn from(id: PostId) -> Self {
        Self { id }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok".into() }
    }
}
