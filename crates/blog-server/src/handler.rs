//! Route handlers.
//!
//! Each handler binds its inputs, calls one [`BlogRepository`] operation and
//! wraps the result in an [`ApiResponse`]. Failures surface as
//! [`ServerError`], which renders the same envelope with an error status.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use blog_store::{BlogPostPatch, BlogRepository, NewBlogPost, PostId};

use crate::error::{ServerError, ServerResult};
use crate::response::{ApiResponse, HealthResponse, PostIdBody};

/// Shared state for the blog handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn BlogRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn BlogRepository>) -> Self {
        Self { repo }
    }
}

fn bind_json<T>(payload: Result<Json<T>, JsonRejection>) -> ServerResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ServerError::BindJson(rejection.body_text()))
}

fn bind_id(path: Result<Path<PostId>, PathRejection>) -> ServerResult<PostId> {
    path.map(|Path(id)| id)
        .map_err(|rejection| ServerError::BindPathParam(rejection.body_text()))
}

/// POST /api/blog-post
pub async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<NewBlogPost>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let post = bind_json(payload)?;
    let id = state.repo.create(post)?;
    tracing::info!(id, "blog post created");
    Ok(ApiResponse::success(StatusCode::CREATED, PostIdBody::from(id)))
}

/// GET /api/blog-post
pub async fn list_posts(State(state): State<AppState>) -> impl IntoResponse {
    ApiResponse::success(StatusCode::OK, state.repo.list())
}

/// GET /api/blog-post/:id
pub async fn get_post(
    State(state): State<AppState>,
    path: Result<Path<PostId>, PathRejection>,
) -> ServerResult<impl IntoResponse> {
    let id = bind_id(path)?;
    let post = state.repo.get(id)?;
    Ok(ApiResponse::success(StatusCode::OK, post))
}

/// DELETE /api/blog-post/:id
pub async fn delete_post(
    State(state): State<AppState>,
    path: Result<Path<PostId>, PathRejection>,
) -> ServerResult<impl IntoResponse> {
    let id = state.repo.delete(bind_id(path)?)?;
    tracing::info!(id, "blog post deleted");
    Ok(ApiResponse::success(StatusCode::OK, PostIdBody::from(id)))
}

/// PATCH /api/blog-post/:id
pub async fn update_post(
    State(state): State<AppState>,
    path: Result<Path<PostId>, PathRejection>,
    payload: Result<Json<BlogPostPatch>, JsonRejection>,
) -> ServerResult<impl IntoResponse> {
    let id = bind_id(path)?;
    let patch = bind_json(payload)?;
    if patch.is_noop() {
        tracing::debug!(id, "update carries no field changes, refreshing timestamp only");
    }
    let id = state.repo.update(id, patch)?;
    tracing::info!(id, "blog post updated");
    Ok(ApiResponse::success(StatusCode::OK, PostIdBody::from(id)))
}

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Info handler.
pub async fn info_handler() -> Json<serde_json::Value> {
    Json(json!({
        "name": "blog-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
