//! HTTP API handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::body::decode_record;
use crate::config::Config;
use crate::error::ApiError;
use crate::resources::types::{CREATED_POST_ID, CREATED_USER_ID};
use crate::resources::{HealthResponse, IdPolicy, PathId, Post, StatsResponse, User};

/// Application state shared with handlers.
///
/// Immutable after startup; handlers never write to it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Name reported by the health endpoint.
    pub service_name: Arc<str>,
    /// Handling of non-numeric path ids.
    pub id_policy: IdPolicy,
}

impl AppState {
    /// Create new app state.
    pub fn new(service_name: impl Into<Arc<str>>, id_policy: IdPolicy) -> Self {
        Self {
            service_name: service_name.into(),
            id_policy,
        }
    }

    /// Build state from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.service_name.as_str(), config.id_policy)
    }

    fn path_id(&self, raw: String) -> Result<PathId, ApiError> {
        PathId::parse(raw, self.id_policy)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// `GET /users` - the two fixed users.
pub async fn list_users() -> impl IntoResponse {
    Json(User::fixtures())
}

/// `POST /users` - echo the decoded user with the created id.
pub async fn create_user(body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let mut user: User = decode_record(&body)?;
    user.id = CREATED_USER_ID;
    Ok((StatusCode::CREATED, Json(user)))
}

/// `GET /users/:id` - user synthesized from the path segment.
pub async fn get_user(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = state.path_id(raw)?;
    Ok(Json(User::from_path(id.value, &id.raw)))
}

/// `PUT /users/:id` - echo the decoded user under the path id.
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let id = state.path_id(raw)?;
    let mut user: User = decode_record(&body)?;
    user.id = id.value;
    Ok(Json(user))
}

/// `DELETE /users/:id` - always 204.
pub async fn delete_user() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// `GET /api/posts` - always empty.
pub async fn list_posts() -> impl IntoResponse {
    Json(Vec::<Post>::new())
}

/// `POST /api/posts` - echo the decoded post with the created id.
pub async fn create_post(body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let mut post: Post = decode_record(&body)?;
    post.id = CREATED_POST_ID;
    Ok((StatusCode::CREATED, Json(post)))
}

/// `GET /api/posts/:id` - post synthesized from the path segment.
pub async fn get_post(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<Post>, ApiError> {
    let id = state.path_id(raw)?;
    Ok(Json(Post::from_path(id.value, &id.raw)))
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse::ok(&*state.service_name))
}

/// `GET /admin/stats` - fixed counts.
pub async fn admin_stats() -> impl IntoResponse {
    Json(StatsResponse::default())
}
