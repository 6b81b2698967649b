//! API Handlers
//!
//! HTTP request handlers for each user endpoint. Identity syntax and
//! request-body validation are terminated here; only well-formed input
//! reaches the service layer.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::models::{CreatedResponse, DeletedResponse, HealthResponse, User, UserRequest};
use crate::services::UserService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The user service over the backend selected at startup
    pub users: Arc<UserService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(users: UserService) -> Self {
        Self {
            users: Arc::new(users),
        }
    }
}

/// Parses a path parameter into an identity, rejecting malformed syntax
/// before the service layer is involved.
fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// Handler for GET /user/
///
/// Returns every stored user as a JSON array.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.users.get_all().await?;
    Ok(Json(users))
}

/// Handler for GET /user/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let id = parse_id(&id)?;
    let user = state.users.get(id).await?;
    Ok(Json(user))
}

/// Handler for POST /user/
///
/// Validates the body, then lets the service mint an identity and
/// persist the new user. Replies 201 with the minted identity.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    let id = state.users.create(req).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id))))
}

/// Handler for PUT /user/:id
///
/// Fully replaces the stored user and returns the updated entity.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UserRequest>,
) -> ApiResult<Json<User>> {
    let id = parse_id(&id)?;
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }

    let user = state.users.update(id, req).await?;
    Ok(Json(user))
}

/// Handler for DELETE /user/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    let id = parse_id(&id)?;
    let id = state.users.delete(id).await?;
    Ok(Json(DeletedResponse::new(id)))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
