//! User API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::models::{CreateUserRequest, User};
use crate::utils::errors::Result;

use super::AppState;

/// POST /api/users
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>)> {
    let user = state.services.user_service.register(request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>> {
    Ok(Json(state.services.user_service.get_user(user_id).await?))
}
