//! Event and event item API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::models::{
    CreateEventItemRequest, CreateEventRequest, Event, EventItem, NominateRequest,
    RenameEventItemRequest,
};
use crate::utils::errors::Result;

use super::AppState;

/// GET /api/events
pub async fn list_events(State(state): State<AppState>) -> Json<Vec<Event>> {
    Json(state.services.event_service.list_events().await)
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>)> {
    let event = state.services.event_service.create_event(request).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// GET /api/events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<Event>> {
    Ok(Json(state.services.event_service.get_event(event_id).await?))
}

/// DELETE /api/events/{event_id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<StatusCode> {
    state.services.event_service.delete_event(event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/events/{event_id}/items
pub async fn list_event_items(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<Json<Vec<EventItem>>> {
    let items = state
        .services
        .event_service
        .list_event_items(event_id)
        .await?;
    Ok(Json(items))
}

/// POST /api/events/{event_id}/items
pub async fn add_event_item(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Json(request): Json<CreateEventItemRequest>,
) -> Result<(StatusCode, Json<EventItem>)> {
    let item = state
        .services
        .event_service
        .add_event_item(event_id, request)
        .await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /api/event_items/{event_item_id}
pub async fn get_event_item(
    State(state): State<AppState>,
    Path(event_item_id): Path<i64>,
) -> Result<Json<EventItem>> {
    let item = state
        .services
        .event_service
        .get_event_item(event_item_id)
        .await?;
    Ok(Json(item))
}

/// PATCH /api/event_items/{event_item_id}
pub async fn rename_event_item(
    State(state): State<AppState>,
    Path(event_item_id): Path<i64>,
    Json(request): Json<RenameEventItemRequest>,
) -> Result<Json<EventItem>> {
    let item = state
        .services
        .event_service
        .rename_event_item(event_item_id, &request.name)
        .await?;
    Ok(Json(item))
}

/// DELETE /api/event_items/{event_item_id}
pub async fn remove_event_item(
    State(state): State<AppState>,
    Path(event_item_id): Path<i64>,
) -> Result<StatusCode> {
    state
        .services
        .event_service
        .remove_event_item(event_item_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/event_items/{event_item_id}/candidates
pub async fn nominate(
    State(state): State<AppState>,
    Path(event_item_id): Path<i64>,
    Json(request): Json<NominateRequest>,
) -> Result<Json<EventItem>> {
    let item = state
        .services
        .event_service
        .nominate(event_item_id, request)
        .await?;
    Ok(Json(item))
}
