//! HTML page handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::debug;

use crate::models::CreateEventRequest;
use crate::templates::{render_create_event, render_get_events};
use crate::utils::errors::{Result, SavotenError};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateEventForm {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// GET /events
pub async fn get_events_page(State(state): State<AppState>) -> Result<Html<String>> {
    let event_service = &state.services.event_service;

    let mut rows = Vec::new();
    for event in event_service.list_events().await {
        let Some(event_id) = event.id else { continue };
        let items = match event_service.list_event_items(event_id).await {
            Ok(items) => items,
            // Deleted since the listing above
            Err(SavotenError::EventNotFound { .. }) => continue,
            Err(e) => return Err(e),
        };
        rows.push((event, items));
    }
    debug!(events = rows.len(), "Rendering events page");

    Ok(Html(render_get_events(&rows)))
}

/// GET /create_event
pub async fn create_event_page() -> Html<String> {
    Html(render_create_event(None))
}

/// POST /create_event
pub async fn create_event_submit(
    State(state): State<AppState>,
    Form(form): Form<CreateEventForm>,
) -> Response {
    let request = CreateEventRequest {
        name: form.name,
        description: Some(form.description),
        start_at: None,
        end_at: None,
    };

    match state.services.event_service.create_event(request).await {
        Ok(_) => Redirect::to("/events").into_response(),
        Err(SavotenError::InvalidInput(message)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(render_create_event(Some(&message))),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
