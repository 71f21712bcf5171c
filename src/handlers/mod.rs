//! Web handlers module
//!
//! This module contains the HTTP handlers organized by surface:
//! - Page handlers rendering the HTML front end
//! - Event handlers for the JSON API over events and event items
//! - User handlers for registration and lookup

pub mod events;
pub mod pages;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::services::ServiceFactory;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub services: ServiceFactory,
}

impl AppState {
    pub fn new(services: ServiceFactory) -> Self {
        Self { services }
    }
}

/// Build the application router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // HTML pages
        .route("/events", get(pages::get_events_page))
        .route(
            "/create_event",
            get(pages::create_event_page).post(pages::create_event_submit),
        )
        // Health check
        .route("/health", get(health_check))
        // JSON API
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/events/{event_id}",
            get(events::get_event).delete(events::delete_event),
        )
        .route(
            "/api/events/{event_id}/items",
            get(events::list_event_items).post(events::add_event_item),
        )
        .route(
            "/api/event_items/{event_item_id}",
            get(events::get_event_item)
                .patch(events::rename_event_item)
                .delete(events::remove_event_item),
        )
        .route(
            "/api/event_items/{event_item_id}/candidates",
            post(events::nominate),
        )
        .route("/api/users", post(users::register_user))
        .route("/api/users/{user_id}", get(users::get_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
