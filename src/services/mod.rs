//! Services module
//!
//! This module contains business logic services

pub mod event;
pub mod user;

// Re-export commonly used services
pub use event::EventService;
pub use user::UserService;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use crate::config::settings::Settings;
use crate::repository::{EventItemRepository, EventRepository, UserRepository};

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub event_service: EventService,
    pub user_service: UserService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with empty in-memory repositories
    pub fn new(settings: &Settings) -> Self {
        let strategy = settings.repository.id_strategy;
        let events = Arc::new(RwLock::new(EventRepository::with_strategy(strategy)));
        let event_items = Arc::new(RwLock::new(EventItemRepository::with_strategy(strategy)));
        let users = Arc::new(RwLock::new(UserRepository::with_strategy(strategy)));

        info!(id_strategy = ?strategy, "In-memory repositories created");

        Self {
            event_service: EventService::new(events, event_items, users.clone()),
            user_service: UserService::new(users),
        }
    }
}
