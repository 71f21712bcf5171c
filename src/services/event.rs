//! Event service implementation
//!
//! This service handles event creation, the event items offered for each event,
//! and nominating users as candidates for an item.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{
    Candidate, CreateEventItemRequest, CreateEventRequest, Event, EventItem, NominateRequest,
};
use crate::repository::{EventItemRepository, EventRepository, UserRepository};
use crate::utils::errors::{Result, SavotenError};
use crate::utils::helpers::normalize_whitespace;
use crate::utils::logging::log_event_action;

/// Event service for managing events and their items
#[derive(Clone)]
pub struct EventService {
    events: Arc<RwLock<EventRepository>>,
    event_items: Arc<RwLock<EventItemRepository>>,
    users: Arc<RwLock<UserRepository>>,
}

impl EventService {
    /// Create a new EventService over shared repositories
    pub fn new(
        events: Arc<RwLock<EventRepository>>,
        event_items: Arc<RwLock<EventItemRepository>>,
        users: Arc<RwLock<UserRepository>>,
    ) -> Self {
        Self {
            events,
            event_items,
            users,
        }
    }

    /// Create a new event
    pub async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        let name = required_name(&request.name, "Event name")?;
        if let (Some(start_at), Some(end_at)) = (request.start_at, request.end_at) {
            if end_at < start_at {
                return Err(SavotenError::InvalidInput(
                    "Event must not end before it starts".to_string(),
                ));
            }
        }

        let mut event = Event::new(name);
        event.description = request
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        event.start_at = request.start_at;
        event.end_at = request.end_at;

        let id = self.events.write().await.save(&mut event);
        log_event_action(id, "create", Some(event.name.as_str()));

        Ok(event)
    }

    /// List all events in id order
    pub async fn list_events(&self) -> Vec<Event> {
        self.events
            .read()
            .await
            .find_all()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Get event by ID
    pub async fn get_event(&self, event_id: i64) -> Result<Event> {
        self.events
            .read()
            .await
            .find_by_id(event_id)
            .cloned()
            .ok_or(SavotenError::EventNotFound { event_id })
    }

    /// Delete an event together with its items
    pub async fn delete_event(&self, event_id: i64) -> Result<Event> {
        let mut events = self.events.write().await;
        let event = events
            .find_by_id(event_id)
            .cloned()
            .ok_or(SavotenError::EventNotFound { event_id })?;
        let removed = events.delete(&event)?;

        let removed_items = self.event_items.write().await.delete_by_event_id(event_id);
        info!(event_id = event_id, removed_items = removed_items, "Event deleted");

        Ok(removed)
    }

    /// Add an item to an existing event
    pub async fn add_event_item(
        &self,
        event_id: i64,
        request: CreateEventItemRequest,
    ) -> Result<EventItem> {
        let name = required_name(&request.name, "Event item name")?;

        // Held until the item is stored so delete_event cannot cascade in between.
        // Lock order: events, users, event_items.
        let events = self.events.read().await;
        if events.find_by_id(event_id).is_none() {
            return Err(SavotenError::EventNotFound { event_id });
        }

        let candidates = {
            let users = self.users.read().await;
            request
                .candidate_user_ids
                .iter()
                .map(|&user_id| {
                    users
                        .find_by_id(user_id)
                        .cloned()
                        .map(Candidate::new)
                        .ok_or(SavotenError::UserNotFound { user_id })
                })
                .collect::<Result<Vec<_>>>()?
        };

        let mut event_item = EventItem::new(name, candidates).with_event_id(event_id);
        let id = self.event_items.write().await.save(&mut event_item);
        drop(events);
        log_event_action(event_id, "add_item", Some(format!("event_item_id={id}").as_str()));

        Ok(event_item)
    }

    /// Items of an event, in id order
    pub async fn list_event_items(&self, event_id: i64) -> Result<Vec<EventItem>> {
        let events = self.events.read().await;
        if events.find_by_id(event_id).is_none() {
            return Err(SavotenError::EventNotFound { event_id });
        }

        let items: Vec<EventItem> = self
            .event_items
            .read()
            .await
            .find_by_event_id(event_id)
            .into_iter()
            .cloned()
            .collect();
        debug!(event_id = event_id, count = items.len(), "Listed event items");

        Ok(items)
    }

    /// Get event item by ID
    pub async fn get_event_item(&self, event_item_id: i64) -> Result<EventItem> {
        self.event_items
            .read()
            .await
            .find_by_id(event_item_id)
            .cloned()
            .ok_or(SavotenError::EventItemNotFound { event_item_id })
    }

    /// Rename an event item, saving it over its previous version
    pub async fn rename_event_item(&self, event_item_id: i64, name: &str) -> Result<EventItem> {
        let name = required_name(name, "Event item name")?;

        let mut event_items = self.event_items.write().await;
        let mut event_item = event_items
            .find_by_id(event_item_id)
            .cloned()
            .ok_or(SavotenError::EventItemNotFound { event_item_id })?;
        event_item.name = name;
        event_items.save(&mut event_item);

        Ok(event_item)
    }

    /// Nominate a user as candidate of an event item
    pub async fn nominate(
        &self,
        event_item_id: i64,
        request: NominateRequest,
    ) -> Result<EventItem> {
        let user = self
            .users
            .read()
            .await
            .find_by_id(request.user_id)
            .cloned()
            .ok_or(SavotenError::UserNotFound {
                user_id: request.user_id,
            })?;

        let mut event_items = self.event_items.write().await;
        let mut event_item = event_items
            .find_by_id(event_item_id)
            .cloned()
            .ok_or(SavotenError::EventItemNotFound { event_item_id })?;

        let candidate = Candidate::new(user).with_comment(request.comment.unwrap_or_default());
        event_item.candidates.push(candidate);
        event_items.save(&mut event_item);
        info!(
            event_item_id = event_item_id,
            user_id = request.user_id,
            candidates = event_item.candidates.len(),
            "Candidate nominated"
        );

        Ok(event_item)
    }

    /// Remove an event item
    pub async fn remove_event_item(&self, event_item_id: i64) -> Result<EventItem> {
        let mut event_items = self.event_items.write().await;
        let event_item = event_items
            .find_by_id(event_item_id)
            .cloned()
            .ok_or(SavotenError::EventItemNotFound { event_item_id })?;

        let removed = event_items.delete(&event_item)?;
        if let Some(event_id) = removed.event_id {
            log_event_action(
                event_id,
                "remove_item",
                Some(format!("event_item_id={event_item_id}").as_str()),
            );
        }

        Ok(removed)
    }
}

fn required_name(raw: &str, field: &str) -> Result<String> {
    let name = normalize_whitespace(raw);
    if name.is_empty() {
        return Err(SavotenError::InvalidInput(format!("{field} is required")));
    }
    Ok(name)
}
