//! Event item repository implementation

use crate::models::EventItem;
use crate::repository::IdStrategy;
use crate::utils::errors::Result;

use super::store::MemoryStore;

/// In-memory store of event items keyed by id
#[derive(Debug, Clone, Default)]
pub struct EventItemRepository {
    event_items: MemoryStore<EventItem>,
}

impl EventItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self {
            event_items: MemoryStore::with_strategy(strategy),
        }
    }

    /// Insert a new item (assigning its id) or overwrite the one stored at its id
    pub fn save(&mut self, event_item: &mut EventItem) -> i64 {
        self.event_items.save(event_item)
    }

    /// Remove a stored item. Fails when the item has no id or nothing is stored under it.
    pub fn delete(&mut self, event_item: &EventItem) -> Result<EventItem> {
        self.event_items.delete(event_item)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&EventItem> {
        self.event_items.find_by_id(id)
    }

    /// Items belonging to the given parent event, in id order
    pub fn find_by_event_id(&self, event_id: i64) -> Vec<&EventItem> {
        self.event_items
            .find_where(|item| item.event_id == Some(event_id))
    }

    pub fn find_all(&self) -> Vec<&EventItem> {
        self.event_items.find_all()
    }

    /// Remove every item of a parent event
    pub fn delete_by_event_id(&mut self, event_id: i64) -> usize {
        self.event_items
            .remove_where(|item| item.event_id == Some(event_id))
    }

    pub fn len(&self) -> usize {
        self.event_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.event_items.is_empty()
    }
}
