//! Event repository implementation

use crate::models::Event;
use crate::repository::IdStrategy;
use crate::utils::errors::Result;

use super::store::MemoryStore;

#[derive(Debug, Clone, Default)]
pub struct EventRepository {
    events: MemoryStore<Event>,
}

impl EventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self {
            events: MemoryStore::with_strategy(strategy),
        }
    }

    /// Insert or overwrite an event
    pub fn save(&mut self, event: &mut Event) -> i64 {
        self.events.save(event)
    }

    /// Delete event
    pub fn delete(&mut self, event: &Event) -> Result<Event> {
        self.events.delete(event)
    }

    /// Find event by ID
    pub fn find_by_id(&self, id: i64) -> Option<&Event> {
        self.events.find_by_id(id)
    }

    /// List events in id order
    pub fn find_all(&self) -> Vec<&Event> {
        self.events.find_all()
    }

    pub fn count(&self) -> usize {
        self.events.len()
    }
}
