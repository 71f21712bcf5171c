//! Repository module
//!
//! Data access for the domain records. Every repository keeps its entities in
//! an ordered map keyed by the entity's own `id` and hands out ids on first save.

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::models::{Event, EventItem, User};

// Re-export repositories
pub use memory::{EventItemRepository, EventRepository, MemoryStore, UserRepository};

/// A record a repository can key by id
pub trait Entity: Clone {
    /// Name used in errors and log fields
    const NAME: &'static str;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);
}

/// How a repository picks the id of an entity saved without one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Largest stored id + 1, or 1 on an empty store. Deleting the
    /// highest entry frees its id for the next insert.
    #[default]
    MaxPlusOne,
    /// Monotonic counter starting at 1. Ids it handed out are never reused;
    /// ids occupied by explicit-id saves are skipped.
    Sequential,
}

impl Entity for EventItem {
    const NAME: &'static str = "EventItem";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Entity for Event {
    const NAME: &'static str = "Event";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Entity for User {
    const NAME: &'static str = "User";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}
