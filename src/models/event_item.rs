//! Event item model

use serde::{Deserialize, Serialize};

use super::candidate::Candidate;

/// A votable slot of an event, e.g. one date option with its candidates.
///
/// `id` stays `None` until a repository stores the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventItem {
    pub id: Option<i64>,
    pub name: String,
    pub candidates: Vec<Candidate>,
    pub event_id: Option<i64>,
}

impl EventItem {
    pub fn new(name: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self {
            id: None,
            name: name.into(),
            candidates,
            event_id: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_event_id(mut self, event_id: i64) -> Self {
        self.event_id = Some(event_id);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventItemRequest {
    pub name: String,
    #[serde(default)]
    pub candidate_user_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameEventItemRequest {
    pub name: String,
}
