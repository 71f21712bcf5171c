//! Data models module
//!
//! Plain data records shared by the repositories, services and web handlers.
//! Identity fields are optional and assigned by the repository on first save.

pub mod candidate;
pub mod event;
pub mod event_item;
pub mod user;

// Re-export commonly used models
pub use candidate::{Candidate, NominateRequest};
pub use event::{CreateEventRequest, Event};
pub use event_item::{CreateEventItemRequest, EventItem, RenameEventItemRequest};
pub use user::{CreateUserRequest, User};
