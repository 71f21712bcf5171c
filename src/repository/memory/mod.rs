//! In-memory repositories
//!
//! Nothing here survives a restart.

pub mod event;
pub mod event_item;
pub mod store;
pub mod user;

pub use event::EventRepository;
pub use event_item::EventItemRepository;
pub use store::MemoryStore;
pub use user::UserRepository;
