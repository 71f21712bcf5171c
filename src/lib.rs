//! Savoten
//!
//! A small web application for managing events and candidate scheduling.
//! Domain records live in in-memory repositories; a service layer sits between
//! them and the axum handlers that serve the HTML pages and the JSON API.

pub mod config;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod services;
pub mod templates;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, SavotenError};

// Re-export main components for easy access
pub use handlers::{create_router, AppState};
pub use repository::{EventItemRepository, IdStrategy};
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
