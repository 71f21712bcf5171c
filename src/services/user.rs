//! User service implementation
//!
//! This service handles user registration and lookups.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::models::user::DEFAULT_PERMISSION;
use crate::models::{CreateUserRequest, User};
use crate::repository::UserRepository;
use crate::utils::errors::{Result, SavotenError};
use crate::utils::helpers::{is_valid_email, normalize_whitespace};
use crate::utils::logging::log_user_action;

/// User service for managing user operations
#[derive(Clone)]
pub struct UserService {
    users: Arc<RwLock<UserRepository>>,
}

impl UserService {
    /// Create a new UserService instance
    pub fn new(users: Arc<RwLock<UserRepository>>) -> Self {
        Self { users }
    }

    /// Register a new user; emails are unique
    pub async fn register(&self, request: CreateUserRequest) -> Result<User> {
        let name = normalize_whitespace(&request.name);
        if name.is_empty() {
            return Err(SavotenError::InvalidInput("User name is required".to_string()));
        }

        let email = request.email.trim().to_lowercase();
        if !is_valid_email(&email) {
            warn!(email = %email, "Rejected invalid email");
            return Err(SavotenError::InvalidInput(format!("Invalid email: {email}")));
        }

        let permission = request.permission.unwrap_or(DEFAULT_PERMISSION);
        if permission < 0 {
            return Err(SavotenError::InvalidInput(
                "Permission level must not be negative".to_string(),
            ));
        }

        let mut users = self.users.write().await;
        if users.find_by_email(&email).is_some() {
            return Err(SavotenError::DuplicateEmail(email));
        }

        let mut user = User::new(name, email, permission);
        let user_id = users.save(&mut user);
        log_user_action(user_id, "register", None);

        Ok(user)
    }

    /// Get user by ID
    pub async fn get_user(&self, user_id: i64) -> Result<User> {
        debug!(user_id = user_id, "Getting user by ID");
        self.users
            .read()
            .await
            .find_by_id(user_id)
            .cloned()
            .ok_or(SavotenError::UserNotFound { user_id })
    }

    /// Get user by email
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = email.trim().to_lowercase();
        self.users.read().await.find_by_email(&email).cloned()
    }
}
