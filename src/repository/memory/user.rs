//! User repository implementation

use crate::models::User;
use crate::repository::IdStrategy;
use crate::utils::errors::Result;

use super::store::MemoryStore;

#[derive(Debug, Clone, Default)]
pub struct UserRepository {
    users: MemoryStore<User>,
}

impl UserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self {
            users: MemoryStore::with_strategy(strategy),
        }
    }

    /// Insert or overwrite a user
    pub fn save(&mut self, user: &mut User) -> i64 {
        self.users.save(user)
    }

    /// Delete user
    pub fn delete(&mut self, user: &User) -> Result<User> {
        self.users.delete(user)
    }

    /// Find user by ID
    pub fn find_by_id(&self, id: i64) -> Option<&User> {
        self.users.find_by_id(id)
    }

    /// Find user by email, first match in id order
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .find_where(|user| user.email == email)
            .into_iter()
            .next()
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }
}
