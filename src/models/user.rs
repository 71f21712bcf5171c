//! User model

use serde::{Deserialize, Serialize};

/// Permission level granted to ordinary members
pub const DEFAULT_PERMISSION: i32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub permission: i32,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, permission: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            permission,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub permission: Option<i32>,
}
