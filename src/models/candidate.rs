//! Candidate model

use serde::{Deserialize, Serialize};

use super::user::User;

/// A user nominated for an event item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub user: User,
    #[serde(default)]
    pub comment: String,
}

impl Candidate {
    pub fn new(user: User) -> Self {
        Self {
            user,
            comment: String::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominateRequest {
    pub user_id: i64,
    pub comment: Option<String>,
}
