//! Test data helpers for creating test objects
//!
//! This module provides helper functions for creating users, candidates,
//! event items and request payloads.

use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use fake::Fake;
use savoten::models::{
    Candidate, CreateEventItemRequest, CreateEventRequest, CreateUserRequest, EventItem, User,
};

pub const TEST_USER_NAME: &str = "test_user";
pub const TEST_USER_EMAIL: &str = "test_user@test.com";
pub const TEST_USER_PERMISSION: i32 = 100;

/// The fixed user shared by the repository tests
pub fn create_test_user() -> User {
    User::new(TEST_USER_NAME, TEST_USER_EMAIL, TEST_USER_PERMISSION)
}

/// A candidate wrapping the fixed test user
pub fn create_test_candidate() -> Candidate {
    Candidate::new(create_test_user())
}

/// An unsaved event item with one candidate
pub fn create_test_event_item(name: &str) -> EventItem {
    EventItem::new(name, vec![create_test_candidate()])
}

/// A user with random name and email
pub fn random_user() -> User {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    User::new(name, email, TEST_USER_PERMISSION)
}

pub fn create_user_request(name: &str, email: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: name.to_string(),
        email: email.to_string(),
        permission: None,
    }
}

/// Registration payload with random, valid fields
pub fn random_user_request() -> CreateUserRequest {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    create_user_request(&name, &email)
}

pub fn create_event_request(name: &str) -> CreateEventRequest {
    CreateEventRequest {
        name: name.to_string(),
        description: None,
        start_at: None,
        end_at: None,
    }
}

pub fn create_event_item_request(name: &str, candidate_user_ids: Vec<i64>) -> CreateEventItemRequest {
    CreateEventItemRequest {
        name: name.to_string(),
        candidate_user_ids,
    }
}

/// A random single word, handy for item names
pub fn random_word() -> String {
    Word().fake()
}
