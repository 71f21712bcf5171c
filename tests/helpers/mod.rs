//! Test helpers module
//!
//! This module provides utilities and helpers for testing the Savoten application.
//! It includes test data builders and a test context wiring services and the router.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
