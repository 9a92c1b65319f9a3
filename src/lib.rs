//! Smoke-test CLI for the mentorship platform REST API
//!
//! This library drives black-box smoke scenarios (authentication, session
//! CRUD, chat messaging, feedback submission, blockchain verification)
//! against a running deployment of the platform over plain HTTP.

pub mod api;
pub mod cli;
pub mod commands;
pub mod common;
pub mod testing;

// Re-export commonly used types for tests
pub use common::{Config, Error, Result};
pub use testing::Scenario;
