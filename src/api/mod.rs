//! HTTP client for the platform API
//!
//! Owns the transport concerns (base URL, proxy, timeout, bearer token,
//! expected-status checks) and hands parsed JSON bodies to the scenarios,
//! which own the field-level assertions.

mod client;
pub mod types;

pub use client::ApiClient;
