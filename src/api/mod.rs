//! REST API client module for the expense tracker backend.
//!
//! This module provides the `ApiClient` for communicating with the remote
//! service: login/register to obtain a token, and the authorized expense
//! list/add operations.
//!
//! The API expects the raw session token in the `Authorization` header
//! (no `Bearer` prefix) and speaks JSON in both directions.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
