//! Spendlog - client core for a personal expense tracker.
//!
//! This crate talks to the expense tracker's remote HTTP API and owns the
//! client-side session. It provides:
//!
//! - `auth::SessionStore`: the single owner of the current credential
//! - `api::ApiClient`: login/register and expense list/add requests
//! - `app::Tracker`: headless dashboard state (expense list, staleness guard)
//!
//! The session lives only in memory; nothing is persisted across restarts
//! except the configuration file.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use app::Tracker;
pub use auth::{Credential, SessionStore};
pub use config::Config;
pub use models::{Amount, Expense};
