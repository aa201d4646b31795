//! Authentication module for managing the client session.
//!
//! This module provides:
//! - `Credential`: the opaque token with optional expiry metadata
//! - `SessionStore`: the single process-wide owner of the current credential
//!
//! The session lives in memory only and is lost on process exit.

pub mod session;

pub use session::{Credential, SessionStore};
