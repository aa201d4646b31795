//! Data models for expense tracker entities.
//!
//! - `Expense`: a server-owned expense record
//! - `Amount`: string-or-number monetary value as the API sends it
//! - `SpendingsResponse`: wire shape of the expense list endpoint

pub mod expense;

pub use expense::{Amount, Expense, SpendingsResponse};
