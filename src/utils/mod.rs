//! Small shared utilities.

pub mod latest;

pub use latest::{LatestOnly, Ticket};
