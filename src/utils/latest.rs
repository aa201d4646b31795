use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Request-generation counter for discarding superseded responses.
///
/// A caller stamps each in-flight request with `begin()` and checks
/// `is_current()` before applying the result. When a newer request began in
/// the meantime, the older ticket is stale and its response must be dropped
/// instead of overwriting newer data.
#[derive(Debug, Clone, Default)]
pub struct LatestOnly {
    current: Arc<AtomicU64>,
}

/// Proof that a request was started; stale once a newer `begin()` happens.
#[derive(Debug)]
pub struct Ticket {
    generation: u64,
}

impl LatestOnly {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation, superseding all earlier tickets.
    pub fn begin(&self) -> Ticket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        Ticket { generation }
    }

    /// Whether no newer request has begun since this ticket was issued.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.generation
    }
}
