use thiserror::Error;

/// Fallback message when an error response carries no `error` field.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure outcomes of a single API round trip.
///
/// The four kinds stay distinguishable to the caller; nothing collapses
/// into a generic failure. None of these are fatal - every one is
/// recoverable by retrying at the caller's discretion.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No response was obtained at all.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its body was empty.
    #[error("empty response body")]
    EmptyBody,

    /// The body was present but not valid JSON, or the wrong shape.
    #[error("invalid response: {0}")]
    Parse(String),

    /// A well-formed response signaling failure, with the service's own
    /// message when it supplied one.
    #[error("{message} (status {status})")]
    Service {
        status: reqwest::StatusCode,
        message: String,
    },
}

impl ApiError {
    /// True when the service rejected the credential (HTTP 401).
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            ApiError::Service { status, .. } if *status == reqwest::StatusCode::UNAUTHORIZED
        )
    }
}
