use chrono::{DateTime, Duration, Utc};
use tokio::sync::watch;

/// An authentication credential issued by a successful login.
///
/// The token is opaque: the store never inspects its shape. The observed
/// backend issues non-expiring tokens, so `expires_at` is `None` in
/// practice, but expiring backends stay representable.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            issued_at: Utc::now(),
            expires_at: None,
        }
    }

    pub fn with_expiry(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            issued_at: Utc::now(),
            expires_at: Some(expires_at),
        }
    }

    /// A credential without an expiry never expires.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expiry) => Utc::now() > expiry,
            None => false,
        }
    }

    pub fn time_until_expiry(&self) -> Option<Duration> {
        self.expires_at.map(|expiry| expiry - Utc::now())
    }
}

/// Single source of truth for "is there a logged-in user, and with which
/// credential".
///
/// Backed by a watch channel: every clone of the store shares the same
/// slot, so all readers observe the same value at any instant and
/// subscribers are woken on every change. `login` and `logout` are total,
/// last-writer-wins mutations with no failure mode.
#[derive(Clone)]
pub struct SessionStore {
    tx: watch::Sender<Option<Credential>>,
}

impl SessionStore {
    /// Create an empty (unauthenticated) store.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Replace the stored credential unconditionally.
    ///
    /// No validation of token shape or expiry happens here; the credential
    /// is an opaque pass-through from the login response.
    pub fn login(&self, credential: Credential) {
        self.tx.send_replace(Some(credential));
    }

    /// Clear the stored credential unconditionally. Idempotent.
    pub fn logout(&self) {
        self.tx.send_replace(None);
    }

    /// The current token, if any. Pure read, no side effects.
    pub fn token(&self) -> Option<String> {
        self.tx.borrow().as_ref().map(|c| c.token.clone())
    }

    /// The full current credential, if any.
    pub fn credential(&self) -> Option<Credential> {
        self.tx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Subscribe to credential changes. Receivers see the latest value
    /// only - intermediate values overwritten before a read are skipped.
    pub fn subscribe(&self) -> watch::Receiver<Option<Credential>> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
