//! Headless dashboard state for the expense tracker.
//!
//! `Tracker` is what a screen would sit on top of: it owns the session
//! store and API client, holds the locally displayed expense list, and
//! coordinates fetch/add against the remote service. Rendering and input
//! belong to whatever front-end drives it.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::auth::SessionStore;
use crate::config::Config;
use crate::models::Expense;
use crate::utils::{LatestOnly, Ticket};

pub struct Tracker {
    config: Config,
    client: ApiClient,
    session: SessionStore,
    expenses: Vec<Expense>,
    list_requests: LatestOnly,
}

impl Tracker {
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(config.api_base_url.clone())
            .context("Failed to build API client")?;
        Ok(Self {
            config,
            client,
            session: SessionStore::new(),
            expenses: Vec::new(),
            list_requests: LatestOnly::new(),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The locally held expense list, as of the last applied fetch/add.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Create a new account. Does not log in.
    pub async fn register(&self, username: &str, password: &str) -> Result<()> {
        self.client
            .register(username, password)
            .await
            .context("Registration failed")?;
        info!(username, "account registered");
        Ok(())
    }

    /// Authenticate, store the credential, and load the expense list.
    pub async fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let credential = self
            .client
            .login(username, password)
            .await
            .context("Login failed")?;
        self.session.login(credential);
        info!(username, "logged in");

        self.config.last_username = Some(username.to_string());
        if let Err(e) = self.config.save() {
            warn!(error = %e, "could not save config");
        }

        self.refresh().await
    }

    /// Clear the session and the locally held list.
    pub fn logout(&mut self) {
        self.session.logout();
        self.expenses.clear();
        info!("logged out");
    }

    /// Fetch the expense list with the current token and replace the local
    /// copy - unless a newer refresh started while this one was in flight,
    /// in which case the response is discarded.
    pub async fn refresh(&mut self) -> Result<()> {
        let ticket = self.list_requests.begin();
        let token = self.session.token();
        let list = self
            .client
            .fetch_expenses(token.as_deref())
            .await
            .context("Failed to fetch expenses")?;
        if !self.apply_expenses(&ticket, list) {
            debug!("discarding superseded expense list response");
        }
        Ok(())
    }

    /// Submit a new expense and merge the created record into the local
    /// list. No client-side validation: the fields go to the server as
    /// typed, and the server's word on the created record is final.
    pub async fn add(&mut self, description: &str, amount: &str) -> Result<Expense> {
        let token = self.session.token();
        let created = self
            .client
            .add_expense(token.as_deref(), description, amount)
            .await
            .context("Failed to add expense")?;
        debug!(id = created.id, "expense added");
        self.expenses.push(created.clone());
        Ok(created)
    }

    fn apply_expenses(&mut self, ticket: &Ticket, list: Vec<Expense>) -> bool {
        if self.list_requests.is_current(ticket) {
            self.expenses = list;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Credential;
    use crate::models::Amount;

    fn tracker() -> Tracker {
        Tracker::new(Config::default()).expect("Failed to build tracker")
    }

    fn expense(id: i64, description: &str) -> Expense {
        Expense {
            id,
            description: description.to_string(),
            amount: Amount::Text("1.00".to_string()),
        }
    }

    #[test]
    fn test_superseded_list_response_is_discarded() {
        let mut tracker = tracker();

        let older = tracker.list_requests.begin();
        let newer = tracker.list_requests.begin();

        // Newer response lands first.
        assert!(tracker.apply_expenses(&newer, vec![expense(2, "current")]));
        // Slow older response must not overwrite it.
        assert!(!tracker.apply_expenses(&older, vec![expense(1, "stale")]));

        assert_eq!(tracker.expenses().len(), 1);
        assert_eq!(tracker.expenses()[0].description, "current");
    }

    #[test]
    fn test_logout_clears_session_and_list() {
        let mut tracker = tracker();
        tracker.session.login(Credential::new("tok"));
        let ticket = tracker.list_requests.begin();
        tracker.apply_expenses(&ticket, vec![expense(1, "coffee")]);

        tracker.logout();

        assert!(!tracker.session().is_authenticated());
        assert!(tracker.expenses().is_empty());
    }

    #[test]
    fn test_fetch_does_not_touch_session() {
        let mut tracker = tracker();
        tracker.session.login(Credential::new("tok"));
        let ticket = tracker.list_requests.begin();
        tracker.apply_expenses(&ticket, vec![expense(1, "coffee")]);
        assert_eq!(tracker.session().token().as_deref(), Some("tok"));
    }
}
