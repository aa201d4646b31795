//! API client for communicating with the expense tracker REST API.
//!
//! This module provides the `ApiClient` struct for authenticating and for
//! fetching and submitting expense records.

use reqwest::{header, Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::auth::Credential;
use crate::models::{Expense, SpendingsResponse};

use super::error::UNKNOWN_ERROR;
use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Endpoint paths. The backend uses verb-style paths rather than REST nouns.
const LOGIN_PATH: &str = "/login";
const REGISTER_PATH: &str = "/register";
const LIST_EXPENSES_PATH: &str = "/getExpenses";
const ADD_EXPENSE_PATH: &str = "/addExpense";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Serialize)]
struct CredentialsBody<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct AddExpenseBody<'a> {
    description: &'a str,
    amount: &'a str,
}

/// API client for the expense tracker backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Authenticate and return a credential for subsequent requests.
    pub async fn login(&self, username: &str, password: &str) -> Result<Credential, ApiError> {
        let url = format!("{}{}", self.base_url, LOGIN_PATH);
        let body = CredentialsBody { username, password };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = %status, "login response received");

        let parsed: TokenResponse = interpret_body(status, &text)?;
        Ok(Credential::new(parsed.token))
    }

    /// Create a new account. The confirmation body is implementation-defined
    /// and discarded; only success or failure is reported.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, REGISTER_PATH);
        let body = CredentialsBody { username, password };

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        debug!(status = %status, "register response received");

        let _: Value = interpret_body(status, &text)?;
        Ok(())
    }

    /// Fetch the caller's expense list.
    ///
    /// An absent token is still sent (as an empty header value); the service
    /// answers with its own unauthenticated error rather than this client
    /// failing a local precondition. Never mutates session state.
    pub async fn fetch_expenses(&self, token: Option<&str>) -> Result<Vec<Expense>, ApiError> {
        let url = format!("{}{}", self.base_url, LIST_EXPENSES_PATH);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, auth_header_value(token)?)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(status = %status, bytes = text.len(), "expense list response received");

        let parsed: SpendingsResponse = interpret_body(status, &text)?;
        Ok(parsed.spendings)
    }

    /// Submit a new expense and return the record the server created.
    ///
    /// Not idempotent: the request carries no client-assigned identifier, so
    /// a retried call can create a duplicate record server-side. Retry policy
    /// belongs to the caller. Never mutates session state.
    pub async fn add_expense(
        &self,
        token: Option<&str>,
        description: &str,
        amount: &str,
    ) -> Result<Expense, ApiError> {
        let url = format!("{}{}", self.base_url, ADD_EXPENSE_PATH);
        let body = AddExpenseBody {
            description,
            amount,
        };

        let response = self
            .client
            .post(&url)
            .header(header::AUTHORIZATION, auth_header_value(token)?)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(status = %status, "add expense response received");

        interpret_body(status, &text)
    }
}

fn auth_header_value(token: Option<&str>) -> Result<header::HeaderValue, ApiError> {
    header::HeaderValue::from_str(token.unwrap_or(""))
        .map_err(|e| ApiError::Parse(format!("token is not a valid header value: {}", e)))
}

/// Interpret a finished round trip into a typed result.
///
/// Checks run in a fixed order: an empty body wins over everything, then
/// JSON validity, then the HTTP status, then the expected shape. Both the
/// read and write paths go through here so empty/non-JSON bodies are
/// guarded uniformly.
fn interpret_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    if body.trim().is_empty() {
        return Err(ApiError::EmptyBody);
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;

    if !status.is_success() {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR)
            .to_string();
        return Err(ApiError::Service { status, message });
    }

    serde_json::from_value(value).map_err(|e| ApiError::Parse(e.to_string()))
}
