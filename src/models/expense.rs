use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};

/// A single expense record as stored server-side.
///
/// The server assigns `id`; the client never creates one locally. The API is
/// loose about numeric types, so `id` accepts a number or a numeric string
/// and `amount` is kept exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub description: String,
    pub amount: Amount,
}

/// Monetary value as the API sends it: either a JSON number or a string
/// like `"3.50"`. No currency or precision contract exists server-side, so
/// the value is preserved verbatim rather than normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Amount {
    fn from(s: &str) -> Self {
        Amount::Text(s.to_string())
    }
}

impl From<f64> for Amount {
    fn from(n: f64) -> Self {
        Amount::Number(n)
    }
}

/// Wire shape of the `/getExpenses` success body.
#[derive(Debug, Clone, Deserialize)]
pub struct SpendingsResponse {
    pub spendings: Vec<Expense>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Int(n) => Ok(n),
        RawId::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expense id is not numeric: {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_expense_with_string_amount() {
        let json = r#"{"id": 1, "description": "coffee", "amount": "3.50"}"#;
        let expense: Expense = serde_json::from_str(json).expect("Failed to parse expense");
        assert_eq!(expense.id, 1);
        assert_eq!(expense.description, "coffee");
        assert_eq!(expense.amount, Amount::Text("3.50".to_string()));
        assert_eq!(expense.amount.to_string(), "3.50");
    }

    #[test]
    fn test_parse_expense_with_numeric_amount() {
        let json = r#"{"id": 7, "description": "lunch", "amount": 12.5}"#;
        let expense: Expense = serde_json::from_str(json).expect("Failed to parse expense");
        assert_eq!(expense.amount, Amount::Number(12.5));
        assert_eq!(expense.amount.to_string(), "12.5");
    }

    #[test]
    fn test_parse_expense_with_string_id() {
        let json = r#"{"id": "42", "description": "bus", "amount": "2"}"#;
        let expense: Expense = serde_json::from_str(json).expect("Failed to parse expense");
        assert_eq!(expense.id, 42);
    }

    #[test]
    fn test_parse_expense_rejects_non_numeric_id() {
        let json = r#"{"id": "abc", "description": "bus", "amount": "2"}"#;
        assert!(serde_json::from_str::<Expense>(json).is_err());
    }

    #[test]
    fn test_parse_spendings_response() {
        let json = r#"{"spendings": [
            {"id": 1, "description": "coffee", "amount": "3.50"},
            {"id": 2, "description": "groceries", "amount": 41.2}
        ]}"#;
        let resp: SpendingsResponse =
            serde_json::from_str(json).expect("Failed to parse spendings response");
        assert_eq!(resp.spendings.len(), 2);
        assert_eq!(resp.spendings[1].description, "groceries");
    }

    #[test]
    fn test_parse_empty_spendings() {
        let resp: SpendingsResponse =
            serde_json::from_str(r#"{"spendings": []}"#).expect("Failed to parse empty list");
        assert!(resp.spendings.is_empty());
    }

    #[test]
    fn test_amount_round_trips_as_received() {
        let text: Amount = serde_json::from_str(r#""3.50""#).unwrap();
        assert_eq!(serde_json::to_string(&text).unwrap(), r#""3.50""#);

        let number: Amount = serde_json::from_str("3.5").unwrap();
        assert_eq!(serde_json::to_string(&number).unwrap(), "3.5");
    }
}
