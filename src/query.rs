//! Query string construction for ClickUp endpoints.
//!
//! ClickUp expects repeated array keys (`statuses[]=open&statuses[]=done`),
//! which `serde_urlencoded` cannot produce from a `Vec`. Query types convert
//! themselves into [`QueryPairs`] instead, and the client hands the pairs to
//! reqwest as-is.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An ordered list of query string key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    /// Create an empty set of pairs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single pair.
    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.0.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a pair only when the value is present.
    pub fn push_opt<V: ToString>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.push(key, v);
        }
        self
    }

    /// Append a timestamp as unix milliseconds when present.
    pub fn push_millis(&mut self, key: &str, value: Option<DateTime<Utc>>) -> &mut Self {
        self.push_opt(key, value.map(|v| v.timestamp_millis()))
    }

    /// Append `key[]=v` for every value.
    pub fn push_array<V: ToString>(&mut self, key: &str, values: &[V]) -> &mut Self {
        let key = format!("{key}[]");
        for v in values {
            self.0.push((key.clone(), v.to_string()));
        }
        self
    }

    /// Whether no pairs have been added.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the first value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values stored under a key, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Borrow the raw pairs.
    pub fn as_slice(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Types that can be sent as a ClickUp query string.
pub trait ToQuery {
    /// Convert into ordered query pairs.
    fn to_query(&self) -> QueryPairs;
}

impl ToQuery for QueryPairs {
    fn to_query(&self) -> QueryPairs {
        self.clone()
    }
}
