//! Request-scoped context handed to factory invocations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request-scoped data forwarded verbatim to factory functions.
///
/// The resolver never inspects a context; it only hands it to factories and
/// middleware. Values are keyed by name, the way request parameters are
/// carried in configuration and over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(flatten)]
    values: HashMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value under the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.values.insert(key.into(), value)
    }

    /// Look a value up by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// True when the context carries no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
