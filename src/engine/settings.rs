//! Per-encoder settings storage.
//!
//! `SettingsBag` keeps two layers: values the user (or a config file) set
//! explicitly, and defaults seeded by a handler. Reads fall through from the
//! user layer to the default layer, so a seeded default is visible without
//! ever being written as a user value.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A typed scalar stored under a settings key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::String(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsBag {
    #[serde(flatten)]
    values: BTreeMap<String, Value>,

    #[serde(skip)]
    defaults: BTreeMap<String, Value>,
}

impl SettingsBag {
    pub fn new() -> Self {
        Self::default()
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        self.values.get(key).or_else(|| self.defaults.get(key))
    }

    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.values
            .insert(key.to_string(), Value::String(value.into()));
    }

    pub fn set_default_string(&mut self, key: &str, value: impl Into<String>) {
        self.defaults
            .insert(key.to_string(), Value::String(value.into()));
    }

    /// String value for `key`, or "" when neither layer holds a string
    pub fn get_string(&self, key: &str) -> &str {
        match self.lookup(key) {
            Some(Value::String(s)) => s.as_str(),
            _ => "",
        }
    }

    pub fn has_user_value(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Effective key/value view (user values over defaults), sorted by key
    pub fn effective(&self) -> BTreeMap<&str, &Value> {
        let mut merged: BTreeMap<&str, &Value> = self
            .defaults
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        for (k, v) in &self.values {
            merged.insert(k.as_str(), v);
        }
        merged
    }
}
