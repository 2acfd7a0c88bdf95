use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single typed attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeValue {
    /// 64-bit float, used for timestamps.
    Double(f64),
    /// 32-bit float, used for rates and multipliers.
    Float(f32),
    /// Integer value.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Free-form text.
    Text(String),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Double(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v}"),
        }
    }
}

/// String-keyed attribute storage with typed get-with-default accessors.
///
/// Owned and persisted by the host; the buff core only reads window
/// parameters from it. A missing key or a value of the wrong shape yields
/// the caller's default, never an error. Numeric gets coerce across the
/// numeric variants, since the granting logic and the persistence layer do
/// not always agree on width.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttributeMap {
    values: HashMap<String, AttributeValue>,
}

impl AttributeMap {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored attributes.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read a key as `f64`, falling back to `default`.
    pub fn get_double(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(AttributeValue::Double(v)) => *v,
            Some(AttributeValue::Float(v)) => f64::from(*v),
            Some(AttributeValue::Int(v)) => *v as f64,
            _ => default,
        }
    }

    /// Read a key as `f32`, falling back to `default`.
    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.values.get(key) {
            Some(AttributeValue::Float(v)) => *v,
            Some(AttributeValue::Double(v)) => *v as f32,
            Some(AttributeValue::Int(v)) => *v as f32,
            _ => default,
        }
    }

    /// Store an `f64` under `key`, replacing any prior value.
    pub fn set_double(&mut self, key: impl Into<String>, value: f64) {
        self.values.insert(key.into(), AttributeValue::Double(value));
    }

    /// Store an `f32` under `key`, replacing any prior value.
    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.values.insert(key.into(), AttributeValue::Float(value));
    }

    /// Store an arbitrary value under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.values.insert(key.into(), value);
    }

    /// Remove `key`, returning its prior value if present.
    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.values.remove(key)
    }
}
