use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Canonical identifier of a backend record.
///
/// The backend sends ids as numbers in one place and as strings in another
/// (`3` vs `"3"`). Ids are turned into strings once, at ingestion, so every
/// comparison further down is a plain string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Synthetic id for records that arrive without one (position in the list).
    pub fn from_index(index: usize) -> Self {
        Self(index.to_string())
    }

    /// Canonicalize a raw JSON id. `null`, booleans, arrays and objects yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Self(i.to_string()))
                } else if let Some(u) = n.as_u64() {
                    Some(Self(u.to_string()))
                } else {
                    let f = n.as_f64()?;
                    if f.is_finite() && f.fract() == 0.0 {
                        Some(Self(format!("{}", f as i64)))
                    } else {
                        Some(Self(f.to_string()))
                    }
                }
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
