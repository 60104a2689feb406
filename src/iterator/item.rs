use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One element of a heterogeneous collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    Int(i64),
    Text(String),
    Bool(bool),
    Float(f64),
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Int(v) => write!(f, "{v}"),
            Item::Text(v) => write!(f, "{v}"),
            Item::Bool(v) => write!(f, "{v}"),
            Item::Float(v) => write!(f, "{v}"),
        }
    }
}

impl From<i64> for Item {
    fn from(v: i64) -> Self {
        Item::Int(v)
    }
}

impl From<&str> for Item {
    fn from(v: &str) -> Self {
        Item::Text(v.to_string())
    }
}

impl From<String> for Item {
    fn from(v: String) -> Self {
        Item::Text(v)
    }
}

impl From<bool> for Item {
    fn from(v: bool) -> Self {
        Item::Bool(v)
    }
}

impl From<f64> for Item {
    fn from(v: f64) -> Self {
        Item::Float(v)
    }
}
