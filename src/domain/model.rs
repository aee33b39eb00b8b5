use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One heterogeneous input item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum InputItem {
    Record(Map<String, Value>),
    Sequence(Vec<Value>),
    Scalar(Value),
}

impl From<Value> for InputItem {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => InputItem::Record(map),
            Value::Array(items) => InputItem::Sequence(items),
            other => InputItem::Scalar(other),
        }
    }
}

impl InputItem {
    pub fn kind(&self) -> &'static str {
        match self {
            InputItem::Record(_) => "record",
            InputItem::Sequence(_) => "sequence",
            InputItem::Scalar(_) => "scalar",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedRecord {
    pub name: Value,
    pub value: Value,
    pub processed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputItem {
    Record(ProcessedRecord),
    Sequence(Vec<Value>),
    Scalar(String),
}

/// Records and sequences render as compact JSON; scalar results render as the raw string.
impl fmt::Display for OutputItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputItem::Scalar(text) => f.write_str(text),
            other => {
                let json = serde_json::to_string(other).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransformResult {
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub results: Vec<OutputItem>,
}
