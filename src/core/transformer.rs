use crate::domain::model::{InputItem, OutputItem, ProcessedRecord};
use crate::domain::ports::MultiplyPolicy;
use crate::utils::error::{Result, TransformError};
use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

/// Upper bound on the length of a repeated string (bytes) or array (elements).
pub const MAX_REPEAT_LEN: usize = 1 << 20;

const SEQUENCE_FACTOR: i64 = 2;
const UNKNOWN_NAME: &str = "unknown";

/// Maps heterogeneous items to their transformed form.
///
/// Label and multiplier are fixed at construction; `process` never mutates
/// the transformer, so one instance can be reused across calls.
#[derive(Debug, Clone)]
pub struct DataTransformer {
    label: String,
    multiplier: Number,
    created_at: DateTime<Utc>,
    policy: MultiplyPolicy,
}

impl DataTransformer {
    pub fn new(label: impl Into<String>, multiplier: impl Into<Number>) -> Self {
        Self {
            label: label.into(),
            multiplier: multiplier.into(),
            created_at: Utc::now(),
            policy: MultiplyPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MultiplyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn multiplier(&self) -> &Number {
        &self.multiplier
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn policy(&self) -> MultiplyPolicy {
        self.policy
    }

    /// Transforms every item in order, one output per input.
    pub fn process(&self, items: &[InputItem]) -> Result<Vec<OutputItem>> {
        items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                tracing::trace!("Processing item {} ({})", idx, item.kind());
                self.process_item(item).inspect_err(|e| {
                    tracing::warn!("Item {} ({}) failed: {}", idx, item.kind(), e);
                })
            })
            .collect()
    }

    pub fn process_item(&self, item: &InputItem) -> Result<OutputItem> {
        match item {
            InputItem::Record(map) => self.process_record(map).map(OutputItem::Record),
            InputItem::Sequence(values) => {
                let factor = Number::from(SEQUENCE_FACTOR);
                values
                    .iter()
                    .map(|v| multiply(v, &factor, self.policy))
                    .collect::<Result<Vec<_>>>()
                    .map(OutputItem::Sequence)
            }
            InputItem::Scalar(value) => Ok(OutputItem::Scalar(format!(
                "{}_{}",
                scalar_text(value),
                self.label
            ))),
        }
    }

    fn process_record(&self, map: &Map<String, Value>) -> Result<ProcessedRecord> {
        // 只有欄位不存在才套用預設值，明確的 null 照原樣處理
        let name = map
            .get("name")
            .cloned()
            .unwrap_or_else(|| Value::String(UNKNOWN_NAME.to_string()));
        let base = map.get("value").cloned().unwrap_or_else(|| Value::from(0));

        Ok(ProcessedRecord {
            name,
            value: multiply(&base, &self.multiplier, self.policy)?,
            processed: true,
        })
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Multiplies `value` by `factor` under the given policy.
pub fn multiply(value: &Value, factor: &Number, policy: MultiplyPolicy) -> Result<Value> {
    let unsupported = |reason: &str| TransformError::UnsupportedMultiplication {
        kind: value_kind(value).to_string(),
        factor: factor.to_string(),
        reason: reason.to_string(),
    };

    match (value, policy) {
        (Value::Number(n), _) => multiply_numbers(n, factor).map(Value::Number),
        (_, MultiplyPolicy::Strict) => Err(unsupported("strict policy only multiplies numbers")),
        (Value::Bool(b), MultiplyPolicy::Lenient) => {
            multiply_numbers(&Number::from(i64::from(*b)), factor).map(Value::Number)
        }
        (Value::String(s), MultiplyPolicy::Lenient) => {
            let count = repeat_count(factor)
                .ok_or_else(|| unsupported("repetition needs an integer factor"))?;
            if !repeat_fits(s.len(), count) {
                return Err(unsupported("repeated string is too long"));
            }
            Ok(Value::String(s.repeat(count)))
        }
        (Value::Array(items), MultiplyPolicy::Lenient) => {
            let count = repeat_count(factor)
                .ok_or_else(|| unsupported("repetition needs an integer factor"))?;
            if items.is_empty() || count == 0 {
                return Ok(Value::Array(Vec::new()));
            }
            if !repeat_fits(items.len(), count) {
                return Err(unsupported("repeated array is too long"));
            }
            let mut repeated = Vec::with_capacity(items.len() * count);
            for _ in 0..count {
                repeated.extend(items.iter().cloned());
            }
            Ok(Value::Array(repeated))
        }
        (Value::Null | Value::Object(_), MultiplyPolicy::Lenient) => {
            Err(unsupported("value has no multiplication"))
        }
    }
}

fn multiply_numbers(left: &Number, right: &Number) -> Result<Number> {
    if let (Some(a), Some(b)) = (left.as_i64(), right.as_i64()) {
        if let Some(product) = a.checked_mul(b) {
            return Ok(Number::from(product));
        }
    }

    left.as_f64()
        .zip(right.as_f64())
        .and_then(|(a, b)| Number::from_f64(a * b))
        .ok_or_else(|| TransformError::NonFiniteProduct {
            left: left.to_string(),
            right: right.to_string(),
        })
}

// 負數次數視為 0，結果為空
fn repeat_count(factor: &Number) -> Option<usize> {
    factor
        .as_i64()
        .map(|n| usize::try_from(n).unwrap_or(0))
        .or_else(|| factor.as_u64().map(|n| usize::try_from(n).unwrap_or(usize::MAX)))
}

fn repeat_fits(len: usize, count: usize) -> bool {
    len.checked_mul(count)
        .is_some_and(|total| total <= MAX_REPEAT_LEN)
}
