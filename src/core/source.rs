use crate::core::{InputItem, ItemSource};
use crate::utils::error::{Result, TransformError};
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;

/// The built-in four-item sample used when no input file is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource;

impl SampleSource {
    pub fn sample_values() -> Vec<Value> {
        vec![
            json!({"name": "item1", "value": 5}),
            json!(["a", "b", "c"]),
            json!(42),
            json!("hello"),
        ]
    }
}

impl ItemSource for SampleSource {
    fn read_items(&self) -> Result<Vec<InputItem>> {
        Ok(Self::sample_values()
            .into_iter()
            .map(InputItem::from)
            .collect())
    }
}

#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ItemSource for JsonFileSource {
    fn read_items(&self) -> Result<Vec<InputItem>> {
        tracing::debug!("Reading input items from: {}", self.path.display());

        let content = fs::read_to_string(&self.path).map_err(|e| TransformError::InputError {
            message: format!("cannot read {}: {}", self.path.display(), e),
        })?;
        let json_data: Value =
            serde_json::from_str(&content).map_err(|e| TransformError::InputError {
                message: format!("{} is not valid JSON: {}", self.path.display(), e),
            })?;

        // 頂層不是陣列時，包裝成單一項目
        let values = match json_data {
            Value::Array(values) => values,
            other => {
                tracing::debug!("Top-level value is not an array, wrapping it as one item");
                vec![other]
            }
        };

        Ok(values.into_iter().map(InputItem::from).collect())
    }
}

/// Either source, chosen at runtime from config.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Sample(SampleSource),
    File(JsonFileSource),
}

impl ConfiguredSource {
    pub fn from_input_path(path: Option<&str>) -> Self {
        match path {
            Some(path) => ConfiguredSource::File(JsonFileSource::new(path)),
            None => ConfiguredSource::Sample(SampleSource),
        }
    }
}

impl ItemSource for ConfiguredSource {
    fn read_items(&self) -> Result<Vec<InputItem>> {
        match self {
            ConfiguredSource::Sample(source) => source.read_items(),
            ConfiguredSource::File(source) => source.read_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_sample_source_shape() {
        let items = SampleSource.read_items().unwrap();
        let kinds: Vec<&str> = items.iter().map(InputItem::kind).collect();
        assert_eq!(kinds, vec!["record", "sequence", "scalar", "scalar"]);
    }

    #[test]
    fn test_json_file_source_reads_array() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"[{"name": "x"}, [1, 2], "s"]"#).unwrap();

        let items = JsonFileSource::new(file.path()).read_items().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[1], InputItem::Sequence(vec![json!(1), json!(2)]));
    }

    #[test]
    fn test_json_file_source_wraps_single_value() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"name": "only", "value": 2}"#).unwrap();

        let items = JsonFileSource::new(file.path()).read_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind(), "record");
    }

    #[test]
    fn test_json_file_source_errors() {
        let missing = JsonFileSource::new("/nonexistent/items.json").read_items();
        assert!(matches!(missing, Err(TransformError::InputError { .. })));

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let invalid = JsonFileSource::new(file.path()).read_items();
        assert!(matches!(invalid, Err(TransformError::InputError { .. })));
    }

    #[test]
    fn test_configured_source_selection() {
        assert!(matches!(
            ConfiguredSource::from_input_path(None),
            ConfiguredSource::Sample(_)
        ));
        assert!(matches!(
            ConfiguredSource::from_input_path(Some("items.json")),
            ConfiguredSource::File(_)
        ));
    }
}
