use crate::domain::model::{InputItem, TransformResult};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// How values other than plain numbers react to multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiplyPolicy {
    /// Strings and arrays repeat, booleans count as 0/1.
    #[default]
    Lenient,
    /// Only numbers can be multiplied.
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub trait ItemSource {
    fn read_items(&self) -> Result<Vec<InputItem>>;
}

pub trait ConfigProvider {
    fn label(&self) -> &str;
    fn multiplier(&self) -> &serde_json::Number;
    fn policy(&self) -> MultiplyPolicy;
    fn input_path(&self) -> Option<&str>;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<InputItem>>;
    fn transform(&self, items: Vec<InputItem>) -> Result<TransformResult>;
    fn load(&self, result: &TransformResult, out: &mut dyn Write) -> Result<()>;
}
