pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::Settings;
pub use crate::core::{
    engine::{Engine, RunSummary},
    pipeline::TransformPipeline,
    source::{ConfiguredSource, JsonFileSource, SampleSource},
    transformer::DataTransformer,
};
pub use crate::domain::model::{InputItem, OutputItem, ProcessedRecord, TransformResult};
pub use crate::utils::error::{Result, TransformError};
