pub mod engine;
pub mod pipeline;
pub mod source;
pub mod transformer;

pub use crate::domain::model::{InputItem, OutputItem, ProcessedRecord, TransformResult};
pub use crate::domain::ports::{
    ConfigProvider, ItemSource, MultiplyPolicy, OutputFormat, Pipeline,
};
pub use crate::utils::error::Result;
