use crate::core::Pipeline;
use crate::utils::error::{Result, TransformError};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub items_in: usize,
    pub items_out: usize,
}

pub struct Engine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> Engine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub fn run(&self, out: &mut dyn Write) -> Result<RunSummary> {
        tracing::info!("Starting transform run");

        // Extract
        let items = self.pipeline.extract()?;
        let items_in = items.len();
        tracing::info!("Extracted {} items", items_in);

        // Transform
        let result = self.pipeline.transform(items)?;
        let items_out = result.results.len();
        if items_out != items_in {
            return Err(TransformError::ProcessingError {
                message: format!("expected {} outputs, got {}", items_in, items_out),
            });
        }
        tracing::info!("Transformed {} items", items_out);

        // Load
        self.pipeline.load(&result, out)?;
        tracing::info!("✅ Results written");

        Ok(RunSummary {
            items_in,
            items_out,
        })
    }
}
