use crate::core::transformer::DataTransformer;
use crate::core::{ConfigProvider, InputItem, ItemSource, OutputFormat, Pipeline, TransformResult};
use crate::utils::error::Result;
use std::io::Write;

pub struct TransformPipeline<S: ItemSource, C: ConfigProvider> {
    source: S,
    config: C,
    transformer: DataTransformer,
}

impl<S: ItemSource, C: ConfigProvider> TransformPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        let transformer = DataTransformer::new(config.label(), config.multiplier().clone())
            .with_policy(config.policy());
        Self {
            source,
            config,
            transformer,
        }
    }

    pub fn transformer(&self) -> &DataTransformer {
        &self.transformer
    }
}

impl<S: ItemSource, C: ConfigProvider> Pipeline for TransformPipeline<S, C> {
    fn extract(&self) -> Result<Vec<InputItem>> {
        self.source.read_items()
    }

    fn transform(&self, items: Vec<InputItem>) -> Result<TransformResult> {
        tracing::debug!(
            "Transforming with label={}, multiplier={}, policy={:?}",
            self.transformer.label(),
            self.transformer.multiplier(),
            self.transformer.policy()
        );

        Ok(TransformResult {
            label: self.transformer.label().to_string(),
            created_at: self.transformer.created_at(),
            results: self.transformer.process(&items)?,
        })
    }

    fn load(&self, result: &TransformResult, out: &mut dyn Write) -> Result<()> {
        match self.config.output_format() {
            OutputFormat::Text => write_text_report(result, out)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, result)?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

pub fn write_text_report(result: &TransformResult, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Processing results for {}:", result.label)?;
    for (idx, item) in result.results.iter().enumerate() {
        writeln!(out, "  [{}]: {}", idx, item)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::source::SampleSource;
    use crate::core::MultiplyPolicy;
    use crate::utils::error::TransformError;
    use serde_json::{json, Number};

    struct MockConfig {
        label: String,
        multiplier: Number,
        policy: MultiplyPolicy,
        format: OutputFormat,
    }

    impl MockConfig {
        fn new(format: OutputFormat) -> Self {
            Self {
                label: "test".to_string(),
                multiplier: Number::from(10),
                policy: MultiplyPolicy::Lenient,
                format,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn label(&self) -> &str {
            &self.label
        }

        fn multiplier(&self) -> &Number {
            &self.multiplier
        }

        fn policy(&self) -> MultiplyPolicy {
            self.policy
        }

        fn input_path(&self) -> Option<&str> {
            None
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }
    }

    #[test]
    fn test_text_report_for_sample() {
        let pipeline = TransformPipeline::new(SampleSource, MockConfig::new(OutputFormat::Text));

        let items = pipeline.extract().unwrap();
        let result = pipeline.transform(items).unwrap();
        let mut out = Vec::new();
        pipeline.load(&result, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Processing results for test:\n\
             \x20 [0]: {\"name\":\"item1\",\"value\":50,\"processed\":true}\n\
             \x20 [1]: [\"aa\",\"bb\",\"cc\"]\n\
             \x20 [2]: 42_test\n\
             \x20 [3]: hello_test\n"
        );
    }

    #[test]
    fn test_json_report_for_sample() {
        let pipeline = TransformPipeline::new(SampleSource, MockConfig::new(OutputFormat::Json));

        let items = pipeline.extract().unwrap();
        let result = pipeline.transform(items).unwrap();
        let mut out = Vec::new();
        pipeline.load(&result, &mut out).unwrap();

        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["label"], json!("test"));
        assert!(report["created_at"].is_string());
        assert_eq!(
            report["results"],
            json!([
                {"name": "item1", "value": 50, "processed": true},
                ["aa", "bb", "cc"],
                "42_test",
                "hello_test"
            ])
        );
    }

    #[test]
    fn test_strict_policy_fails_on_sample() {
        let mut config = MockConfig::new(OutputFormat::Text);
        config.policy = MultiplyPolicy::Strict;
        let pipeline = TransformPipeline::new(SampleSource, config);

        let items = pipeline.extract().unwrap();
        let err = pipeline.transform(items).unwrap_err();
        assert!(matches!(err, TransformError::UnsupportedMultiplication { .. }));
    }
}
