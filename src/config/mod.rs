pub mod toml_config;

use crate::core::{ConfigProvider, MultiplyPolicy, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde_json::Number;
use toml_config::TomlConfig;

pub const DEFAULT_LABEL: &str = "test";
pub const DEFAULT_MULTIPLIER: i64 = 10;

/// Fully resolved settings: defaults, then the TOML file, then flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub label: String,
    pub multiplier: Number,
    pub policy: MultiplyPolicy,
    pub input_path: Option<String>,
    pub output_format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            multiplier: Number::from(DEFAULT_MULTIPLIER),
            policy: MultiplyPolicy::default(),
            input_path: None,
            output_format: OutputFormat::default(),
        }
    }
}

impl Settings {
    pub fn apply_toml(mut self, file: &TomlConfig) -> Self {
        if let Some(label) = &file.transformer.label {
            self.label = label.clone();
        }
        if let Some(multiplier) = &file.transformer.multiplier {
            self.multiplier = multiplier.clone();
        }
        if let Some(policy) = file.transformer.policy {
            self.policy = policy;
        }
        if let Some(path) = &file.input.path {
            self.input_path = Some(path.clone());
        }
        if let Some(format) = file.output.format {
            self.output_format = format;
        }
        self
    }
}

impl ConfigProvider for Settings {
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
        self.input_path.as_deref()
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("transformer.label", &self.label)?;
        validation::validate_finite_number("transformer.multiplier", &self.multiplier)?;
        if let Some(path) = &self.input_path {
            validation::validate_path("input.path", path)?;
            validation::validate_file_extension("input.path", path, &["json"])?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::{Settings, TomlConfig};
    use crate::core::{MultiplyPolicy, OutputFormat};
    use crate::utils::error::Result;
    use clap::Parser;
    use serde_json::Number;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "data-transformer")]
    #[command(about = "Transforms records, sequences and scalars and prints the results")]
    pub struct CliConfig {
        /// TOML config file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Label appended to scalar items
        #[arg(long)]
        pub label: Option<String>,

        /// Factor applied to record values
        #[arg(long, value_parser = parse_multiplier, allow_negative_numbers = true)]
        pub multiplier: Option<Number>,

        /// Only multiply numbers; fail on strings, arrays and booleans
        #[arg(long)]
        pub strict: bool,

        /// JSON file with the items to transform (defaults to the built-in sample)
        #[arg(short, long)]
        pub input: Option<String>,

        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON on stderr")]
        pub log_json: bool,
    }

    impl CliConfig {
        pub fn resolve(&self) -> Result<Settings> {
            let mut settings = Settings::default();

            if let Some(path) = &self.config {
                tracing::info!("📁 Loading configuration from: {}", path);
                settings = settings.apply_toml(&TomlConfig::from_file(path)?);
            }

            // 命令列參數優先於設定檔
            if let Some(label) = &self.label {
                settings.label = label.clone();
            }
            if let Some(multiplier) = &self.multiplier {
                settings.multiplier = multiplier.clone();
            }
            if self.strict {
                settings.policy = MultiplyPolicy::Strict;
            }
            if let Some(input) = &self.input {
                settings.input_path = Some(input.clone());
            }
            if let Some(format) = self.format {
                settings.output_format = format;
            }

            Ok(settings)
        }
    }

    fn parse_multiplier(raw: &str) -> std::result::Result<Number, String> {
        if let Ok(n) = raw.parse::<i64>() {
            return Ok(Number::from(n));
        }
        raw.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .ok_or_else(|| format!("'{}' is not a finite number", raw))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::Write;
        use tempfile::NamedTempFile;

        #[test]
        fn test_no_arguments_gives_defaults() {
            let cli = CliConfig::try_parse_from(["data-transformer"]).unwrap();
            let settings = cli.resolve().unwrap();
            assert_eq!(settings, Settings::default());
            assert_eq!(settings.label, "test");
            assert_eq!(settings.multiplier, Number::from(10));
        }

        #[test]
        fn test_flags_override_config_file() {
            let mut file = NamedTempFile::new().unwrap();
            file.write_all(
                b"[transformer]\nlabel = \"from-file\"\nmultiplier = 3\n\n[output]\nformat = \"json\"\n",
            )
            .unwrap();
            let path = file.path().to_str().unwrap().to_string();

            let cli = CliConfig::try_parse_from([
                "data-transformer",
                "--config",
                &path,
                "--multiplier",
                "-1.5",
                "--strict",
            ])
            .unwrap();
            let settings = cli.resolve().unwrap();

            assert_eq!(settings.label, "from-file");
            assert_eq!(settings.multiplier.as_f64(), Some(-1.5));
            assert_eq!(settings.policy, MultiplyPolicy::Strict);
            assert_eq!(settings.output_format, OutputFormat::Json);
        }

        #[test]
        fn test_rejects_non_numeric_multiplier() {
            assert!(CliConfig::try_parse_from(["data-transformer", "--multiplier", "ten"]).is_err());
        }
    }
}
