use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input error: {message}")]
    InputError { message: String },

    #[error("Cannot multiply {kind} by {factor}: {reason}")]
    UnsupportedMultiplication {
        kind: String,
        factor: String,
        reason: String,
    },

    #[error("Product of {left} and {right} is not a finite number")]
    NonFiniteProduct { left: String, right: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Input,
    Transform,
    Output,
}

impl TransformError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TransformError::ConfigError { .. }
            | TransformError::InvalidConfigValueError { .. } => ErrorCategory::Config,
            TransformError::InputError { .. } => ErrorCategory::Input,
            TransformError::UnsupportedMultiplication { .. }
            | TransformError::NonFiniteProduct { .. }
            | TransformError::ProcessingError { .. } => ErrorCategory::Transform,
            TransformError::IoError(_) | TransformError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    /// 依錯誤類別決定程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 2,
            ErrorCategory::Input => 3,
            ErrorCategory::Transform => 4,
            ErrorCategory::Output => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Config => "Check the config file and command-line flags",
            ErrorCategory::Input => "Make sure the input file exists and contains valid JSON",
            ErrorCategory::Transform => {
                "Use the lenient policy or remove values that cannot be multiplied"
            }
            ErrorCategory::Output => "Check that stdout is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
