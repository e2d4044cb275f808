use thiserror::Error;

#[derive(Error, Debug)]
pub enum FaunaError {
    #[error("Command unknown")]
    UnknownCommand,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Dataset error ({path}): {message}")]
    DatasetError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad configuration, fixable without touching the data.
    Medium,
    /// The invocation itself cannot be served.
    High,
    /// Dataset or I/O failure.
    Critical,
}

impl FaunaError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FaunaError::UnknownCommand => ErrorSeverity::High,
            FaunaError::ConfigError { .. } | FaunaError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
            FaunaError::IoError(_)
            | FaunaError::SerializationError(_)
            | FaunaError::DatasetError { .. } => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FaunaError::UnknownCommand => "Pass --filter=<pattern> or --count",
            FaunaError::IoError(_) => "Check that the dataset file exists and is readable",
            FaunaError::SerializationError(_) | FaunaError::DatasetError { .. } => {
                "Dataset must be a JSON array of countries with nested people and animals"
            }
            FaunaError::ConfigError { .. } | FaunaError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command line options"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FaunaError::UnknownCommand => {
                "Command unknown: no --filter or --count option given".to_string()
            }
            FaunaError::DatasetError { path, .. } => {
                format!("Could not load dataset from '{}'", path)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FaunaError>;
