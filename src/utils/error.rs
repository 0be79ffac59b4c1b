use thiserror::Error;

#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("No renderer registered for trigger '{trigger}'")]
    UnknownTrigger { trigger: String },

    #[error("Cart source unavailable: {message}")]
    SourceError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FragmentError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        FragmentError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FragmentError::InvalidInput { .. } | FragmentError::UnknownTrigger { .. } => {
                ErrorCategory::Input
            }
            FragmentError::ConfigError { .. }
            | FragmentError::ConfigValidationError { .. }
            | FragmentError::InvalidConfigValueError { .. }
            | FragmentError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FragmentError::IoError(_)
            | FragmentError::SerializationError(_)
            | FragmentError::SourceError { .. } => ErrorCategory::Environment,
        }
    }

    /// A rejected fragment only drops that fragment, so input errors rank lowest.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FragmentError::InvalidInput { .. } | FragmentError::UnknownTrigger { .. } => {
                ErrorSeverity::Low
            }
            FragmentError::SerializationError(_) => ErrorSeverity::Medium,
            FragmentError::ConfigError { .. }
            | FragmentError::ConfigValidationError { .. }
            | FragmentError::InvalidConfigValueError { .. }
            | FragmentError::MissingConfigError { .. } => ErrorSeverity::High,
            FragmentError::IoError(_) | FragmentError::SourceError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FragmentError::InvalidInput { .. } => {
                "Check that item_count is not negative and cart_url is set"
            }
            FragmentError::UnknownTrigger { .. } => {
                "Register a renderer for the trigger or remove it from the request"
            }
            FragmentError::IoError(_) => "Make sure the file exists and is readable",
            FragmentError::SerializationError(_) => "Check the snapshot JSON structure",
            FragmentError::ConfigError { .. }
            | FragmentError::ConfigValidationError { .. }
            | FragmentError::InvalidConfigValueError { .. }
            | FragmentError::MissingConfigError { .. } => {
                "Review the TOML configuration file and fix the reported field"
            }
            FragmentError::SourceError { .. } => {
                "Make sure the commerce engine is reachable before rendering fragments"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FragmentError::InvalidInput { field, .. } => {
                format!("The cart snapshot has an invalid '{}' value", field)
            }
            FragmentError::IoError(e) => format!("Could not read input: {}", e),
            FragmentError::SerializationError(e) => {
                format!("Could not parse cart snapshot: {}", e)
            }
            other => other.to_string(),
        }
    }
}

/// Process exit code for the CLI: 1 when the configuration or arguments are wrong,
/// 2 when the snapshot or its source is.
pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::High => 1,
        ErrorSeverity::Low | ErrorSeverity::Medium | ErrorSeverity::Critical => 2,
    }
}

pub type Result<T> = std::result::Result<T, FragmentError>;
