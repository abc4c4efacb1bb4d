use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolkitError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid document '{value}': {reason}")]
    InvalidDocument { value: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Input,
    System,
}

impl ToolkitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ToolkitError::HttpError(_) => ErrorCategory::Network,
            ToolkitError::ConfigError { .. } | ToolkitError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ToolkitError::InvalidDocument { .. } => ErrorCategory::Input,
            ToolkitError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ToolkitError::HttpError(_) => "Could not reach the remote service".to_string(),
            ToolkitError::InvalidDocument { value, reason } => {
                format!("'{}' is not a valid CPF/CNPJ ({})", value, reason)
            }
            ToolkitError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check your network connection and the lookup endpoint",
            ErrorCategory::Configuration => "Review the configuration file and CLI flags",
            ErrorCategory::Input => "Check the digits you typed and try again",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
