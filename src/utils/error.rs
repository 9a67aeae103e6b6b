use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamsenseError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern compilation error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Protocol error: {message}")]
    ProtocolError { message: String },
}

impl SpamsenseError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            SpamsenseError::IoError(e) => format!("Could not read or write a file: {}", e),
            SpamsenseError::SerializationError(e) => format!("Could not encode JSON output: {}", e),
            SpamsenseError::PatternError(e) => format!("Internal rule table is broken: {}", e),
            SpamsenseError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            SpamsenseError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}' ({})", value, field, reason),
            SpamsenseError::ProtocolError { message } => {
                format!("Malformed request from the tool host: {}", message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SpamsenseError::IoError(_) => "Check that the path exists and is readable",
            SpamsenseError::SerializationError(_) => "Report this as a bug with the offending input",
            SpamsenseError::PatternError(_) => "Report this as a bug; the built-in patterns failed to compile",
            SpamsenseError::ConfigValidationError { .. } => {
                "Make sure the config file is valid TOML and matches the documented layout"
            }
            SpamsenseError::InvalidConfigValueError { .. } => {
                "Area codes must be exactly three digits and env var names must not be empty"
            }
            SpamsenseError::ProtocolError { .. } => {
                "Send one JSON-RPC 2.0 object per line with a 'method' field"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SpamsenseError>;
