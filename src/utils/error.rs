use thiserror::Error;

#[derive(Error, Debug)]
pub enum SujetsError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    StatusError { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SujetsError {
    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            SujetsError::ApiError(e) if e.is_connect() => {
                "Could not reach the topics server".to_string()
            }
            SujetsError::ApiError(e) if e.is_timeout() => {
                "The topics server did not answer in time".to_string()
            }
            SujetsError::ApiError(_) => "The request to the topics server failed".to_string(),
            SujetsError::StatusError { status } => {
                format!("The topics server rejected the request (HTTP {})", status)
            }
            SujetsError::IoError(e) => format!("Local I/O failure: {}", e),
            SujetsError::SerializationError(_) => {
                "The topics server sent a response that is not a topic list".to_string()
            }
            SujetsError::UrlError(e) => format!("Invalid server URL: {}", e),
            SujetsError::ConfigError { message } => format!("Configuration problem: {}", message),
            SujetsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SujetsError::ApiError(_) => "Check that the server is running and --base-url is correct",
            SujetsError::StatusError { .. } => "Inspect the server logs for the rejected request",
            SujetsError::IoError(_) => "Check file permissions and paths",
            SujetsError::SerializationError(_) => {
                "Make sure --topics-path points at the JSON topics endpoint"
            }
            SujetsError::UrlError(_) => "Use an absolute http:// or https:// URL",
            SujetsError::ConfigError { .. } | SujetsError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SujetsError>;
