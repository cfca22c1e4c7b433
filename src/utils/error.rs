use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Server answered {status} for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Response is missing the '{field}' field")]
    MissingField { field: String },

    #[error("Page has no input field '{id}'")]
    MissingInput { id: String },

    #[error("Unknown action: {name}")]
    UnknownAction { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl ClientError {
    /// CLI 結束碼
    pub fn exit_code(&self) -> i32 {
        match self {
            ClientError::Config { .. }
            | ClientError::InvalidConfigValue { .. }
            | ClientError::UnknownAction { .. } => 2,
            ClientError::Http(_) | ClientError::HttpStatus { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let config = ClientError::Config {
            message: "bad".to_string(),
        };
        assert_eq!(config.exit_code(), 2);

        let status = ClientError::HttpStatus {
            status: 500,
            url: "http://localhost/pi".to_string(),
        };
        assert_eq!(status.exit_code(), 3);
        assert_eq!(status.to_string(), "Server answered 500 for http://localhost/pi");

        let missing = ClientError::MissingField {
            field: "message".to_string(),
        };
        assert_eq!(missing.exit_code(), 1);
    }
}
