//! Error types and handling for `Citycast` application

use thiserror::Error;

/// Main error type for the `Citycast` application
#[derive(Error, Debug)]
pub enum CitycastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl CitycastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CitycastError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            CitycastError::Api { .. } => {
                "Unable to reach an upstream service. Please check your internet connection."
                    .to_string()
            }
            CitycastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            CitycastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            CitycastError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = CitycastError::config("missing photo access key");
        assert!(matches!(config_err, CitycastError::Config { .. }));

        let api_err = CitycastError::api("connection failed");
        assert!(matches!(api_err, CitycastError::Api { .. }));

        let validation_err = CitycastError::validation("unknown city key");
        assert!(matches!(validation_err, CitycastError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = CitycastError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let api_err = CitycastError::api("test");
        assert!(api_err.user_message().contains("Unable to reach"));

        let validation_err = CitycastError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: CitycastError = io_err.into();
        assert!(matches!(app_err, CitycastError::Io { .. }));
    }
}
