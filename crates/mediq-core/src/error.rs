use thiserror::Error;

/// Core error types for MedIQ operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid confidence value: {0} (must be within [0, 1])")]
    InvalidConfidence(f64),

    #[error("Invalid risk level: {0}")]
    InvalidRiskLevel(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Time parsing error: {0}")]
    TimeError(#[from] time::error::Parse),

    #[error("Invalid analysis result: {message}")]
    InvalidResult { message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Create a new InvalidRiskLevel error
    pub fn invalid_risk_level(level: impl Into<String>) -> Self {
        Self::InvalidRiskLevel(level.into())
    }

    /// Create a new InvalidTimestamp error
    pub fn invalid_timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp(value.into())
    }

    /// Create a new InvalidResult error
    pub fn invalid_result(message: impl Into<String>) -> Self {
        Self::InvalidResult {
            message: message.into(),
        }
    }

    /// Create a new Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Check if this error is a client error (4xx category)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfidence(_)
                | Self::InvalidRiskLevel(_)
                | Self::InvalidTimestamp(_)
                | Self::InvalidResult { .. }
                | Self::JsonError(_)
        )
    }

    /// Check if this error is a server error (5xx category)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::TimeError(_))
    }

    /// Get error category for logging/monitoring
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidConfidence(_) | Self::InvalidRiskLevel(_) | Self::InvalidResult { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidTimestamp(_) | Self::TimeError(_) => ErrorCategory::Time,
            Self::JsonError(_) => ErrorCategory::Serialization,
            Self::Configuration(_) => ErrorCategory::Configuration,
        }
    }
}

/// Error categories for monitoring and classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Time,
    Serialization,
    Configuration,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation => write!(f, "validation"),
            Self::Time => write!(f, "time"),
            Self::Serialization => write!(f, "serialization"),
            Self::Configuration => write!(f, "configuration"),
        }
    }
}

/// Convenience result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CoreError::invalid_risk_level("severe");
        assert_eq!(err.to_string(), "Invalid risk level: severe");
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_invalid_confidence_error() {
        let err = CoreError::InvalidConfidence(1.5);
        assert_eq!(
            err.to_string(),
            "Invalid confidence value: 1.5 (must be within [0, 1])"
        );
        assert!(err.is_client_error());
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn test_json_error_conversion() {
        let invalid_json = "{ invalid json }";
        let json_err: serde_json::Error =
            serde_json::from_str::<serde_json::Value>(invalid_json).unwrap_err();
        let core_err: CoreError = json_err.into();

        assert!(matches!(core_err, CoreError::JsonError(_)));
        assert!(core_err.is_client_error());
        assert_eq!(core_err.category(), ErrorCategory::Serialization);
    }

    #[test]
    fn test_configuration_error() {
        let err = CoreError::configuration("missing model path");
        assert_eq!(err.to_string(), "Configuration error: missing model path");
        assert!(err.is_server_error());
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_client_vs_server_error_classification() {
        assert!(CoreError::invalid_risk_level("bad").is_client_error());
        assert!(CoreError::invalid_timestamp("bad-ts").is_client_error());
        assert!(CoreError::invalid_result("empty prediction map").is_client_error());

        assert!(CoreError::configuration("config error").is_server_error());

        // Mutual exclusivity
        let client_err = CoreError::invalid_risk_level("test");
        assert!(client_err.is_client_error());
        assert!(!client_err.is_server_error());

        let server_err = CoreError::configuration("test");
        assert!(server_err.is_server_error());
        assert!(!server_err.is_client_error());
    }

    #[test]
    fn test_error_categories_display() {
        assert_eq!(ErrorCategory::Validation.to_string(), "validation");
        assert_eq!(ErrorCategory::Time.to_string(), "time");
        assert_eq!(ErrorCategory::Serialization.to_string(), "serialization");
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }

    #[test]
    fn test_error_message_formats() {
        let invalid_result = CoreError::invalid_result("missing 'confidence' field");
        assert!(
            invalid_result
                .to_string()
                .contains("missing 'confidence' field")
        );

        let invalid_ts = CoreError::invalid_timestamp("2023-13-45");
        assert!(invalid_ts.to_string().contains("2023-13-45"));
    }

    #[test]
    fn test_result_type_usage() {
        fn ok_fn() -> Result<String> {
            Ok("success".to_string())
        }

        fn err_fn() -> Result<String> {
            Err(CoreError::invalid_risk_level("bad"))
        }

        assert!(ok_fn().is_ok());
        assert!(err_fn().is_err());
    }
}
