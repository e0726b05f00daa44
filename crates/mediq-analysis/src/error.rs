use thiserror::Error;

/// Errors surfaced by analysis services.
///
/// Every error is terminal for the request that produced it; callers must not
/// retry.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The submitted image could not be decoded. Carries the decoder's
    /// original message.
    #[error("Image processing failed: {message}")]
    InvalidImage { message: String },

    #[error("Invalid analysis context: {message}")]
    InvalidContext { message: String },

    #[error("Unsupported modality: {0}")]
    UnsupportedModality(String),

    #[error("Internal analysis error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Create a new InvalidImage error
    pub fn invalid_image(message: impl Into<String>) -> Self {
        Self::InvalidImage {
            message: message.into(),
        }
    }

    /// Create a new InvalidContext error
    pub fn invalid_context(message: impl Into<String>) -> Self {
        Self::InvalidContext {
            message: message.into(),
        }
    }

    /// Create a new UnsupportedModality error
    pub fn unsupported_modality(modality: impl Into<String>) -> Self {
        Self::UnsupportedModality(modality.into())
    }

    /// Create a new Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this error is a client error (4xx category)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidImage { .. } | Self::InvalidContext { .. } | Self::UnsupportedModality(_)
        )
    }

    /// Check if this error is a server error (5xx category)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    /// Short machine-readable code for response bodies and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidImage { .. } => "invalid_image",
            Self::InvalidContext { .. } => "invalid_context",
            Self::UnsupportedModality(_) => "unsupported_modality",
            Self::Internal(_) => "internal",
        }
    }
}

/// Convenience result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
