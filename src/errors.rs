use thiserror::Error;

/// Message used when the server rejects a call without a `detail` field.
pub const GENERIC_FAILURE: &str = "Failed to get response";

/// Top-level client error.
/// All variants carry a human-readable message for display/logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

    #[error("Unknown topic '{id}'")]
    UnknownTopic { id: String },

    #[error("Topic '{topic}' has no field named '{field_name}'")]
    UnknownField { topic: String, field_name: String },

    // ── Gateway errors ───────────────────────────────────────────────────────
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("{}", .detail.as_deref().unwrap_or(GENERIC_FAILURE))]
    Server { status: u16, detail: Option<String> },

    #[error("Parse error: {message}")]
    Decode { message: String },
}

impl AppError {
    pub fn empty_field(field_name: impl Into<String>) -> Self {
        AppError::EmptyField { field_name: field_name.into() }
    }

    pub fn network(message: impl ToString) -> Self {
        AppError::Network { message: message.to_string() }
    }

    pub fn decode(message: impl ToString) -> Self {
        AppError::Decode { message: message.to_string() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::EmptyField { .. } | AppError::UnknownTopic { .. } | AppError::UnknownField { .. }
        )
    }

    pub fn is_server(&self) -> bool {
        matches!(self, AppError::Server { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network { .. } | AppError::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_prefers_detail() {
        let err = AppError::Server { status: 500, detail: Some("AI model not available".into()) };
        assert_eq!(err.to_string(), "AI model not available");
        assert!(err.is_server());
    }

    #[test]
    fn server_error_without_detail_uses_fallback() {
        let err = AppError::Server { status: 502, detail: None };
        assert_eq!(err.to_string(), GENERIC_FAILURE);
    }

    #[test]
    fn classification() {
        assert!(AppError::empty_field("preferred_date").is_validation());
        assert!(AppError::network("connection refused").is_transport());
        assert!(!AppError::decode("eof").is_validation());
    }
}
