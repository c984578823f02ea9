//! Travel service error types

use thiserror::Error;

/// Errors that can occur talking to the recommendation or itinerary service
///
/// Every variant is handled the same way by the stage models: logged,
/// loading flag cleared, result degraded to empty. No retries anywhere.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    /// Check if this is a non-2xx HTTP status failure
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }

    /// The HTTP status, when the service answered with one
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_status() {
        let err = ApiError::Status {
            status: 500,
            message: "Server error".to_string(),
        };
        assert!(err.is_status());
        assert_eq!(err.status(), Some(500));

        let err = ApiError::InvalidResponse("Bad JSON".to_string());
        assert!(!err.is_status());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status {
            status: 404,
            message: "Not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error 404: Not found");
    }
}
