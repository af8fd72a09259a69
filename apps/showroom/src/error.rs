//! # API Error Types
//!
//! Error type returned from showroom commands and written to stdout.
//!
//! ```text
//! CatalogError (sunpower-catalog)
//!        │  From<CatalogError>
//!        ▼
//! ApiError { code, message } ──► {"error":{"code":"INVALID_CATEGORY", ...}}
//! ```
//!
//! None of these end the event loop; the frontend shows the message and the
//! next event is processed normally.

use serde::{Deserialize, Serialize};
use sunpower_catalog::CatalogError;
use thiserror::Error;
use ts_rs::TS;

/// API error returned from showroom commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "INVALID_CATEGORY",
///   "message": "Unknown category: solar"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[error("[{code:?}] {message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Category id outside the fixed set
    InvalidCategory,

    /// Index not valid for the current list
    IndexOutOfRange,

    /// "Know More" with nothing featured
    EmptyCatalogView,

    /// Product id does not exist
    NotFound,

    /// Product exists but the active category hides it
    NotInView,

    /// Catalog data failed validation
    ValidationError,

    /// The event line could not be decoded
    InvalidEvent,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an error for an undecodable event line.
    pub fn invalid_event(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidEvent, message)
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let code = match &err {
            CatalogError::InvalidCategory(_) => ErrorCode::InvalidCategory,
            CatalogError::IndexOutOfRange { .. } => ErrorCode::IndexOutOfRange,
            CatalogError::EmptyCatalogView => ErrorCode::EmptyCatalogView,
            CatalogError::ProductNotFound(_) => ErrorCode::NotFound,
            CatalogError::ProductNotInView { .. } => ErrorCode::NotInView,
            CatalogError::Validation(_) => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_mapping() {
        let err = ApiError::from(CatalogError::IndexOutOfRange { index: 9, len: 3 });
        assert_eq!(err.code, ErrorCode::IndexOutOfRange);
        assert_eq!(err.message, "Index 9 is out of range for 3 entries");

        let err = ApiError::from(CatalogError::ProductNotFound(40));
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::from(CatalogError::InvalidCategory("solar".to_string()));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_CATEGORY");
        assert_eq!(json["message"], "Unknown category: solar");
    }

    #[test]
    fn test_display() {
        let err = ApiError::invalid_event("expected value");
        assert_eq!(err.to_string(), "[InvalidEvent] expected value");
    }
}
