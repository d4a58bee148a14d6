//! API response envelope
//!
//! Every endpoint returns the same JSON shape so callers can branch
//! solely on `success`:
//!
//! ```json
//! {"success": true, "message": "...", "data": {...}, "details": ["..."]}
//! ```

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,

    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Field-level error messages (present on validation failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response with data
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            details: None,
        }
    }

    /// Create an error response
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            details: None,
        }
    }

    /// Create an error response carrying field-level details
    pub fn failure_with_details(message: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            details: Some(details),
        }
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
