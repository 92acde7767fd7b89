//! API response types and wrappers

use serde::{Deserialize, Serialize};

/// Standard API response wrapper
///
/// Every endpoint answers with this envelope: a `success` flag, a
/// human-readable `message`, and optional `data`. The field set is fixed by
/// the platform contract consumed by the mobile clients; `data` is omitted
/// entirely (not `null`) when there is nothing to return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome description
    pub message: String,

    /// Response data (present on success when the operation yields any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_response() {
        let response = ApiResponse::success("OTP sent successfully!", json!({"messageId": "m1"}));
        assert!(response.is_success());
        assert_eq!(response.message, "OTP sent successfully!");
        assert_eq!(response.into_data(), Some(json!({"messageId": "m1"})));
    }

    #[test]
    fn test_error_response() {
        let response = ApiResponse::<()>::error("Valid phone number is required");
        assert!(!response.is_success());
        assert_eq!(response.message, "Valid phone number is required");
        assert!(response.data.is_none());
    }

    #[test]
    fn test_data_field_omitted_when_absent() {
        let response = ApiResponse::<()>::error("failed");
        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(
            serialized,
            json!({"success": false, "message": "failed"})
        );
    }

    #[test]
    fn test_data_field_present_on_success() {
        let response = ApiResponse::success("ok", json!({"messageId": "wamid.X"}));
        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(
            serialized,
            json!({"success": true, "message": "ok", "data": {"messageId": "wamid.X"}})
        );
    }
}
