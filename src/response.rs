//! Uniform result envelope returned by every repository operation.
//!
//! Two signals share the envelope: `data == None` with `success == true`
//! means the row was absent, while `success == false` carries a caught
//! failure in `message`. Callers that only look at `data` cannot tell them
//! apart; the HTTP layer deliberately keeps that behaviour.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Envelope with payload, success flag and failure description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse<T> {
    pub data: Option<T>,
    pub success: bool,
    pub message: String,
}

impl<T> Default for ServiceResponse<T> {
    fn default() -> Self {
        Self {
            data: None,
            success: true,
            message: String::new(),
        }
    }
}

impl<T> ServiceResponse<T> {
    /// Successful response carrying `data`.
    pub fn found(data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    /// Successful response for an absent row.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Caught failure.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            success: false,
            message: message.into(),
        }
    }

    /// Fold an operation outcome into an envelope.
    pub fn from_result(result: Result<Option<T>>) -> Self {
        match result {
            Ok(Some(data)) => Self::found(data),
            Ok(None) => Self::absent(),
            Err(e) => Self::failure(e.to_string()),
        }
    }

    /// True when the envelope carries no payload, whatever the reason.
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_default_is_successful_and_empty() {
        let response = ServiceResponse::<i32>::default();
        assert!(response.success);
        assert!(response.data.is_none());
        assert!(response.message.is_empty());
    }

    #[test]
    fn test_from_result() {
        let found = ServiceResponse::from_result(Ok(Some(3)));
        assert_eq!(found, ServiceResponse::found(3));

        let absent = ServiceResponse::<i32>::from_result(Ok(None));
        assert!(absent.success);
        assert!(absent.is_empty());

        let failed = ServiceResponse::<i32>::from_result(Err(AppError::not_found("City 999")));
        assert!(!failed.success);
        assert!(failed.is_empty());
        assert_eq!(failed.message, "Not found: City 999");
    }

    #[test]
    fn test_serializes_camel_case_with_null_data() {
        let json = serde_json::to_value(ServiceResponse::<i32>::failure("boom")).unwrap();
        assert_eq!(json, serde_json::json!({ "data": null, "success": false, "message": "boom" }));
    }
}
