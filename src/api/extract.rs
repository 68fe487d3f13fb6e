//! Request body extractor for create and update routes.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};

/// JSON body where an empty body or a literal `null` yields `None`.
///
/// Handlers decide what an absent body means; malformed JSON is rejected
/// with a 400 before the handler runs.
#[derive(Debug, Clone, PartialEq)]
pub struct NullableJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for NullableJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        parse_body(&bytes).map(NullableJson)
    }
}

/// Parse a JSON body, treating blank input and `null` as absent.
pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<Option<T>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<T>>(bytes).map_err(|e| AppError::validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateCountryDto;

    #[test]
    fn test_blank_and_null_are_absent() {
        assert_eq!(parse_body::<CreateCountryDto>(b"").unwrap(), None);
        assert_eq!(parse_body::<CreateCountryDto>(b"  \n").unwrap(), None);
        assert_eq!(parse_body::<CreateCountryDto>(b"null").unwrap(), None);
    }

    #[test]
    fn test_object_is_present() {
        let dto = parse_body::<CreateCountryDto>(br#"{"name":"Norway"}"#).unwrap();
        assert_eq!(dto.map(|d| d.name).as_deref(), Some("Norway"));
    }

    #[test]
    fn test_malformed_is_validation_error() {
        let err = parse_body::<CreateCountryDto>(b"{name:").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
