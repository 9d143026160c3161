//! Failure taxonomy for inventory service calls.

use thiserror::Error;

/// Typed failure returned by every API operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Service rejected the payload (duplicate name, bad amount, ...).
    #[error("{0}")]
    Validation(String),
    /// Token missing, invalid or expired; caller must force re-login.
    #[error("Session expired, please log in again")]
    AuthExpired,
    /// Target item no longer exists on the service.
    #[error("{0}")]
    NotFound(String),
    /// Purchase denied because stock is exhausted.
    #[error("{0}")]
    OutOfStock(String),
    /// Request never completed (offline, DNS, CORS, ...).
    #[error("Unable to connect to server. Please try again.")]
    Network(String),
    /// Response body was not the expected shape.
    #[error("Unexpected response from server")]
    Decode(String),
}

impl ApiError {
    /// Map an HTTP error status plus the service's `detail` text to a variant.
    ///
    /// The service reports auth failures as 401/403, missing items as 404 and
    /// every input rejection as 400/422 with a human-readable `detail`.
    pub fn classify(status: u16, detail: Option<String>) -> Self {
        match status {
            401 | 403 => ApiError::AuthExpired,
            404 => ApiError::NotFound(detail.unwrap_or_else(|| "Not found".to_string())),
            _ => ApiError::Validation(
                detail.unwrap_or_else(|| format!("Request failed (HTTP {status})")),
            ),
        }
    }

    /// True when the only sane reaction is clearing the session.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_auth_statuses() {
        assert_eq!(ApiError::classify(401, None), ApiError::AuthExpired);
        assert_eq!(
            ApiError::classify(403, Some("Admins only".into())),
            ApiError::AuthExpired
        );
    }

    #[test]
    fn test_classify_not_found_keeps_detail() {
        assert_eq!(
            ApiError::classify(404, Some("Sweet not found".into())),
            ApiError::NotFound("Sweet not found".into())
        );
    }

    #[test]
    fn test_classify_validation_surfaces_detail_verbatim() {
        assert_eq!(
            ApiError::classify(400, Some("Sweet already exists".into())),
            ApiError::Validation("Sweet already exists".into())
        );
    }

    #[test]
    fn test_classify_validation_fallback_without_detail() {
        assert_eq!(
            ApiError::classify(422, None),
            ApiError::Validation("Request failed (HTTP 422)".into())
        );
    }

    #[test]
    fn test_display_uses_service_message() {
        let err = ApiError::OutOfStock("Sweet not available".into());
        assert_eq!(err.to_string(), "Sweet not available");
    }
}
