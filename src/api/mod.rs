//! HTTP bindings to the sweet shop service, organized by endpoint group.

mod auth;
mod sweets;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::error::ApiError;

pub use auth::*;
pub use sweets::*;

/// Base URL of the inventory service.
pub const BASE_URL: &str = "http://localhost:8000/api";

pub type ApiResult<T> = Result<T, ApiError>;

/// Characters left bare in form-urlencoded values, per the WHATWG set.
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode key/value pairs as an `application/x-www-form-urlencoded` body.
pub(crate) fn form_encode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, FORM),
                utf8_percent_encode(value, FORM)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub(crate) fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Error payload shape used by every 4xx response.
#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: Option<String>,
}

/// Pull the `detail` text out of an error response, if there is one.
pub(crate) async fn error_detail(response: gloo_net::http::Response) -> Option<String> {
    response.json::<ErrorBody>().await.ok().and_then(|b| b.detail)
}

/// Turn a non-2xx response into the matching [`ApiError`] variant.
pub(crate) async fn fail(response: gloo_net::http::Response) -> ApiError {
    let status = response.status();
    let detail = error_detail(response).await;
    ApiError::classify(status, detail)
}

pub(crate) fn net(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

pub(crate) fn decode(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_encode_plain_pairs() {
        assert_eq!(form_encode(&[("a", "1"), ("b", "2")]), "a=1&b=2");
    }

    #[test]
    fn test_form_encode_escapes_reserved_characters() {
        assert_eq!(
            form_encode(&[("username", "mary jane"), ("password", "p&ss=1")]),
            "username=mary%20jane&password=p%26ss%3D1"
        );
    }

    #[test]
    fn test_form_encode_keeps_unreserved_characters() {
        assert_eq!(form_encode(&[("user", "a-b_c.d~e")]), "user=a-b_c.d~e");
    }

    #[test]
    fn test_bearer_header() {
        assert_eq!(bearer("tok"), "Bearer tok");
    }
}
