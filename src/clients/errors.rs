//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the Storefront API
//! - [`HttpError`]: every way a single request can fail before a GraphQL
//!   envelope is available
//!
//! Requests are never retried. Any of these errors aborts the pagination
//! walk that issued the request.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_paginator::clients::{HttpError, Transport};
//! use storefront_paginator::clients::graphql::GraphqlError;
//!
//! match client.execute(query, &variables).await {
//!     Ok(data) => println!("{data}"),
//!     Err(GraphqlError::Http { source: HttpError::Response(e), .. }) => {
//!         println!("API error {}: {}", e.code, e.message);
//!     }
//!     Err(other) => println!("{other}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error returned when a request receives a non-successful status code.
///
/// The message is a compact JSON object holding whichever of `errors`,
/// `error` and `error_description` the response body contained, plus an
/// `error_reference` line when Shopify sent an `X-Request-Id`.
///
/// # Example
///
/// ```rust
/// use storefront_paginator::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     message: r#"{"errors":"Unauthorized"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert_eq!(error.to_string(), r#"{"errors":"Unauthorized"}"#);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Unified error type for a single HTTP exchange.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with a non-2xx status code.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// A 2xx response whose body was not valid JSON.
    #[error("Response body is not valid JSON (status {code}): {source}")]
    InvalidBody {
        /// The HTTP status code of the response.
        code: u16,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The configured request deadline elapsed.
    #[error("Request timed out after {after:?}")]
    Timeout {
        /// The deadline that was exceeded.
        after: Duration,
    },

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"errors":"Not Found"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"{"errors":"Not Found"}"#);
    }

    #[test]
    fn test_http_error_wraps_response_transparently() {
        let error: HttpError = HttpResponseError {
            code: 500,
            message: "boom".to_string(),
            error_reference: Some("req-1".to_string()),
        }
        .into();

        assert_eq!(error.to_string(), "boom");
        assert!(matches!(error, HttpError::Response(ref e) if e.code == 500));
    }

    #[test]
    fn test_invalid_body_error_includes_status() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error = HttpError::InvalidBody { code: 200, source };

        let message = error.to_string();
        assert!(message.contains("not valid JSON"));
        assert!(message.contains("200"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_timeout_error_message() {
        let error = HttpError::Timeout {
            after: Duration::from_secs(5),
        };
        assert_eq!(error.to_string(), "Request timed out after 5s");
    }
}
