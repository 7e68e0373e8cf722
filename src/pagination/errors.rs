//! Pagination error types.
//!
//! A walk fails as a whole: none of these errors carry the records fetched
//! before the failure.
//!
//! - [`PaginationError::Request`]: a single request failed (HTTP or GraphQL)
//! - [`PaginationError::MalformedResponse`]: a response did not have the
//!   expected connection shape
//! - [`PaginationError::PaginationCursor`]: the server asked for another page
//!   but gave no usable cursor to resume from
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_paginator::pagination::{query_all, PaginationError};
//!
//! match query_all::<serde_json::Value, _>(&client, QUERY, 100, None).await {
//!     Ok(nodes) => println!("{} records", nodes.len()),
//!     Err(PaginationError::Request(e)) => eprintln!("request failed: {e}"),
//!     Err(e) => eprintln!("pagination aborted: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::graphql::GraphqlError;

/// Error type for pagination walks.
#[derive(Debug, Error)]
pub enum PaginationError {
    /// A request of the walk failed.
    #[error(transparent)]
    Request(#[from] GraphqlError),

    /// The response lacked `data`, `edges`, `pageInfo` or a required nested
    /// `products` page.
    #[error("Malformed pagination response: {reason}")]
    MalformedResponse {
        /// What was missing or mistyped.
        reason: String,
    },

    /// `hasNextPage` was true but the page gave no cursor to resume from.
    #[error("Cannot resume pagination: {reason}")]
    PaginationCursor {
        /// Why the cursor was unusable.
        reason: String,
    },
}

impl PaginationError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    pub(crate) fn cursor(reason: impl Into<String>) -> Self {
        Self::PaginationCursor {
            reason: reason.into(),
        }
    }

    /// Returns the failed request's error, for [`Request`](Self::Request) errors.
    #[must_use]
    pub const fn as_request_error(&self) -> Option<&GraphqlError> {
        match self {
            Self::Request(error) => Some(error),
            Self::MalformedResponse { .. } | Self::PaginationCursor { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::graphql::{GraphqlErrorEntry, GraphqlRequest};
    use crate::pagination::PageVariables;

    #[test]
    fn test_request_error_is_transparent() {
        let source = GraphqlError::Response {
            errors: vec![GraphqlErrorEntry::new("Throttled")],
            request: Box::new(GraphqlRequest::new("{ x }", PageVariables::default())),
        };
        let expected = source.to_string();

        let error = PaginationError::from(source);
        assert_eq!(error.to_string(), expected);
        assert!(error.as_request_error().is_some());
    }

    #[test]
    fn test_contract_violations_have_reasons() {
        let error = PaginationError::malformed("missing field `edges`");
        assert_eq!(
            error.to_string(),
            "Malformed pagination response: missing field `edges`"
        );
        assert!(error.as_request_error().is_none());

        let error = PaginationError::cursor("page 1 has no edges");
        assert!(matches!(error, PaginationError::PaginationCursor { .. }));
        assert!(error.to_string().contains("page 1 has no edges"));
    }
}
