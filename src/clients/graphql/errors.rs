//! GraphQL request error types.
//!
//! A single request can fail in two ways, and both carry the request that
//! failed:
//!
//! - [`GraphqlError::Http`]: the exchange itself failed (network, status
//!   code, timeout, unparseable body)
//! - [`GraphqlError::Response`]: the server answered with a well-formed
//!   envelope whose `errors` list is non-empty
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_paginator::clients::graphql::GraphqlError;
//!
//! match client.execute(query, &variables).await {
//!     Ok(data) => println!("{data}"),
//!     Err(GraphqlError::Response { errors, .. }) => {
//!         for error in errors {
//!             println!("GraphQL error: {}", error.message);
//!         }
//!     }
//!     Err(GraphqlError::Http { source, .. }) => println!("HTTP error: {source}"),
//! }
//! ```

use thiserror::Error;

use super::{GraphqlErrorEntry, GraphqlRequest};
use crate::clients::HttpError;

/// Error type for one GraphQL request.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The HTTP exchange failed.
    #[error("Storefront request failed: {source}")]
    Http {
        /// The underlying HTTP error.
        #[source]
        source: HttpError,
        /// The request that was being sent.
        request: Box<GraphqlRequest>,
    },

    /// The server returned GraphQL errors.
    #[error("GraphQL response contained {} error(s): {}", .errors.len(), join_messages(.errors))]
    Response {
        /// The normalized `errors` list.
        errors: Vec<GraphqlErrorEntry>,
        /// The request that produced them.
        request: Box<GraphqlRequest>,
    },
}

impl GraphqlError {
    /// Wraps an HTTP error together with the request that hit it.
    #[must_use]
    pub fn http(source: HttpError, request: &GraphqlRequest) -> Self {
        Self::Http {
            source,
            request: Box::new(request.clone()),
        }
    }

    /// Returns the request that failed.
    #[must_use]
    pub fn request(&self) -> &GraphqlRequest {
        match self {
            Self::Http { request, .. } | Self::Response { request, .. } => request,
        }
    }

    /// Returns the GraphQL `errors` list, for [`Response`](Self::Response) errors.
    #[must_use]
    pub fn errors(&self) -> Option<&[GraphqlErrorEntry]> {
        match self {
            Self::Response { errors, .. } => Some(errors),
            Self::Http { .. } => None,
        }
    }
}

fn join_messages(errors: &[GraphqlErrorEntry]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
