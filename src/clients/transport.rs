//! The request-execution seam the paginator is written against.

use async_trait::async_trait;

use crate::clients::graphql::GraphqlError;
use crate::pagination::PageVariables;

/// Executes one GraphQL request.
///
/// Implementations return the envelope's `data` member on success. The
/// paginator expects the query to alias its root connection as `data`, so a
/// page is found at `data.edges` / `data.pageInfo` of the returned value.
///
/// [`StorefrontClient`](crate::clients::StorefrontClient) is the HTTP
/// implementation; tests and alternative transports can implement this trait
/// directly.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use serde_json::{json, Value};
/// use storefront_paginator::clients::Transport;
/// use storefront_paginator::clients::graphql::GraphqlError;
/// use storefront_paginator::pagination::PageVariables;
///
/// struct SinglePage;
///
/// #[async_trait]
/// impl Transport for SinglePage {
///     async fn execute(&self, _query: &str, _variables: &PageVariables) -> Result<Value, GraphqlError> {
///         Ok(json!({"data": {"edges": [], "pageInfo": {"hasNextPage": false}}}))
///     }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `query` with `variables` and returns the response `data`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] when the exchange fails and
    /// [`GraphqlError::Response`] when the server reports GraphQL errors.
    async fn execute(
        &self,
        query: &str,
        variables: &PageVariables,
    ) -> Result<serde_json::Value, GraphqlError>;
}

