//! The GraphQL request body.

use serde::Serialize;

use crate::pagination::PageVariables;

/// A GraphQL document together with the variables it was sent with.
///
/// This is the JSON body POSTed to the endpoint, and it is also attached to
/// every [`GraphqlError`](super::GraphqlError) so a failure can be traced
/// back to the exact page that was being requested.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GraphqlRequest {
    /// The query document.
    pub query: String,
    /// Pagination variables.
    pub variables: PageVariables,
}

impl GraphqlRequest {
    /// Creates a request body from a document and its variables.
    #[must_use]
    pub fn new(query: impl Into<String>, variables: PageVariables) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }
}
