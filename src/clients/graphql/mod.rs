//! GraphQL request and response envelope types.
//!
//! These types are transport-agnostic: any [`Transport`](crate::clients::Transport)
//! builds a [`GraphqlRequest`], and the HTTP-backed
//! [`StorefrontClient`](crate::clients::StorefrontClient) decodes replies into a
//! [`GraphqlResponse`] before handing the `data` member to the paginator.
//!
//! # Response Structure
//!
//! - `data`: the query result
//! - `errors`: GraphQL errors (still HTTP 200); a non-empty list becomes
//!   [`GraphqlError::Response`]
//! - `extensions`: query cost information, ignored by pagination

mod errors;
mod request;
mod response;

pub use errors::GraphqlError;
pub use request::GraphqlRequest;
pub use response::{GraphqlErrorEntry, GraphqlResponse};
