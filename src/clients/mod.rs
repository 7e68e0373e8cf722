//! Transport layer for Storefront GraphQL requests.
//!
//! # Overview
//!
//! - [`Transport`]: the trait the paginator drives; one call, one request
//! - [`storefront::StorefrontClient`]: the HTTP implementation
//! - [`graphql`]: request body, response envelope and [`graphql::GraphqlError`]
//! - [`HttpError`] / [`HttpResponseError`]: failures of the HTTP exchange
//! - [`HttpResponse`]: a raw response before envelope decoding
//!
//! # Failure Behavior
//!
//! Requests are attempted exactly once. There is no retry on 429 or 5xx
//! responses; the error is returned to the paginator, which aborts the walk.

mod errors;
pub mod graphql;
mod http_response;
pub mod storefront;
mod transport;

pub use errors::{HttpError, HttpResponseError};
pub use http_response::HttpResponse;
pub use transport::Transport;

pub use storefront::{create_client, StorefrontClient, StorefrontToken};

/// Crate version reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
