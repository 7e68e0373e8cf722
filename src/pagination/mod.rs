//! Relay cursor pagination.
//!
//! # Operations
//!
//! - [`query_once`]: one request with explicit [`PageVariables`]
//! - [`query_all`]: every node of the root connection, in server order
//! - [`query_collection_all`]: like `query_all`, also completing each node's
//!   nested `products` connection
//! - [`query_collection_products`]: every child edge of one parent record
//!
//! # Query Contract
//!
//! The query document must alias its root connection as `data`, select
//! `edges { cursor node { ... } }` and `pageInfo { hasNextPage }`, and declare
//! the variables `$first`, `$after`, `$firstProduct` and `$afterProduct`:
//!
//! ```graphql
//! query Collections($first: Int!, $after: String, $firstProduct: Int!, $afterProduct: String) {
//!   data: collections(first: $first, after: $after) {
//!     pageInfo { hasNextPage }
//!     edges {
//!       cursor
//!       node {
//!         handle
//!         products(first: $firstProduct, after: $afterProduct) {
//!           pageInfo { hasNextPage }
//!           edges { cursor node { title } }
//!         }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! # Failure Behavior
//!
//! Requests are never retried. The first failure aborts the walk and no
//! partial results are returned.

mod errors;
mod paginator;
mod types;

pub use errors::PaginationError;
pub use paginator::{
    query_all, query_collection_all, query_collection_products, query_once,
    NESTED_PARENT_PAGE_SIZE,
};
pub use types::{
    ChildCollection, CollectionNode, Edge, Page, PageInfo, PageVariables, DEFAULT_PAGE_SIZE,
    DEFAULT_PRODUCT_PAGE_SIZE,
};
