//! # Shopify Storefront Paginator
//!
//! Exhaustive Relay cursor pagination for the Shopify Storefront GraphQL API,
//! including a second level of pagination for records that carry their own
//! paginated `products` connection.
//!
//! ## Overview
//!
//! This crate provides:
//! - A [`Transport`] trait for executing one GraphQL request, and
//!   [`StorefrontClient`], its HTTP implementation
//! - [`create_client`] to build a client from a store URL and token
//! - [`query_all`] to collect every node of a connection
//! - [`query_collection_all`] to also complete each node's nested
//!   `products` connection
//! - [`diagnostics`] to render a failed request for humans
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storefront_paginator::{create_client, query_all};
//!
//! const PRODUCTS: &str = r#"
//!     query Products($first: Int!, $after: String) {
//!       data: products(first: $first, after: $after) {
//!         pageInfo { hasNextPage }
//!         edges { cursor node { id title } }
//!       }
//!     }
//! "#;
//!
//! let client = create_client("https://my-store.myshopify.com", "public-access-token")?;
//! let products: Vec<serde_json::Value> = query_all(&client, PRODUCTS, 100, None).await?;
//! ```
//!
//! ## Nested Collections
//!
//! ```rust,ignore
//! use storefront_paginator::{query_collection_all, CollectionNode};
//!
//! let collections: Vec<CollectionNode> =
//!     query_collection_all(&client, COLLECTIONS_WITH_PRODUCTS, 100, None).await?;
//!
//! for collection in &collections {
//!     let products = collection.products.as_ref().map_or(0, |p| p.edges.len());
//!     println!("{}: {products} products", collection.fields["handle"]);
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use std::time::Duration;
//! use storefront_paginator::{
//!     ApiVersion, StoreUrl, StorefrontClient, StorefrontConfig, StorefrontToken,
//! };
//!
//! let config = StorefrontConfig::builder()
//!     .api_version(ApiVersion::V2019_10)
//!     .user_agent_prefix("MyApp/1.0")
//!     .request_timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! let store = StoreUrl::new("https://my-store.myshopify.com").unwrap();
//! let token = StorefrontToken::private("private-token").unwrap();
//! let client = StorefrontClient::new(&store, Some(&token), Some(&config));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **All or nothing**: A failed request aborts the walk; no partial results
//! - **No retries**: Each request is sent once
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod pagination;

// Re-export public types at crate root for convenience
pub use config::{ApiVersion, StoreUrl, StorefrontConfig, StorefrontConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::graphql::GraphqlError;
pub use clients::{
    create_client, HttpError, HttpResponse, HttpResponseError, StorefrontClient, StorefrontToken,
    Transport,
};

// Re-export pagination types
pub use pagination::{
    query_all, query_collection_all, query_collection_products, query_once, ChildCollection,
    CollectionNode, Edge, Page, PageInfo, PageVariables, PaginationError,
};

// Re-export diagnostics
pub use diagnostics::{print_graphql_error, render_graphql_error, RenderOptions};
