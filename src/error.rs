//! Configuration error types for the Storefront paginator.
//!
//! Every validated constructor in [`crate::config`] and
//! [`crate::clients::storefront`] returns `Result<T, ConfigError>` so that a
//! bad store URL or an empty token is rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use storefront_paginator::{ConfigError, StoreUrl};
//!
//! let result = StoreUrl::new("my-store.myshopify.com");
//! assert!(matches!(result, Err(ConfigError::InvalidStoreUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring a Storefront client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Storefront access token cannot be empty.
    #[error("Storefront access token cannot be empty. Please provide a valid Storefront API token.")]
    EmptyStorefrontToken,

    /// Store URL is invalid.
    #[error("Invalid store URL '{url}'. Expected an http(s) URL such as 'https://my-store.myshopify.com'.")]
    InvalidStoreUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Request timeout must be greater than zero.
    #[error("Request timeout must be greater than zero. Omit the timeout to wait indefinitely.")]
    InvalidTimeout,
}
