//! Storefront API transport.
//!
//! # Overview
//!
//! - [`StorefrontClient`]: the HTTP [`Transport`](crate::clients::Transport)
//! - [`StorefrontToken`]: the credential attached to each request
//! - [`create_client`]: build a ready client from a store URL and token
//!
//! # Token Types
//!
//! - Public: `X-Shopify-Storefront-Access-Token`
//! - Private: `Shopify-Storefront-Private-Token`
//!
//! Pass `None` as the token for tokenless access to public catalog data.

mod client;
mod storefront_http;
mod token;

pub use client::{create_client, StorefrontClient};
pub use token::{StorefrontToken, PRIVATE_HEADER_NAME, PUBLIC_HEADER_NAME};
