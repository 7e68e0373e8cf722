//! Storefront API access tokens.
//!
//! The token is attached to every request as a header whose name depends on
//! the token kind. [`Debug`] output masks the value so tokens do not leak
//! into logs.
//!
//! # Example
//!
//! ```rust
//! use storefront_paginator::StorefrontToken;
//!
//! let token = StorefrontToken::public("public-access-token").unwrap();
//! assert_eq!(token.header_name(), "X-Shopify-Storefront-Access-Token");
//! assert_eq!(format!("{token:?}"), "StorefrontToken::Public(*****)");
//! ```

use std::fmt;

use crate::error::ConfigError;

/// HTTP header name for public storefront access tokens.
pub const PUBLIC_HEADER_NAME: &str = "X-Shopify-Storefront-Access-Token";

/// HTTP header name for private storefront access tokens.
pub const PRIVATE_HEADER_NAME: &str = "Shopify-Storefront-Private-Token";

/// A Shopify Storefront API access token.
#[derive(Clone, PartialEq, Eq)]
pub enum StorefrontToken {
    /// Public token, sent as `X-Shopify-Storefront-Access-Token`.
    Public(String),

    /// Private (server-side) token, sent as `Shopify-Storefront-Private-Token`.
    Private(String),
}

impl StorefrontToken {
    /// Creates a public token, rejecting empty values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorefrontToken`] if the token is blank.
    pub fn public(token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::validated(token.into()).map(Self::Public)
    }

    /// Creates a private token, rejecting empty values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorefrontToken`] if the token is blank.
    pub fn private(token: impl Into<String>) -> Result<Self, ConfigError> {
        Self::validated(token.into()).map(Self::Private)
    }

    fn validated(token: String) -> Result<String, ConfigError> {
        let token = token.trim().to_string();
        if token.is_empty() {
            return Err(ConfigError::EmptyStorefrontToken);
        }
        Ok(token)
    }

    /// Returns the HTTP header name for this token type.
    #[must_use]
    pub const fn header_name(&self) -> &'static str {
        match self {
            Self::Public(_) => PUBLIC_HEADER_NAME,
            Self::Private(_) => PRIVATE_HEADER_NAME,
        }
    }

    /// Returns the token value to send as the header value.
    #[must_use]
    pub fn header_value(&self) -> &str {
        match self {
            Self::Public(token) | Self::Private(token) => token,
        }
    }
}

impl fmt::Debug for StorefrontToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public(_) => f.write_str("StorefrontToken::Public(*****)"),
            Self::Private(_) => f.write_str("StorefrontToken::Private(*****)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_token_header() {
        let token = StorefrontToken::public("my-public-token").unwrap();
        assert_eq!(token.header_name(), PUBLIC_HEADER_NAME);
        assert_eq!(token.header_value(), "my-public-token");
    }

    #[test]
    fn test_private_token_header() {
        let token = StorefrontToken::private("my-private-token").unwrap();
        assert_eq!(token.header_name(), PRIVATE_HEADER_NAME);
        assert_eq!(token.header_value(), "my-private-token");
    }

    #[test]
    fn test_constructors_trim_and_reject_blank() {
        assert_eq!(
            StorefrontToken::public("  abc \n").unwrap(),
            StorefrontToken::Public("abc".to_string())
        );
        assert_eq!(
            StorefrontToken::public(""),
            Err(ConfigError::EmptyStorefrontToken)
        );
        assert_eq!(
            StorefrontToken::private("   "),
            Err(ConfigError::EmptyStorefrontToken)
        );
    }

    #[test]
    fn test_debug_masks_token_value() {
        let token = StorefrontToken::Private("super-secret-token".to_string());
        let debug_output = format!("{token:?}");

        assert_eq!(debug_output, "StorefrontToken::Private(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }
}
