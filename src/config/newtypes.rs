//! Validated newtype wrappers for configuration values.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// A validated base URL for a Shopify store.
///
/// The Storefront endpoint is built by appending `/api/{version}/graphql.json`
/// to this URL, so trailing slashes are removed on construction.
///
/// # Accepted Formats
///
/// - `https://my-store.myshopify.com`
/// - `https://shop.example.com/` (trailing slash dropped)
/// - `http://127.0.0.1:8080` (useful for local mocks)
///
/// # Example
///
/// ```rust
/// use storefront_paginator::StoreUrl;
///
/// let url = StoreUrl::new("https://my-store.myshopify.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://my-store.myshopify.com");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "my-store.myshopify.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl StoreUrl {
    /// Creates a new validated store URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreUrl`] if the scheme is not `http` or
    /// `https`, or if the host is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidStoreUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(invalid());
        }

        // Query strings and fragments would end up in the middle of the endpoint
        if remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL, without port or path.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a path onto this URL with exactly one separating slash.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for StoreUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl Serialize for StoreUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for StoreUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
