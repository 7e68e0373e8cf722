//! Configuration types for the Storefront paginator.
//!
//! # Overview
//!
//! - [`StorefrontConfig`]: transport settings shared by every request
//! - [`StorefrontConfigBuilder`]: a builder for [`StorefrontConfig`]
//! - [`StoreUrl`]: a validated store base URL
//! - [`ApiVersion`]: the Storefront API version to target
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use storefront_paginator::{ApiVersion, StorefrontConfig};
//!
//! let config = StorefrontConfig::builder()
//!     .api_version(ApiVersion::V2019_10)
//!     .user_agent_prefix("CatalogExport/1.0")
//!     .request_timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
//! ```

mod newtypes;
mod version;

pub use newtypes::StoreUrl;
pub use version::ApiVersion;

use std::time::Duration;

use crate::error::ConfigError;

/// Transport settings for a [`StorefrontClient`](crate::clients::StorefrontClient).
///
/// Every field is optional. Without a config the client targets
/// [`ApiVersion::latest`] and waits on each request indefinitely.
///
/// # Thread Safety
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StorefrontConfig {
    api_version: ApiVersion,
    user_agent_prefix: Option<String>,
    request_timeout: Option<Duration>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the per-request deadline, if configured.
    ///
    /// When `None`, a request that never completes stalls the pagination
    /// walk that issued it.
    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// # Defaults
///
/// - `api_version`: Latest stable version
/// - `user_agent_prefix`: `None`
/// - `request_timeout`: `None` (no deadline)
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    api_version: Option<ApiVersion>,
    user_agent_prefix: Option<String>,
    request_timeout: Option<Duration>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets a deadline applied to each individual request.
    ///
    /// A request that exceeds it fails with
    /// [`HttpError::Timeout`](crate::clients::HttpError::Timeout), which
    /// aborts the pagination walk like any other transport failure.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Builds the [`StorefrontConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeout`] if a zero timeout was set.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        if self.request_timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(StorefrontConfig {
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            user_agent_prefix: self.user_agent_prefix,
            request_timeout: self.request_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StorefrontConfig::builder().build().unwrap();

        assert_eq!(config.api_version(), &ApiVersion::latest());
        assert!(config.user_agent_prefix().is_none());
        assert!(config.request_timeout().is_none());
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = StorefrontConfig::builder()
            .api_version(ApiVersion::V2019_10)
            .user_agent_prefix("MyApp/1.0")
            .request_timeout(Duration::from_millis(1500))
            .build()
            .unwrap();

        assert_eq!(config.api_version(), &ApiVersion::V2019_10);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.request_timeout(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_builder_rejects_zero_timeout() {
        let result = StorefrontConfig::builder()
            .request_timeout(Duration::ZERO)
            .build();

        assert_eq!(result, Err(ConfigError::InvalidTimeout));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorefrontConfig>();
    }
}
