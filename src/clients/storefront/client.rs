//! Storefront GraphQL client.
//!
//! [`StorefrontClient`] is the HTTP [`Transport`] used by the paginator. It
//! targets `{store_url}/api/{version}/graphql.json` and attaches the
//! storefront token header to every request.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_paginator::{create_client, pagination::query_all};
//!
//! let client = create_client("https://my-store.myshopify.com", "public-access-token")?;
//! let products: Vec<serde_json::Value> = query_all(&client, PRODUCTS_QUERY, 100, None).await?;
//! ```

use async_trait::async_trait;

use crate::clients::graphql::{GraphqlError, GraphqlRequest, GraphqlResponse};
use crate::clients::storefront::storefront_http::StorefrontHttpClient;
use crate::clients::storefront::StorefrontToken;
use crate::clients::{HttpError, Transport};
use crate::config::{ApiVersion, StoreUrl, StorefrontConfig};
use crate::error::ConfigError;
use crate::pagination::PageVariables;

/// GraphQL client for the Shopify Storefront API.
///
/// # Thread Safety
///
/// `StorefrontClient` is `Send + Sync`; one client can serve every
/// concurrent sub-collection request of a pagination walk.
///
/// # Example
///
/// ```rust
/// use storefront_paginator::{ApiVersion, StoreUrl, StorefrontClient, StorefrontToken};
///
/// let store = StoreUrl::new("https://my-store.myshopify.com").unwrap();
/// let token = StorefrontToken::public("public-access-token").unwrap();
///
/// let client = StorefrontClient::with_version(&store, Some(&token), None, ApiVersion::V2019_10);
/// assert_eq!(client.api_version(), &ApiVersion::V2019_10);
/// ```
#[derive(Debug)]
pub struct StorefrontClient {
    /// The internal HTTP client for making requests.
    http_client: StorefrontHttpClient,
    /// The API version being used.
    api_version: ApiVersion,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

impl StorefrontClient {
    /// Creates a new Storefront client for the given store.
    ///
    /// Uses the API version from the configuration, or the latest stable
    /// version when no configuration is given.
    ///
    /// # Arguments
    ///
    /// * `store_url` - Base URL of the store
    /// * `token` - Optional storefront access token (`None` for tokenless access)
    /// * `config` - Optional transport configuration
    #[must_use]
    pub fn new(
        store_url: &StoreUrl,
        token: Option<&StorefrontToken>,
        config: Option<&StorefrontConfig>,
    ) -> Self {
        let api_version = config.map_or_else(ApiVersion::latest, |c| c.api_version().clone());
        Self::create(store_url, token, config, api_version)
    }

    /// Creates a new Storefront client with a specific API version override.
    #[must_use]
    pub fn with_version(
        store_url: &StoreUrl,
        token: Option<&StorefrontToken>,
        config: Option<&StorefrontConfig>,
        version: ApiVersion,
    ) -> Self {
        if let Some(cfg_version) = config.map(StorefrontConfig::api_version) {
            if &version == cfg_version {
                tracing::debug!(
                    "Storefront client has a redundant API version override to the default {}",
                    cfg_version
                );
            } else {
                tracing::debug!(
                    "Storefront client overriding default API version {} with {}",
                    cfg_version,
                    version
                );
            }
        }

        Self::create(store_url, token, config, version)
    }

    fn create(
        store_url: &StoreUrl,
        token: Option<&StorefrontToken>,
        config: Option<&StorefrontConfig>,
        api_version: ApiVersion,
    ) -> Self {
        let http_client = StorefrontHttpClient::new(store_url, token, config, &api_version);

        Self {
            http_client,
            api_version,
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }
}

#[async_trait]
impl Transport for StorefrontClient {
    async fn execute(
        &self,
        query: &str,
        variables: &PageVariables,
    ) -> Result<serde_json::Value, GraphqlError> {
        let request = GraphqlRequest::new(query, variables.clone());

        let response = self
            .http_client
            .post_json(&request)
            .await
            .map_err(|e| GraphqlError::http(e, &request))?;

        let code = response.code;
        let envelope: GraphqlResponse = serde_json::from_value(response.body).map_err(|source| {
            GraphqlError::http(HttpError::InvalidBody { code, source }, &request)
        })?;

        envelope.into_data(&request)
    }
}

/// Creates a Storefront client from a store URL and a public storefront token.
///
/// This is the one-call setup: the URL is validated, the token is sent as
/// `X-Shopify-Storefront-Access-Token`, and the latest API version is used.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidStoreUrl`] or
/// [`ConfigError::EmptyStorefrontToken`] when either input is invalid.
///
/// # Example
///
/// ```rust
/// use storefront_paginator::create_client;
///
/// let client = create_client("https://my-store.myshopify.com", "public-access-token").unwrap();
/// assert!(create_client("my-store", "token").is_err());
/// ```
pub fn create_client(
    store_url: &str,
    storefront_token: &str,
) -> Result<StorefrontClient, ConfigError> {
    let store_url = StoreUrl::new(store_url)?;
    let token = StorefrontToken::public(storefront_token)?;
    Ok(StorefrontClient::new(&store_url, Some(&token), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StoreUrl {
        StoreUrl::new("https://test-shop.myshopify.com").unwrap()
    }

    #[test]
    fn test_storefront_client_new_uses_latest_version() {
        let client = StorefrontClient::new(&store(), None, None);
        assert_eq!(client.api_version(), &ApiVersion::latest());
    }

    #[test]
    fn test_storefront_client_with_config_uses_config_version() {
        let config = StorefrontConfig::builder()
            .api_version(ApiVersion::V2019_10)
            .build()
            .unwrap();

        let client = StorefrontClient::new(&store(), None, Some(&config));
        assert_eq!(client.api_version(), &ApiVersion::V2019_10);
    }

    #[test]
    fn test_storefront_client_with_version_overrides_config() {
        let config = StorefrontConfig::builder()
            .api_version(ApiVersion::V2025_07)
            .build()
            .unwrap();

        let client =
            StorefrontClient::with_version(&store(), None, Some(&config), ApiVersion::V2019_10);
        assert_eq!(client.api_version(), &ApiVersion::V2019_10);
    }

    #[test]
    fn test_one_token_serves_several_clients() {
        let token = StorefrontToken::private("shared-private").unwrap();

        let latest = StorefrontClient::new(&store(), Some(&token), None);
        let pinned =
            StorefrontClient::with_version(&store(), Some(&token), None, ApiVersion::V2019_10);

        assert_eq!(latest.api_version(), &ApiVersion::latest());
        assert_eq!(pinned.api_version(), &ApiVersion::V2019_10);
        assert_eq!(token.header_value(), "shared-private");
    }

    #[test]
    fn test_storefront_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorefrontClient>();
    }

    #[test]
    fn test_create_client_validates_inputs() {
        assert!(create_client("https://test-shop.myshopify.com", "token").is_ok());
        assert_eq!(
            create_client("test-shop.myshopify.com", "token").unwrap_err(),
            ConfigError::InvalidStoreUrl {
                url: "test-shop.myshopify.com".to_string()
            }
        );
        assert_eq!(
            create_client("https://test-shop.myshopify.com", " ").unwrap_err(),
            ConfigError::EmptyStorefrontToken
        );
    }
}
