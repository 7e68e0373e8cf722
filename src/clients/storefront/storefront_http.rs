//! Internal HTTP exchange for Storefront API requests.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::graphql::GraphqlRequest;
use crate::clients::http_response::HttpResponse;
use crate::clients::storefront::StorefrontToken;
use crate::clients::SDK_VERSION;
use crate::config::{ApiVersion, StoreUrl, StorefrontConfig};

/// Posts JSON bodies to one Storefront GraphQL endpoint.
///
/// Holds the fully built endpoint URL and the headers sent with every
/// request, including the storefront token header. Requests are sent once;
/// failures are returned, never retried.
#[derive(Debug)]
pub(super) struct StorefrontHttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint, e.g. `https://my-store.myshopify.com/api/2025-10/graphql.json`.
    endpoint: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Per-request deadline.
    timeout: Option<Duration>,
}

// Verify StorefrontHttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontHttpClient>();
};

impl StorefrontHttpClient {
    /// Creates a new Storefront HTTP client.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created, which only
    /// happens when TLS initialization fails.
    #[must_use]
    pub(super) fn new(
        store_url: &StoreUrl,
        token: Option<&StorefrontToken>,
        config: Option<&StorefrontConfig>,
        api_version: &ApiVersion,
    ) -> Self {
        let endpoint = store_url.join(&api_version.graphql_path());

        let user_agent_prefix = config
            .and_then(StorefrontConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Storefront Paginator v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        if let Some(token) = token {
            default_headers.insert(
                token.header_name().to_string(),
                token.header_value().to_string(),
            );
        }

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint,
            default_headers,
            timeout: config.and_then(StorefrontConfig::request_timeout),
        }
    }

    /// POSTs a JSON body and returns the parsed 2xx response.
    ///
    /// Applies the configured deadline to the whole exchange, including
    /// reading the body.
    pub(super) async fn post_json(&self, body: &GraphqlRequest) -> Result<HttpResponse, HttpError> {
        match self.timeout {
            Some(after) => tokio::time::timeout(after, self.send(body))
                .await
                .map_err(|_| HttpError::Timeout { after })?,
            None => self.send(body).await,
        }
    }

    async fn send(&self, body: &GraphqlRequest) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::trace!(endpoint = %self.endpoint, "Sending Storefront GraphQL request");
        let res = req_builder.json(body).send().await?;

        let code = res.status().as_u16();
        let headers = HttpResponse::collect_headers(res.headers());
        let body_text = res.text().await?;

        let is_success = (200..=299).contains(&code);
        let body = if body_text.trim().is_empty() {
            serde_json::json!({})
        } else {
            match serde_json::from_str(&body_text) {
                Ok(body) => body,
                Err(source) if is_success => return Err(HttpError::InvalidBody { code, source }),
                Err(_) => serde_json::json!({ "raw_body": body_text }),
            }
        };

        let response = HttpResponse::new(code, headers, body);

        if let Some(reason) = response.deprecation_reason() {
            tracing::warn!(
                endpoint = %self.endpoint,
                "Storefront API deprecation notice: {}",
                reason
            );
        }

        if !response.is_ok() {
            return Err(HttpError::Response(HttpResponseError {
                code,
                message: response.serialize_error(),
                error_reference: response.request_id().map(String::from),
            }));
        }

        Ok(response)
    }
}

#[cfg(test)]
impl StorefrontHttpClient {
    /// Returns the endpoint for this client (test helper).
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client (test helper).
    fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}
