//! Raw HTTP response wrapper.
//!
//! [`HttpResponse`] is what the Storefront transport holds between reading a
//! reply off the wire and deciding whether it is a usable GraphQL envelope.

use std::collections::HashMap;

/// An HTTP response from the Storefront API.
///
/// Header names are stored lowercased; a header may carry several values.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Collects a reqwest header map into lowercased name → values.
    #[must_use]
    pub fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, if present.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `X-Shopify-API-Deprecated-Reason` header value, if present.
    #[must_use]
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.header("x-shopify-api-deprecated-reason")
    }

    /// Serializes the error-bearing parts of a failed response.
    ///
    /// Picks `errors`, `error` and (only alongside `error`)
    /// `error_description` from the body, and appends a reference line
    /// when an `X-Request-Id` is available.
    #[must_use]
    pub fn serialize_error(&self) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = self.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = self.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
            if let Some(desc) = self.body.get("error_description") {
                error_body.insert("error_description".to_string(), desc.clone());
            }
        }
        if let Some(request_id) = self.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::Value::Object(error_body).to_string()
    }
}
