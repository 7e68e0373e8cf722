//! The GraphQL response envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{GraphqlError, GraphqlRequest};

/// One entry of a GraphQL `errors` list.
///
/// Only `message` is required in a GraphQL error; the rest is kept so
/// diagnostics can show where in the document the error points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorEntry {
    /// Human-readable description.
    pub message: String,
    /// Source locations in the query document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Value>,
    /// Response path the error applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
    /// Server-specific details (Shopify puts error codes here).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphqlErrorEntry {
    /// Creates an entry carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: None,
            path: None,
            extensions: None,
        }
    }

    /// Normalizes an `errors` value into entries.
    ///
    /// Shopify occasionally sends `errors` as a bare string or with entries
    /// that lack a `message`; those are kept with their JSON text as the
    /// message rather than being dropped.
    #[must_use]
    pub fn list_from_value(errors: Value) -> Vec<Self> {
        match errors {
            Value::Null => Vec::new(),
            Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    serde_json::from_value(item.clone())
                        .unwrap_or_else(|_| Self::new(item.to_string()))
                })
                .collect(),
            Value::String(message) => vec![Self::new(message)],
            other => vec![Self::new(other.to_string())],
        }
    }
}

/// A GraphQL response body: `{data, errors, extensions}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphqlResponse {
    /// The query result, absent when execution failed outright.
    #[serde(default)]
    pub data: Option<Value>,
    /// Raw `errors` member, normalized by [`GraphqlErrorEntry::list_from_value`].
    #[serde(default)]
    pub errors: Option<Value>,
    /// Query cost and other server metadata.
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl GraphqlResponse {
    /// Resolves the envelope to its `data` member.
    ///
    /// A non-empty `errors` list wins over any partial `data`. A missing
    /// `data` member resolves to `null`, which the paginator later reports as
    /// a malformed response.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Response`] when the envelope carries errors.
    pub fn into_data(self, request: &GraphqlRequest) -> Result<Value, GraphqlError> {
        let errors = self
            .errors
            .map(GraphqlErrorEntry::list_from_value)
            .unwrap_or_default();

        if !errors.is_empty() {
            return Err(GraphqlError::Response {
                errors,
                request: Box::new(request.clone()),
            });
        }

        Ok(self.data.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::PageVariables;
    use serde_json::json;

    fn request() -> GraphqlRequest {
        GraphqlRequest::new("query { shop { name } }", PageVariables::default())
    }

    #[test]
    fn test_into_data_returns_data_member() {
        let response: GraphqlResponse =
            serde_json::from_value(json!({"data": {"shop": {"name": "Demo"}}})).unwrap();
        let data = response.into_data(&request()).unwrap();
        assert_eq!(data["shop"]["name"], "Demo");
    }

    #[test]
    fn test_into_data_missing_data_is_null() {
        let response = GraphqlResponse::default();
        assert_eq!(response.into_data(&request()).unwrap(), Value::Null);
    }

    #[test]
    fn test_errors_take_precedence_over_partial_data() {
        let response: GraphqlResponse = serde_json::from_value(json!({
            "data": {"shop": null},
            "errors": [{
                "message": "Field 'shop' doesn't exist",
                "locations": [{"line": 1, "column": 9}],
                "extensions": {"code": "undefinedField"}
            }]
        }))
        .unwrap();

        let error = response.into_data(&request()).unwrap_err();
        let errors = error.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Field 'shop' doesn't exist");
        assert_eq!(errors[0].extensions, Some(json!({"code": "undefinedField"})));
        assert_eq!(error.request(), &request());
    }

    #[test]
    fn test_empty_errors_list_is_not_an_error() {
        let response: GraphqlResponse =
            serde_json::from_value(json!({"data": {}, "errors": []})).unwrap();
        assert!(response.into_data(&request()).is_ok());
    }

    #[test]
    fn test_list_from_value_normalizes_odd_shapes() {
        let entries = GraphqlErrorEntry::list_from_value(json!("Throttled"));
        assert_eq!(entries, vec![GraphqlErrorEntry::new("Throttled")]);

        let entries = GraphqlErrorEntry::list_from_value(json!([{"code": 42}]));
        assert_eq!(entries[0].message, r#"{"code":42}"#);

        assert!(GraphqlErrorEntry::list_from_value(Value::Null).is_empty());
    }
}
