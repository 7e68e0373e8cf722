//! Relay connection shapes and request variables.
//!
//! These mirror the GraphQL response one-to-one so that serde does the
//! shape checking: a page without `edges` or `pageInfo` fails to
//! deserialize and is reported as a malformed response.
//!
//! Members the query selected beyond the Relay minimum (`endCursor`,
//! `totalCount`, edge-level fields) are kept in an `extra` map and written
//! back out unchanged.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Default number of parent records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default number of child records requested per nested page.
pub const DEFAULT_PRODUCT_PAGE_SIZE: u32 = 100;

/// Whether more edges exist beyond the current page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// `true` when another page can be requested after the last edge's cursor.
    pub has_next_page: bool,
    /// Any other selected members, such as `endCursor` or `hasPreviousPage`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PageInfo {
    /// Creates page info with only `hasNextPage` set.
    #[must_use]
    pub fn new(has_next_page: bool) -> Self {
        Self {
            has_next_page,
            extra: Map::new(),
        }
    }
}

/// One entry of a page.
///
/// The cursor is only meaningful for the query and variables that produced
/// it; it must not be reused against a different query.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N> {
    /// The record itself.
    pub node: N,
    /// Position of this edge, used as `after` to resume past it.
    pub cursor: String,
    /// Other edge-level members the query selected.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<N> Edge<N> {
    /// Creates an edge with no extra members.
    #[must_use]
    pub fn new(node: N, cursor: impl Into<String>) -> Self {
        Self {
            node,
            cursor: cursor.into(),
            extra: Map::new(),
        }
    }
}

/// A single page of a Relay connection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<N> {
    /// Edges in server order.
    pub edges: Vec<Edge<N>>,
    /// Continuation flag for this page.
    pub page_info: PageInfo,
    /// Other connection-level members, such as `totalCount`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl<N> Page<N> {
    /// Returns the cursor of the last edge, if the page has any edges.
    #[must_use]
    pub fn last_cursor(&self) -> Option<&str> {
        self.edges.last().map(|edge| edge.cursor.as_str())
    }

    /// Returns `true` if this page says more edges follow.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page_info.has_next_page
    }

    /// Replaces the edges with a fully paged list.
    ///
    /// `hasNextPage` becomes false. Cursor bounds the query selected
    /// (`startCursor`, `endCursor`, `hasPreviousPage`) are rewritten to
    /// describe the new list, which starts at the beginning of the
    /// connection. Other members are left alone.
    pub fn complete_with(&mut self, edges: Vec<Edge<N>>) {
        let info = &mut self.page_info;
        info.has_next_page = false;

        let bounds = [
            ("startCursor", edges.first()),
            ("endCursor", edges.last()),
        ];
        for (key, edge) in bounds {
            if let Some(slot) = info.extra.get_mut(key) {
                *slot = edge.map_or(Value::Null, |edge| Value::String(edge.cursor.clone()));
            }
        }
        if let Some(slot) = info.extra.get_mut("hasPreviousPage") {
            *slot = Value::Bool(false);
        }

        self.edges = edges;
    }
}

/// Variables sent with every paginated request.
///
/// Serializes as `{first, after, firstProduct, afterProduct}`. Cursors that
/// are `None` are left out of the JSON entirely, so the query's own defaults
/// apply. The names must match the variables declared by the query document.
///
/// # Example
///
/// ```rust
/// use storefront_paginator::pagination::PageVariables;
///
/// let variables = PageVariables::new(50, Some("abc".to_string()));
/// assert_eq!(
///     serde_json::to_value(&variables).unwrap(),
///     serde_json::json!({"first": 50, "after": "abc", "firstProduct": 100})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageVariables {
    /// Parent page size.
    pub first: u32,
    /// Parent cursor to resume after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    /// Child page size.
    pub first_product: u32,
    /// Child cursor to resume after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_product: Option<String>,
}

impl PageVariables {
    /// Creates variables for a parent page, with default child paging.
    #[must_use]
    pub const fn new(first: u32, after: Option<String>) -> Self {
        Self {
            first,
            after,
            first_product: DEFAULT_PRODUCT_PAGE_SIZE,
            after_product: None,
        }
    }

    /// Sets the child page size and child cursor.
    #[must_use]
    pub fn with_products(mut self, first_product: u32, after_product: Option<String>) -> Self {
        self.first_product = first_product;
        self.after_product = after_product;
        self
    }
}

impl Default for PageVariables {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, None)
    }
}

/// A node that may carry its own paginated child list.
///
/// Implementors expose the child page as an explicit optional field, so
/// "does this record need follow-up requests" is a presence check rather
/// than probing arbitrary JSON.
pub trait ChildCollection {
    /// The child node type.
    type Child;

    /// Returns the child page, if the node has one.
    fn child_page(&self) -> Option<&Page<Self::Child>>;

    /// Returns the child page mutably, if the node has one.
    fn child_page_mut(&mut self) -> Option<&mut Page<Self::Child>>;

    /// Consumes the node and returns its child page.
    fn into_child_page(self) -> Option<Page<Self::Child>>
    where
        Self: Sized;

    /// Returns `true` if the child page exists and is incomplete.
    fn needs_child_pagination(&self) -> bool {
        self.child_page().is_some_and(Page::has_next_page)
    }
}

/// A collection-like record with an optional `products` connection.
///
/// Every other field of the node is kept verbatim in [`fields`](Self::fields)
/// and written back out unchanged on serialization. A `"products": null`
/// stays in `fields` as null, so it round-trips too.
///
/// # Example
///
/// ```rust
/// use storefront_paginator::pagination::{ChildCollection, CollectionNode};
///
/// let node: CollectionNode = serde_json::from_value(serde_json::json!({
///     "handle": "summer",
///     "products": {
///         "edges": [{"node": {"title": "Hat"}, "cursor": "p1"}],
///         "pageInfo": {"hasNextPage": true}
///     }
/// }))
/// .unwrap();
///
/// assert!(node.needs_child_pagination());
/// assert_eq!(node.fields["handle"], "summer");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CollectionNode<P = Value> {
    /// The nested child connection, when the query selected one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Page<P>>,
    /// All remaining fields of the node.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl<'de, P: DeserializeOwned> Deserialize<'de> for CollectionNode<P> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::deserialize(deserializer)?;

        let products = match fields.remove("products") {
            None => None,
            Some(Value::Null) => {
                fields.insert("products".to_string(), Value::Null);
                None
            }
            Some(page) => Some(serde_json::from_value(page).map_err(D::Error::custom)?),
        };

        Ok(Self { products, fields })
    }
}

impl<P> ChildCollection for CollectionNode<P> {
    type Child = P;

    fn child_page(&self) -> Option<&Page<P>> {
        self.products.as_ref()
    }

    fn child_page_mut(&mut self) -> Option<&mut Page<P>> {
        self.products.as_mut()
    }

    fn into_child_page(self) -> Option<Page<P>> {
        self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_deserializes_relay_shape() {
        let page: Page<Value> = serde_json::from_value(json!({
            "edges": [
                {"node": {"id": 1}, "cursor": "a"},
                {"node": {"id": 2}, "cursor": "b"}
            ],
            "pageInfo": {"hasNextPage": true, "hasPreviousPage": false}
        }))
        .unwrap();

        assert_eq!(page.edges.len(), 2);
        assert_eq!(page.last_cursor(), Some("b"));
        assert!(page.has_next_page());
    }

    #[test]
    fn test_page_without_page_info_is_rejected() {
        let result: Result<Page<Value>, _> = serde_json::from_value(json!({"edges": []}));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("pageInfo"));
    }

    #[test]
    fn test_empty_page_has_no_last_cursor() {
        let page: Page<Value> = Page {
            edges: Vec::new(),
            page_info: PageInfo::new(true),
            extra: Map::new(),
        };
        assert!(page.last_cursor().is_none());
    }

    #[test]
    fn test_page_keeps_unmodelled_members() {
        let json = json!({
            "edges": [{"node": {"id": 1}, "cursor": "a", "position": 3}],
            "pageInfo": {"hasNextPage": false, "endCursor": "a", "hasPreviousPage": false},
            "totalCount": 1
        });

        let page: Page<Value> = serde_json::from_value(json.clone()).unwrap();

        assert_eq!(page.extra["totalCount"], 1);
        assert_eq!(page.page_info.extra["endCursor"], "a");
        assert_eq!(page.edges[0].extra["position"], 3);
        assert_eq!(serde_json::to_value(&page).unwrap(), json);
    }

    #[test]
    fn test_complete_with_rewrites_selected_bounds() {
        let mut page: Page<Value> = serde_json::from_value(json!({
            "edges": [{"node": {"id": 5}, "cursor": "p5"}],
            "pageInfo": {
                "hasNextPage": true,
                "hasPreviousPage": true,
                "startCursor": "p5",
                "endCursor": "p5"
            },
            "totalCount": 9
        }))
        .unwrap();

        page.complete_with(vec![
            Edge::new(json!({"id": 0}), "p0"),
            Edge::new(json!({"id": 1}), "p1"),
        ]);

        assert_eq!(
            serde_json::to_value(&page.page_info).unwrap(),
            json!({
                "hasNextPage": false,
                "hasPreviousPage": false,
                "startCursor": "p0",
                "endCursor": "p1"
            })
        );
        assert_eq!(page.extra["totalCount"], 9);
        assert_eq!(page.edges.len(), 2);
    }

    #[test]
    fn test_complete_with_leaves_unselected_bounds_out() {
        let mut page: Page<Value> = serde_json::from_value(json!({
            "edges": [],
            "pageInfo": {"hasNextPage": true}
        }))
        .unwrap();

        page.complete_with(Vec::new());

        assert_eq!(page.page_info, PageInfo::new(false));
    }

    #[test]
    fn test_page_variables_omit_absent_cursors() {
        let variables = PageVariables::default();
        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({"first": 100, "firstProduct": 100})
        );

        let variables =
            PageVariables::new(1, Some("parent".to_string())).with_products(25, Some("child".to_string()));
        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({"first": 1, "after": "parent", "firstProduct": 25, "afterProduct": "child"})
        );
    }

    #[test]
    fn test_collection_node_without_products() {
        let node: CollectionNode = serde_json::from_value(json!({"title": "Sale"})).unwrap();
        assert!(node.products.is_none());
        assert!(!node.needs_child_pagination());
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({"title": "Sale"}));
    }

    #[test]
    fn test_collection_node_with_complete_products() {
        let node: CollectionNode = serde_json::from_value(json!({
            "title": "Sale",
            "products": {"edges": [], "pageInfo": {"hasNextPage": false}}
        }))
        .unwrap();

        assert!(node.child_page().is_some());
        assert!(!node.needs_child_pagination());
    }

    #[test]
    fn test_collection_node_null_products_round_trips() {
        let json = json!({"title": "Sale", "products": null});
        let node: CollectionNode = serde_json::from_value(json.clone()).unwrap();
        assert!(node.products.is_none());
        assert!(!node.needs_child_pagination());
        assert_eq!(serde_json::to_value(&node).unwrap(), json);
    }

    #[test]
    fn test_collection_node_rejects_malformed_products() {
        let result: Result<CollectionNode, _> =
            serde_json::from_value(json!({"title": "Sale", "products": {"edges": []}}));
        assert!(result.unwrap_err().to_string().contains("pageInfo"));
    }
}
