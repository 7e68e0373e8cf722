//! Cursor-walking pagination over a [`Transport`].
//!
//! Both pagination levels share one loop, `walk`: fetch a page, fold it
//! into the accumulator, resume after the last edge's cursor until
//! `hasNextPage` is false. The levels differ only in where the page sits in
//! the response and which cursor variable advances.

use std::future::Future;

use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::{ChildCollection, Edge, Page, PageVariables, DEFAULT_PRODUCT_PAGE_SIZE};
use super::PaginationError;
use crate::clients::graphql::GraphqlError;
use crate::clients::Transport;

/// Parent page size used when re-fetching one record to page its children.
pub const NESTED_PARENT_PAGE_SIZE: u32 = 1;

/// Which cursor variable a walk advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Level {
    /// `after`, the root connection.
    Parent,
    /// `afterProduct`, the nested `products` connection.
    Child,
}

impl Level {
    fn cursor(self, variables: &PageVariables) -> Option<&str> {
        match self {
            Self::Parent => variables.after.as_deref(),
            Self::Child => variables.after_product.as_deref(),
        }
    }

    fn resume_after(self, variables: &mut PageVariables, cursor: String) {
        match self {
            Self::Parent => variables.after = Some(cursor),
            Self::Child => variables.after_product = Some(cursor),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
        }
    }
}

/// One fetched page, already folded into output items.
struct PageStep<A> {
    items: Vec<A>,
    has_next_page: bool,
    last_cursor: Option<String>,
}

impl<A> PageStep<A> {
    fn from_page<E>(page: Page<E>, map: impl FnMut(Edge<E>) -> A) -> Self {
        Self {
            has_next_page: page.has_next_page(),
            last_cursor: page.last_cursor().map(str::to_owned),
            items: page.edges.into_iter().map(map).collect(),
        }
    }
}

/// Requests pages until `hasNextPage` is false and concatenates their items.
async fn walk<A, F, Fut>(
    mut variables: PageVariables,
    level: Level,
    mut fetch: F,
) -> Result<Vec<A>, PaginationError>
where
    F: FnMut(PageVariables) -> Fut,
    Fut: Future<Output = Result<PageStep<A>, PaginationError>>,
{
    let mut accumulated = Vec::new();
    let mut page_number: usize = 0;

    loop {
        page_number += 1;
        let step = fetch(variables.clone()).await?;

        tracing::debug!(
            level = level.name(),
            page = page_number,
            edges = step.items.len(),
            has_next_page = step.has_next_page,
            "Fetched page"
        );

        accumulated.extend(step.items);

        if !step.has_next_page {
            return Ok(accumulated);
        }

        let Some(next) = step.last_cursor else {
            return Err(PaginationError::cursor(format!(
                "{} page {page_number} reports hasNextPage but has no edges",
                level.name()
            )));
        };

        if level.cursor(&variables) == Some(next.as_str()) {
            return Err(PaginationError::cursor(format!(
                "{} page {page_number} ends at cursor {next:?}, the cursor it was requested after",
                level.name()
            )));
        }

        level.resume_after(&mut variables, next);
    }
}

/// Takes the root connection out of a response's `data` member.
fn parent_page<N: DeserializeOwned>(mut data: Value) -> Result<Page<N>, PaginationError> {
    let connection = match data.get_mut("data") {
        Some(connection) if !connection.is_null() => connection.take(),
        _ => return Err(PaginationError::malformed("response has no `data` connection")),
    };

    serde_json::from_value(connection)
        .map_err(|e| PaginationError::malformed(format!("invalid `data` connection: {e}")))
}

/// Takes `data.edges[0].node.products` out of a nested re-fetch.
fn child_page<N>(data: Value) -> Result<Page<N::Child>, PaginationError>
where
    N: ChildCollection + DeserializeOwned,
{
    let page: Page<N> = parent_page(data)?;

    let parent = page
        .edges
        .into_iter()
        .next()
        .ok_or_else(|| PaginationError::malformed("nested request returned no parent edge"))?;

    parent
        .node
        .into_child_page()
        .ok_or_else(|| PaginationError::malformed("parent node has no `products` page"))
}

/// Sends one request and returns the response `data`.
///
/// The variables are sent as given; see [`PageVariables`] for the defaults
/// (`first = 100`, `firstProduct = 100`, no cursors).
///
/// # Errors
///
/// Returns the transport's [`GraphqlError`] unchanged.
pub async fn query_once<T>(
    client: &T,
    query: &str,
    variables: &PageVariables,
) -> Result<Value, GraphqlError>
where
    T: Transport + ?Sized,
{
    client.execute(query, variables).await
}

/// Fetches every page of the root connection and returns all nodes in
/// server order.
///
/// Starts after `after` (or at the beginning when `None`) and requests
/// `first` records per page. Nested collections are returned as the server
/// sent them; use [`query_collection_all`] to resolve them.
///
/// # Errors
///
/// - [`PaginationError::Request`] if any request fails
/// - [`PaginationError::MalformedResponse`] if a page lacks `data`, `edges`
///   or `pageInfo`, or a node does not deserialize as `N`
/// - [`PaginationError::PaginationCursor`] if a page says `hasNextPage`
///   without a cursor to resume from
///
/// No records are returned when any page fails.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_paginator::pagination::query_all;
///
/// let products: Vec<serde_json::Value> = query_all(&client, PRODUCTS_QUERY, 100, None).await?;
/// ```
pub async fn query_all<N, T>(
    client: &T,
    query: &str,
    first: u32,
    after: Option<String>,
) -> Result<Vec<N>, PaginationError>
where
    N: DeserializeOwned,
    T: Transport + ?Sized,
{
    walk(
        PageVariables::new(first, after),
        Level::Parent,
        move |variables| async move {
            let data = query_once(client, query, &variables).await?;
            let page = parent_page::<N>(data)?;
            Ok::<_, PaginationError>(PageStep::from_page(page, |edge| edge.node))
        },
    )
    .await
}

/// Like [`query_all`], but also pages through each node's nested `products`
/// connection until it is complete.
///
/// After each parent page, every node whose child page reports
/// `hasNextPage` is resolved with [`query_collection_products`]. Those
/// resolutions run concurrently and all finish before the next parent page
/// is requested.
///
/// The child re-fetch asks for one parent record (`first = 1`) positioned
/// after the *previous sibling's* cursor: the cursor of the edge just before
/// this node on the same parent page, or no cursor for the first edge. Its
/// children are then paged from the start, so the resolved list replaces the
/// partial one. The resolved page is marked `hasNextPage = false`, and any
/// selected `startCursor`/`endCursor`/`hasPreviousPage` are updated to match.
/// Nodes that need no resolution are returned as received.
///
/// # Errors
///
/// Same as [`query_all`], plus any error from a child resolution. The first
/// failing resolution aborts the whole walk.
pub async fn query_collection_all<N, T>(
    client: &T,
    query: &str,
    first: u32,
    after: Option<String>,
) -> Result<Vec<N>, PaginationError>
where
    N: ChildCollection + DeserializeOwned,
    T: Transport + ?Sized,
{
    walk(
        PageVariables::new(first, after),
        Level::Parent,
        move |variables| async move {
            let data = query_once(client, query, &variables).await?;
            let page = parent_page::<N>(data)?;

            let has_next_page = page.has_next_page();
            let last_cursor = page.last_cursor().map(str::to_owned);
            let sibling_cursors: Vec<Option<String>> = std::iter::once(None)
                .chain(page.edges.iter().map(|edge| Some(edge.cursor.clone())))
                .collect();

            let items = try_join_all(
                page.edges
                    .into_iter()
                    .zip(sibling_cursors)
                    .enumerate()
                    .map(|(index, (edge, sibling_cursor))| {
                        resolve_children(client, query, index, edge.node, sibling_cursor)
                    }),
            )
            .await?;

            Ok::<_, PaginationError>(PageStep {
                items,
                has_next_page,
                last_cursor,
            })
        },
    )
    .await
}

async fn resolve_children<N, T>(
    client: &T,
    query: &str,
    index: usize,
    mut node: N,
    sibling_cursor: Option<String>,
) -> Result<N, PaginationError>
where
    N: ChildCollection + DeserializeOwned,
    T: Transport + ?Sized,
{
    if !node.needs_child_pagination() {
        return Ok(node);
    }

    tracing::debug!(
        index,
        after = sibling_cursor.as_deref(),
        "Resolving nested products connection"
    );

    let edges = query_collection_products::<N, T>(
        client,
        query,
        NESTED_PARENT_PAGE_SIZE,
        sibling_cursor,
        DEFAULT_PRODUCT_PAGE_SIZE,
        None,
    )
    .await?;

    tracing::debug!(index, children = edges.len(), "Resolved nested products connection");

    if let Some(children) = node.child_page_mut() {
        children.complete_with(edges);
    }
    Ok(node)
}

/// Pages through the nested `products` connection of one parent record.
///
/// Every request sends `{first, after, firstProduct, afterProduct}`; only
/// `afterProduct` advances. The child page is read from
/// `data.edges[0].node.products`. Returns the child edges (with their
/// cursors) in server order.
///
/// # Errors
///
/// - [`PaginationError::Request`] if any request fails
/// - [`PaginationError::MalformedResponse`] if the response has no parent
///   edge or the parent node has no `products` page
/// - [`PaginationError::PaginationCursor`] if a child page says
///   `hasNextPage` without a cursor to resume from
pub async fn query_collection_products<N, T>(
    client: &T,
    query: &str,
    first: u32,
    after: Option<String>,
    first_product: u32,
    after_product: Option<String>,
) -> Result<Vec<Edge<N::Child>>, PaginationError>
where
    N: ChildCollection + DeserializeOwned,
    T: Transport + ?Sized,
{
    walk(
        PageVariables::new(first, after).with_products(first_product, after_product),
        Level::Child,
        move |variables| async move {
            let data = query_once(client, query, &variables).await?;
            let page = child_page::<N>(data)?;
            Ok::<_, PaginationError>(PageStep::from_page(page, |edge| edge))
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::CollectionNode;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Answers every request with the same response and counts calls.
    struct Repeating {
        response: Value,
        calls: Mutex<Vec<PageVariables>>,
    }

    impl Repeating {
        fn new(response: Value) -> Self {
            Self {
                response,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<PageVariables> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Transport for Repeating {
        async fn execute(
            &self,
            _query: &str,
            variables: &PageVariables,
        ) -> Result<Value, GraphqlError> {
            self.calls.lock().unwrap().push(variables.clone());
            Ok(self.response.clone())
        }
    }

    #[test]
    fn test_level_advances_its_own_cursor() {
        let mut variables = PageVariables::new(1, Some("p".to_string()));

        Level::Child.resume_after(&mut variables, "c1".to_string());
        assert_eq!(Level::Parent.cursor(&variables), Some("p"));
        assert_eq!(Level::Child.cursor(&variables), Some("c1"));

        Level::Parent.resume_after(&mut variables, "p2".to_string());
        assert_eq!(variables.after.as_deref(), Some("p2"));
        assert_eq!(variables.after_product.as_deref(), Some("c1"));
    }

    #[test]
    fn test_parent_page_requires_data_member() {
        let error = parent_page::<Value>(json!({"edges": []})).unwrap_err();
        assert!(matches!(error, PaginationError::MalformedResponse { .. }));

        let error = parent_page::<Value>(json!({"data": null})).unwrap_err();
        assert!(error.to_string().contains("no `data` connection"));
    }

    #[test]
    fn test_parent_page_reports_missing_fields() {
        let error =
            parent_page::<Value>(json!({"data": {"pageInfo": {"hasNextPage": false}}})).unwrap_err();
        assert!(error.to_string().contains("edges"));

        let error = parent_page::<Value>(json!({"data": {"edges": []}})).unwrap_err();
        assert!(error.to_string().contains("pageInfo"));
    }

    #[test]
    fn test_child_page_requires_parent_edge_and_products() {
        let empty = json!({"data": {"edges": [], "pageInfo": {"hasNextPage": false}}});
        let error = child_page::<CollectionNode>(empty).unwrap_err();
        assert!(error.to_string().contains("no parent edge"));

        let bare = json!({"data": {
            "edges": [{"node": {"title": "Sale"}, "cursor": "a"}],
            "pageInfo": {"hasNextPage": false}
        }});
        let error = child_page::<CollectionNode>(bare).unwrap_err();
        assert!(error.to_string().contains("no `products` page"));
    }

    #[test]
    fn test_child_page_extracts_first_parent_products() {
        let data = json!({"data": {
            "edges": [{"node": {"title": "Sale", "products": {
                "edges": [{"node": {"id": 7}, "cursor": "x"}],
                "pageInfo": {"hasNextPage": true}
            }}, "cursor": "a"}],
            "pageInfo": {"hasNextPage": true}
        }});

        let page = child_page::<CollectionNode>(data).unwrap();
        assert_eq!(page.last_cursor(), Some("x"));
        assert!(page.has_next_page());
    }

    #[tokio::test]
    async fn test_stalled_cursor_is_rejected() {
        let client = Repeating::new(json!({"data": {
            "edges": [{"node": {"id": 1}, "cursor": "same"}],
            "pageInfo": {"hasNextPage": true}
        }}));

        let result = query_all::<Value, _>(&client, "{}", 1, None).await;

        assert!(matches!(
            result,
            Err(PaginationError::PaginationCursor { .. })
        ));
        let calls = client.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].after.as_deref(), Some("same"));
    }

    #[tokio::test]
    async fn test_query_once_passes_variables_through() {
        let client = Repeating::new(json!({"data": {"edges": [], "pageInfo": {"hasNextPage": false}}}));
        let variables = PageVariables::new(3, Some("c".to_string())).with_products(5, None);

        let data = query_once(&client, "{}", &variables).await.unwrap();

        assert_eq!(data["data"]["pageInfo"]["hasNextPage"], false);
        assert_eq!(client.calls(), vec![variables]);
    }
}
