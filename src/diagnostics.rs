//! Human-readable rendering of request failures.
//!
//! The library never prints anything itself. Callers that want a quick
//! diagnostic can pass a failed walk's error to [`print_graphql_error`], or
//! use [`render_graphql_error`] to get the text.
//!
//! The layout is indented `key: value` lines with `- ` list items, with
//! multi-line strings (such as the query document) set between `"""`
//! fences:
//!
//! ```text
//! -
//!   message: Throttled
//! query:
//!   """
//!     { shop { name } }
//!   """
//! variables:
//!   first:        100
//!   firstProduct: 100
//! ```

use std::io::IsTerminal;

use colored::Colorize;
use serde_json::Value;

use crate::clients::graphql::GraphqlError;
use crate::pagination::PaginationError;

/// Rendering options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Paint keys and list dashes red.
    ///
    /// Painting goes through `colored`, so its global switches
    /// (`NO_COLOR`, `CLICOLOR_FORCE`, `colored::control::set_override`)
    /// still have the last word.
    pub color: bool,
}

impl RenderOptions {
    /// No escape sequences.
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// Red keys and dashes.
    #[must_use]
    pub const fn colored() -> Self {
        Self { color: true }
    }
}

/// Renders a failed request.
///
/// For [`GraphqlError::Response`] the server's `errors` list comes first.
/// For [`GraphqlError::Http`] the error message comes first. Both are
/// followed by the request that failed (query and variables).
///
/// # Example
///
/// ```rust
/// use storefront_paginator::clients::graphql::{GraphqlError, GraphqlErrorEntry, GraphqlRequest};
/// use storefront_paginator::diagnostics::{render_graphql_error, RenderOptions};
/// use storefront_paginator::pagination::PageVariables;
///
/// let error = GraphqlError::Response {
///     errors: vec![GraphqlErrorEntry::new("Throttled")],
///     request: Box::new(GraphqlRequest::new("{ shop { name } }", PageVariables::default())),
/// };
///
/// let text = render_graphql_error(&error, RenderOptions::plain());
/// assert!(text.starts_with("- \n  message: Throttled\n"));
/// ```
#[must_use]
pub fn render_graphql_error(error: &GraphqlError, options: RenderOptions) -> String {
    let mut renderer = Renderer::new(options);

    match error {
        GraphqlError::Response { errors, .. } => {
            renderer.value(&serde_json::to_value(errors).unwrap_or(Value::Null), 0);
        }
        GraphqlError::Http { .. } => {
            renderer.line(0, &error.to_string());
        }
    }

    renderer.value(
        &serde_json::to_value(error.request()).unwrap_or(Value::Null),
        0,
    );

    renderer.finish()
}

/// Writes a pagination failure to stderr.
///
/// Request failures are rendered with [`render_graphql_error`], coloured
/// when stderr is a terminal. Other failures print their message.
pub fn print_graphql_error(error: &PaginationError) {
    match error.as_request_error() {
        Some(request_error) => {
            let options = RenderOptions {
                color: std::io::stderr().is_terminal(),
            };
            eprintln!("{}", render_graphql_error(request_error, options));
        }
        None => eprintln!("{error}"),
    }
}

struct Renderer {
    color: bool,
    lines: Vec<String>,
}

impl Renderer {
    const fn new(options: RenderOptions) -> Self {
        Self {
            color: options.color,
            lines: Vec::new(),
        }
    }

    fn finish(self) -> String {
        self.lines.join("\n")
    }

    fn paint(&self, text: &str) -> String {
        if self.color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    fn line(&mut self, indent: usize, text: &str) {
        self.lines.push(format!("{}{text}", " ".repeat(indent)));
    }

    fn value(&mut self, value: &Value, indent: usize) {
        match value {
            Value::Object(map) if !map.is_empty() => {
                let width = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);
                for (key, item) in map {
                    let label = self.paint(&format!("{key}:"));
                    let pad = " ".repeat(width - key.chars().count());
                    self.entry(indent, &label, &pad, item);
                }
            }
            Value::Array(items) if !items.is_empty() => {
                let dash = self.paint("-");
                for item in items {
                    self.entry(indent, &dash, "", item);
                }
            }
            Value::String(text) if text.contains('\n') => self.block(indent, text),
            scalar => self.line(indent, &scalar_text(scalar)),
        }
    }

    fn entry(&mut self, indent: usize, label: &str, pad: &str, item: &Value) {
        if is_nested(item) {
            self.line(indent, &format!("{label} "));
            self.value(item, indent + 2);
        } else {
            self.line(indent, &format!("{label} {pad}{}", scalar_text(item)));
        }
    }

    fn block(&mut self, indent: usize, text: &str) {
        self.line(indent, "\"\"\"");
        for line in text.lines() {
            self.line(indent + 2, line);
        }
        self.line(indent, "\"\"\"");
    }
}

fn is_nested(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::String(text) => text.contains('\n'),
        _ => false,
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(_) => "(empty array)".to_string(),
        Value::Object(_) => "(empty object)".to_string(),
        other => other.to_string(),
    }
}
