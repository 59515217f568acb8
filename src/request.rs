//! Preparing finished expressions for submission.
//!
//! The transport itself lives outside this crate: anything that can send a
//! [`Request`] and hand back a response implements [`Transport`].

use tracing::trace;

use crate::ast::Expr;
use crate::error::Result;
use crate::output::{JsonPrinter, to_document};

/// Options for rendering a request body
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Pretty-print the body
    pub pretty: bool,
}

/// A rendered query, ready to hand to a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    document: serde_json::Value,
    body: String,
}

impl Request {
    /// The wire document with keys in construction order.
    ///
    /// A JSON object value holds each key once, so a call built with the same
    /// field name twice keeps only the last occurrence here, while
    /// [`Request::body`] keeps every occurrence. Submit the body; use the
    /// document for inspection.
    pub fn document(&self) -> &serde_json::Value {
        &self.document
    }

    /// The rendered JSON body, exactly as the server receives it.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

/// Renders an expression into a [`Request`].
pub fn prepare(expr: &Expr, options: &RequestOptions) -> Result<Request> {
    let body = JsonPrinter::new(options.pretty).print(expr)?;
    let document = to_document(expr)?;
    trace!(bytes = body.len(), pretty = options.pretty, "prepared query request");
    Ok(Request { document, body })
}

/// Sends prepared requests to the database server.
pub trait Transport {
    type Response;
    type Error;

    fn submit(&self, request: &Request) -> std::result::Result<Self::Response, Self::Error>;
}
