//! # FQL Expression Tree
//!
//! This module defines the Abstract Syntax Tree (AST) that the query surface
//! builds. Nothing here is evaluated locally: a finished [`Expr`] is rendered to
//! a JSON wire document and evaluated by the database server.
//!
//! ## Architecture Overview
//!
//! - **[expressions]** - The node shapes ([`Expr`], [`Call`], [`Object`])
//! - **[call]** - The function-call builder and the object/array literal constructors
//! - **[varargs]** - Collapsing "one value or an array of values" arguments
//!
//! ## Node Shapes
//!
//! Every node is one of four shapes:
//!
//! - **Literal** - a leaf [`Value`](crate::Value) such as `42`, `"bob"` or `{"@ts": ...}`
//! - **Call** - an ordered list of named fields; the first field names the remote function
//! - **Array** - an ordered list of nodes
//! - **Object** - an ordered map of user keys, only ever found inside `{"object": ...}`
//!   or as the bindings of `let`
//!
//! ```text
//! add(1, 2)                  -> {"add": [1, 2]}
//! obj([("let", 1)])          -> {"object": {"let": 1}}
//! let a = 1 in var(a)        -> {"let": {"a": 1}, "in": {"var": "a"}}
//! ```
//!
//! ### Why objects are wrapped
//!
//! A bare JSON object on the wire is read by the server as a function call. A
//! user map with a key named `let` or `object` would then be misread as a control
//! node, so user maps are always nested one level inside the reserved `object`
//! call. The [`Object`] literal has no public constructor and the
//! `Expr::Object` variant cannot be built outside this crate, so the only way to
//! produce one is through [`obj`] or [`let_`](crate::query::let_).
//!
//! ### Field Order
//!
//! Call fields and object keys render in construction order. No node stores its
//! fields in an unordered container, so the same construction always renders to
//! the same bytes.
pub mod call;
pub mod expressions;
pub mod varargs;

pub use call::{CallBuilder, OBJECT_WRAPPER, arr, call, obj};
pub use expressions::{Call, Expr, Object};
pub use varargs::varargs;
