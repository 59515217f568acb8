//! # Query Language Surface
//!
//! One constructor per remote function. Each constructor only assembles an
//! [`Expr`](crate::Expr); evaluation happens on the server.
//!
//! Import everything with `use fql_builder::query::*;` and compose:
//!
//! ```
//! use fql_builder::query::*;
//! use fql_builder::output::to_json;
//!
//! let expr = create(
//!     class("users"),
//!     obj([("data", obj([("name", "bob"), ("password", "abc123")]))]),
//! );
//!
//! assert_eq!(
//!     to_json(&expr).unwrap(),
//!     r#"{"create":{"class":"users"},"params":{"object":{"data":{"object":{"name":"bob","password":"abc123"}}}}}"#
//! );
//! ```
//!
//! ## Conventions
//!
//! - Arguments take `impl Into<Expr>`, so strings, integers, booleans, leaf
//!   [`Value`](crate::Value)s and other expressions can be passed directly.
//!   Doubles go through [`Value::double`](crate::Value::double) because
//!   non-finite floats are rejected.
//! - Functions accepting "one or many" values take any iterable and collapse
//!   a single element to the element itself (see [`varargs`](crate::ast::varargs)).
//! - Names that clash with Rust keywords carry a trailing underscore:
//!   [`let_`], [`if_`], [`do_`], [`match_`], [`ref_`].
//! - Closure-taking shorthands ([`map_fn`], [`filter_fn`], [`foreach_fn`],
//!   [`join_fn`]) draw parameter names from
//!   [`SymbolGenerator::global`](crate::SymbolGenerator::global); use
//!   [`lambda`](crate::lambda) to supply a generator explicitly.
pub mod auth;
pub mod basic;
pub mod collections;
pub mod conversion;
pub mod logic;
pub mod math;
pub mod misc;
pub mod read;
pub mod sets;
pub mod strings;
pub mod time;
pub mod values;
pub mod write;

pub use auth::*;
pub use basic::*;
pub use collections::*;
pub use conversion::*;
pub use logic::*;
pub use math::*;
pub use misc::*;
pub use read::*;
pub use sets::*;
pub use strings::*;
pub use time::*;
pub use values::*;
pub use write::*;
