//! Pluck single values out of JSON documents with dotted path expressions.
//!
//! jsonpluck is aimed at test harnesses and assertion tooling that need
//! to pull one field out of an arbitrary response body without writing
//! traversal code per document shape. A path expression is parsed into
//! typed access steps, the document is decoded into a generic tree, and
//! the steps are applied left to right until a value is found or a step
//! cannot be satisfied.
//!
//! # Supported Syntax
//!
//! - `key` - named property access
//! - `key[index]` - named property access followed by an array index
//! - `a.b[2].c` - chained access, left to right
//! - `root[0]` - a top-level array document is addressable through the
//!   reserved `root` key
//!
//! # Examples
//!
//! ```
//! let body = br#"{"project": {"user": [{"name": "abc"}, {"name": "cde"}]}}"#;
//!
//! let value = jsonpluck::resolve("project.user[1].name", body).unwrap();
//! assert_eq!(value, serde_json::json!("cde"));
//!
//! let name: String = jsonpluck::resolve_as("project.user[0].name", body).unwrap();
//! assert_eq!(name, "abc");
//! ```
//!
//! Resolution is all-or-nothing: the first step that fails aborts the
//! walk with a [`ResolveError`] naming the offending key or index.

pub mod document;
pub mod path;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use path::{AccessStep, Evaluator, JsonPath, ParseError, ResolveError};

/// Resolves a path expression against a serialized JSON document.
///
/// The document must be a JSON object or a JSON array at the top level;
/// arrays are addressed through the reserved `root` key (see
/// [`document::decode`]).
///
/// # Example
///
/// ```
/// let value = jsonpluck::resolve("data[0]", br#"{"data": [1, 2, 3]}"#).unwrap();
/// assert_eq!(value, serde_json::json!(1));
/// ```
///
/// # Errors
///
/// Returns a [`ResolveError`] if the document does not decode, the
/// expression does not parse, or any access step cannot be satisfied.
pub fn resolve(expr: &str, body: &[u8]) -> Result<Value, ResolveError> {
    let document = document::decode(body)?;
    let path = path::parse(expr)?;
    let found = Evaluator::new(&document).evaluate(&path.steps)?;
    Ok(found.clone())
}

/// Resolves a path expression and deserializes the result into `T`.
///
/// Convenience for assertion code that wants a concrete type rather
/// than a [`Value`].
///
/// # Example
///
/// ```
/// let count: u32 = jsonpluck::resolve_as("data[2]", br#"{"data": [1, 2, 3]}"#).unwrap();
/// assert_eq!(count, 3);
/// ```
///
/// # Errors
///
/// Returns any error [`resolve`] returns, or
/// [`ResolveError::Convert`] when the resolved value does not
/// deserialize into `T`.
pub fn resolve_as<T: DeserializeOwned>(expr: &str, body: &[u8]) -> Result<T, ResolveError> {
    let value = resolve(expr, body)?;
    serde_json::from_value(value).map_err(ResolveError::Convert)
}
