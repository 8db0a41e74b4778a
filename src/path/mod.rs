//! Dotted-path expression parser and evaluator.
//!
//! This module turns a path string into a sequence of typed access steps
//! and walks a decoded JSON document along them, one step at a time.
//!
//! # Supported Syntax
//!
//! - `key` - named property access
//! - `key[index]` - named property access followed by an array index
//! - `.` - chains steps, applied left to right
//!
//! # Examples
//!
//! ```
//! use jsonpluck::path::{parse, Evaluator};
//!
//! let document = serde_json::json!({"data": [1, 2, 3]});
//! let path = parse("data[0]").unwrap();
//! let value = Evaluator::new(&document).evaluate(&path.steps).unwrap();
//! assert_eq!(value, &serde_json::json!(1));
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod parser;

pub use ast::{AccessStep, JsonPath};
pub use error::{ParseError, ResolveError};
pub use evaluator::Evaluator;
pub use parser::parse;
