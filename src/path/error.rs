//! Error types for path parsing and resolution.

use std::fmt;

/// Errors that can occur while parsing a path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Bracket content in a segment is not a base-10 integer.
    MalformedIndex { segment: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedIndex { segment } => write!(
                f,
                "string between brackets is not a base-10 integer in '{}'",
                segment
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors that can occur while resolving a path against a document.
#[derive(Debug)]
pub enum ResolveError {
    /// The document is neither a top-level object nor a top-level array.
    Decode(serde_json::Error),
    /// The path expression itself is invalid.
    Parse(ParseError),
    /// A key lookup was applied to a non-object value.
    NotAnObject { key: String },
    /// The lookup key is absent from the current object.
    KeyNotFound { key: String },
    /// An index step's key resolved to a non-array value.
    NotAnArray { key: String },
    /// The index is negative or past the end of the array.
    IndexOutOfRange { key: String, index: i64, len: usize },
    /// The resolved value does not deserialize into the requested type.
    Convert(serde_json::Error),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::Decode(err) => {
                write!(f, "document is neither a JSON object nor a JSON array: {}", err)
            }
            ResolveError::Parse(err) => write!(f, "{}", err),
            ResolveError::NotAnObject { key } => {
                write!(f, "cannot look up key '{}': value is not an object", key)
            }
            ResolveError::KeyNotFound { key } => write!(f, "key '{}' does not exist", key),
            ResolveError::NotAnArray { key } => {
                write!(f, "cannot index into '{}': value is not an array", key)
            }
            ResolveError::IndexOutOfRange { key, index, len } => write!(
                f,
                "array '{}' does not have index {}, array length: {}",
                key, index, len
            ),
            ResolveError::Convert(err) => {
                write!(f, "resolved value does not match the requested type: {}", err)
            }
        }
    }
}

impl std::error::Error for ResolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResolveError::Decode(err) | ResolveError::Convert(err) => Some(err),
            ResolveError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseError> for ResolveError {
    fn from(err: ParseError) -> Self {
        ResolveError::Parse(err)
    }
}
