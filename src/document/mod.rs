//! Decoding of raw document bytes into a mapping-rooted tree.
//!
//! A document may be a JSON object or a JSON array at the top level. A
//! top-level array is wrapped in a synthetic single-entry object under
//! the reserved `root` key, so expressions like `root[0].name` address
//! it through the same evaluator contract as an object document.

use serde_json::{Map, Value};

use crate::path::ResolveError;

/// Reserved key under which a top-level array is exposed.
pub const ROOT_KEY: &str = "root";

/// Decodes raw bytes into a mapping-rooted document value.
///
/// Tries a top-level object first, then a top-level array wrapped under
/// [`ROOT_KEY`]. Only one branch runs per call; if neither shape
/// matches, the underlying decode failure is returned as
/// [`ResolveError::Decode`].
///
/// # Example
///
/// ```
/// use jsonpluck::document::decode;
///
/// let document = decode(br#"[{"name": "xxx"}]"#).unwrap();
/// assert!(document.get("root").is_some());
/// ```
pub fn decode(body: &[u8]) -> Result<Value, ResolveError> {
    if let Ok(entries) = serde_json::from_slice::<Map<String, Value>>(body) {
        return Ok(Value::Object(entries));
    }

    match serde_json::from_slice::<Vec<Value>>(body) {
        Ok(items) => {
            let mut wrapper = Map::new();
            wrapper.insert(ROOT_KEY.to_string(), Value::Array(items));
            Ok(Value::Object(wrapper))
        }
        Err(err) => Err(ResolveError::Decode(err)),
    }
}

/// Decodes a document from a string slice. See [`decode`].
pub fn decode_str(body: &str) -> Result<Value, ResolveError> {
    decode(body.as_bytes())
}
