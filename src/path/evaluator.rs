use serde_json::Value;

use super::ast::AccessStep;
use super::error::ResolveError;

/// Walks a decoded document along a sequence of access steps.
///
/// The evaluator borrows the document root and never mutates it; each
/// call to [`evaluate`](Evaluator::evaluate) is an independent
/// left-to-right walk.
pub struct Evaluator<'a> {
    root: &'a Value,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value) -> Self {
        Evaluator { root }
    }

    /// Applies `steps` left to right and returns the final value.
    ///
    /// An empty step sequence returns the root unchanged. Every step
    /// starts with a key lookup in the current value; index steps then
    /// index into the looked-up array. The first step that cannot be
    /// satisfied aborts the walk with an error naming the offending key
    /// or index; later steps are never attempted.
    pub fn evaluate(&self, steps: &[AccessStep]) -> Result<&'a Value, ResolveError> {
        let mut current = self.root;

        for step in steps {
            current = match step {
                AccessStep::Key(key) => self.lookup_key(current, key)?,
                AccessStep::Index { key, index } => {
                    let found = self.lookup_key(current, key)?;
                    self.index_array(found, key, *index)?
                }
            };
        }

        Ok(current)
    }

    /// Looks up `key` in `current`, which must be an object.
    fn lookup_key(&self, current: &'a Value, key: &str) -> Result<&'a Value, ResolveError> {
        match current {
            Value::Object(entries) => entries.get(key).ok_or_else(|| ResolveError::KeyNotFound {
                key: key.to_string(),
            }),
            _ => Err(ResolveError::NotAnObject {
                key: key.to_string(),
            }),
        }
    }

    /// Indexes into `value`, which must be an array with `index` in bounds.
    fn index_array(&self, value: &'a Value, key: &str, index: i64) -> Result<&'a Value, ResolveError> {
        let items = match value {
            Value::Array(items) => items,
            _ => {
                return Err(ResolveError::NotAnArray {
                    key: key.to_string(),
                })
            }
        };

        match usize::try_from(index) {
            Ok(i) if i < items.len() => Ok(&items[i]),
            _ => Err(ResolveError::IndexOutOfRange {
                key: key.to_string(),
                index,
                len: items.len(),
            }),
        }
    }
}
