//! Path expression building blocks.

/// One parsed unit of traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessStep {
    /// Named property access (`user`).
    Key(String),
    /// Named property access followed by an array index (`user[1]`).
    Index { key: String, index: i64 },
}

impl AccessStep {
    /// Returns the lookup key for this step.
    pub fn key(&self) -> &str {
        match self {
            AccessStep::Key(key) => key,
            AccessStep::Index { key, .. } => key,
        }
    }
}

/// A complete path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    /// Steps that make up the path, applied left to right.
    pub steps: Vec<AccessStep>,
}

impl JsonPath {
    /// Creates a new JsonPath with the given steps.
    pub fn new(steps: Vec<AccessStep>) -> Self {
        Self { steps }
    }
}
