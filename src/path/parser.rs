//! Path expression parser.
//!
//! An expression is split on `.` into segments. A segment containing a
//! bracket pair denotes an indexed access (`user[1]`); any other segment
//! is a plain key lookup. Splitting preserves empty segments, so `a..b`
//! produces an empty-key step in the middle that will fail at lookup
//! time rather than being collapsed away.

use super::ast::{AccessStep, JsonPath};
use super::error::ParseError;

/// Parses a path expression into a sequence of access steps.
///
/// The only parse failure is [`ParseError::MalformedIndex`], raised when
/// the text between a segment's brackets is not a base-10 integer. A
/// segment with only one of `[` / `]` is treated as a plain key.
///
/// # Example
///
/// ```
/// use jsonpluck::path::{parse, AccessStep};
///
/// let path = parse("project.user[1]").unwrap();
/// assert_eq!(path.steps.len(), 2);
/// assert_eq!(path.steps[0], AccessStep::Key("project".to_string()));
/// assert_eq!(
///     path.steps[1],
///     AccessStep::Index { key: "user".to_string(), index: 1 }
/// );
/// ```
pub fn parse(expr: &str) -> Result<JsonPath, ParseError> {
    let mut steps = Vec::new();

    for segment in expr.split('.') {
        steps.push(parse_segment(segment)?);
    }

    Ok(JsonPath::new(steps))
}

/// Parses one dot-separated segment into an access step.
fn parse_segment(segment: &str) -> Result<AccessStep, ParseError> {
    if let (Some(open), Some(close)) = (segment.find('['), segment.find(']')) {
        // An inverted pair (']' before '[') yields no inner text and is
        // rejected the same way as non-numeric bracket content.
        let inner = segment.get(open + 1..close).unwrap_or("");
        let index: i64 = inner.parse().map_err(|_| ParseError::MalformedIndex {
            segment: segment.to_string(),
        })?;

        // Trailing characters after the closing bracket are ignored.
        return Ok(AccessStep::Index {
            key: segment[..open].to_string(),
            index,
        });
    }

    Ok(AccessStep::Key(segment.to_string()))
}
