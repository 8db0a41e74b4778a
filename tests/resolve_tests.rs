use jsonpluck::{resolve, resolve_as, ParseError, ResolveError};
use serde::Deserialize;
use serde_json::json;

#[test]
fn test_resolve_single_key() {
    let body = br#"{"body": "this is value of key body"}"#;
    let value = resolve("body", body).unwrap();
    assert_eq!(value, json!("this is value of key body"));
}

#[test]
fn test_resolve_array_index() {
    let body = br#"{"data": [1, 2, 3]}"#;
    let value = resolve("data[0]", body).unwrap();
    assert_eq!(value, json!(1));
}

#[test]
fn test_resolve_nested_objects() {
    let body = br#"{"project": {"user": "adam"}}"#;
    let value = resolve("project.user", body).unwrap();
    assert_eq!(value, json!("adam"));
}

#[test]
fn test_resolve_nested_objects_with_sibling_keys() {
    let body = br#"{"project": {"anotherKey": 1, "user": "adam"}}"#;
    let value = resolve("project.user", body).unwrap();
    assert_eq!(value, json!("adam"));
}

#[test]
fn test_resolve_object_with_array() {
    let body = br#"{"project": {"user": [{"name": "abc"}, {"name": "cde"}]}}"#;
    let value = resolve("project.user[1].name", body).unwrap();
    assert_eq!(value, json!("cde"));
}

#[test]
fn test_resolve_top_level_array() {
    let body = br#"[{"name": "xxx"}, {"name": "yyy"}]"#;
    assert_eq!(resolve("root[0].name", body).unwrap(), json!("xxx"));
    assert_eq!(resolve("root[1].name", body).unwrap(), json!("yyy"));
}

#[test]
fn test_chained_steps_compose() {
    let body = br#"{"a": {"b": [{"c": 1}, {"c": 2}]}}"#;

    let full = resolve("a.b[1].c", body).unwrap();

    // Resolving the prefix and then the remainder must give the same value.
    let prefix = resolve("a.b[1]", body).unwrap();
    let remainder = jsonpluck::Evaluator::new(&prefix)
        .evaluate(&jsonpluck::path::parse("c").unwrap().steps)
        .unwrap();

    assert_eq!(&full, remainder);
    assert_eq!(full, json!(2));
}

#[test]
fn test_index_bounds() {
    let body = br#"{"data": [10, 20, 30]}"#;

    for (i, expected) in [(0, 10), (1, 20), (2, 30)] {
        let value = resolve(&format!("data[{}]", i), body).unwrap();
        assert_eq!(value, json!(expected));
    }

    let err = resolve("data[3]", body).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::IndexOutOfRange { ref key, index: 3, len: 3 } if key == "data"
    ));

    let err = resolve("data[-1]", body).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::IndexOutOfRange { index: -1, len: 3, .. }
    ));
}

#[test]
fn test_malformed_index_rejected_before_traversal() {
    // The path fails to parse whether or not `data` exists.
    let err = resolve("data[x]", br#"{"data": [1]}"#).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::Parse(ParseError::MalformedIndex { ref segment }) if segment == "data[x]"
    ));

    let err = resolve("data[x]", br#"{"other": true}"#).unwrap_err();
    assert!(matches!(err, ResolveError::Parse(_)));
}

#[test]
fn test_missing_key_rejected() {
    let err = resolve("missing", br#"{"present": 1}"#).unwrap_err();
    assert!(matches!(err, ResolveError::KeyNotFound { ref key } if key == "missing"));
    assert!(err.to_string().contains("missing"));
}

#[test]
fn test_lookup_on_scalar_rejected() {
    let err = resolve("a.b", br#"{"a": 42}"#).unwrap_err();
    assert!(matches!(err, ResolveError::NotAnObject { ref key } if key == "b"));
}

#[test]
fn test_index_into_object_rejected() {
    let err = resolve("a[0]", br#"{"a": {"b": 1}}"#).unwrap_err();
    assert!(matches!(err, ResolveError::NotAnArray { ref key } if key == "a"));
}

#[test]
fn test_scalar_document_rejected() {
    let err = resolve("body", b"42").unwrap_err();
    assert!(matches!(err, ResolveError::Decode(_)));
}

#[test]
fn test_invalid_document_rejected() {
    let err = resolve("body", b"{not json at all").unwrap_err();
    assert!(matches!(err, ResolveError::Decode(_)));
}

#[test]
fn test_trailing_characters_after_bracket_ignored() {
    let body = br#"{"data": [10, 20, 30]}"#;
    let value = resolve("data[1]xyz", body).unwrap();
    assert_eq!(value, json!(20));
}

#[test]
fn test_unbalanced_bracket_treated_as_key() {
    let body = br#"{"data[1": "literal"}"#;
    let value = resolve("data[1", body).unwrap();
    assert_eq!(value, json!("literal"));
}

#[test]
fn test_empty_expression_fails_at_lookup() {
    let err = resolve("", br#"{"present": 1}"#).unwrap_err();
    assert!(matches!(err, ResolveError::KeyNotFound { ref key } if key.is_empty()));
}

#[test]
fn test_resolve_as_scalar() {
    let count: u32 = resolve_as("data[0]", br#"{"data": [1, 2, 3]}"#).unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_resolve_as_struct() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        name: String,
    }

    let body = br#"{"project": {"user": [{"name": "abc"}, {"name": "cde"}]}}"#;
    let user: User = resolve_as("project.user[1]", body).unwrap();
    assert_eq!(
        user,
        User {
            name: "cde".to_string(),
        }
    );
}

#[test]
fn test_resolve_as_type_mismatch() {
    let err = resolve_as::<u32>("body", br#"{"body": "text"}"#).unwrap_err();
    assert!(matches!(err, ResolveError::Convert(_)));
}
