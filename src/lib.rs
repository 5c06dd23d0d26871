//! Longest Common Subsequence over JSON arrays.
//!
//! Elements are matched with structural `serde_json::Value` equality, so two
//! objects match when they have the same keys and values regardless of key
//! order in the source text.

mod error;

use anyhow::Context;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use tracing::debug;

pub use error::{JsonLcsError, Side};
pub use lcs::{
    backtrack_lcs, backtrack_lcs_indices, compute_lcs, compute_lcs_matrix, lcs_indices,
    try_backtrack_lcs, LcsError, LcsTable, MatchedPair,
};

pub fn read_json_str(s: &str) -> serde_json::Result<Value> {
    let v: Value = serde_json::from_str(s)?;
    Ok(v)
}

pub fn read_json_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Value> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(f);
    let v = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse {} as JSON", path.display()))?;
    Ok(v)
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn into_array(v: Value, side: Side) -> Result<Vec<Value>, JsonLcsError> {
    match v {
        Value::Array(arr) => Ok(arr),
        other => Err(JsonLcsError::NotAnArray {
            side,
            found: json_type_name(&other),
        }),
    }
}

fn to_owned_pairs(pairs: Vec<MatchedPair<&Value>>) -> Vec<MatchedPair<Value>> {
    pairs.iter().map(|p| p.cloned()).collect()
}

/// LCS of two JSON arrays, matching elements by value.
pub fn lcs_json<'a>(original: &'a [Value], modified: &'a [Value]) -> Vec<MatchedPair<&'a Value>> {
    compute_lcs(original, modified, |a, b| a == b)
}

/// Parses two JSON documents, each of which must be an array, and returns the
/// LCS of their elements.
pub fn lcs_json_str(s0: &str, s1: &str) -> Result<Vec<MatchedPair<Value>>, JsonLcsError> {
    let arr0 = into_array(read_json_str(s0)?, Side::Original)?;
    let arr1 = into_array(read_json_str(s1)?, Side::Modified)?;
    let pairs = to_owned_pairs(lcs_json(&arr0, &arr1));
    debug!(
        original_len = arr0.len(),
        modified_len = arr1.len(),
        matched = pairs.len(),
        "computed lcs of json arrays"
    );
    Ok(pairs)
}

/// Like [`lcs_json_str`], reading both documents from files.
pub fn lcs_json_files<P0, P1>(p0: P0, p1: P1) -> anyhow::Result<Vec<MatchedPair<Value>>>
where
    P0: AsRef<std::path::Path>,
    P1: AsRef<std::path::Path>,
{
    let (p0, p1) = (p0.as_ref(), p1.as_ref());
    let arr0 = into_array(read_json_file(p0)?, Side::Original)
        .with_context(|| format!("in {}", p0.display()))?;
    let arr1 = into_array(read_json_file(p1)?, Side::Modified)
        .with_context(|| format!("in {}", p1.display()))?;
    let pairs = to_owned_pairs(lcs_json(&arr0, &arr1));
    debug!(
        original = %p0.display(),
        modified = %p1.display(),
        matched = pairs.len(),
        "computed lcs of json files"
    );
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use crate::{lcs_json, lcs_json_str, read_json_str, JsonLcsError, MatchedPair, Side};
    use serde_json::json;
    use serde_json::Value;

    fn arr(s: &str) -> Vec<Value> {
        match read_json_str(s) {
            Ok(Value::Array(a)) => a,
            other => panic!("expected an array, got {:?}", other),
        }
    }

    #[test]
    fn test_numbers_lcs() {
        let a = arr("[1, 2, 3, 6, 7, 8, 9, 10]");
        let b = arr("[0, 1, 3, 7, 8, 9, 13]");
        let pairs = lcs_json(&a, &b);
        let values: Vec<&Value> = pairs.iter().map(|p| p.original).collect();
        assert_eq!(values, vec![&json!(1), &json!(3), &json!(7), &json!(8), &json!(9)]);
    }

    #[test]
    fn test_objects_match_structurally() {
        let a = arr(r#"[{"a": 1, "b": 2}, "x", null]"#);
        let b = arr(r#"[null, {"b": 2, "a": 1}, "x"]"#);
        let pairs = lcs_json(&a, &b);
        assert_eq!(
            pairs,
            vec![
                MatchedPair::new(&json!({"a": 1, "b": 2}), &json!({"a": 1, "b": 2})),
                MatchedPair::new(&json!("x"), &json!("x")),
            ]
        );
    }

    #[test]
    fn test_numbers_of_different_repr_do_not_match() {
        let pairs = lcs_json_str("[1, 2]", "[1.0, 2]").unwrap();
        assert_eq!(pairs, vec![MatchedPair::new(json!(2), json!(2))]);
    }

    #[test]
    fn test_not_an_array() {
        let err = lcs_json_str("[1]", r#"{"a": 1}"#).unwrap_err();
        match err {
            JsonLcsError::NotAnArray { side, found } => {
                assert_eq!(side, Side::Modified);
                assert_eq!(found, "object");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json() {
        let err = lcs_json_str("[1,", "[]").unwrap_err();
        assert!(matches!(err, JsonLcsError::Parse(_)));
    }
}
