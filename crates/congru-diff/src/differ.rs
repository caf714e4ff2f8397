//! The recursive structural comparison.
//!
//! Sequences compare element-by-element by positional index alone; keyed
//! collections compare over the union of their keys. A matcher found in
//! the expected structure replaces comparison at that node. A location
//! missing from the actual value is always reported as removed, even when
//! the expected value there is a matcher: presence is checked before
//! delegation.

use std::collections::BTreeMap;

use congru_value::{Key, Path, Value};

use crate::entry::{Diff, DiffEntry};
use crate::error::{DiffError, DiffResult};
use crate::options::DiffOptions;

/// Compare `expected` against `actual`, rooted at `base`.
///
/// Returns every discrepancy as a flat list of path-addressed entries, in
/// traversal order; [`crate::render_diff`] owns the final ordering. An
/// empty diff means the values are structurally equivalent.
///
/// With default options this cannot fail; [`DiffError::MaxDepthExceeded`]
/// is reachable only through an explicit depth guard.
pub fn diff(
    expected: &Value,
    actual: &Value,
    base: &Path,
    options: &DiffOptions,
) -> DiffResult<Diff> {
    tracing::trace!(
        expected = ?expected.kind(),
        actual = ?actual.kind(),
        "structural comparison"
    );

    let mut entries = Vec::new();
    diff_value(expected, actual, base, 0, options, &mut entries)?;
    Ok(Diff { entries })
}

/// The element rule, applied at every node of the walk.
fn diff_value(
    expected: &Value,
    actual: &Value,
    path: &Path,
    depth: usize,
    options: &DiffOptions,
    out: &mut Vec<DiffEntry>,
) -> DiffResult<()> {
    match (expected, actual) {
        (Value::Matcher(matcher), _) => {
            if !matcher.matches(actual) {
                out.push(DiffEntry::Changed {
                    path: path.clone(),
                    expected: expected.clone(),
                    actual: actual.clone(),
                });
            }
            Ok(())
        }
        (Value::Sequence(exp), Value::Sequence(act)) => {
            guard_depth(depth + 1, options)?;
            diff_sequences(exp, act, path, depth + 1, options, out)
        }
        (Value::Map(exp), Value::Map(act)) => {
            guard_depth(depth + 1, options)?;
            diff_maps(exp, act, path, depth + 1, options, out)
        }
        // Category mismatch or plain scalars: no recursion, one equality check.
        _ => {
            if expected != actual {
                out.push(DiffEntry::Changed {
                    path: path.clone(),
                    expected: expected.clone(),
                    actual: actual.clone(),
                });
            }
            Ok(())
        }
    }
}

/// Positional sequence comparison over `0..max(len)`. No reordering and no
/// edit-distance alignment: a rotated sequence reports a change at every
/// affected index.
fn diff_sequences(
    expected: &[Value],
    actual: &[Value],
    path: &Path,
    depth: usize,
    options: &DiffOptions,
    out: &mut Vec<DiffEntry>,
) -> DiffResult<()> {
    let max = expected.len().max(actual.len());
    for i in 0..max {
        let slot = path.push(i);
        if i >= actual.len() {
            out.push(DiffEntry::Removed {
                path: slot,
                expected: expected[i].clone(),
            });
        } else if i >= expected.len() {
            out.push(DiffEntry::Added {
                path: slot,
                actual: actual[i].clone(),
            });
        } else {
            diff_value(&expected[i], &actual[i], &slot, depth, options, out)?;
        }
    }
    Ok(())
}

/// Keyed-collection comparison over the union of both key sets.
fn diff_maps(
    expected: &BTreeMap<Key, Value>,
    actual: &BTreeMap<Key, Value>,
    path: &Path,
    depth: usize,
    options: &DiffOptions,
    out: &mut Vec<DiffEntry>,
) -> DiffResult<()> {
    // Removed and changed locations.
    for (key, exp_val) in expected {
        let slot = path.push(key.clone());
        match actual.get(key) {
            Some(act_val) => {
                diff_value(exp_val, act_val, &slot, depth, options, out)?;
            }
            None => {
                out.push(DiffEntry::Removed {
                    path: slot,
                    expected: exp_val.clone(),
                });
            }
        }
    }

    // Added locations.
    for (key, act_val) in actual {
        if !expected.contains_key(key) {
            out.push(DiffEntry::Added {
                path: path.push(key.clone()),
                actual: act_val.clone(),
            });
        }
    }

    Ok(())
}

fn guard_depth(depth: usize, options: &DiffOptions) -> DiffResult<()> {
    match options.max_depth {
        Some(limit) if depth > limit => Err(DiffError::MaxDepthExceeded { limit }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use congru_value::{Matcher, Scalar};
    use serde_json::json;

    struct IsInteger;

    impl Matcher for IsInteger {
        fn description(&self) -> String {
            "be an integer".to_string()
        }

        fn matches(&self, actual: &Value) -> bool {
            matches!(actual, Value::Scalar(Scalar::Int(_)))
        }
    }

    fn diff_values(expected: &Value, actual: &Value) -> Diff {
        diff(expected, actual, &Path::root(), &DiffOptions::default())
            .expect("unbounded comparison cannot fail")
    }

    #[test]
    fn identical_sequences_no_diff() {
        let value = Value::from(json!(["ichi", "ni", "san"]));
        assert!(diff_values(&value, &value).is_empty());
    }

    #[test]
    fn missing_index_is_removed() {
        let expected = Value::from(json!(["ichi", "ni", "san"]));
        let actual = Value::from(json!(["ichi", "san"]));

        let diff = diff_values(&expected, &actual);
        // Positional comparison: index 1 changes and index 2 is removed.
        assert_eq!(diff.changes(), 1);
        assert_eq!(diff.removals(), 1);
        match &diff.entries[1] {
            DiffEntry::Removed { path, expected } => {
                assert_eq!(path.to_string(), "2");
                assert_eq!(*expected, Value::from("san"));
            }
            other => panic!("expected Removed, got {:?}", other),
        }
    }

    #[test]
    fn trailing_removal_only() {
        let expected = Value::from(json!(["ichi", "ni"]));
        let actual = Value::from(json!(["ichi"]));

        let diff = diff_values(&expected, &actual);
        assert_eq!(diff.len(), 1);
        match &diff.entries[0] {
            DiffEntry::Removed { path, expected } => {
                assert_eq!(path.to_string(), "1");
                assert_eq!(*expected, Value::from("ni"));
            }
            other => panic!("expected Removed, got {:?}", other),
        }
    }

    #[test]
    fn surplus_index_is_added() {
        let expected = Value::from(json!(["a"]));
        let actual = Value::from(json!(["a", "b"]));

        let diff = diff_values(&expected, &actual);
        assert_eq!(diff.len(), 1);
        assert!(matches!(
            &diff.entries[0],
            DiffEntry::Added { path, actual }
                if path.to_string() == "1" && *actual == Value::from("b")
        ));
    }

    #[test]
    fn rotation_is_three_changes_not_a_reordering() {
        let expected = Value::from(json!(["a", "b", "c"]));
        let actual = Value::from(json!(["b", "c", "a"]));

        let diff = diff_values(&expected, &actual);
        assert_eq!(diff.len(), 3);
        assert_eq!(diff.changes(), 3);
        for (i, entry) in diff.entries.iter().enumerate() {
            assert_eq!(entry.path().to_string(), i.to_string());
        }
    }

    #[test]
    fn nested_sequences_recurse_with_indexed_paths() {
        let expected = Value::from(json!([[1, 2], [3, 4]]));
        let actual = Value::from(json!([[1, 2], [3, 5]]));

        let diff = diff_values(&expected, &actual);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff.entries[0].path().to_string(), "1.1");
    }

    #[test]
    fn map_union_covers_removed_added_and_changed() {
        let expected = Value::from(json!({"keep": true, "modify": "old", "remove": 42}));
        let actual = Value::from(json!({"keep": true, "modify": "new", "added": [1, 2]}));

        let diff = diff_values(&expected, &actual);
        assert_eq!(diff.len(), 3);
        assert_eq!(diff.additions(), 1);
        assert_eq!(diff.removals(), 1);
        assert_eq!(diff.changes(), 1);
    }

    #[test]
    fn key_type_mismatch_is_removed_plus_added() {
        let expected = Value::map([(Key::from("ichi"), Value::from(1i64))]);
        let actual = Value::map([(Key::sym("ichi"), Value::from(1i64))]);

        let diff = diff_values(&expected, &actual);
        assert_eq!(diff.removals(), 1);
        assert_eq!(diff.additions(), 1);
    }

    #[test]
    fn nested_map_changes_carry_the_full_path() {
        let expected = Value::from(json!({"config": {"debug": false, "port": 8080}}));
        let actual = Value::from(json!({"config": {"debug": true, "port": 8080}}));

        let diff = diff_values(&expected, &actual);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff.entries[0].path().to_string(), "config.debug");
    }

    #[test]
    fn matcher_in_sequence_delegates_per_element() {
        let expected = Value::seq([Value::matcher(IsInteger), Value::from("x")]);

        let ok = Value::from(json!([7, "x"]));
        assert!(diff_values(&expected, &ok).is_empty());

        let bad = Value::from(json!(["7", "x"]));
        let diff = diff_values(&expected, &bad);
        assert_eq!(diff.len(), 1);
        match &diff.entries[0] {
            DiffEntry::Changed { path, expected, actual } => {
                assert_eq!(path.to_string(), "0");
                assert_eq!(expected.to_string(), "be an integer");
                assert_eq!(*actual, Value::from("7"));
            }
            other => panic!("expected Changed, got {:?}", other),
        }
    }

    #[test]
    fn matcher_in_map_delegates_per_key() {
        let expected = Value::map([
            (Key::from("id"), Value::matcher(IsInteger)),
            (Key::from("title"), Value::from("Hobbit")),
        ]);

        let ok = Value::from(json!({"id": 1, "title": "Hobbit"}));
        assert!(diff_values(&expected, &ok).is_empty());

        let bad = Value::from(json!({"id": "1", "title": "Hobbit"}));
        let diff = diff_values(&expected, &bad);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff.entries[0].path().to_string(), "id");
    }

    #[test]
    fn absent_key_is_removed_before_the_matcher_is_consulted() {
        struct MatchesAnything;

        impl Matcher for MatchesAnything {
            fn description(&self) -> String {
                "be anything".to_string()
            }

            fn matches(&self, _actual: &Value) -> bool {
                true
            }
        }

        let expected = Value::map([(Key::from("id"), Value::matcher(MatchesAnything))]);
        let actual = Value::map([]);

        let diff = diff_values(&expected, &actual);
        assert_eq!(diff.removals(), 1);
    }

    #[test]
    fn category_mismatch_at_a_node_is_a_single_change() {
        let expected = Value::from(json!({"data": [1, 2]}));
        let actual = Value::from(json!({"data": {"0": 1}}));

        let diff = diff_values(&expected, &actual);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff.changes(), 1);
        assert_eq!(diff.entries[0].path().to_string(), "data");
    }

    #[test]
    fn scalar_roots_fall_back_to_equality() {
        let diff = diff_values(&Value::from("a"), &Value::from("b"));
        assert_eq!(diff.len(), 1);
        assert!(diff.entries[0].path().is_root());

        let diff = diff_values(&Value::from("a"), &Value::from("a"));
        assert!(diff.is_empty());
    }

    #[test]
    fn depth_guard_aborts_pathological_nesting() {
        let expected = Value::from(json!([[[["deep"]]]]));
        let actual = Value::from(json!([[[["deep"]]]]));

        let result = diff(
            &expected,
            &actual,
            &Path::root(),
            &DiffOptions::bounded(2),
        );
        assert_eq!(result, Err(DiffError::MaxDepthExceeded { limit: 2 }));
    }

    #[test]
    fn depth_guard_admits_nesting_within_the_limit() {
        let value = Value::from(json!([[1]]));
        let result = diff(&value, &value, &Path::root(), &DiffOptions::bounded(2));
        assert!(result.expect("within limit").is_empty());
    }
}
