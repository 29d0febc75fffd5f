//! Identity-matched array merge: array elements are paired by a
//! caller-supplied identity instead of by index.

use serde_json::Value;

use canopy_tree::Visited;

/// Options for [`merge_matched_arrays`].
///
/// `match_key` extracts an item's identity (e.g. its `id` field); it
/// receives the item and the key or index the enclosing array sits under.
/// Items for which it returns `None` are never matched.
///
/// `merge_items` optionally overrides how a matched left/right pair is
/// combined. This is the caller collaboration point: a custom function can,
/// for example, re-append dropped left items under a different key. The
/// default is the recursive engine merge (right wins per field, left extras
/// preserved).
pub struct MatchMergeOptions<'f> {
    match_key: &'f dyn Fn(&Value, &str) -> Option<Value>,
    merge_items: Option<&'f dyn Fn(&Value, &Value) -> Value>,
}

impl<'f> MatchMergeOptions<'f> {
    /// Options with the given identity function and the default pair merge.
    pub fn new(match_key: &'f dyn Fn(&Value, &str) -> Option<Value>) -> Self {
        Self {
            match_key,
            merge_items: None,
        }
    }

    /// Override how matched pairs are combined.
    pub fn with_merge_items(mut self, merge_items: &'f dyn Fn(&Value, &Value) -> Value) -> Self {
        self.merge_items = Some(merge_items);
        self
    }
}

/// Deep merge treating arrays as sets of identifiable items.
///
/// Object pairs recurse key-by-key. Array pairs produce the right side's
/// items in the right side's order: each right item is matched against the
/// first left item with the same identity; matched pairs are merged,
/// unmatched right items pass through as-is, and left items with no
/// right-side match are dropped. If exactly one side of an array-level
/// comparison is `null`, the non-null side is returned unchanged. Any other
/// pairing is right-biased.
pub fn merge_matched_arrays(
    options: &MatchMergeOptions<'_>,
    left: &Value,
    right: &Value,
) -> Value {
    let mut visited = Visited::new();
    matched_guarded("", left, right, options, &mut visited)
}

fn matched_guarded<'a>(
    key: &str,
    left: &'a Value,
    right: &'a Value,
    options: &MatchMergeOptions<'_>,
    visited: &mut Visited<'a>,
) -> Value {
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => {
            if visited.blocks(left) || visited.blocks(right) {
                return left.clone();
            }
            visited.push(left);
            visited.push(right);
            let mut out = l.clone();
            for (child_key, right_child) in r {
                let merged = match l.get(child_key) {
                    Some(left_child) => {
                        matched_guarded(child_key, left_child, right_child, options, visited)
                    }
                    None => right_child.clone(),
                };
                out.insert(child_key.clone(), merged);
            }
            visited.pop();
            visited.pop();
            Value::Object(out)
        }
        (Value::Array(_), Value::Null) => left.clone(),
        (Value::Null, Value::Array(_)) => right.clone(),
        (Value::Array(l), Value::Array(r)) => {
            if visited.blocks(left) || visited.blocks(right) {
                return left.clone();
            }
            visited.push(left);
            visited.push(right);
            let mut out = Vec::with_capacity(r.len());
            for (index, right_item) in r.iter().enumerate() {
                let identity = (options.match_key)(right_item, key);
                let matched = identity.as_ref().and_then(|id| {
                    l.iter()
                        .find(|left_item| (options.match_key)(left_item, key).as_ref() == Some(id))
                });
                match matched {
                    Some(left_item) => {
                        tracing::debug!(%key, index, "matched array items by identity");
                        let merged = match options.merge_items {
                            Some(merge_items) => merge_items(left_item, right_item),
                            None => matched_guarded(
                                &index.to_string(),
                                left_item,
                                right_item,
                                options,
                                visited,
                            ),
                        };
                        out.push(merged);
                    }
                    None => out.push(right_item.clone()),
                }
            }
            visited.pop();
            visited.pop();
            Value::Array(out)
        }
        _ => right.clone(),
    }
}
