//! The omit walks: remove matching children, keep everything else.

use serde_json::{Map, Value};

use canopy_tree::{PathSpec, Visited};

use crate::narrow::narrow_paths;

/// Deep omit by predicate.
///
/// Walks every node; children for which `predicate(key, value)` is true are
/// removed entirely (not recursed into), survivors are recursed. Array
/// children are tested with their stringified index as the key. Leaves pass
/// through unchanged, so the operation is total.
pub fn omit_by<F>(predicate: F, tree: &Value) -> Value
where
    F: Fn(&str, &Value) -> bool,
{
    let mut visited = Visited::new();
    omit_by_guarded(&predicate, tree, &mut visited)
}

/// Deep omit by path set.
///
/// A child whose narrowed path set contains an exact match is removed;
/// children with surviving partial paths are recursed with just those
/// paths; everything else is kept whole.
pub fn omit_paths(paths: &[PathSpec], tree: &Value) -> Value {
    let mut visited = Visited::new();
    omit_paths_guarded(paths, tree, &mut visited)
}

fn omit_by_guarded<'a, F>(predicate: &F, tree: &'a Value, visited: &mut Visited<'a>) -> Value
where
    F: Fn(&str, &Value) -> bool,
{
    if visited.blocks(tree) {
        return tree.clone();
    }
    match tree {
        Value::Object(map) => {
            visited.push(tree);
            let mut out = Map::new();
            for (key, child) in map {
                if predicate(key, child) {
                    continue;
                }
                out.insert(key.clone(), omit_by_guarded(predicate, child, visited));
            }
            visited.pop();
            Value::Object(out)
        }
        Value::Array(items) => {
            visited.push(tree);
            let mut out = Vec::new();
            for (index, child) in items.iter().enumerate() {
                if predicate(&index.to_string(), child) {
                    continue;
                }
                out.push(omit_by_guarded(predicate, child, visited));
            }
            visited.pop();
            Value::Array(out)
        }
        leaf => leaf.clone(),
    }
}

fn omit_paths_guarded<'a>(
    paths: &[PathSpec],
    tree: &'a Value,
    visited: &mut Visited<'a>,
) -> Value {
    if visited.blocks(tree) {
        return tree.clone();
    }
    match tree {
        Value::Object(map) => {
            visited.push(tree);
            let mut out = Map::new();
            for (key, child) in map {
                if let Some(kept) = omit_child(paths, key, child, visited) {
                    out.insert(key.clone(), kept);
                }
            }
            visited.pop();
            Value::Object(out)
        }
        Value::Array(items) => {
            visited.push(tree);
            let mut out = Vec::new();
            for (index, child) in items.iter().enumerate() {
                if let Some(kept) = omit_child(paths, &index.to_string(), child, visited) {
                    out.push(kept);
                }
            }
            visited.pop();
            Value::Array(out)
        }
        leaf => leaf.clone(),
    }
}

fn omit_child<'a>(
    paths: &[PathSpec],
    key: &str,
    child: &'a Value,
    visited: &mut Visited<'a>,
) -> Option<Value> {
    let (exhausted, remaining) = narrow_paths(paths, key);
    if exhausted {
        // Full pattern match: this child is omitted outright.
        tracing::trace!(%key, "omitting exact path match");
        return None;
    }
    if remaining.is_empty() {
        return Some(child.clone());
    }
    Some(omit_paths_guarded(&remaining, child, visited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(paths: &[&str]) -> Vec<PathSpec> {
        PathSpec::parse_all(paths).unwrap()
    }

    #[test]
    fn omit_by_key_prefix() {
        let tree = json!({"a": {"_b": 1, "c": 2}});
        let pruned = omit_by(|key, _| key.starts_with('_'), &tree);
        assert_eq!(pruned, json!({"a": {"c": 2}}));
    }

    #[test]
    fn omit_by_can_inspect_values() {
        let tree = json!({"keep": 1, "drop": null, "nested": {"drop": null}});
        let pruned = omit_by(|_, value| value.is_null(), &tree);
        assert_eq!(pruned, json!({"keep": 1, "nested": {}}));
    }

    #[test]
    fn omit_by_removes_array_items_by_index() {
        let tree = json!({"xs": [10, 11, 12]});
        let pruned = omit_by(|key, _| key == "1", &tree);
        assert_eq!(pruned, json!({"xs": [10, 12]}), "survivors re-pack densely");
    }

    #[test]
    fn omit_by_does_not_recurse_into_removed_children() {
        let tree = json!({"drop": {"also_drop_me_quietly": 1}, "keep": 2});
        let pruned = omit_by(|key, _| key == "drop", &tree);
        assert_eq!(pruned, json!({"keep": 2}));
    }

    #[test]
    fn omit_by_leaf_passes_through() {
        assert_eq!(omit_by(|_, _| true, &json!(42)), json!(42));
    }

    #[test]
    fn omit_exact_path() {
        let tree = json!({"a": {"b": 1, "c": 2}, "d": 3});
        let pruned = omit_paths(&parse(&["a.b"]), &tree);
        assert_eq!(pruned, json!({"a": {"c": 2}, "d": 3}));
    }

    #[test]
    fn omit_wildcard_path() {
        let tree = json!({"a": {"x": {"secret": 1, "open": 2}, "y": {"secret": 3}}});
        let pruned = omit_paths(&parse(&["a.*.secret"]), &tree);
        assert_eq!(pruned, json!({"a": {"x": {"open": 2}, "y": {}}}));
    }

    #[test]
    fn omit_regex_path_against_indices() {
        let tree = json!({"xs": [0, 1, 2, 3, 4, 5, 6]});
        let pruned = omit_paths(&parse(&["xs./[1|6]/"]), &tree);
        assert_eq!(pruned, json!({"xs": [0, 2, 3, 4, 5]}));
    }

    #[test]
    fn omit_unmatched_path_is_a_no_op() {
        let tree = json!({"a": {"b": 1}});
        assert_eq!(omit_paths(&parse(&["z.q"]), &tree), tree);
    }

    #[test]
    fn omit_whole_subtree() {
        let tree = json!({"a": {"b": {"deep": 1}}, "c": 2});
        let pruned = omit_paths(&parse(&["a"]), &tree);
        assert_eq!(pruned, json!({"c": 2}));
    }

    #[test]
    fn omit_multiple_paths() {
        let tree = json!({"a": 1, "b": 2, "c": {"d": 3, "e": 4}});
        let pruned = omit_paths(&parse(&["a", "c.d"]), &tree);
        assert_eq!(pruned, json!({"b": 2, "c": {"e": 4}}));
    }

    #[test]
    fn guard_hit_keeps_subtree_unchanged() {
        let tree = json!({"a": {"b": 1}});
        let mut visited = Visited::new();
        visited.push(&tree);
        let pruned = omit_by_guarded(&|_: &str, _: &Value| true, &tree, &mut visited);
        assert_eq!(pruned, tree, "a revisited node is handled as a leaf");
    }
}
