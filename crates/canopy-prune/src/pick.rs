//! The pick walk: keep matching children, remove everything else.

use serde_json::{Map, Value};

use canopy_tree::{NodeKind, PathSpec, Visited};

use crate::error::{PruneError, PruneResult};
use crate::narrow::narrow_paths;

/// Deep pick by path set.
///
/// The dual of [`crate::omit_paths`]: a child survives only if some
/// narrowed path matched it exactly (the whole subtree is kept), or if
/// partial paths survive and the child is a node that can be narrowed
/// further (the child is recursed with just those paths). Children with no
/// viable path are excluded, as are leaves that partial paths cannot reach
/// into.
///
/// A leaf at the top level is a caller contract violation and returns
/// [`PruneError::LeafRoot`].
pub fn pick_paths(paths: &[PathSpec], tree: &Value) -> PruneResult<Value> {
    let kind = NodeKind::of(tree);
    if kind.is_leaf() {
        return Err(PruneError::LeafRoot(kind));
    }
    let mut visited = Visited::new();
    Ok(pick_guarded(paths, tree, &mut visited))
}

fn pick_guarded<'a>(paths: &[PathSpec], tree: &'a Value, visited: &mut Visited<'a>) -> Value {
    if visited.blocks(tree) {
        return tree.clone();
    }
    match tree {
        Value::Object(map) => {
            visited.push(tree);
            let mut out = Map::new();
            for (key, child) in map {
                if let Some(kept) = pick_child(paths, key, child, visited) {
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
                if let Some(kept) = pick_child(paths, &index.to_string(), child, visited) {
                    out.push(kept);
                }
            }
            visited.pop();
            Value::Array(out)
        }
        leaf => leaf.clone(),
    }
}

fn pick_child<'a>(
    paths: &[PathSpec],
    key: &str,
    child: &'a Value,
    visited: &mut Visited<'a>,
) -> Option<Value> {
    let (exhausted, remaining) = narrow_paths(paths, key);
    if exhausted {
        // Full pattern match: the whole subtree is kept.
        return Some(child.clone());
    }
    if remaining.is_empty() {
        // No viable path leads through this child.
        return None;
    }
    if NodeKind::of(child).is_leaf() {
        // Partial paths remain but a leaf cannot be narrowed further.
        return None;
    }
    Some(pick_guarded(&remaining, child, visited))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(paths: &[&str]) -> Vec<PathSpec> {
        PathSpec::parse_all(paths).unwrap()
    }

    #[test]
    fn pick_exact_path() {
        let tree = json!({"a": {"b": 1, "c": 2}, "d": 3});
        let picked = pick_paths(&parse(&["a.b"]), &tree).unwrap();
        assert_eq!(picked, json!({"a": {"b": 1}}));
    }

    #[test]
    fn pick_keeps_whole_matched_subtree() {
        let tree = json!({"a": {"deep": {"er": 1}}, "b": 2});
        let picked = pick_paths(&parse(&["a"]), &tree).unwrap();
        assert_eq!(picked, json!({"a": {"deep": {"er": 1}}}));
    }

    #[test]
    fn pick_wildcard_path() {
        let tree = json!({"rows": [{"id": 1, "x": 9}, {"id": 2, "x": 8}]});
        let picked = pick_paths(&parse(&["rows.*.id"]), &tree).unwrap();
        assert_eq!(picked, json!({"rows": [{"id": 1}, {"id": 2}]}));
    }

    #[test]
    fn pick_regex_path_against_indices() {
        let tree = json!({"xs": [10, 11, 12, 13, 14, 15, 16]});
        let picked = pick_paths(&parse(&["xs./[1|6]/"]), &tree).unwrap();
        assert_eq!(picked, json!({"xs": [11, 16]}), "survivors re-pack densely");
    }

    #[test]
    fn pick_multiple_paths_union() {
        let tree = json!({"a": 1, "b": 2, "c": {"d": 3, "e": 4}});
        let picked = pick_paths(&parse(&["a", "c.d"]), &tree).unwrap();
        assert_eq!(picked, json!({"a": 1, "c": {"d": 3}}));
    }

    #[test]
    fn pick_unmatched_path_empties_the_tree() {
        let tree = json!({"a": {"b": 1}});
        let picked = pick_paths(&parse(&["z.q"]), &tree).unwrap();
        assert_eq!(picked, json!({}));
    }

    #[test]
    fn pick_partial_path_over_leaf_excludes_it() {
        // "a.b" cannot reach into the leaf at "a".
        let tree = json!({"a": 5});
        let picked = pick_paths(&parse(&["a.b"]), &tree).unwrap();
        assert_eq!(picked, json!({}));
    }

    #[test]
    fn pick_recursed_container_survives_even_when_emptied() {
        let tree = json!({"a": {"b": 1}});
        let picked = pick_paths(&parse(&["a.x"]), &tree).unwrap();
        assert_eq!(picked, json!({"a": {}}));
    }

    #[test]
    fn pick_on_leaf_root_is_an_error() {
        let err = pick_paths(&parse(&["a"]), &json!(42)).unwrap_err();
        assert!(matches!(err, PruneError::LeafRoot(NodeKind::Leaf)));
    }

    #[test]
    fn pick_on_array_root_is_allowed() {
        let tree = json!([{"id": 1, "x": 2}, {"id": 3}]);
        let picked = pick_paths(&parse(&["*.id"]), &tree).unwrap();
        assert_eq!(picked, json!([{"id": 1}, {"id": 3}]));
    }

    #[test]
    fn guard_hit_keeps_subtree_unchanged() {
        let tree = json!({"a": 1});
        let mut visited = Visited::new();
        visited.push(&tree);
        let picked = pick_guarded(&parse(&["a"]), &tree, &mut visited);
        assert_eq!(picked, tree);
    }
}
