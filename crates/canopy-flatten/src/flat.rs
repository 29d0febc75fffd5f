//! The flattening walk.

use std::collections::BTreeMap;

use serde_json::Value;

use canopy_tree::{join_key, NodeKind, PathSegment, Visited};

/// Flatten a tree into a map from dot-joined key paths to leaf values.
///
/// A leaf root flattens to the single key `""`. A node revisited on the
/// current path (or one past the depth ceiling) is emitted whole as a
/// terminal leaf at its current path. Empty containers emit nothing.
pub fn flatten(tree: &Value) -> BTreeMap<String, Value> {
    flatten_until(|_| false, tree)
}

/// Flatten, stopping early at nodes matching `stop`.
///
/// `stop` is tested against every node (never against leaves); when it
/// returns true the node is emitted whole at its current path instead of
/// being recursed into. Enables partial flattening, e.g. stopping at any
/// node that carries some marker key.
pub fn flatten_until<F>(stop: F, tree: &Value) -> BTreeMap<String, Value>
where
    F: Fn(&Value) -> bool,
{
    let mut out = BTreeMap::new();
    let mut path = Vec::new();
    let mut visited = Visited::new();
    flatten_guarded(&stop, tree, &mut path, &mut visited, &mut out);
    out
}

fn flatten_guarded<'a, F>(
    stop: &F,
    tree: &'a Value,
    path: &mut Vec<PathSegment>,
    visited: &mut Visited<'a>,
    out: &mut BTreeMap<String, Value>,
) where
    F: Fn(&Value) -> bool,
{
    if NodeKind::of(tree).is_leaf() || visited.blocks(tree) || stop(tree) {
        out.insert(join_key(path), tree.clone());
        return;
    }
    visited.push(tree);
    match tree {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(PathSegment::Key(key.clone()));
                flatten_guarded(stop, child, path, visited, out);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                path.push(PathSegment::Index(index));
                flatten_guarded(stop, child, path, visited, out);
                path.pop();
            }
        }
        _ => unreachable!("leaves are emitted above"),
    }
    visited.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(map: &BTreeMap<String, Value>) -> Vec<(&str, &Value)> {
        map.iter().map(|(k, v)| (k.as_str(), v)).collect()
    }

    #[test]
    fn flattens_nested_objects_and_arrays() {
        let tree = json!({"foo": {"bar": [{"wopper": 1}, 2]}, "top": true});
        let flat = flatten(&tree);
        assert_eq!(
            entries(&flat),
            vec![
                ("foo.bar.0.wopper", &json!(1)),
                ("foo.bar.1", &json!(2)),
                ("top", &json!(true)),
            ]
        );
    }

    #[test]
    fn leaf_root_flattens_to_empty_key() {
        let flat = flatten(&json!(42));
        assert_eq!(entries(&flat), vec![("", &json!(42))]);
    }

    #[test]
    fn null_leaves_are_preserved() {
        let flat = flatten(&json!({"a": null}));
        assert_eq!(entries(&flat), vec![("a", &json!(null))]);
    }

    #[test]
    fn empty_containers_emit_nothing() {
        let flat = flatten(&json!({"a": {}, "b": []}));
        assert!(flat.is_empty());
    }

    #[test]
    fn flatten_until_stops_at_marked_nodes() {
        let tree = json!({"a": {"cow": 1, "deep": {"x": 2}}, "b": {"y": 3}});
        let flat = flatten_until(|node| node.get("cow").is_some(), &tree);
        assert_eq!(
            entries(&flat),
            vec![
                ("a", &json!({"cow": 1, "deep": {"x": 2}})),
                ("b.y", &json!(3)),
            ]
        );
    }

    #[test]
    fn guard_hit_emits_node_as_terminal_leaf() {
        let inner = json!({"x": 1});
        let tree = json!({"a": inner});
        let mut out = BTreeMap::new();
        let mut path = Vec::new();
        let mut visited = Visited::new();
        // Pre-seed the guard with the child node: the walk must emit it
        // whole instead of recursing into it.
        visited.push(tree.get("a").unwrap());
        flatten_guarded(&|_: &Value| false, &tree, &mut path, &mut visited, &mut out);
        assert_eq!(entries(&out), vec![("a", &inner)]);
    }

    #[test]
    fn depth_ceiling_emits_a_terminal_leaf() {
        use canopy_tree::DEFAULT_DEPTH_LIMIT;

        // 600 levels: past the ceiling, shallow enough for the recursive
        // clone serde_json performs on the emitted subtree.
        let mut deep = json!(0);
        for _ in 0..600 {
            deep = json!({ "inner": deep });
        }
        let flat = flatten(&deep);
        // One terminal entry where the ceiling cut the walk short.
        assert_eq!(flat.len(), 1);
        let (key, rest) = flat.iter().next().unwrap();
        assert_eq!(key.matches("inner").count(), DEFAULT_DEPTH_LIMIT);
        assert!(rest.is_object(), "the node at the ceiling is emitted whole");
    }
}
