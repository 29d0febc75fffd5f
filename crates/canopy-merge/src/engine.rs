//! Core merge recursion: right-biased, custom-combiner, concatenating, and
//! zipping variants over a shared guarded walk.

use serde_json::{Map, Value};

use canopy_tree::Visited;

/// How a pair of arrays is combined when both sides of a node are arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArrayRule {
    /// Arrays are leaf-confluence points: the combiner decides (default:
    /// right replaces left).
    Replace,
    /// Arrays concatenate, left elements first.
    Concat,
}

/// Right-biased deep merge.
///
/// Object pairs merge key-by-key: keys only in `left` are kept, keys only
/// in `right` are adopted, keys in both recurse. Any other pairing (either
/// side an array or a leaf) is replaced by `right` — an explicit right
/// `null` wins, since absence is expressed by the key not being present at
/// all.
pub fn merge(left: &Value, right: &Value) -> Value {
    merge_with(replace_right, left, right)
}

/// Fold [`merge`] left-to-right over a sequence of trees, seeded with `{}`.
pub fn merge_all<'a, I>(trees: I) -> Value
where
    I: IntoIterator<Item = &'a Value>,
{
    trees
        .into_iter()
        .fold(Value::Object(Map::new()), |acc, tree| merge(&acc, tree))
}

/// Deep merge with a custom combiner at leaf-confluence points.
///
/// `combine(left, right)` is invoked for every pairing that is not
/// object+object; object pairs still recurse key-by-key under the same
/// guard as [`merge`].
pub fn merge_with<F>(combine: F, left: &Value, right: &Value) -> Value
where
    F: Fn(&Value, &Value) -> Value,
{
    let mut visited = Visited::new();
    merge_guarded(left, right, ArrayRule::Replace, &combine, &mut visited)
}

/// Deep merge where a pair of arrays concatenates (left elements first)
/// instead of being replaced by the right side.
pub fn merge_concat_arrays(left: &Value, right: &Value) -> Value {
    let mut visited = Visited::new();
    merge_guarded(left, right, ArrayRule::Concat, &replace_right, &mut visited)
}

/// Deep merge where a pair of arrays zips index-by-index, recursing into
/// each paired element. `leaf(key, left, right)` decides every
/// leaf-confluence point, where `key` is the stringified key or index the
/// pair sits under (`""` at the root).
///
/// Mismatched-length arrays are zipped to the shorter length; the longer
/// side's tail is dropped.
pub fn merge_zip_arrays<F>(leaf: F, left: &Value, right: &Value) -> Value
where
    F: Fn(&str, &Value, &Value) -> Value,
{
    let mut visited = Visited::new();
    zip_guarded("", left, right, &leaf, &mut visited)
}

fn replace_right(_left: &Value, right: &Value) -> Value {
    right.clone()
}

fn merge_guarded<'a, F>(
    left: &'a Value,
    right: &'a Value,
    arrays: ArrayRule,
    combine: &F,
    visited: &mut Visited<'a>,
) -> Value
where
    F: Fn(&Value, &Value) -> Value,
{
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => {
            if visited.blocks(left) || visited.blocks(right) {
                return left.clone();
            }
            visited.push(left);
            visited.push(right);
            let mut out = l.clone();
            for (key, right_child) in r {
                let merged = match l.get(key) {
                    Some(left_child) => {
                        merge_guarded(left_child, right_child, arrays, combine, visited)
                    }
                    None => right_child.clone(),
                };
                out.insert(key.clone(), merged);
            }
            visited.pop();
            visited.pop();
            Value::Object(out)
        }
        (Value::Array(l), Value::Array(r)) if arrays == ArrayRule::Concat => {
            if visited.blocks(left) || visited.blocks(right) {
                return left.clone();
            }
            let mut out = l.clone();
            out.extend(r.iter().cloned());
            Value::Array(out)
        }
        _ => combine(left, right),
    }
}

fn zip_guarded<'a, F>(
    key: &str,
    left: &'a Value,
    right: &'a Value,
    leaf: &F,
    visited: &mut Visited<'a>,
) -> Value
where
    F: Fn(&str, &Value, &Value) -> Value,
{
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
                        zip_guarded(child_key, left_child, right_child, leaf, visited)
                    }
                    None => right_child.clone(),
                };
                out.insert(child_key.clone(), merged);
            }
            visited.pop();
            visited.pop();
            Value::Object(out)
        }
        (Value::Array(l), Value::Array(r)) => {
            if visited.blocks(left) || visited.blocks(right) {
                return left.clone();
            }
            visited.push(left);
            visited.push(right);
            if l.len() != r.len() {
                tracing::trace!(
                    left_len = l.len(),
                    right_len = r.len(),
                    "zipping mismatched arrays to the shorter length"
                );
            }
            let mut out = Vec::with_capacity(l.len().min(r.len()));
            for (index, (left_child, right_child)) in l.iter().zip(r.iter()).enumerate() {
                out.push(zip_guarded(
                    &index.to_string(),
                    left_child,
                    right_child,
                    leaf,
                    visited,
                ));
            }
            visited.pop();
            visited.pop();
            Value::Array(out)
        }
        _ => leaf(key, left, right),
    }
}
