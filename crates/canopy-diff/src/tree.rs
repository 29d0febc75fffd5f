//! The diff walk and its output types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use canopy_tree::{NodeKind, Visited};

/// The result of comparing two trees: one entry per differing child, keyed
/// by object key or stringified array index. Equal children are omitted
/// entirely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffTree {
    /// The differing children.
    pub entries: BTreeMap<String, DiffEntry>,
}

impl DiffTree {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the compared trees agreed everywhere.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of differing children at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of added keys at this level.
    pub fn additions(&self) -> usize {
        self.entries
            .values()
            .filter(|e| matches!(e, DiffEntry::Added(_)))
            .count()
    }

    /// Number of removed keys at this level.
    pub fn removals(&self) -> usize {
        self.entries
            .values()
            .filter(|e| matches!(e, DiffEntry::Removed(_)))
            .count()
    }

    /// Number of changed keys at this level.
    pub fn changes(&self) -> usize {
        self.entries
            .values()
            .filter(|e| matches!(e, DiffEntry::Changed { .. }))
            .count()
    }

    /// Render the legacy marker protocol: additions become `[null, right]`,
    /// removals `[left, null]`, changes `{leftLabel: left, rightLabel:
    /// right}`, nested diffs plain objects.
    ///
    /// The tuple rendering cannot tell "absent" from "present and null";
    /// the typed entries can, and remain the primary surface.
    pub fn to_value(&self, labels: &DiffLabels) -> Value {
        let mut out = Map::new();
        for (key, entry) in &self.entries {
            let rendered = match entry {
                DiffEntry::Added(right) => json!([null, right]),
                DiffEntry::Removed(left) => json!([left, null]),
                DiffEntry::Changed { left, right } => {
                    let mut marker = Map::new();
                    marker.insert(labels.left.clone(), left.clone());
                    marker.insert(labels.right.clone(), right.clone());
                    Value::Object(marker)
                }
                DiffEntry::Nested(nested) => nested.to_value(labels),
            };
            out.insert(key.clone(), rendered);
        }
        Value::Object(out)
    }
}

/// A single difference between two trees at one key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DiffEntry {
    /// The key is present only in the right tree.
    Added(Value),
    /// The key is present only in the left tree.
    Removed(Value),
    /// The key is present in both trees with unequal, non-recursable
    /// values (at least one side is a leaf, or the node kinds differ).
    Changed { left: Value, right: Value },
    /// Both sides are nodes of the same kind; the difference is below.
    Nested(DiffTree),
}

/// Key names used by the marker rendering of a change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLabels {
    /// Key carrying the left-hand value. Default `__left`.
    pub left: String,
    /// Key carrying the right-hand value. Default `__right`.
    pub right: String,
}

impl DiffLabels {
    /// Labels with explicit key names.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

impl Default for DiffLabels {
    fn default() -> Self {
        Self::new("__left", "__right")
    }
}

/// Compare two trees.
///
/// Object pairs are compared by key, array pairs by index (length
/// differences surface as additions or removals at the tail indices).
/// Comparing two values that are not nodes of the same kind yields an
/// empty diff when they are equal and a single `""`-keyed change when not.
///
/// The walk carries the engine's recursion guard: a revisited pair (or one
/// past the depth ceiling) degrades to a shallow change instead of
/// recursing.
pub fn diff(left: &Value, right: &Value) -> DiffTree {
    let mut visited = Visited::new();
    diff_guarded(left, right, &mut visited)
}

/// Compare two trees and render the marker protocol in one step.
pub fn diff_values(labels: &DiffLabels, left: &Value, right: &Value) -> Value {
    diff(left, right).to_value(labels)
}

fn diff_guarded<'a>(left: &'a Value, right: &'a Value, visited: &mut Visited<'a>) -> DiffTree {
    let mut entries = BTreeMap::new();
    match (left, right) {
        (Value::Object(l), Value::Object(r)) => {
            for (key, left_child) in l {
                match r.get(key) {
                    Some(right_child) => {
                        if let Some(entry) = diff_entry(left_child, right_child, visited) {
                            entries.insert(key.clone(), entry);
                        }
                    }
                    None => {
                        entries.insert(key.clone(), DiffEntry::Removed(left_child.clone()));
                    }
                }
            }
            for (key, right_child) in r {
                if !l.contains_key(key) {
                    entries.insert(key.clone(), DiffEntry::Added(right_child.clone()));
                }
            }
        }
        (Value::Array(l), Value::Array(r)) => {
            for index in 0..l.len().max(r.len()) {
                let entry = match (l.get(index), r.get(index)) {
                    (Some(left_child), Some(right_child)) => {
                        diff_entry(left_child, right_child, visited)
                    }
                    (Some(left_child), None) => Some(DiffEntry::Removed(left_child.clone())),
                    (None, Some(right_child)) => Some(DiffEntry::Added(right_child.clone())),
                    (None, None) => None,
                };
                if let Some(entry) = entry {
                    entries.insert(index.to_string(), entry);
                }
            }
        }
        _ => {
            if left != right {
                entries.insert(
                    String::new(),
                    DiffEntry::Changed {
                        left: left.clone(),
                        right: right.clone(),
                    },
                );
            }
        }
    }
    DiffTree { entries }
}

fn diff_entry<'a>(
    left: &'a Value,
    right: &'a Value,
    visited: &mut Visited<'a>,
) -> Option<DiffEntry> {
    if left == right {
        return None;
    }
    let left_kind = NodeKind::of(left);
    if left_kind.is_node()
        && left_kind == NodeKind::of(right)
        && !visited.blocks(left)
        && !visited.blocks(right)
    {
        visited.push(left);
        visited.push(right);
        let nested = diff_guarded(left, right, visited);
        visited.pop();
        visited.pop();
        return Some(DiffEntry::Nested(nested));
    }
    Some(DiffEntry::Changed {
        left: left.clone(),
        right: right.clone(),
    })
}
