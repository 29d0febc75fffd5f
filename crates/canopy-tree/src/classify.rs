use std::fmt;

use serde_json::Value;

/// Structural classification of a tree value.
///
/// Every Canopy walk branches on this once per value instead of re-probing
/// the value shape at each call site. `Object` and `Array` are the two Node
/// families (recursed into, with string-key and integer-index key models
/// respectively); everything else is a `Leaf` and is cloned, compared, or
/// combined whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Not recursed into: null, booleans, numbers, strings.
    Leaf,
    /// A plain object with string keys.
    Object,
    /// An integer-indexed array.
    Array,
}

impl NodeKind {
    /// Classify a value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            _ => NodeKind::Leaf,
        }
    }

    /// Returns `true` for the two Node families.
    pub fn is_node(self) -> bool {
        !matches!(self, NodeKind::Leaf)
    }

    /// Returns `true` for leaves.
    pub fn is_leaf(self) -> bool {
        matches!(self, NodeKind::Leaf)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Leaf => "leaf",
            NodeKind::Object => "object",
            NodeKind::Array => "array",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn objects_classify_as_object() {
        assert_eq!(NodeKind::of(&json!({"a": 1})), NodeKind::Object);
        assert_eq!(NodeKind::of(&json!({})), NodeKind::Object);
    }

    #[test]
    fn arrays_classify_as_array() {
        assert_eq!(NodeKind::of(&json!([1, 2])), NodeKind::Array);
        assert_eq!(NodeKind::of(&json!([])), NodeKind::Array);
    }

    #[test]
    fn primitives_classify_as_leaf() {
        assert_eq!(NodeKind::of(&json!(null)), NodeKind::Leaf);
        assert_eq!(NodeKind::of(&json!(true)), NodeKind::Leaf);
        assert_eq!(NodeKind::of(&json!(42)), NodeKind::Leaf);
        assert_eq!(NodeKind::of(&json!("s")), NodeKind::Leaf);
    }

    #[test]
    fn node_and_leaf_predicates() {
        assert!(NodeKind::Object.is_node());
        assert!(NodeKind::Array.is_node());
        assert!(!NodeKind::Leaf.is_node());
        assert!(NodeKind::Leaf.is_leaf());
    }
}
