//! The unflattening builder.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use canopy_tree::{split_key, PathSegment};

/// Configuration for [`unflatten_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnflattenOptions {
    /// When true (the default), canonical numeric segments become array
    /// indices and their containers are built as arrays. Disable for data
    /// whose keys merely look numeric but must stay object properties.
    pub numeric_keys_as_indices: bool,
}

impl Default for UnflattenOptions {
    fn default() -> Self {
        Self {
            numeric_keys_as_indices: true,
        }
    }
}

/// Rebuild a nested tree from a flat key-path map, inferring arrays from
/// numeric segments. Best-effort inverse of [`crate::flatten`].
pub fn unflatten(flat: &BTreeMap<String, Value>) -> Value {
    unflatten_with(UnflattenOptions::default(), flat)
}

/// Rebuild a nested tree from a flat key-path map.
///
/// The container kind at each level is inferred from the segment addressing
/// it: an index builds an array, a key builds an object. Containers are
/// created only where nothing exists yet; a leaf standing in the way of a
/// deeper path is overwritten (later entries win structurally). Array
/// assignment beyond the current length pads the gap with `null`.
///
/// The empty key `""` (a flattened leaf root) assigns the root itself. An
/// empty map unflattens to `{}`.
pub fn unflatten_with(options: UnflattenOptions, flat: &BTreeMap<String, Value>) -> Value {
    if flat.is_empty() {
        return Value::Object(Map::new());
    }
    let mut root = Value::Null;
    for (key, value) in flat {
        if key.is_empty() {
            root = value.clone();
            continue;
        }
        let mut segments = split_key(key);
        if !options.numeric_keys_as_indices {
            for segment in &mut segments {
                if let PathSegment::Index(index) = segment {
                    *segment = PathSegment::Key(index.to_string());
                }
            }
        }
        insert_path(&mut root, &segments, value);
    }
    root
}

fn container_for(segment: &PathSegment) -> Value {
    match segment {
        PathSegment::Key(_) => Value::Object(Map::new()),
        PathSegment::Index(_) => Value::Array(Vec::new()),
    }
}

fn insert_path(root: &mut Value, segments: &[PathSegment], value: &Value) {
    let mut cursor = root;
    for (i, segment) in segments.iter().enumerate() {
        // Make sure the cursor holds the container kind this segment
        // addresses; anything else in the way is overwritten.
        let fits = matches!(
            (segment, &*cursor),
            (PathSegment::Key(_), Value::Object(_)) | (PathSegment::Index(_), Value::Array(_))
        );
        if !fits {
            *cursor = container_for(segment);
        }
        let last = i + 1 == segments.len();
        match (segment, cursor) {
            (PathSegment::Key(key), Value::Object(map)) => {
                if last {
                    map.insert(key.clone(), value.clone());
                    return;
                }
                cursor = map.entry(key.clone()).or_insert(Value::Null);
            }
            (PathSegment::Index(index), Value::Array(items)) => {
                while items.len() <= *index {
                    items.push(Value::Null);
                }
                if last {
                    items[*index] = value.clone();
                    return;
                }
                cursor = &mut items[*index];
            }
            _ => unreachable!("cursor kind fixed up above"),
        }
    }
}
