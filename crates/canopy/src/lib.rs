//! Canopy: a deep tree transform engine over plain JSON values.
//!
//! One structural traversal pattern, five cooperating algorithm families:
//!
//! - [`merge`] and its variants — cycle-safe right-biased deep merge,
//!   custom combiners, array concatenation, index zipping, and
//!   identity-matched array items;
//! - [`omit_by`] / [`omit_paths`] / [`pick_paths`] — deep pruning by
//!   predicate or by wildcard/regex path sets;
//! - [`flatten`] / [`unflatten`] — nested trees to dot-keyed flat maps and
//!   back;
//! - [`diff`] — structural comparison reporting only differences;
//! - the [`PathSpec`] mini-language and [`NodeKind`] classification that
//!   everything above shares.
//!
//! Every operation treats its inputs as immutable, returns freshly built
//! values, and threads a [`Visited`] guard so recursion stays bounded.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! let base = json!({"server": {"port": 8080, "host": "localhost"}});
//! let overlay = json!({"server": {"port": 9000}});
//! let merged = canopy::merge(&base, &overlay);
//! assert_eq!(merged, json!({"server": {"port": 9000, "host": "localhost"}}));
//!
//! let changes = canopy::diff(&base, &merged);
//! assert_eq!(changes.len(), 1);
//! ```

pub use canopy_diff::{diff, diff_values, DiffEntry, DiffLabels, DiffTree};
pub use canopy_flatten::{flatten, flatten_until, unflatten, unflatten_with, UnflattenOptions};
pub use canopy_merge::{
    merge, merge_all, merge_concat_arrays, merge_matched_arrays, merge_with, merge_zip_arrays,
    MatchMergeOptions,
};
pub use canopy_prune::{omit_by, omit_paths, pick_paths, PruneError, PruneResult};
pub use canopy_tree::{
    join_key, split_key, Matcher, NodeKind, PathError, PathResult, PathSegment, PathSpec, Visited,
};
