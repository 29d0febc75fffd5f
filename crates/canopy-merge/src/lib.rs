//! Cycle-safe deep merge family for the Canopy tree engine.
//!
//! Every variant shares one traversal contract: object pairs merge
//! key-by-key, everything else is decided at a leaf-confluence point, and a
//! [`canopy_tree::Visited`] guard threads through the recursion so a node
//! already on the current path degrades to leaf handling (the left side is
//! kept unchanged for that branch).
//!
//! All operations are total over any pair of values and never mutate their
//! inputs.
//!
//! # Key Operations
//!
//! - [`merge`] / [`merge_all`] — right-biased deep merge, and its fold
//! - [`merge_with`] — custom combiner at leaf-confluence points
//! - [`merge_concat_arrays`] — array pairs concatenate instead of replacing
//! - [`merge_zip_arrays`] — array pairs zip index-by-index
//! - [`merge_matched_arrays`] — array items matched by caller-supplied identity

pub mod engine;
pub mod matched;

pub use engine::{
    merge, merge_all, merge_concat_arrays, merge_with, merge_zip_arrays,
};
pub use matched::{merge_matched_arrays, MatchMergeOptions};
