//! Structural diff for the Canopy tree engine.
//!
//! Compares two trees and reports only where they disagree. The primary
//! surface is the typed [`DiffTree`] / [`DiffEntry`] output, which keeps
//! "key absent" and "key present with null" distinct; [`DiffTree::to_value`]
//! renders the legacy marker protocol (two-element add/remove tuples and
//! two-key `{__left, __right}` change objects) for callers that
//! pattern-match plain values.
//!
//! # Key Types
//!
//! - [`DiffTree`] / [`DiffEntry`] — Typed change tree
//! - [`DiffLabels`] — Key names used by the marker rendering
//! - [`diff`] / [`diff_values`] — Compare two trees

pub mod tree;

pub use tree::{diff, diff_values, DiffEntry, DiffLabels, DiffTree};
