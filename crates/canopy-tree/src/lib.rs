//! Foundation types for the Canopy deep tree transform engine.
//!
//! This crate provides the structural primitives shared by every other
//! Canopy crate: node classification, the dot-path mini-language, and the
//! recursion guard that keeps deep walks bounded.
//!
//! # Key Types
//!
//! - [`NodeKind`] — Tagged classification of a value as `Leaf`, `Object`, or `Array`
//! - [`PathSpec`] / [`Matcher`] — Parsed path patterns (`foo.*.bar`, `/regex/i` segments)
//! - [`PathSegment`] — One concrete step of a flat key (`Key` or `Index`)
//! - [`Visited`] — Seen-list of node references along the current recursion path

pub mod classify;
pub mod error;
pub mod path;
pub mod visited;

pub use classify::NodeKind;
pub use error::{PathError, PathResult};
pub use path::{join_key, split_key, Matcher, PathSegment, PathSpec};
pub use visited::{Visited, DEFAULT_DEPTH_LIMIT};
