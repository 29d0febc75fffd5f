//! Deep key-based pruning for the Canopy tree engine.
//!
//! Two dual walks over the same path-narrowing machinery:
//!
//! - **omit** removes matching children and keeps everything else
//!   ([`omit_by`] for predicates, [`omit_paths`] for path sets);
//! - **pick** keeps matching children and removes everything else
//!   ([`pick_paths`]).
//!
//! Both walk objects and arrays; array children are addressed by their
//! stringified index and surviving items are re-packed densely. All walks
//! carry the [`canopy_tree::Visited`] guard.

pub mod error;
pub mod omit;
pub mod pick;

pub use error::{PruneError, PruneResult};
pub use omit::{omit_by, omit_paths};
pub use pick::pick_paths;

pub(crate) mod narrow {
    use canopy_tree::PathSpec;

    /// Narrow a path set past `key`: returns whether any path matched `key`
    /// exactly (was exhausted by it), plus the surviving non-empty paths.
    pub(crate) fn narrow_paths(paths: &[PathSpec], key: &str) -> (bool, Vec<PathSpec>) {
        let mut exhausted = false;
        let mut remaining = Vec::new();
        for spec in paths {
            if let Some(narrowed) = spec.narrow(key) {
                if narrowed.is_exhausted() {
                    exhausted = true;
                } else {
                    remaining.push(narrowed);
                }
            }
        }
        (exhausted, remaining)
    }

}
