//! Error types for the prune crate.

use canopy_tree::NodeKind;

/// Errors that can occur during prune operations.
#[derive(Debug, thiserror::Error)]
pub enum PruneError {
    /// `pick_paths` was invoked on a top-level leaf. Picking narrows a path
    /// set through a container; reaching a leaf at the root is a caller
    /// contract violation, not an empty result.
    #[error("pick requires an object or array at the top level, got a {0}")]
    LeafRoot(NodeKind),
}

/// Convenience alias for prune results.
pub type PruneResult<T> = Result<T, PruneError>;
