//! Flatten and unflatten for the Canopy tree engine.
//!
//! [`flatten`] converts a nested tree into a single-level map from
//! dot-joined key paths to leaf values; [`unflatten`] is its best-effort
//! inverse. The flat-key format (`foo.bar.0.wopper`, array indices
//! stringified) is a compatibility protocol shared with the rest of the
//! engine.
//!
//! Known non-bijective edges: an object whose keys merely look numeric
//! unflattens to an array unless index inference is disabled via
//! [`UnflattenOptions`], and empty containers produce no flat entries at
//! all.

pub mod flat;
pub mod unflat;

pub use flat::{flatten, flatten_until};
pub use unflat::{unflatten, unflatten_with, UnflattenOptions};
