//! The recursion guard shared by every deep walk.

use serde_json::Value;

/// Default ceiling on recursion depth.
pub const DEFAULT_DEPTH_LIMIT: usize = 512;

/// Seen-list of node references along the current recursion path.
///
/// Tracks nodes by address (`std::ptr::eq`), not by value equality: the
/// question it answers is "is this exact node already being walked?". Walks
/// push a node on entry and pop it on exit, and consult [`Visited::blocks`]
/// before recursing; a blocked node is handled as a terminal leaf instead.
///
/// The guard also enforces a depth ceiling that bounds the walk's own
/// recursion: nodes past the ceiling are handled as terminal leaves. The
/// leaf handling still clones (and callers may compare or drop) the
/// remaining subtree, and `serde_json::Value`'s `Clone`/`PartialEq`/`Drop`
/// recurse to the full input depth, so stack use on extreme trees remains
/// bounded by the input, not by the ceiling.
///
/// Threaded through recursion as an explicit `&mut` parameter; it holds no
/// state between top-level calls, so every operation is reentrant.
#[derive(Debug)]
pub struct Visited<'a> {
    stack: Vec<&'a Value>,
    depth_limit: usize,
}

impl<'a> Visited<'a> {
    /// An empty guard with the default depth ceiling.
    pub fn new() -> Self {
        Self::with_depth_limit(DEFAULT_DEPTH_LIMIT)
    }

    /// An empty guard with an explicit depth ceiling.
    pub fn with_depth_limit(depth_limit: usize) -> Self {
        Self {
            stack: Vec::new(),
            depth_limit,
        }
    }

    /// Returns `true` if recursing into `value` must be skipped: either the
    /// node is already on the current path, or the path has reached the
    /// depth ceiling.
    pub fn blocks(&self, value: &Value) -> bool {
        self.stack.len() >= self.depth_limit
            || self.stack.iter().any(|seen| std::ptr::eq(*seen, value))
    }

    /// Record a node on the current path.
    pub fn push(&mut self, value: &'a Value) {
        self.stack.push(value);
    }

    /// Remove the most recent node from the current path.
    pub fn pop(&mut self) {
        self.stack.pop();
    }

    /// Current path depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Visited<'_> {
    fn default() -> Self {
        Self::new()
    }
}
