//! Error types for the foundation crate.

/// Errors from parsing the dot-path mini-language.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    /// The path string was empty.
    #[error("empty path")]
    Empty,

    /// A path contained an empty segment (e.g. `a..b` or a trailing dot).
    #[error("empty segment in path {path:?}")]
    EmptySegment { path: String },

    /// A `/pattern/` segment failed to compile.
    #[error("bad pattern segment {segment:?}: {reason}")]
    BadPattern { segment: String, reason: String },

    /// A `/pattern/flags` segment carried a flag other than `i`.
    #[error("unsupported regex flag {flag:?} in segment {segment:?}")]
    UnsupportedFlag { flag: char, segment: String },
}

/// Convenience alias for path-parsing results.
pub type PathResult<T> = Result<T, PathError>;
