//! The dot-path mini-language.
//!
//! Two related string formats live here:
//!
//! - **Path specs** (`PathSpec`): patterns consumed by the prune family.
//!   Dot-separated segments where each segment is a literal key/index, the
//!   wildcard `*`, or a `/pattern/flags` regex literal tested against the
//!   stringified key or index. Example:
//!   `coo.moo.*.cow./[1|6]/.*.forever`.
//! - **Flat keys** (`split_key` / `join_key`): concrete locations produced
//!   by flatten and consumed by unflatten, e.g. `foo.bar.0.wopper` ⇄
//!   `[Key("foo"), Key("bar"), Index(0), Key("wopper")]`.
//!
//! The dot is a hard delimiter in both formats: keys and regex patterns
//! containing a literal `.` cannot be expressed.

use std::fmt;
use std::str::FromStr;

use regex::{Regex, RegexBuilder};

use crate::error::{PathError, PathResult};

/// One matcher segment of a [`PathSpec`].
#[derive(Clone, Debug)]
pub enum Matcher {
    /// Matches exactly this key (array indices are compared stringified).
    Literal(String),
    /// `*`: matches any key or index at this level.
    Wildcard,
    /// `/pattern/flags`: matches keys or stringified indices by regex test.
    Pattern(Regex),
}

impl Matcher {
    fn parse(raw: &str, path: &str) -> PathResult<Self> {
        if raw.is_empty() {
            return Err(PathError::EmptySegment {
                path: path.to_string(),
            });
        }
        if raw == "*" {
            return Ok(Matcher::Wildcard);
        }
        if let Some(rest) = raw.strip_prefix('/') {
            let close = rest.rfind('/').ok_or_else(|| PathError::BadPattern {
                segment: raw.to_string(),
                reason: "missing closing '/'".to_string(),
            })?;
            let (pattern, flags) = rest.split_at(close);
            let mut builder = RegexBuilder::new(pattern);
            for flag in flags[1..].chars() {
                match flag {
                    'i' => {
                        builder.case_insensitive(true);
                    }
                    other => {
                        return Err(PathError::UnsupportedFlag {
                            flag: other,
                            segment: raw.to_string(),
                        })
                    }
                }
            }
            let regex = builder.build().map_err(|e| PathError::BadPattern {
                segment: raw.to_string(),
                reason: e.to_string(),
            })?;
            return Ok(Matcher::Pattern(regex));
        }
        Ok(Matcher::Literal(raw.to_string()))
    }

    /// Test this matcher against a key or stringified index.
    pub fn matches(&self, key: &str) -> bool {
        match self {
            Matcher::Literal(lit) => lit == key,
            Matcher::Wildcard => true,
            Matcher::Pattern(regex) => regex.is_match(key),
        }
    }
}

impl PartialEq for Matcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Matcher::Literal(a), Matcher::Literal(b)) => a == b,
            (Matcher::Wildcard, Matcher::Wildcard) => true,
            (Matcher::Pattern(a), Matcher::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Literal(lit) => f.write_str(lit),
            Matcher::Wildcard => f.write_str("*"),
            Matcher::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// A parsed path pattern: an ordered list of [`Matcher`] segments.
#[derive(Clone, Debug, PartialEq)]
pub struct PathSpec {
    segments: Vec<Matcher>,
}

impl PathSpec {
    /// Parse a dot-separated pattern string.
    pub fn parse(raw: &str) -> PathResult<Self> {
        if raw.is_empty() {
            return Err(PathError::Empty);
        }
        let segments = raw
            .split('.')
            .map(|segment| Matcher::parse(segment, raw))
            .collect::<PathResult<Vec<_>>>()?;
        Ok(Self { segments })
    }

    /// Parse a batch of pattern strings.
    pub fn parse_all<S: AsRef<str>>(raws: &[S]) -> PathResult<Vec<Self>> {
        raws.iter().map(|raw| Self::parse(raw.as_ref())).collect()
    }

    /// Number of remaining segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` once every segment has been consumed: the location
    /// reached via [`PathSpec::narrow`] is an exact match for this pattern.
    pub fn is_exhausted(&self) -> bool {
        self.segments.is_empty()
    }

    /// If the first segment matches `key`, return this spec narrowed past
    /// it. Returns `None` when the first segment does not match or the spec
    /// is already exhausted.
    pub fn narrow(&self, key: &str) -> Option<PathSpec> {
        let (first, rest) = self.segments.split_first()?;
        first.matches(key).then(|| PathSpec {
            segments: rest.to_vec(),
        })
    }
}

impl FromStr for PathSpec {
    type Err = PathError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl fmt::Display for PathSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// One concrete step of a flat key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object key.
    Key(String),
    /// An array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Split a flat key into segments. A segment becomes an [`PathSegment::Index`]
/// only when it is a canonical decimal index (all digits, no leading zeros),
/// so that `join_key` reproduces the input exactly.
pub fn split_key(key: &str) -> Vec<PathSegment> {
    key.split('.')
        .map(|segment| match parse_index(segment) {
            Some(index) => PathSegment::Index(index),
            None => PathSegment::Key(segment.to_string()),
        })
        .collect()
}

/// Join segments back into a flat key. Exact inverse of [`split_key`].
pub fn join_key(segments: &[PathSegment]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&segment.to_string());
    }
    out
}

fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // "007" must stay a key: it would not survive a join round-trip.
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}
