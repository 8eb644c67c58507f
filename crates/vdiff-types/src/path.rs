//! Tree paths and pointer-notation encoding.
//!
//! A [`Path`] addresses one location in a value tree as a sequence of
//! segments, each either an object field name or an array index. Paths
//! render to RFC 6901-style pointer notation: segments joined by `/`, with
//! literal `~` and `/` inside a segment escaped to `~0` and `~1`. The root
//! path renders as the empty string.

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One step in a tree path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// An object field name.
    Field(String),
    /// An array index.
    Index(usize),
}

impl PathSegment {
    /// The unescaped textual form of the segment.
    pub fn text(&self) -> String {
        match self {
            Self::Field(name) => name.clone(),
            Self::Index(idx) => idx.to_string(),
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Escape a segment for pointer notation: `~` becomes `~0`, `/` becomes `~1`.
pub fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Reverse of [`escape_segment`]. `~1` is decoded before `~0` so that the
/// escape characters themselves round-trip.
pub fn unescape_segment(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}

/// An ordered sequence of segments addressing one node in a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The root path (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from a segment list.
    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    /// Returns `true` if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The segment list.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// A new path extended with an object field segment.
    pub fn field(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name.to_string()));
        Self { segments }
    }

    /// A new path extended with an array index segment.
    pub fn element(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(index));
        Self { segments }
    }

    /// Render in pointer notation.
    ///
    /// The root path renders as `""`; every segment is prefixed with `/`
    /// and escaped per [`escape_segment`].
    pub fn to_pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            out.push_str(&escape_segment(&segment.text()));
        }
        out
    }

    /// Parse pointer notation back into a path.
    ///
    /// A leading `/` is optional (`""` and `/` both parse to the root).
    /// Segments consisting solely of ASCII digits become array indices;
    /// everything else becomes a field name.
    pub fn parse_pointer(pointer: &str) -> Self {
        let trimmed = pointer.strip_prefix('/').unwrap_or(pointer);
        if trimmed.is_empty() {
            return Self::root();
        }
        let segments = trimmed
            .split('/')
            .map(|raw| {
                let text = unescape_segment(raw);
                match parse_index(&text) {
                    Some(idx) => PathSegment::Index(idx),
                    None => PathSegment::Field(text),
                }
            })
            .collect();
        Self { segments }
    }
}

/// Parse a segment as an array index: non-empty, all ASCII digits, and in
/// range for `usize`.
fn parse_index(text: &str) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_pointer())
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_pointer())
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let pointer = String::deserialize(deserializer)?;
        if !pointer.is_empty() && !pointer.starts_with('/') {
            return Err(D::Error::custom("pointer must be empty or start with '/'"));
        }
        Ok(Self::parse_pointer(&pointer))
    }
}
