use std::cmp::Ordering;
use std::fmt;

use crate::key::Key;

/// One step into a nested structure: a sequence index or a collection key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A position inside a sequence.
    Index(usize),
    /// A key inside a keyed collection.
    Key(Key),
}

impl Segment {
    /// Category rank used to break ties between segments whose rendered
    /// strings collide (e.g. the index `1`, the integer key `1`, and the
    /// string key `"1"` all render as `1`).
    fn rank(&self) -> u8 {
        match self {
            Self::Index(_) => 0,
            Self::Key(Key::Int(_)) => 1,
            Self::Key(Key::Str(_)) => 2,
            Self::Key(Key::Sym(_)) => 3,
            Self::Key(Key::Bool(_)) => 4,
        }
    }
}

impl fmt::Display for Segment {
    /// Path rendering: indices and integer keys in decimal, string keys
    /// bare, symbol keys with a leading colon.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(Key::Str(s)) => write!(f, "{s}"),
            Self::Key(key) => write!(f, "{key}"),
        }
    }
}

impl Ord for Segment {
    /// Segments order by rendered string; equal renderings fall back to
    /// the category rank.
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string()
            .cmp(&other.to_string())
            .then_with(|| self.rank().cmp(&other.rank()))
    }
}

impl PartialOrd for Segment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Self {
        Self::Index(i)
    }
}

impl From<Key> for Segment {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

/// An immutable location inside a nested structure.
///
/// Appending produces a new path; the original is untouched. Paths are
/// totally ordered segment-by-segment, which is the order diff output is
/// rendered in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path (the root of a comparison).
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path with `segment` appended.
    pub fn push(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// The segments of this path, outermost first.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` if this is the root path.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Path {
    /// Dotted rendering: `book.authors.0`. The root renders empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> Ordering {
        // Lexicographic over segments; a strict prefix orders first.
        self.segments.cmp(&other.segments)
    }
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
