use congru_value::{Path, Value};

/// The result of one structural comparison pass.
///
/// Entries are produced in traversal order and owned by the comparison
/// call that created them; [`crate::render_diff`] owns the output order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diff {
    /// The list of discrepancies.
    pub entries: Vec<DiffEntry>,
}

impl Diff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the two values were structurally equivalent.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of discrepancies.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of locations present only in the actual value.
    pub fn additions(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Added { .. }))
            .count()
    }

    /// Number of locations present only in the expected value.
    pub fn removals(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Removed { .. }))
            .count()
    }

    /// Number of locations present on both sides but unequal.
    pub fn changes(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Changed { .. }))
            .count()
    }
}

/// A single discrepancy between the expected and actual structures.
#[derive(Clone, Debug, PartialEq)]
pub enum DiffEntry {
    /// The location exists in expected but has no counterpart in actual.
    Removed { path: Path, expected: Value },
    /// The location exists in actual but has no counterpart in expected.
    Added { path: Path, actual: Value },
    /// Both sides have the location but the values are unequal. For a
    /// failed nested matcher, `expected` holds the matcher value so the
    /// rendered expectation is the matcher's own description.
    Changed {
        path: Path,
        expected: Value,
        actual: Value,
    },
}

impl DiffEntry {
    /// The location this entry refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Removed { path, .. } => path,
            Self::Added { path, .. } => path,
            Self::Changed { path, .. } => path,
        }
    }
}
