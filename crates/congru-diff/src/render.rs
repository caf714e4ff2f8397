//! Human-readable diff reports.
//!
//! One line per entry, sorted by path so the same entry set renders
//! identically regardless of traversal order:
//!
//! ```text
//! - removed.key => expected "old"
//! ~ changed.key => expected 1, got "1"
//! + added.key => got true
//! ```

use crate::entry::{Diff, DiffEntry};

/// Render a diff as a deterministic, path-sorted report.
///
/// Values render inspect-style; a matcher on the expected side renders as
/// its own description. Lines are joined with a newline and the result
/// carries no trailing newline. An empty diff renders as the empty string.
pub fn render_diff(diff: &Diff) -> String {
    let mut entries: Vec<&DiffEntry> = diff.entries.iter().collect();
    entries.sort_by(|a, b| a.path().cmp(b.path()));

    let lines: Vec<String> = entries.iter().map(|entry| render_entry(entry)).collect();
    lines.join("\n")
}

fn render_entry(entry: &DiffEntry) -> String {
    match entry {
        DiffEntry::Removed { path, expected } => {
            format!("- {path} => expected {expected}")
        }
        DiffEntry::Changed {
            path,
            expected,
            actual,
        } => {
            format!("~ {path} => expected {expected}, got {actual}")
        }
        DiffEntry::Added { path, actual } => {
            format!("+ {path} => got {actual}")
        }
    }
}
