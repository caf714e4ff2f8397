//! Structural differ for congru.
//!
//! Walks an expected value against an actual value and produces a flat,
//! path-addressed list of discrepancies. Sequences compare positionally
//! (no reordering or edit-distance alignment), keyed collections compare
//! over the union of their keys, and matchers embedded in the expected
//! structure are delegated to at any depth.
//!
//! # Key Types
//!
//! - [`Diff`] / [`DiffEntry`] — Path-addressed change records (added/removed/changed)
//! - [`diff`] — The recursive comparison entry point
//! - [`render_diff`] — Deterministic, path-sorted report rendering
//! - [`DiffOptions`] — Comparison options (opt-in recursion depth guard)

pub mod differ;
pub mod entry;
pub mod error;
pub mod options;
pub mod render;

pub use differ::diff;
pub use entry::{Diff, DiffEntry};
pub use error::{DiffError, DiffResult};
pub use options::DiffOptions;
pub use render::render_diff;
