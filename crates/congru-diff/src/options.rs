use serde::{Deserialize, Serialize};

/// Configuration for a structural comparison.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Maximum recursion depth before the comparison aborts with
    /// [`crate::DiffError::MaxDepthExceeded`].
    ///
    /// `None` (the default) leaves recursion unbounded: inputs are
    /// in-memory test fixtures and assumed acyclic. Callers embedding the
    /// differ against untrusted nesting can opt into a limit.
    pub max_depth: Option<usize>,
}

impl DiffOptions {
    /// Options with a recursion depth guard.
    pub fn bounded(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}
