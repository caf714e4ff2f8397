//! The equality matcher facade: the public match / negated-match /
//! description / failure-message contract.

use std::sync::Arc;

use congru_diff::{diff, render_diff, Diff, DiffOptions};
use congru_value::{Matcher, Path, Value};

// ---------------------------------------------------------------------------
// ComparisonResult
// ---------------------------------------------------------------------------

/// The outcome of one comparison call, cached on the facade so the failure
/// messages can be queried afterwards. Created fresh per call, never
/// shared.
struct ComparisonResult {
    /// Positive-sense outcome; `does_not_match` negates it at the call site.
    matched: bool,
    detail: Detail,
}

enum Detail {
    /// The expected value was itself a matcher; outcome and failure text
    /// come from it.
    Delegated {
        matcher: Arc<dyn Matcher>,
        actual: Value,
    },
    /// Both sides shared a collection category; the differ ran.
    Structural { diff: Diff, actual: Value },
    /// Plain equality, including every cross-category mismatch.
    Plain { actual: Value },
}

// ---------------------------------------------------------------------------
// EqualityMatcher
// ---------------------------------------------------------------------------

/// Structural deep-equality matcher over one expected value.
///
/// Dispatch on the expected value's category: a matcher delegates, two
/// sequences or two keyed collections diff structurally, anything else
/// compares by plain equality. Type mismatches are never errors; they
/// simply fail the match.
///
/// One instance covers one comparison: `matches`/`does_not_match` take
/// `&mut self` and cache the result that the message accessors read.
/// Construct, call once, read messages. Distinct instances are
/// independent and may be used concurrently.
pub struct EqualityMatcher {
    expected: Value,
    last: Option<ComparisonResult>,
}

impl EqualityMatcher {
    /// Create a matcher for the given expected value, which may contain
    /// nested matchers at any depth.
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
            last: None,
        }
    }

    /// The expected value this matcher compares against.
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    /// Compare against `actual`. On failure, [`Self::failure_message`]
    /// describes the mismatch.
    pub fn matches(&mut self, actual: &Value) -> bool {
        let result = self.compare(actual);
        let matched = result.matched;
        self.last = Some(result);
        matched
    }

    /// Negated comparison. On failure (i.e. the values matched),
    /// [`Self::failure_message_when_negated`] describes it.
    pub fn does_not_match(&mut self, actual: &Value) -> bool {
        let result = self.compare(actual);
        let matched = result.matched;
        self.last = Some(result);
        !matched
    }

    /// One-line description of what this matcher accepts.
    pub fn description(&self) -> String {
        // A matcher value renders as its own description.
        format!("match {}", self.expected)
    }

    /// Describes the most recent failed [`Self::matches`] call. Empty
    /// before any comparison has run.
    pub fn failure_message(&self) -> String {
        match &self.last {
            Some(result) => match &result.detail {
                Detail::Delegated { matcher, actual } => matcher.failure_message(actual),
                Detail::Structural { diff, actual } => format!(
                    "expected: {}\n     got: {}\n\nDiff:\n{}",
                    self.expected,
                    actual,
                    render_diff(diff)
                ),
                Detail::Plain { actual } => {
                    format!("expected: == {}\n     got:    {}", self.expected, actual)
                }
            },
            None => String::new(),
        }
    }

    /// Describes the most recent failed [`Self::does_not_match`] call.
    /// The collection case is intentionally terse: it states the two
    /// top-level values and does not enumerate a diff.
    pub fn failure_message_when_negated(&self) -> String {
        match &self.last {
            Some(result) => match &result.detail {
                Detail::Delegated { matcher, actual } => {
                    matcher.failure_message_when_negated(actual)
                }
                Detail::Structural { actual, .. } | Detail::Plain { actual } => format!(
                    "expected: not == {}\n     got:        {}",
                    self.expected, actual
                ),
            },
            None => String::new(),
        }
    }

    fn compare(&self, actual: &Value) -> ComparisonResult {
        tracing::trace!(
            expected = ?self.expected.kind(),
            actual = ?actual.kind(),
            "dispatching comparison"
        );

        match (&self.expected, actual) {
            (Value::Matcher(matcher), _) => ComparisonResult {
                matched: matcher.matches(actual),
                detail: Detail::Delegated {
                    matcher: matcher.clone(),
                    actual: actual.clone(),
                },
            },
            (Value::Sequence(_), Value::Sequence(_)) | (Value::Map(_), Value::Map(_)) => {
                // This never fails: the facade always runs unbounded.
                let diff = diff(&self.expected, actual, &Path::root(), &DiffOptions::default())
                    .unwrap_or_default();
                ComparisonResult {
                    matched: diff.is_empty(),
                    detail: Detail::Structural {
                        diff,
                        actual: actual.clone(),
                    },
                }
            }
            _ => ComparisonResult {
                matched: self.expected == *actual,
                detail: Detail::Plain {
                    actual: actual.clone(),
                },
            },
        }
    }
}
