use crate::value::Value;

/// The capability protocol for polymorphic predicate objects.
///
/// A matcher can stand in for a literal value at any depth of an expected
/// structure. When the comparison engine reaches one, it delegates to
/// [`Matcher::matches`] instead of comparing structurally, and reports
/// mismatches with the matcher's own text instead of a generated diff line.
///
/// The trait is object-safe and `Send + Sync` so matchers can be shared
/// inside value trees as `Arc<dyn Matcher>`. Because matchers are shared,
/// the message operations receive the actual value as a parameter rather
/// than caching it; the default bodies derive both failure texts from
/// [`Matcher::description`], so most implementations only provide
/// `description` and `matches`.
pub trait Matcher: Send + Sync {
    /// Short phrase describing what this matcher accepts, e.g. "be an
    /// integer". Composed into sentences by the default message bodies.
    fn description(&self) -> String;

    /// Evaluate the matcher against an actual value.
    fn matches(&self, actual: &Value) -> bool;

    /// Message reported when a positive-sense match failed.
    fn failure_message(&self, actual: &Value) -> String {
        format!("expected {} to {}", actual, self.description())
    }

    /// Message reported when a negative-sense match failed.
    fn failure_message_when_negated(&self, actual: &Value) -> String {
        format!("expected {} not to {}", actual, self.description())
    }
}
