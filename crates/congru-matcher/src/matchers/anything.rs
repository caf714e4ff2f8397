use congru_value::{Matcher, Value};

/// Matches every value. Useful as a placeholder for fields whose content
/// is irrelevant to the assertion.
pub struct Anything;

/// A matcher that accepts anything.
pub fn anything() -> Anything {
    Anything
}

impl Matcher for Anything {
    fn description(&self) -> String {
        "be anything".to_string()
    }

    fn matches(&self, _actual: &Value) -> bool {
        true
    }
}
