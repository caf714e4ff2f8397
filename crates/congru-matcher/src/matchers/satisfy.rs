use congru_value::{Matcher, Value};

/// Matches values accepted by an arbitrary predicate. The description is
/// supplied by the caller since a closure cannot describe itself.
pub struct Satisfy {
    description: String,
    predicate: Box<dyn Fn(&Value) -> bool + Send + Sync>,
}

/// A matcher delegating to `predicate`, described by `description`
/// (phrased to follow "expected X to ...", e.g. "be an even number").
pub fn satisfy(
    description: impl Into<String>,
    predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
) -> Satisfy {
    Satisfy {
        description: description.into(),
        predicate: Box::new(predicate),
    }
}

impl Matcher for Satisfy {
    fn description(&self) -> String {
        self.description.clone()
    }

    fn matches(&self, actual: &Value) -> bool {
        (self.predicate)(actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use congru_value::Scalar;

    fn even() -> Satisfy {
        satisfy("be an even number", |v| {
            matches!(v, Value::Scalar(Scalar::Int(i)) if i % 2 == 0)
        })
    }

    #[test]
    fn delegates_to_the_predicate() {
        assert!(even().matches(&Value::from(4i64)));
        assert!(!even().matches(&Value::from(3i64)));
        assert!(!even().matches(&Value::from("4")));
    }

    #[test]
    fn messages_use_the_supplied_description() {
        assert_eq!(
            even().failure_message(&Value::from(3i64)),
            "expected 3 to be an even number"
        );
    }
}
