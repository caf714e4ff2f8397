use congru_value::{Matcher, Scalar, Value};

/// Matches numbers inside an inclusive range. Integers and floats are both
/// accepted; anything non-numeric fails.
pub struct BeWithin {
    min: f64,
    max: f64,
}

/// A matcher accepting numbers in `min..=max`.
pub fn be_within(min: f64, max: f64) -> BeWithin {
    BeWithin { min, max }
}

impl Matcher for BeWithin {
    fn description(&self) -> String {
        format!("be within {}..={}", self.min, self.max)
    }

    fn matches(&self, actual: &Value) -> bool {
        let n = match actual {
            Value::Scalar(Scalar::Int(i)) => *i as f64,
            Value::Scalar(Scalar::Float(x)) => *x,
            _ => return false,
        };
        n >= self.min && n <= self.max
    }
}
