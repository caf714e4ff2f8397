use congru_value::{Matcher, Scalar, Value};

/// The concrete shape a [`BeType`] matcher accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    Nil,
    Boolean,
    Integer,
    Float,
    String,
    Symbol,
    Sequence,
    Map,
}

impl ValueType {
    fn noun(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean => "a boolean",
            Self::Integer => "an integer",
            Self::Float => "a float",
            Self::String => "a string",
            Self::Symbol => "a symbol",
            Self::Sequence => "a sequence",
            Self::Map => "a keyed collection",
        }
    }
}

/// Matches values of one concrete shape, e.g. "be an integer".
pub struct BeType {
    expected: ValueType,
}

/// A matcher accepting only values of the given type.
pub fn be_type(expected: ValueType) -> BeType {
    BeType { expected }
}

/// A matcher accepting only nil.
pub fn be_nil() -> BeType {
    be_type(ValueType::Nil)
}

/// A matcher accepting only booleans.
pub fn be_boolean() -> BeType {
    be_type(ValueType::Boolean)
}

/// A matcher accepting only integers.
pub fn be_integer() -> BeType {
    be_type(ValueType::Integer)
}

/// A matcher accepting only floats.
pub fn be_float() -> BeType {
    be_type(ValueType::Float)
}

/// A matcher accepting only strings.
pub fn be_string() -> BeType {
    be_type(ValueType::String)
}

/// A matcher accepting only symbols.
pub fn be_symbol() -> BeType {
    be_type(ValueType::Symbol)
}

/// A matcher accepting only sequences.
pub fn be_sequence() -> BeType {
    be_type(ValueType::Sequence)
}

/// A matcher accepting only keyed collections.
pub fn be_map() -> BeType {
    be_type(ValueType::Map)
}

impl Matcher for BeType {
    fn description(&self) -> String {
        format!("be {}", self.expected.noun())
    }

    fn matches(&self, actual: &Value) -> bool {
        match (self.expected, actual) {
            (ValueType::Nil, Value::Scalar(Scalar::Nil)) => true,
            (ValueType::Boolean, Value::Scalar(Scalar::Bool(_))) => true,
            (ValueType::Integer, Value::Scalar(Scalar::Int(_))) => true,
            (ValueType::Float, Value::Scalar(Scalar::Float(_))) => true,
            (ValueType::String, Value::Scalar(Scalar::Str(_))) => true,
            (ValueType::Symbol, Value::Scalar(Scalar::Sym(_))) => true,
            (ValueType::Sequence, Value::Sequence(_)) => true,
            (ValueType::Map, Value::Map(_)) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_check_rejects_the_string_form() {
        let m = be_integer();
        assert!(m.matches(&Value::from(1i64)));
        assert!(!m.matches(&Value::from("1")));
        assert!(!m.matches(&Value::from(1.0)));
    }

    #[test]
    fn collection_checks_distinguish_categories() {
        assert!(be_sequence().matches(&Value::seq([])));
        assert!(!be_sequence().matches(&Value::map([])));
        assert!(be_map().matches(&Value::map([])));
    }

    #[test]
    fn descriptions_read_as_phrases() {
        assert_eq!(be_integer().description(), "be an integer");
        assert_eq!(be_nil().description(), "be nil");
        assert_eq!(be_map().description(), "be a keyed collection");
    }

    #[test]
    fn failure_message_names_the_actual_value() {
        assert_eq!(
            be_string().failure_message(&Value::from(7i64)),
            "expected 7 to be a string"
        );
    }
}
