use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::key::Key;
use crate::matcher::Matcher;
use crate::scalar::Scalar;

/// The comparison category of a value, as reported by the classifier.
///
/// All dispatch in the comparison engine goes through `Kind`; the category
/// decides whether a node is delegated to a matcher, diffed structurally,
/// or compared by plain equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A polymorphic predicate object.
    Matcher,
    /// An ordered, integer-indexed collection.
    Sequence,
    /// An associative collection with arbitrary keys.
    KeyedCollection,
    /// Anything else; compared by plain equality.
    Scalar,
}

/// A composite value: the input shape the comparison engine walks.
///
/// `Value` is a tagged union so the engine can pattern-match on the
/// category instead of probing capabilities at every node. The `Matcher`
/// variant holds a shared predicate object; two matcher values compare
/// equal only when they are the same object.
#[derive(Clone)]
pub enum Value {
    /// A leaf value.
    Scalar(Scalar),
    /// An ordered sequence.
    Sequence(Vec<Value>),
    /// A keyed collection.
    Map(BTreeMap<Key, Value>),
    /// An embedded predicate object.
    Matcher(Arc<dyn Matcher>),
}

impl Value {
    /// The nil scalar.
    pub fn nil() -> Self {
        Self::Scalar(Scalar::Nil)
    }

    /// A symbol scalar.
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Scalar(Scalar::Sym(name.into()))
    }

    /// A sequence from any iterable of values.
    pub fn seq(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Sequence(items.into_iter().collect())
    }

    /// A keyed collection from any iterable of key-value pairs.
    pub fn map(pairs: impl IntoIterator<Item = (Key, Value)>) -> Self {
        Self::Map(pairs.into_iter().collect())
    }

    /// Wrap a matcher as a value usable at any nesting depth.
    pub fn matcher(m: impl Matcher + 'static) -> Self {
        Self::Matcher(Arc::new(m))
    }

    /// Classify this value into its comparison category.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Scalar(_) => Kind::Scalar,
            Self::Sequence(_) => Kind::Sequence,
            Self::Map(_) => Kind::KeyedCollection,
            Self::Matcher(_) => Kind::Matcher,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Scalar(a), Self::Scalar(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            // Matcher values are equal only when they are the same object.
            (Self::Matcher(a), Self::Matcher(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// Inspect-style rendering: `[1, "two"]`, `{"id"=>1, :k=>nil}`. A
    /// matcher renders as its own description.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Self::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}=>{value}")?;
                }
                write!(f, "}}")
            }
            Self::Matcher(m) => write!(f, "{}", m.description()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => f.debug_tuple("Scalar").field(s).finish(),
            Self::Sequence(items) => f.debug_tuple("Sequence").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Matcher(m) => f.debug_tuple("Matcher").field(&m.description()).finish(),
        }
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Scalar(Scalar::Int(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Scalar(Scalar::Float(x))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(Scalar::Str(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(Scalar::Str(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::Sequence(items)
    }
}

impl From<serde_json::Value> for Value {
    /// Build a value from parsed JSON. Object keys become string keys;
    /// numbers become integers when they fit in `i64`, floats otherwise.
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::nil(),
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => i.into(),
                None => n.as_f64().unwrap_or(f64::NAN).into(),
            },
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => {
                Self::seq(items.into_iter().map(Value::from))
            }
            serde_json::Value::Object(entries) => Self::map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Key::Str(k), Value::from(v))),
            ),
        }
    }
}
