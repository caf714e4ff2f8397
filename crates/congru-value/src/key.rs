use std::fmt;

use crate::error::ValueError;
use crate::scalar::Scalar;

/// A keyed-collection key: the hashable subset of [`Scalar`].
///
/// Keys are totally ordered so keyed collections can live in a `BTreeMap`.
/// Note that this derived order is an internal storage detail; the order of
/// diff output is governed by [`crate::Path`] ordering instead.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    /// A string key.
    Str(String),
    /// A symbol key.
    Sym(String),
    /// An integer key.
    Int(i64),
    /// A boolean key.
    Bool(bool),
}

impl Key {
    /// A symbol key.
    pub fn sym(name: impl Into<String>) -> Self {
        Self::Sym(name.into())
    }
}

impl fmt::Display for Key {
    /// Inspect-style rendering, as the key appears inside a rendered
    /// keyed collection: `"name"`, `:name`, `1`, `true`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Sym(s) => write!(f, ":{s}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl TryFrom<&Scalar> for Key {
    type Error = ValueError;

    /// Convert a scalar into a key. `Nil` and `Float` are not hashable.
    fn try_from(scalar: &Scalar) -> Result<Self, Self::Error> {
        match scalar {
            Scalar::Str(s) => Ok(Self::Str(s.clone())),
            Scalar::Sym(s) => Ok(Self::Sym(s.clone())),
            Scalar::Int(i) => Ok(Self::Int(*i)),
            Scalar::Bool(b) => Ok(Self::Bool(*b)),
            other => Err(ValueError::UnhashableKey(other.to_string())),
        }
    }
}
