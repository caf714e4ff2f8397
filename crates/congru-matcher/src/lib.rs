//! Matcher protocol and equality facade for congru.
//!
//! This is the user-facing crate: it provides the built-in value-level
//! matchers and the [`EqualityMatcher`] facade implementing the public
//! match / negated-match / description / failure-message contract, and
//! re-exports the value and diff types the API surfaces.
//!
//! # Example
//!
//! ```
//! use congru_matcher::{matchers, EqualityMatcher, Key, Value};
//!
//! let expected = Value::map([
//!     (Key::from("id"), Value::matcher(matchers::be_integer())),
//!     (Key::from("title"), Value::from("Hobbit")),
//! ]);
//!
//! let mut matcher = EqualityMatcher::new(expected);
//! let actual = Value::map([
//!     (Key::from("id"), Value::from(1i64)),
//!     (Key::from("title"), Value::from("Hobbit")),
//! ]);
//! assert!(matcher.matches(&actual));
//! ```

pub mod equality;
pub mod matchers;

pub use equality::EqualityMatcher;

pub use congru_diff::{diff, render_diff, Diff, DiffEntry, DiffOptions};
pub use congru_value::{Key, Kind, Matcher, Path, Scalar, Segment, Value};
