//! Built-in value-level matchers.
//!
//! Each constructor returns a concrete [`congru_value::Matcher`] usable at
//! any nesting depth via [`congru_value::Value::matcher`].

pub mod anything;
pub mod be_type;
pub mod satisfy;
pub mod within;

pub use anything::{anything, Anything};
pub use be_type::{
    be_boolean, be_float, be_integer, be_map, be_nil, be_sequence, be_string, be_symbol,
    be_type, BeType, ValueType,
};
pub use satisfy::{satisfy, Satisfy};
pub use within::{be_within, BeWithin};
