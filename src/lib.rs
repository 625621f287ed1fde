//! Erased options
//!
//! A runtime encoding of an option type for a dynamic value model with two
//! "nothing" values and no tagged unions, plus the usual set of option
//! combinators.
//!
//! ```
//! use erased_option::{ops, some, Value, NONE};
//!
//! // Most values are stored unboxed.
//! assert_eq!(some(Value::from(5)), Value::from(5));
//!
//! // `Some(null)` is boxed, so it stays distinct from `None`.
//! let some_null = some(Value::Null);
//! assert!(!some_null.is_nullish());
//! assert_eq!(ops::to_array(some_null).to_string(), "[null]");
//! assert_eq!(ops::to_array(NONE).to_string(), "[]");
//! ```

mod runtime;
mod value;

pub use runtime::{
    exception::Exception,
    ops,
    option::{is_none, is_some, some, NONE},
    optional::Optional,
};
pub use value::{value, FromValue, IntoValue, SomeBox, Value, ValueError};
