//! The host value model
//!
//! Code that works on erased options exchanges dynamically typed [`Value`]s.
//! The model has two distinct "nothing" values, [`Value::Undefined`] and
//! [`Value::Null`], and no tagged union of its own. Options are therefore
//! encoded on top of it, see [`some`](crate::some).
//!
//! Strings, arrays and boxes are reference types: cloning a [`Value`] shares
//! the underlying allocation, which is never mutated. [`Value::strict_eq`]
//! compares those by identity, everything else by value.

use std::{fmt, sync::Arc};

pub use boxed::{value, SomeBox};
pub use convert::{FromValue, IntoValue};
pub use error::ValueError;

pub(crate) use boxed::{into_payload, payload};

mod boxed;
mod convert;
mod error;


#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The primary "nothing" value, also used as the encoding of `None`
    #[default]
    Undefined,
    /// The secondary "nothing" value
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
    Array(Arc<[Value]>),
    /// A present value that would otherwise be confused with `None` or with
    /// another boxed value
    Some(SomeBox),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Self::String(s.into())
    }

    /// Create an array value from its elements.
    pub fn array(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(items.into_iter().collect())
    }

    /// Returns whether this value is one of the two "nothing" values.
    ///
    /// This is the non-strict test: `Undefined` and `Null` are treated alike.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Returns whether this value is a [`SomeBox`].
    pub fn is_boxed(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Identity comparison
    ///
    /// Primitives compare by value (`NaN` is unequal to itself), strings,
    /// arrays and boxes compare by pointer.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) => true,
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => Arc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Arc::ptr_eq(a, b),
            (Self::Some(a), Self::Some(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(&**items),
            _ => None,
        }
    }

    /// Name of the kind of value, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Some(_) => "some",
        }
    }

    /// Print the value the way it appears inside an array or a box, which
    /// only differs from [`Display`](fmt::Display) in that strings are
    /// quoted.
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            other => write!(f, "{other}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) if n.is_infinite() => {
                if n.is_sign_negative() {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "Infinity")
                }
            }
            Self::Number(n) => fmt_number(*n, f),
            Self::String(s) => write!(f, "{s}"),
            Self::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                write!(f, "]")
            }
            Self::Some(b) => {
                write!(f, "Some(")?;
                b.get().fmt_nested(f)?;
                write!(f, ")")
            }
        }
    }
}

/// Print a finite number, switching to exponent notation outside of
/// `1e-6 <= |n| < 1e21`. Negative zero prints as `0`.
fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n == 0.0 {
        return write!(f, "0");
    }
    let magnitude = n.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{n}");
    }
    let s = format!("{n:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => {
            write!(f, "{mantissa}e+{exp}")
        }
        _ => write!(f, "{s}"),
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Undefined
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(value: Arc<str>) -> Self {
        Self::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::Array(value.into())
    }
}

impl From<SomeBox> for Value {
    fn from(value: SomeBox) -> Self {
        Self::Some(value)
    }
}
