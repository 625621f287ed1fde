//! The box that keeps `Some` apart from `None`
//!
//! Most present values are stored unboxed. Only a present value that is
//! itself nullish, or that is already a box, is wrapped in a [`SomeBox`].

use std::sync::Arc;

use super::{error::ValueError, Value};

/// Immutable single-field holder for a present value
///
/// The held value is never mutated after construction. Clones share the
/// allocation, which is how [`Value::strict_eq`] can tell whether a box was
/// passed through or rebuilt.
///
/// Dropping and printing a box recurse into the held value, so a chain of
/// boxes nested tens of thousands deep can overflow the stack.
#[derive(Clone, Debug, PartialEq)]
pub struct SomeBox(Arc<Value>);

impl SomeBox {
    pub fn new(value: Value) -> Self {
        Self(Arc::new(value))
    }

    /// The held value
    pub fn get(&self) -> &Value {
        &self.0
    }

    /// Take the held value, cloning it only if the box is shared.
    pub fn into_inner(self) -> Value {
        Arc::unwrap_or_clone(self.0)
    }

    /// Whether both boxes are the same allocation
    pub fn ptr_eq(&self, other: &SomeBox) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Unwrap a present option
///
/// A box yields its held value, any other present value yields itself.
/// Calling this on `None` is an error.
pub fn value(opt: &Value) -> Result<Value, ValueError> {
    payload(opt).cloned().ok_or(ValueError::UnwrapNone)
}

/// Borrow the payload of an option, `None` if the option is absent
pub(crate) fn payload(opt: &Value) -> Option<&Value> {
    match opt {
        Value::Undefined | Value::Null => None,
        Value::Some(b) => Some(b.get()),
        v => Some(v),
    }
}

/// Owned variant of [`payload`]
pub(crate) fn into_payload(opt: Value) -> Option<Value> {
    match opt {
        Value::Undefined | Value::Null => None,
        Value::Some(b) => Some(b.into_inner()),
        v => Some(v),
    }
}
