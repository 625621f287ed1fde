//! Conversions between Rust types and [`Value`]
//!
//! These are what let typed Rust code hand values to the erased option
//! encoding and read them back. `Option` and
//! [`Optional`](crate::Optional) implement them through the encoding, so
//! nested options survive the round trip.

use std::sync::Arc;

use super::{error::ValueError, Value};
use crate::runtime::optional::Optional;

/// A Rust type that can be turned into a [`Value`]
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// A Rust type that can be read back from a [`Value`]
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Ok(value)
    }
}

/// Unit is the host's `undefined`.
impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Undefined
    }
}

impl FromValue for () {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        if value.is_nullish() {
            Ok(())
        } else {
            Err(ValueError::mismatch("undefined", &value))
        }
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        value
            .as_bool()
            .ok_or_else(|| ValueError::mismatch("boolean", &value))
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        value
            .as_number()
            .ok_or_else(|| ValueError::mismatch("number", &value))
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::Number(self.into())
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self.into())
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::String(s) => Ok(s.as_ref().to_owned()),
            other => Err(ValueError::mismatch("string", &other)),
        }
    }
}

impl IntoValue for Arc<str> {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl FromValue for Arc<str> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(ValueError::mismatch("string", &other)),
        }
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::array(self.into_iter().map(IntoValue::into_value))
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Array(items) => {
                items.iter().cloned().map(T::from_value).collect()
            }
            other => Err(ValueError::mismatch("array", &other)),
        }
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        Optional::from(self).encode()
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Optional::decode(value).map(Into::into)
    }
}
