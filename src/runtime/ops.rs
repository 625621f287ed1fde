//! Combinators over erased options
//!
//! Every function here takes and returns options in the encoding described
//! in [`super::option`]. Callbacks are fallible: an `Err` from a callback is
//! returned unchanged by the combinator that called it. Only [`try_op`]
//! swallows failures.
//!
//! Note that [`map`] passes the result of its callback through [`some`],
//! while [`map2`], [`map3`] and [`bind`] return the callback's result as
//! is. So `map2` with a callback returning `null` gives `None`, whereas
//! `map` with such a callback gives `Some(null)`.

use log::trace;

use super::option::{some, NONE};
use crate::value::{into_payload, payload, Value};

/// Read a host value that may be nullish as an option
///
/// Nullish becomes `None`, anything else is returned unchanged. Unlike
/// [`some`] this does not box, so `x` must not itself be an option.
pub fn of_nullable(x: Value) -> Value {
    if x.is_nullish() {
        NONE
    } else {
        x
    }
}

/// Turn an option into a host value, using `null` for `None`
pub fn to_nullable(opt: Value) -> Value {
    into_payload(opt).unwrap_or(Value::Null)
}

/// Remove one layer of option from `Option<Option<T>>`
pub fn flatten(opt: Value) -> Value {
    into_payload(opt).unwrap_or(NONE)
}

/// An empty array for `None`, a singleton array for `Some`
pub fn to_array(opt: Value) -> Value {
    Value::array(into_payload(opt))
}

pub fn default_arg(opt: Value, default: Value) -> Value {
    into_payload(opt).unwrap_or(default)
}

/// Like [`default_arg`], but the default is only computed for `None`.
pub fn default_arg_with<E>(
    opt: Value,
    default: impl FnOnce() -> Result<Value, E>,
) -> Result<Value, E> {
    match into_payload(opt) {
        Some(v) => Ok(v),
        None => default(),
    }
}

/// Return `opt` if it is `Some`, otherwise the alternative option
pub fn or_else(opt: Value, if_none: Value) -> Value {
    if opt.is_nullish() {
        if_none
    } else {
        opt
    }
}

pub fn or_else_with<E>(
    opt: Value,
    if_none: impl FnOnce() -> Result<Value, E>,
) -> Result<Value, E> {
    if opt.is_nullish() {
        if_none()
    } else {
        Ok(opt)
    }
}

/// Keep `opt` only if its payload matches the predicate
///
/// A kept option is returned as the very same value, it is not rebuilt.
pub fn filter<E>(
    predicate: impl FnOnce(&Value) -> Result<bool, E>,
    opt: Value,
) -> Result<Value, E> {
    let keep = match payload(&opt) {
        Some(v) => predicate(v)?,
        None => return Ok(NONE),
    };
    Ok(if keep { opt } else { NONE })
}

pub fn map<E>(
    mapping: impl FnOnce(Value) -> Result<Value, E>,
    opt: Value,
) -> Result<Value, E> {
    match into_payload(opt) {
        Some(v) => Ok(some(mapping(v)?)),
        None => Ok(NONE),
    }
}

/// Apply `mapping` if both options are `Some`
///
/// The result of `mapping` is returned as is and is not passed through
/// [`some`].
pub fn map2<E>(
    mapping: impl FnOnce(Value, Value) -> Result<Value, E>,
    opt1: Value,
    opt2: Value,
) -> Result<Value, E> {
    match (into_payload(opt1), into_payload(opt2)) {
        (Some(v1), Some(v2)) => mapping(v1, v2),
        _ => Ok(NONE),
    }
}

/// Apply `mapping` if all three options are `Some`
///
/// Like [`map2`], the result is not passed through [`some`].
pub fn map3<E>(
    mapping: impl FnOnce(Value, Value, Value) -> Result<Value, E>,
    opt1: Value,
    opt2: Value,
    opt3: Value,
) -> Result<Value, E> {
    match (into_payload(opt1), into_payload(opt2), into_payload(opt3)) {
        (Some(v1), Some(v2), Some(v3)) => mapping(v1, v2, v3),
        _ => Ok(NONE),
    }
}

/// Monadic bind, `binder` must return a properly encoded option.
pub fn bind<E>(
    binder: impl FnOnce(Value) -> Result<Value, E>,
    opt: Value,
) -> Result<Value, E> {
    match into_payload(opt) {
        Some(v) => binder(v),
        None => Ok(NONE),
    }
}

/// Run `op` and turn any failure into `None`
///
/// The error is dropped, whatever it is.
pub fn try_op<A, E>(op: impl FnOnce(A) -> Result<Value, E>, arg: A) -> Value {
    match op(arg) {
        Ok(r) => some(r),
        Err(_) => {
            trace!(
                "discarding failure of operation: {}",
                std::any::type_name::<E>()
            );
            NONE
        }
    }
}
