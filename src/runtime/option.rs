//! Erased encoding of options on top of [`Value`]
//!
//! `None` is [`NONE`], which is `undefined`. Any nullish value is read as
//! `None` though, so `null` coming from the host works too.
//!
//! `Some(v)` is just `v`, unless `v` is nullish or already a box. In that
//! case [`some`] wraps it in a [`SomeBox`], so that `Some(None)` and
//! `Some(Some(x))` do not collapse into `None` and `Some(x)`.
//!
//! The payload of an option must always be read with
//! [`value`](crate::value::value) or through one of the combinators in
//! [`ops`](super::ops), never by matching on the raw value.

use log::trace;

use crate::value::{SomeBox, Value};

/// The encoding of `None`
pub const NONE: Value = Value::Undefined;

/// Construct `Some(x)`
///
/// Boxes `x` only when it would otherwise be read as `None` or as another
/// boxed option.
pub fn some(x: Value) -> Value {
    if x.is_nullish() || x.is_boxed() {
        trace!("boxing `{x}`");
        Value::Some(SomeBox::new(x))
    } else {
        x
    }
}

pub fn is_none(opt: &Value) -> bool {
    opt.is_nullish()
}

pub fn is_some(opt: &Value) -> bool {
    !opt.is_nullish()
}
