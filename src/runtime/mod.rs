//! Runtime support for options
//!
//! Options are erased at runtime: there is no tag, a `None` is `undefined`
//! and a `Some(v)` is usually just `v`. Two rules must be followed by any
//! code using this encoding:
//!
//!  - `None` is checked with a non-strict nullish test, so `null` counts as
//!    `None` as well. Use [`option::is_none`] or [`Value::is_nullish`].
//!  - The payload of a `Some` is always read with
//!    [`value`](crate::value::value) or one of the combinators in [`ops`],
//!    because it may be boxed.
//!
//! The non-strict test exists for compatibility with host code that uses
//! `null` for missing values.
//!
//! [`Value::is_nullish`]: crate::value::Value::is_nullish

pub mod exception;
pub mod ops;
pub mod option;
pub mod optional;
