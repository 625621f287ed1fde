use crate::value::{into_payload, FromValue, IntoValue, Value, ValueError};

use super::option::{some, NONE};

/// Tagged option type for typed Rust code
///
/// This is the Rust-side counterpart of an erased option. Use
/// [`Optional::encode`] to hand it to code working on [`Value`]s and
/// [`Optional::decode`] to read such a value back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    // Ordering derives from this: `Some` sorts before `None`.
    Some(T),
    #[default]
    None,
}

impl<T> Optional<T> {
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(x) => Optional::Some(x),
            Self::None => Optional::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T: IntoValue> Optional<T> {
    /// Erase the tag
    ///
    /// The payload is converted and passed through [`some`], so a payload
    /// that is nullish or itself an encoded `Some` gets boxed.
    pub fn encode(self) -> Value {
        match self {
            Self::Some(x) => some(x.into_value()),
            Self::None => NONE,
        }
    }
}

impl<T: FromValue> Optional<T> {
    /// Read an erased option, removing exactly one layer of boxing
    pub fn decode(value: Value) -> Result<Self, ValueError> {
        match into_payload(value) {
            Some(v) => T::from_value(v).map(Self::Some),
            None => Ok(Self::None),
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(x) => Self::Some(x),
            None => Self::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(x) => Some(x),
            Optional::None => None,
        }
    }
}

impl<T: IntoValue> IntoValue for Optional<T> {
    fn into_value(self) -> Value {
        self.encode()
    }
}

impl<T: FromValue> FromValue for Optional<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        Self::decode(value)
    }
}
