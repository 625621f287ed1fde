use std::fmt;

/// Failure to read a [`Value`](super::Value) as something more specific
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// The unwrap primitive was called on an absent option.
    UnwrapNone,
    /// A value of one kind was found where another was expected.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl ValueError {
    pub fn mismatch(expected: &'static str, found: &super::Value) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.type_name(),
        }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnwrapNone => {
                write!(f, "cannot take the value of an absent option")
            }
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected a value of type `{expected}`, found `{found}`")
            }
        }
    }
}

impl std::error::Error for ValueError {}
