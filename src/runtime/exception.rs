use std::fmt;

use crate::value::Value;

/// A failure raised by host code
///
/// This is the natural error type for callbacks passed to the combinators.
/// Next to a message it can carry the thrown [`Value`] itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Exception {
    pub message: String,
    pub value: Option<Value>,
}

impl Exception {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            value: None,
        }
    }

    pub fn with_value(message: impl Into<String>, value: Value) -> Self {
        Self {
            message: message.into(),
            value: Some(value),
        }
    }
}

impl From<String> for Exception {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for Exception {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => write!(f, "{}: {v}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Exception {}
