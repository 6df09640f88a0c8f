use crate::traits::ErrorDescriptor;
use crate::types::alloc_type::{Cow, String};
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ready-made [`ErrorDescriptor`] holding an explicit kind tag and a message.
///
/// # Examples
///
/// ```
/// use aggregate_rail::SimpleError;
/// use aggregate_rail::traits::ErrorDescriptor;
///
/// let err = SimpleError::new("ValidationError", "email is empty");
/// assert_eq!(err.kind(), "ValidationError");
/// assert_eq!(err.to_string(), "ValidationError: email is empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimpleError {
    kind: Cow<'static, str>,
    message: String,
}

impl SimpleError {
    #[inline]
    pub fn new(kind: impl Into<Cow<'static, str>>, message: impl Into<String>) -> Self {
        Self { kind: kind.into(), message: message.into() }
    }

    /// Returns the kind tag.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ErrorDescriptor for SimpleError {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.message)
    }

    #[inline]
    fn kind(&self) -> &str {
        &self.kind
    }
}

impl Display for SimpleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl core::error::Error for SimpleError {}
