use crate::traits::ErrorDescriptor;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a single outcome succeeded or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutcomeStatus {
    Success,
    Failure,
}

impl OutcomeStatus {
    /// Returns `true` for [`OutcomeStatus::Success`].
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl core::fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Failure => f.write_str("Failure"),
        }
    }
}

/// Read-only view of a value that is either a success or a described failure.
///
/// `Result<T, E>` is the canonical implementor; an
/// [`AggregateOutcome`](crate::AggregateOutcome) is one as well, being the
/// composite outcome over its inputs.
///
/// # Examples
///
/// ```
/// use aggregate_rail::traits::{Outcome, OutcomeStatus};
///
/// let ok: Result<u8, &str> = Ok(1);
/// let err: Result<u8, &str> = Err("disk full");
///
/// assert_eq!(ok.status(), OutcomeStatus::Success);
/// assert!(ok.error_descriptor().is_none());
/// assert_eq!(err.error_descriptor().map(|e| e.message().into_owned()), Some("disk full".into()));
/// ```
pub trait Outcome {
    /// Returns `true` if the outcome is a success.
    fn is_success(&self) -> bool;

    /// The failure descriptor, present exactly when the outcome failed.
    fn error_descriptor(&self) -> Option<&dyn ErrorDescriptor>;

    #[inline]
    fn status(&self) -> OutcomeStatus {
        if self.is_success() {
            OutcomeStatus::Success
        } else {
            OutcomeStatus::Failure
        }
    }
}

impl<T, E: ErrorDescriptor> Outcome for Result<T, E> {
    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn error_descriptor(&self) -> Option<&dyn ErrorDescriptor> {
        match self {
            Ok(_) => None,
            Err(error) => Some(error as &dyn ErrorDescriptor),
        }
    }
}
