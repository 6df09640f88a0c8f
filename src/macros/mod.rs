//! Macros for building aggregates and implementing [`ErrorDescriptor`](crate::traits::ErrorDescriptor).
//!
//! - [`macro@crate::aggregate`] - Aggregates a fixed list of result expressions.
//! - [`macro@crate::impl_error_descriptor`] - Implements `ErrorDescriptor` for a type
//!   from its `Display` output and a kind tag.
//!
//! # Examples
//!
//! ```
//! use aggregate_rail::{aggregate, impl_error_descriptor};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct Rejected(u32);
//!
//! impl fmt::Display for Rejected {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "order {} rejected", self.0)
//!     }
//! }
//!
//! impl_error_descriptor!(Rejected);
//!
//! let outcome = aggregate![Ok(()), Err(Rejected(7))];
//! assert!(outcome.render().contains("Rejected: order 7 rejected"));
//! ```

use crate::types::alloc_type::{Cow, String};
use core::fmt::{Display, Write};

/// Aggregates the listed result expressions, in order, into an
/// [`AggregateOutcome`](crate::AggregateOutcome).
///
/// # Examples
///
/// ```
/// use aggregate_rail::aggregate;
///
/// let outcome = aggregate![Ok::<u8, &str>(1), Err("full"), Ok(3)];
/// assert_eq!(outcome.len(), 3);
/// assert_eq!(outcome.failed_positions(), &[1]);
///
/// let empty: aggregate_rail::AggregateOutcome<(), &str> = aggregate![];
/// assert!(empty.is_success());
/// ```
#[macro_export]
macro_rules! aggregate {
    () => {
        $crate::AggregateOutcome::new(::core::iter::empty())
    };
    ($($result:expr),+ $(,)?) => {
        $crate::AggregateOutcome::new([$($result),+])
    };
}

/// Implements [`ErrorDescriptor`](crate::traits::ErrorDescriptor) for a type with a
/// `Display` implementation.
///
/// The message is the `Display` output. The kind tag defaults to the type name as
/// written in the invocation, or can be given explicitly.
///
/// # Examples
///
/// ```
/// use aggregate_rail::impl_error_descriptor;
/// use aggregate_rail::traits::ErrorDescriptor;
/// use std::fmt;
///
/// struct Timeout {
///     millis: u64,
/// }
///
/// impl fmt::Display for Timeout {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "gave up after {}ms", self.millis)
///     }
/// }
///
/// impl_error_descriptor!(Timeout, "TimeoutError");
///
/// let err = Timeout { millis: 250 };
/// assert_eq!(err.kind(), "TimeoutError");
/// assert_eq!(err.message(), "gave up after 250ms");
/// ```
#[macro_export]
macro_rules! impl_error_descriptor {
    ($type:ty) => {
        $crate::impl_error_descriptor!($type, stringify!($type));
    };
    ($type:ty, $kind:expr) => {
        impl $crate::traits::ErrorDescriptor for $type {
            fn message(&self) -> $crate::types::alloc_type::Cow<'_, str> {
                $crate::macros::display_message(self)
            }

            fn kind(&self) -> &str {
                $kind
            }
        }
    };
}

#[doc(hidden)]
pub fn display_message<D: Display + ?Sized>(value: &D) -> Cow<'static, str> {
    let mut message = String::new();
    let _ = write!(message, "{}", value);
    Cow::Owned(message)
}
