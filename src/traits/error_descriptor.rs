//! Failure detail contract consumed by aggregation and rendering.
//!
//! Every error type stored in an [`AggregateOutcome`](crate::AggregateOutcome) must
//! implement [`ErrorDescriptor`]. The trait is object safe, so renderers walk
//! arbitrarily nested failures through `&dyn ErrorDescriptor` without knowing the
//! concrete error types involved.
//!
//! # Examples
//!
//! ```
//! use aggregate_rail::traits::ErrorDescriptor;
//! use std::borrow::Cow;
//!
//! #[derive(Debug)]
//! enum ConfigError {
//!     Missing(&'static str),
//!     Invalid { key: &'static str, reason: String },
//! }
//!
//! impl ErrorDescriptor for ConfigError {
//!     fn message(&self) -> Cow<'_, str> {
//!         match self {
//!             ConfigError::Missing(key) => format!("missing key `{}`", key).into(),
//!             ConfigError::Invalid { key, reason } => format!("`{}`: {}", key, reason).into(),
//!         }
//!     }
//!
//!     fn kind(&self) -> &str {
//!         match self {
//!             ConfigError::Missing(_) => "Missing",
//!             ConfigError::Invalid { .. } => "Invalid",
//!         }
//!     }
//! }
//!
//! let err = ConfigError::Missing("port");
//! assert_eq!(err.kind(), "Missing");
//! assert_eq!(err.message(), "missing key `port`");
//! assert!(err.nested_failures().is_none());
//! ```

use crate::types::alloc_type::{Arc, Box, Cow, String};

/// Iterator over the failures wrapped by a nested aggregate.
///
/// Each item pairs the failure's position in the aggregate it was collected from
/// with its descriptor.
pub type NestedFailures<'a> = Box<dyn Iterator<Item = (usize, &'a dyn ErrorDescriptor)> + 'a>;

/// Structured failure detail: a message plus an explicit kind tag.
///
/// The kind is carried explicitly rather than derived from the concrete type, so
/// implementors pick a stable display name once, usually per enum variant.
pub trait ErrorDescriptor {
    /// Human-readable description of the failure.
    fn message(&self) -> Cow<'_, str>;

    /// Stable kind tag shown next to the message when rendering.
    fn kind(&self) -> &str;

    /// Failures wrapped by this descriptor, if it is itself an aggregate.
    ///
    /// Renderers use this to expand nested aggregates in place. Plain errors keep
    /// the default `None`.
    #[inline]
    fn nested_failures(&self) -> Option<NestedFailures<'_>> {
        None
    }
}

impl ErrorDescriptor for str {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }

    #[inline]
    fn kind(&self) -> &str {
        "str"
    }
}

impl ErrorDescriptor for String {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    #[inline]
    fn kind(&self) -> &str {
        "String"
    }
}

impl ErrorDescriptor for Cow<'_, str> {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }

    #[inline]
    fn kind(&self) -> &str {
        "str"
    }
}

impl ErrorDescriptor for core::fmt::Error {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed("an error occurred when formatting an argument")
    }

    #[inline]
    fn kind(&self) -> &str {
        "fmt::Error"
    }
}

#[cfg(feature = "std")]
impl ErrorDescriptor for std::io::Error {
    fn message(&self) -> Cow<'_, str> {
        use std::string::ToString;
        Cow::Owned(self.to_string())
    }

    #[inline]
    fn kind(&self) -> &str {
        "io::Error"
    }
}

impl<E: ErrorDescriptor + ?Sized> ErrorDescriptor for &E {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }

    #[inline]
    fn kind(&self) -> &str {
        (**self).kind()
    }

    #[inline]
    fn nested_failures(&self) -> Option<NestedFailures<'_>> {
        (**self).nested_failures()
    }
}

impl<E: ErrorDescriptor + ?Sized> ErrorDescriptor for Box<E> {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }

    #[inline]
    fn kind(&self) -> &str {
        (**self).kind()
    }

    #[inline]
    fn nested_failures(&self) -> Option<NestedFailures<'_>> {
        (**self).nested_failures()
    }
}

impl<E: ErrorDescriptor + ?Sized> ErrorDescriptor for Arc<E> {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        (**self).message()
    }

    #[inline]
    fn kind(&self) -> &str {
        (**self).kind()
    }

    #[inline]
    fn nested_failures(&self) -> Option<NestedFailures<'_>> {
        (**self).nested_failures()
    }
}
