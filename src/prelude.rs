//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use aggregate_rail::prelude::*;
//!
//! let outcome = aggregate![Ok::<_, SimpleError>(1), Ok(2)];
//! assert!(outcome.is_success());
//! assert_eq!(outcome.to_string(), "All results succeeded.");
//! ```

// Macros
pub use crate::{aggregate, impl_error_descriptor};

// Core types
pub use crate::types::{AggregateError, AggregateOutcome, RenderConfig, SimpleError};

// Traits
pub use crate::traits::{AggregateExt, ErrorDescriptor, Outcome};
pub use crate::types::OutcomeFormatter;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TracingExt;
