//! Tracing integration for aggregate-rail.
//!
//! Emits one structured `tracing` event per failure held by an aggregate,
//! expanding nested aggregates with an increasing `depth` field.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! aggregate-rail = { version = "0.1", features = ["tracing"] }
//! ```

use crate::traits::ErrorDescriptor;
use crate::types::{AggregateError, AggregateOutcome};

/// Extension trait for logging the failures of an aggregate through `tracing`.
///
/// # Example
///
/// ```rust,ignore
/// use aggregate_rail::prelude::*;
///
/// let outcome = AggregateOutcome::new(shards.iter().map(sync_shard));
/// outcome.log_failures();
/// ```
pub trait TracingExt {
    /// Emits a `WARN` event for every failure, recursing into nested aggregates.
    ///
    /// Emits nothing when there are no failures.
    fn log_failures(&self);
}

impl<T, E: ErrorDescriptor> TracingExt for AggregateOutcome<T, E> {
    fn log_failures(&self) {
        if let Some(error) = self.error() {
            error.log_failures();
        }
    }
}

impl<T, E: ErrorDescriptor> TracingExt for AggregateError<T, E> {
    fn log_failures(&self) {
        for (position, error) in self.failures() {
            log_failure(position, 0, error);
        }
    }
}

fn log_failure(position: usize, depth: usize, error: &dyn ErrorDescriptor) {
    tracing::warn!(
        target: "aggregate_rail",
        position,
        depth,
        kind = error.kind(),
        error = %error.message(),
        "outcome failed"
    );

    if let Some(nested) = error.nested_failures() {
        for (inner_position, inner) in nested {
            log_failure(inner_position, depth + 1, inner);
        }
    }
}
