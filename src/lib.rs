//! Fold many independent results into one outcome without losing a single failure.
//!
//! An [`AggregateOutcome`] is successful only when every aggregated result is.
//! Otherwise it carries one [`AggregateError`] that keeps every failure, in input
//! order, and renders them as a readable report, expanding nested aggregates in
//! place.
//!
//! # Examples
//!
//! ## Aggregating Results
//!
//! ```
//! use aggregate_rail::AggregateOutcome;
//!
//! let outcome: AggregateOutcome<u16, &str> =
//!     AggregateOutcome::new([Ok(80), Err("port out of range"), Ok(443)]);
//!
//! assert!(!outcome.is_success());
//! assert_eq!(outcome.successful_positions(), &[0, 2]);
//! assert_eq!(outcome.failed_positions(), &[1]);
//! ```
//!
//! ## Nested Aggregates
//!
//! ```
//! use aggregate_rail::{AggregateError, AggregateOutcome, SimpleError};
//! use aggregate_rail::traits::{ErrorDescriptor, NestedFailures};
//! use std::borrow::Cow;
//!
//! enum SyncError {
//!     Node(SimpleError),
//!     Cluster(AggregateError<(), SyncError>),
//! }
//!
//! impl ErrorDescriptor for SyncError {
//!     fn message(&self) -> Cow<'_, str> {
//!         match self {
//!             SyncError::Node(e) => ErrorDescriptor::message(e),
//!             SyncError::Cluster(e) => ErrorDescriptor::message(e),
//!         }
//!     }
//!
//!     fn kind(&self) -> &str {
//!         match self {
//!             SyncError::Node(e) => ErrorDescriptor::kind(e),
//!             SyncError::Cluster(e) => ErrorDescriptor::kind(e),
//!         }
//!     }
//!
//!     fn nested_failures(&self) -> Option<NestedFailures<'_>> {
//!         match self {
//!             SyncError::Node(_) => None,
//!             SyncError::Cluster(e) => e.nested_failures(),
//!         }
//!     }
//! }
//!
//! let cluster = AggregateOutcome::new([
//!     Err(SyncError::Node(SimpleError::new("Timeout", "node-b"))),
//! ]);
//! let outcome = AggregateOutcome::new([
//!     Ok(()),
//!     Err(SyncError::Cluster(cluster.into_error().unwrap())),
//! ]);
//!
//! assert_eq!(
//!     outcome.render(),
//!     "One or more errors occurred:\n\
//!      Result 1: Success\n\
//!      Result 2: Failure\n  \
//!      AggregateError: One or more errors occurred:\n    \
//!      Result 1: Failure\n      \
//!      Timeout: node-b"
//! );
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Macros for building aggregates and descriptors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits describing outcomes and their errors
pub mod traits;
/// AggregateOutcome, AggregateError and rendering
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    AggregateError, AggregateOutcome, AggregateResult, OutcomeFormatter, RenderBuilder,
    RenderConfig, SimpleError, MESSAGE_PREFIX,
};
