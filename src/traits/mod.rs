//! Core traits for describing and aggregating outcomes.
//!
//! - [`ErrorDescriptor`]: message, kind tag and optional nested failures of an error
//! - [`Outcome`]: success/failure view over `Result` and aggregates
//! - [`AggregateExt`]: `.aggregate()` on iterators of results
//!
//! # Examples
//!
//! ```
//! use aggregate_rail::traits::{AggregateExt, ErrorDescriptor, Outcome};
//!
//! let outcome = vec![Ok(1), Err("late")].into_iter().aggregate();
//!
//! assert!(!outcome.is_success());
//! let descriptor = Outcome::error_descriptor(&outcome).unwrap();
//! assert_eq!(descriptor.kind(), "AggregateError");
//! assert_eq!(descriptor.nested_failures().unwrap().count(), 1);
//! ```

pub mod aggregate_ext;
pub mod error_descriptor;
pub mod outcome;

pub use aggregate_ext::AggregateExt;
pub use error_descriptor::{ErrorDescriptor, NestedFailures};
pub use outcome::{Outcome, OutcomeStatus};
