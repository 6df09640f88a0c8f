//! Aggregation types and rendering.
//!
//! # Examples
//!
//! ```
//! use aggregate_rail::{AggregateOutcome, SimpleError};
//!
//! let outcome = AggregateOutcome::new(vec![
//!     Ok(10),
//!     Err(SimpleError::new("ParseError", "`x` is not a number")),
//! ]);
//!
//! println!("{:#}", outcome);
//! // One or more errors occurred:
//! // Result 1: Success
//! // Result 2: Failure
//! //   ParseError: `x` is not a number
//! ```
use smallvec::SmallVec;

pub mod aggregate_error;
pub mod aggregate_outcome;
pub mod alloc_type;
pub mod renderer;
pub mod simple_error;

pub use aggregate_error::*;
pub use aggregate_outcome::*;
pub use renderer::{OutcomeFormatter, RenderBuilder, RenderConfig};
pub use simple_error::*;

/// SmallVec-backed storage for partition positions.
///
/// Small aggregates keep their positions inline without a heap allocation.
pub type PositionVec = SmallVec<[usize; 4]>;

/// Result alias whose error side is an [`AggregateError`].
///
/// # Type Parameters
///
/// * `R` - The value produced on success
/// * `T` - The success value type of the aggregated results
/// * `E` - The error type of the aggregated results
pub type AggregateResult<R, T, E> = Result<R, AggregateError<T, E>>;
