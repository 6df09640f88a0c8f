//! Extension trait for folding iterators of results into an [`AggregateOutcome`].
//!
//! # Examples
//!
//! ```
//! use aggregate_rail::traits::AggregateExt;
//!
//! let outcome = ["1", "two", "3"]
//!     .iter()
//!     .map(|raw| raw.parse::<u8>().map_err(|_| *raw))
//!     .aggregate();
//!
//! assert_eq!(outcome.failure_count(), 1);
//! assert_eq!(outcome.errors().copied().collect::<Vec<_>>(), vec!["two"]);
//! ```

use crate::types::AggregateOutcome;

/// Extension trait adding [`aggregate`](AggregateExt::aggregate) to iterators of results.
pub trait AggregateExt<T, E>: Iterator<Item = Result<T, E>> + Sized {
    /// Consumes the iterator and aggregates every result it yields.
    ///
    /// Equivalent to `AggregateOutcome::new(self)`; unlike collecting into
    /// `Result<Vec<_>, _>`, nothing short-circuits on the first failure.
    #[inline]
    fn aggregate(self) -> AggregateOutcome<T, E> {
        AggregateOutcome::new(self)
    }
}

impl<I, T, E> AggregateExt<T, E> for I where I: Iterator<Item = Result<T, E>> {}
