//! Composite outcome over an ordered collection of results.
//!
//! [`AggregateOutcome`] folds any number of `Result<T, E>` values into one
//! outcome in a single pass. The input is kept verbatim and partitioned stably
//! into successes and failures; when at least one input failed, a single
//! [`AggregateError`] wrapping the failures is built alongside.
//!
//! # Examples
//!
//! ```
//! use aggregate_rail::AggregateOutcome;
//!
//! let outcome: AggregateOutcome<u32, &str> =
//!     AggregateOutcome::new([Ok(1), Err("bad header"), Ok(3)]);
//!
//! assert!(!outcome.is_success());
//! assert_eq!(outcome.success_count(), 2);
//! assert_eq!(outcome.failure_count(), 1);
//! assert_eq!(outcome.successful_values().copied().collect::<Vec<_>>(), vec![1, 3]);
//! assert_eq!(outcome.error().map(|e| e.len()), Some(1));
//! ```

use crate::traits::{ErrorDescriptor, Outcome};
use crate::types::aggregate_error::AggregateError;
use crate::types::alloc_type::{Arc, String, Vec};
use crate::types::renderer::{
    self, OutcomeFormatter, RenderBuilder, RenderConfig, SUCCESS_MESSAGE,
};
use crate::types::{AggregateResult, PositionVec};
use core::fmt::{self, Display};

/// The composite result of many independent outcomes.
///
/// Immutable after construction. The results buffer is shared with the
/// [`AggregateError`] (if any), so cloning either is cheap.
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub struct AggregateOutcome<T, E> {
    results: Arc<[Result<T, E>]>,
    successful: PositionVec,
    error: Option<AggregateError<T, E>>,
}

impl<T, E> AggregateOutcome<T, E> {
    /// Aggregates `results`, preserving their order.
    ///
    /// Never fails. An empty input is a vacuous success.
    ///
    /// # Examples
    ///
    /// ```
    /// use aggregate_rail::AggregateOutcome;
    ///
    /// let empty = AggregateOutcome::<(), &str>::new([]);
    /// assert!(empty.is_success());
    /// assert!(empty.error().is_none());
    /// assert!(empty.results().is_empty());
    /// ```
    pub fn new<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        let results: Arc<[Result<T, E>]> = results.into_iter().collect();

        let mut successful = PositionVec::new();
        let mut failed = PositionVec::new();
        for (position, result) in results.iter().enumerate() {
            if result.is_ok() {
                successful.push(position);
            } else {
                failed.push(position);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "aggregate_rail",
            total = results.len(),
            succeeded = successful.len(),
            failed = failed.len(),
            "aggregated outcomes"
        );

        let error = if failed.is_empty() {
            None
        } else {
            Some(AggregateError::new(Arc::clone(&results), Arc::from(failed.as_slice())))
        };

        Self { results, successful, error }
    }

    /// Every input result, in input order.
    #[inline]
    pub fn results(&self) -> &[Result<T, E>] {
        &self.results
    }

    /// Number of aggregated results.
    #[inline]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns `true` when no input failed.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// The aggregate error, present exactly when at least one input failed.
    #[inline]
    pub fn error(&self) -> Option<&AggregateError<T, E>> {
        self.error.as_ref()
    }

    /// Consumes the outcome, returning its aggregate error if any.
    #[inline]
    pub fn into_error(self) -> Option<AggregateError<T, E>> {
        self.error
    }

    /// Input positions of the successful results, ascending.
    #[inline]
    pub fn successful_positions(&self) -> &[usize] {
        &self.successful
    }

    /// Input positions of the failed results, ascending.
    #[inline]
    pub fn failed_positions(&self) -> &[usize] {
        match &self.error {
            Some(error) => error.positions(),
            None => &[],
        }
    }

    #[inline]
    pub fn success_count(&self) -> usize {
        self.successful.len()
    }

    #[inline]
    pub fn failure_count(&self) -> usize {
        self.failed_positions().len()
    }

    /// The successful results, in input order.
    pub fn successful_results(&self) -> impl ExactSizeIterator<Item = &Result<T, E>> + '_ {
        self.successful.iter().map(move |&position| &self.results[position])
    }

    /// The failed results, in input order.
    pub fn failed_results(&self) -> impl ExactSizeIterator<Item = &Result<T, E>> + '_ {
        self.failed_positions().iter().map(move |&position| &self.results[position])
    }

    /// Values carried by the successful results, in input order.
    pub fn successful_values(&self) -> impl Iterator<Item = &T> + '_ {
        self.results.iter().filter_map(|result| result.as_ref().ok())
    }

    /// Errors carried by the failed results, in input order.
    pub fn errors(&self) -> impl Iterator<Item = &E> + '_ {
        self.results.iter().filter_map(|result| result.as_ref().err())
    }

    /// Views the composite as a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use aggregate_rail::AggregateOutcome;
    ///
    /// let ok = AggregateOutcome::<_, &str>::new([Ok(1), Ok(2)]);
    /// assert_eq!(ok.to_result().unwrap(), vec![&1, &2]);
    ///
    /// let err = AggregateOutcome::new([Ok(1), Err("nope")]);
    /// assert_eq!(err.to_result().unwrap_err().len(), 1);
    /// ```
    pub fn to_result(&self) -> AggregateResult<Vec<&T>, T, E> {
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(self.successful_values().collect()),
        }
    }
}

impl<T, E: ErrorDescriptor> AggregateOutcome<T, E> {
    /// Renders every result, expanding nested aggregates, with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use aggregate_rail::{AggregateOutcome, SimpleError};
    ///
    /// let outcome = AggregateOutcome::new([
    ///     Ok(()),
    ///     Err(SimpleError::new("NotFound", "user 7")),
    /// ]);
    ///
    /// assert_eq!(
    ///     outcome.render(),
    ///     "One or more errors occurred:\n\
    ///      Result 1: Success\n\
    ///      Result 2: Failure\n  \
    ///      NotFound: user 7"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Renders using a custom formatter.
    #[must_use]
    pub fn render_with<F>(&self, formatter: &F) -> String
    where
        F: OutcomeFormatter + ?Sized,
    {
        renderer::render_outcome(formatter, self)
    }

    /// Returns a builder for customizing the rendering.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> RenderBuilder<'_, T, E> {
        RenderBuilder::new(self)
    }
}

impl<T, E> Clone for AggregateOutcome<T, E> {
    fn clone(&self) -> Self {
        Self {
            results: Arc::clone(&self.results),
            successful: self.successful.clone(),
            error: self.error.clone(),
        }
    }
}

impl<T, E: ErrorDescriptor> Outcome for AggregateOutcome<T, E> {
    #[inline]
    fn is_success(&self) -> bool {
        AggregateOutcome::is_success(self)
    }

    #[inline]
    fn error_descriptor(&self) -> Option<&dyn ErrorDescriptor> {
        self.error.as_ref().map(|error| error as &dyn ErrorDescriptor)
    }
}

impl<T, E: ErrorDescriptor> Display for AggregateOutcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        match &self.error {
            Some(error) => Display::fmt(error, f),
            None => f.write_str(SUCCESS_MESSAGE),
        }
    }
}

impl<T, E> FromIterator<Result<T, E>> for AggregateOutcome<T, E> {
    fn from_iter<I: IntoIterator<Item = Result<T, E>>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T, E> From<Vec<Result<T, E>>> for AggregateOutcome<T, E> {
    #[inline]
    fn from(results: Vec<Result<T, E>>) -> Self {
        Self::new(results)
    }
}
