//! The failure descriptor produced when at least one aggregated outcome failed.
//!
//! An [`AggregateError`] shares the result buffer of the
//! [`AggregateOutcome`](crate::AggregateOutcome) that built it and records which
//! positions failed. It is never built directly; obtain one through
//! [`AggregateOutcome::error`](crate::AggregateOutcome::error) or
//! [`AggregateOutcome::into_error`](crate::AggregateOutcome::into_error).

use crate::traits::{ErrorDescriptor, NestedFailures};
use crate::types::alloc_type::{Arc, Box, Cow, String, Vec};
use crate::types::renderer::{self, OutcomeFormatter, RenderConfig};
use core::fmt::{self, Debug, Display};

/// Message carried by every [`AggregateError`].
///
/// Display-only; nested detail is produced by rendering, not by the message.
pub const MESSAGE_PREFIX: &str = "One or more errors occurred: ";

/// Ordered collection of the failed outcomes from one aggregation.
///
/// Cloning is cheap: the underlying results are shared, never copied.
///
/// # Examples
///
/// ```
/// use aggregate_rail::{AggregateOutcome, AggregateError};
///
/// let outcome: AggregateOutcome<u32, &str> =
///     AggregateOutcome::new([Ok(1), Err("a"), Ok(3), Err("b")]);
///
/// let error = outcome.error().unwrap();
/// assert_eq!(error.len(), 2);
/// assert_eq!(error.positions(), &[1, 3]);
/// assert_eq!(error.errors().copied().collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(error.to_string(), "One or more errors occurred:");
/// assert_eq!(AggregateError::<u32, &str>::KIND, "AggregateError");
/// ```
#[derive(PartialEq, Eq)]
pub struct AggregateError<T, E> {
    results: Arc<[Result<T, E>]>,
    failed: Arc<[usize]>,
}

impl<T, E> AggregateError<T, E> {
    /// Kind tag reported through [`ErrorDescriptor::kind`].
    pub const KIND: &'static str = "AggregateError";

    #[inline]
    pub(crate) fn new(results: Arc<[Result<T, E>]>, failed: Arc<[usize]>) -> Self {
        Self { results, failed }
    }

    /// The fixed message, see [`MESSAGE_PREFIX`].
    #[inline]
    pub fn message(&self) -> &'static str {
        MESSAGE_PREFIX
    }

    /// Number of wrapped failures.
    #[inline]
    pub fn len(&self) -> usize {
        self.failed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.failed.is_empty()
    }

    /// Positions of the failures in the original input, ascending.
    #[inline]
    pub fn positions(&self) -> &[usize] {
        &self.failed
    }

    /// The failed outcomes, in input order.
    pub fn failed_outcomes(&self) -> impl ExactSizeIterator<Item = &Result<T, E>> + '_ {
        self.failed.iter().map(move |&position| &self.results[position])
    }

    /// The failures paired with their input positions.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &E)> + '_ {
        self.failed
            .iter()
            .zip(self.failed_outcomes())
            .filter_map(|(&position, result)| {
                result.as_ref().err().map(|error| (position, error))
            })
    }

    /// The wrapped errors, in input order.
    pub fn errors(&self) -> impl Iterator<Item = &E> + '_ {
        self.failed_outcomes().filter_map(|result| result.as_ref().err())
    }
}

impl<T, E: ErrorDescriptor> AggregateError<T, E> {
    /// Renders this error and every failure it wraps with the default configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use aggregate_rail::{AggregateOutcome, SimpleError};
    ///
    /// let outcome = AggregateOutcome::new([
    ///     Ok(()),
    ///     Err(SimpleError::new("Timeout", "shard 2 did not answer")),
    /// ]);
    ///
    /// assert_eq!(
    ///     outcome.error().unwrap().render(),
    ///     "One or more errors occurred:\nResult 2: Failure\n  Timeout: shard 2 did not answer"
    /// );
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&RenderConfig::default())
    }

    /// Renders this error using a custom formatter.
    #[must_use]
    pub fn render_with<F>(&self, formatter: &F) -> String
    where
        F: OutcomeFormatter + ?Sized,
    {
        renderer::render_error(formatter, self)
    }
}

impl<T, E> Clone for AggregateError<T, E> {
    #[inline]
    fn clone(&self) -> Self {
        Self { results: Arc::clone(&self.results), failed: Arc::clone(&self.failed) }
    }
}

impl<T, E: Debug> Debug for AggregateError<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateError")
            .field("message", &MESSAGE_PREFIX)
            .field("failures", &self.failures().collect::<Vec<_>>())
            .finish()
    }
}

impl<T, E: ErrorDescriptor> ErrorDescriptor for AggregateError<T, E> {
    #[inline]
    fn message(&self) -> Cow<'_, str> {
        Cow::Borrowed(MESSAGE_PREFIX)
    }

    #[inline]
    fn kind(&self) -> &str {
        Self::KIND
    }

    fn nested_failures(&self) -> Option<NestedFailures<'_>> {
        Some(Box::new(
            self.failures()
                .map(|(position, error)| (position, error as &dyn ErrorDescriptor)),
        ))
    }
}

impl<T, E: ErrorDescriptor> Display for AggregateError<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(&self.render())
        } else {
            f.write_str(MESSAGE_PREFIX.trim_end())
        }
    }
}

impl<T, E> core::error::Error for AggregateError<T, E>
where
    E: ErrorDescriptor + core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.errors()
            .next()
            .map(|error| error as &(dyn core::error::Error + 'static))
    }
}
