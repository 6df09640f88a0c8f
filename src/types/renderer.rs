//! Multi-line rendering of aggregates, expanding nested aggregate errors in place.
//!
//! Output is one line per entry, joined with `\n`. Formatter-owned lines (headers,
//! position lines) have trailing whitespace trimmed; leaf failure messages are kept
//! verbatim, with every line of a multi-line message indented to the same depth.
//! A failed aggregate renders as:
//!
//! ```text
//! One or more errors occurred:
//! Result 1: Success
//! Result 2: Failure
//!   AggregateError: One or more errors occurred:
//!     Result 1: Failure
//!       Timeout: replica b
//! ```

use crate::traits::{ErrorDescriptor, Outcome, OutcomeStatus};
use crate::types::alloc_type::{Cow, String};
use crate::types::{AggregateError, AggregateOutcome};
use core::fmt::{Display, Write};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Line emitted for a successful aggregate by the default configuration.
pub const SUCCESS_MESSAGE: &str = "All results succeeded.";

/// Trait for customizing how aggregates are rendered.
///
/// Every method has a default, so implementors override only what they need.
pub trait OutcomeFormatter {
    /// Indentation inserted once per nesting level.
    fn indent(&self) -> &str {
        "  "
    }

    /// The single line emitted for a successful aggregate.
    fn success_line(&self) -> Cow<'_, str> {
        Cow::Borrowed(SUCCESS_MESSAGE)
    }

    /// Line identifying an outcome; `position` is zero-based.
    fn position_line(&self, position: usize, status: OutcomeStatus) -> String {
        let mut line = String::new();
        let _ = write!(line, "Result {}: {}", position.saturating_add(1), status);
        line
    }

    /// Detail line for a failure.
    fn failure_line(&self, error: &dyn ErrorDescriptor) -> String {
        let mut line = String::new();
        let _ = write!(line, "{}: {}", error.kind(), error.message());
        line
    }
}

/// Configuration-based formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    pub indent: String,
    /// Number shown for the first outcome.
    pub first_position: usize,
    /// Written directly before the position number.
    pub position_label: String,
    pub success_label: String,
    pub failure_label: String,
    pub success_message: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
            first_position: 1,
            position_label: "Result ".into(),
            success_label: "Success".into(),
            failure_label: "Failure".into(),
            success_message: SUCCESS_MESSAGE.into(),
        }
    }
}

impl RenderConfig {
    /// Numbers outcomes from zero.
    #[inline]
    pub fn zero_based() -> Self {
        Self { first_position: 0, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self {
            indent: " ".into(),
            position_label: "#".into(),
            success_label: "ok".into(),
            failure_label: "err".into(),
            success_message: "ok".into(),
            ..Default::default()
        }
    }
}

impl OutcomeFormatter for RenderConfig {
    fn indent(&self) -> &str {
        &self.indent
    }

    fn success_line(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.success_message)
    }

    fn position_line(&self, position: usize, status: OutcomeStatus) -> String {
        let label = match status {
            OutcomeStatus::Success => &self.success_label,
            OutcomeStatus::Failure => &self.failure_label,
        };
        let mut line = String::new();
        let _ = write!(
            line,
            "{}{}: {}",
            self.position_label,
            position.saturating_add(self.first_position),
            label
        );
        line
    }
}

struct Writer<'f, F: ?Sized> {
    formatter: &'f F,
    out: String,
    started: bool,
}

impl<'f, F: OutcomeFormatter + ?Sized> Writer<'f, F> {
    fn new(formatter: &'f F) -> Self {
        Self { formatter, out: String::new(), started: false }
    }

    /// Writes `text` at `depth`, indenting each of its physical lines.
    fn line(&mut self, depth: usize, text: &str) {
        for physical in text.split('\n') {
            if self.started {
                self.out.push('\n');
            }
            self.started = true;
            if physical.is_empty() {
                continue;
            }
            for _ in 0..depth {
                self.out.push_str(self.formatter.indent());
            }
            self.out.push_str(physical);
        }
    }

    fn position(&mut self, depth: usize, position: usize, status: OutcomeStatus) {
        let line = self.formatter.position_line(position, status);
        self.line(depth, line.trim_end());
    }

    fn failure(&mut self, depth: usize, error: &dyn ErrorDescriptor) {
        let line = self.formatter.failure_line(error);

        // Aggregate headers end in the prefix's trailing space; leaf messages stay verbatim.
        let Some(nested) = error.nested_failures() else {
            self.line(depth, &line);
            return;
        };
        self.line(depth, line.trim_end());
        for (position, inner) in nested {
            self.position(depth + 1, position, OutcomeStatus::Failure);
            self.failure(depth + 2, inner);
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Renders every result of `outcome`, in input order.
pub fn render_outcome<F, T, E>(formatter: &F, outcome: &AggregateOutcome<T, E>) -> String
where
    F: OutcomeFormatter + ?Sized,
    E: ErrorDescriptor,
{
    let mut writer = Writer::new(formatter);

    let Some(error) = outcome.error() else {
        let line = formatter.success_line();
        writer.line(0, line.trim_end());
        return writer.finish();
    };

    writer.line(0, error.message().trim_end());
    for (position, result) in outcome.results().iter().enumerate() {
        writer.position(0, position, result.status());
        if let Some(descriptor) = result.error_descriptor() {
            writer.failure(1, descriptor);
        }
    }
    writer.finish()
}

/// Renders `error` and the failures it wraps, numbered by their input positions.
pub fn render_error<F, T, E>(formatter: &F, error: &AggregateError<T, E>) -> String
where
    F: OutcomeFormatter + ?Sized,
    E: ErrorDescriptor,
{
    let mut writer = Writer::new(formatter);
    writer.line(0, error.message().trim_end());
    for (position, inner) in error.failures() {
        writer.position(0, position, OutcomeStatus::Failure);
        writer.failure(1, inner);
    }
    writer.finish()
}

/// Builder for customizing aggregate rendering.
///
/// # Examples
///
/// ```
/// use aggregate_rail::AggregateOutcome;
///
/// let outcome = AggregateOutcome::new([Err::<(), _>("late"), Ok(())]);
///
/// let text = outcome.fmt().zero_based().to_string();
/// assert!(text.contains("Result 0: Failure"));
/// assert!(text.contains("Result 1: Success"));
/// ```
pub struct RenderBuilder<'a, T, E> {
    pub(crate) outcome: &'a AggregateOutcome<T, E>,
    pub(crate) config: RenderConfig,
}

impl<'a, T, E> RenderBuilder<'a, T, E> {
    pub fn new(outcome: &'a AggregateOutcome<T, E>) -> Self {
        Self { outcome, config: RenderConfig::default() }
    }

    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.config.indent = indent.into();
        self
    }

    pub fn first_position(mut self, first: usize) -> Self {
        self.config.first_position = first;
        self
    }

    pub fn zero_based(self) -> Self {
        self.first_position(0)
    }

    pub fn compact(mut self) -> Self {
        self.config = RenderConfig::compact();
        self
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }
}

impl<'a, T, E> Display for RenderBuilder<'a, T, E>
where
    E: ErrorDescriptor,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&render_outcome(&self.config, self.outcome))
    }
}
