use aggregate_rail::traits::ErrorDescriptor;
use aggregate_rail::{aggregate, impl_error_descriptor, AggregateOutcome};
use std::fmt;

#[derive(Debug, PartialEq)]
struct QuotaExceeded {
    used: u32,
}

impl fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "used {} of 100", self.used)
    }
}

impl_error_descriptor!(QuotaExceeded);

#[derive(Debug)]
enum StorageError {
    Full,
    ReadOnly,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Full => f.write_str("volume is full"),
            StorageError::ReadOnly => f.write_str("volume is read-only"),
        }
    }
}

impl_error_descriptor!(StorageError, "StorageError");

#[test]
fn aggregate_macro_preserves_order() {
    let outcome = aggregate![Ok(1), Err("a"), Ok(2), Err("b"),];

    assert_eq!(outcome.len(), 4);
    assert_eq!(outcome.failed_positions(), &[1, 3]);
    assert_eq!(outcome.errors().copied().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn empty_aggregate_macro_is_success() {
    let outcome: AggregateOutcome<u8, &str> = aggregate![];
    assert!(outcome.is_success());
    assert!(outcome.is_empty());
}

#[test]
fn impl_error_descriptor_uses_type_name_by_default() {
    let err = QuotaExceeded { used: 120 };

    assert_eq!(err.kind(), "QuotaExceeded");
    assert_eq!(err.message(), "used 120 of 100");
}

#[test]
fn impl_error_descriptor_accepts_explicit_kind() {
    let outcome = aggregate![Err::<(), _>(StorageError::Full), Err(StorageError::ReadOnly)];

    assert_eq!(
        outcome.render(),
        "One or more errors occurred:\n\
         Result 1: Failure\n  \
         StorageError: volume is full\n\
         Result 2: Failure\n  \
         StorageError: volume is read-only"
    );
}
