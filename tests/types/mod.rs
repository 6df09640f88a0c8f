use aggregate_rail::{AggregateOutcome, SimpleError, MESSAGE_PREFIX};

mod aggregate_outcome;
mod simple_error;

#[test]
fn outcome_and_error_share_failed_results() {
    let outcome = AggregateOutcome::new(vec![
        Ok("a"),
        Err(SimpleError::new("Io", "disk")),
        Err(SimpleError::new("Io", "net")),
    ]);

    let from_outcome: Vec<_> = outcome.failed_results().collect();
    let from_error: Vec<_> = outcome.error().unwrap().failed_outcomes().collect();
    assert_eq!(from_outcome, from_error);
    assert!(from_outcome
        .iter()
        .zip(&from_error)
        .all(|(a, b)| std::ptr::eq(*a, *b)));
}

#[test]
fn message_prefix_is_fixed() {
    assert_eq!(MESSAGE_PREFIX, "One or more errors occurred: ");
}
