use aggregate_rail::{AggregateOutcome, SimpleError};

fn fail(message: &str) -> Result<u32, SimpleError> {
    Err(SimpleError::new("TestError", message.to_string()))
}

#[test]
fn empty_input_is_vacuous_success() {
    let outcome: AggregateOutcome<u32, SimpleError> = AggregateOutcome::new(Vec::new());

    assert!(outcome.is_success());
    assert!(outcome.error().is_none());
    assert!(outcome.is_empty());
    assert_eq!(outcome.successful_results().count(), 0);
    assert_eq!(outcome.failed_results().count(), 0);
}

#[test]
fn all_success_has_no_failures() {
    let outcome: AggregateOutcome<u32, SimpleError> =
        AggregateOutcome::new(vec![Ok(1), Ok(2), Ok(3)]);

    assert!(outcome.is_success());
    assert!(outcome.error().is_none());
    assert_eq!(outcome.failed_results().count(), 0);
    assert_eq!(outcome.successful_results().count(), 3);
    assert_eq!(outcome.successful_values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn all_failure_wraps_every_failure_in_order() {
    let outcome = AggregateOutcome::new(vec![fail("A"), fail("B")]);

    assert!(!outcome.is_success());
    assert_eq!(outcome.success_count(), 0);

    let error = outcome.error().expect("aggregate error");
    let messages: Vec<_> = error.errors().map(|e| e.message().to_string()).collect();
    assert_eq!(messages, vec!["A", "B"]);
    assert_eq!(
        error.failed_outcomes().collect::<Vec<_>>(),
        outcome.results().iter().collect::<Vec<_>>()
    );
}

#[test]
fn mixed_input_is_partitioned_stably() {
    let outcome = AggregateOutcome::new(vec![Ok(10), fail("A"), Ok(20), fail("B")]);

    assert!(!outcome.is_success());
    assert_eq!(outcome.successful_positions(), &[0, 2]);
    assert_eq!(outcome.failed_positions(), &[1, 3]);
    assert_eq!(outcome.successful_values().copied().collect::<Vec<_>>(), vec![10, 20]);

    let expected = [fail("A"), fail("B")];
    assert_eq!(outcome.failed_results().collect::<Vec<_>>(), expected.iter().collect::<Vec<_>>());
}

#[test]
fn partition_covers_every_result() {
    let inputs = vec![fail("x"), Ok(1), Ok(2), fail("y"), fail("z"), Ok(3), Ok(4)];
    let outcome = AggregateOutcome::new(inputs.clone());

    assert_eq!(outcome.success_count() + outcome.failure_count(), inputs.len());
    assert_eq!(outcome.results(), inputs.as_slice());

    let mut positions: Vec<usize> = outcome
        .successful_positions()
        .iter()
        .chain(outcome.failed_positions())
        .copied()
        .collect();
    positions.sort_unstable();
    assert_eq!(positions, (0..inputs.len()).collect::<Vec<_>>());

    let expected_failures: Vec<_> = inputs.iter().filter(|r| r.is_err()).collect();
    assert_eq!(outcome.failed_results().collect::<Vec<_>>(), expected_failures);
}

#[test]
fn success_and_error_are_consistent() {
    let cases: Vec<Vec<Result<u32, SimpleError>>> = vec![
        vec![],
        vec![Ok(1)],
        vec![fail("only")],
        vec![Ok(1), fail("mid"), Ok(2)],
    ];

    for case in cases {
        let outcome = AggregateOutcome::new(case);
        assert_eq!(outcome.is_success(), outcome.error().is_none());
        assert_eq!(outcome.is_success(), outcome.failure_count() == 0);
    }
}

#[test]
fn single_failure_behaves_like_general_case() {
    let outcome = AggregateOutcome::new(vec![fail("lonely")]);

    assert_eq!(outcome.len(), 1);
    assert_eq!(outcome.failed_positions(), &[0]);
    assert_eq!(outcome.error().map(|e| e.len()), Some(1));
}

#[test]
fn to_result_reflects_composite_state() {
    let ok: AggregateOutcome<u32, SimpleError> = AggregateOutcome::new(vec![Ok(1), Ok(2)]);
    let values: Vec<&u32> = ok.to_result().unwrap();
    assert_eq!(values, vec![&1, &2]);

    let err = AggregateOutcome::new(vec![Ok(1), fail("nope")]);
    let error = err.to_result().unwrap_err();
    assert_eq!(error.positions(), &[1]);
    assert_eq!(&error, err.error().unwrap());
}

#[test]
fn into_error_hands_over_the_aggregate_error() {
    let outcome = AggregateOutcome::new(vec![fail("gone"), Ok(5)]);
    let error = outcome.into_error().expect("failed aggregate");

    assert_eq!(error.len(), 1);
    assert_eq!(error.errors().next().map(SimpleError::message), Some("gone"));
}

#[test]
fn collect_and_from_vec_match_new() {
    let inputs = vec![Ok(1), fail("a"), Ok(3)];

    let collected: AggregateOutcome<u32, SimpleError> = inputs.clone().into_iter().collect();
    let converted = AggregateOutcome::from(inputs.clone());
    let built = AggregateOutcome::new(inputs);

    assert_eq!(collected, built);
    assert_eq!(converted, built);
}

#[test]
fn clones_share_storage() {
    let outcome = AggregateOutcome::new(vec![Ok(1), fail("a")]);
    let copy = outcome.clone();

    assert!(std::ptr::eq(outcome.results().as_ptr(), copy.results().as_ptr()));
    assert_eq!(outcome, copy);
}

#[test]
fn aggregate_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AggregateOutcome<u32, SimpleError>>();
}
