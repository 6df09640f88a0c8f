use aggregate_rail::traits::ErrorDescriptor;
use aggregate_rail::SimpleError;

#[test]
fn simple_error_carries_kind_and_message() {
    let err = SimpleError::new("ValidationError", "email is empty");

    assert_eq!(err.kind(), "ValidationError");
    assert_eq!(err.message(), "email is empty");
    assert_eq!(ErrorDescriptor::kind(&err), "ValidationError");
    assert_eq!(ErrorDescriptor::message(&err), "email is empty");
    assert!(err.nested_failures().is_none());
}

#[test]
fn simple_error_accepts_owned_kind() {
    let kind = format!("{}Error", "Lookup");
    let err = SimpleError::new(kind, String::from("missing"));

    assert_eq!(err.to_string(), "LookupError: missing");
}

#[test]
fn simple_error_is_std_error() {
    use std::error::Error;

    let err: Box<dyn std::error::Error> = Box::new(SimpleError::new("A", "b"));
    assert_eq!(err.to_string(), "A: b");
    assert!(err.source().is_none());
}

#[test]
#[cfg(feature = "serde")]
fn simple_error_serde_round_trip() {
    let err = SimpleError::new("Timeout", "shard 3");
    let json = serde_json::to_string(&err).unwrap();
    assert_eq!(json, r#"{"kind":"Timeout","message":"shard 3"}"#);

    let back: SimpleError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}

#[test]
#[cfg(feature = "serde")]
fn outcome_status_serde_round_trip() {
    use aggregate_rail::traits::OutcomeStatus;

    let json = serde_json::to_string(&[OutcomeStatus::Success, OutcomeStatus::Failure]).unwrap();
    assert_eq!(json, r#"["Success","Failure"]"#);

    let back: Vec<OutcomeStatus> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec![OutcomeStatus::Success, OutcomeStatus::Failure]);
}

#[test]
#[cfg(feature = "serde")]
fn render_config_deserializes_with_defaults() {
    use aggregate_rail::RenderConfig;

    let config: RenderConfig = serde_json::from_str(r#"{"first_position":0}"#).unwrap();
    assert_eq!(config, RenderConfig::zero_based());
}
