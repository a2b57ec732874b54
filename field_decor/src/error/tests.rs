//! Unit tests for error construction and aggregation behaviour.

use rstest::rstest;
use std::sync::Arc;

use super::DecorError;

fn unknown(mutation: &str) -> Arc<DecorError> {
    Arc::new(DecorError::unknown_decorator("text", mutation))
}

#[test]
fn try_aggregate_none_on_empty() {
    assert!(DecorError::try_aggregate(Vec::<Arc<DecorError>>::new()).is_none());
}

#[test]
fn single_owned_error_is_unwrapped() {
    let outcome = DecorError::try_aggregate(vec![unknown("setRows")]);
    assert!(
        matches!(outcome, Some(DecorError::UnknownDecorator { ref mutation, .. }) if mutation == "setRows"),
        "expected UnknownDecorator, got {outcome:?}"
    );
}

#[test]
fn single_shared_error_stays_aggregated() {
    let shared = unknown("setRows");
    let outcome = DecorError::try_aggregate(vec![Arc::clone(&shared)]);
    match outcome {
        Some(DecorError::Aggregate(agg)) => assert_eq!(agg.len(), 1),
        other => panic!("expected Aggregate, got {other:?}"),
    }
}

#[test]
fn multiple_errors_are_listed_in_order() {
    let outcome = DecorError::try_aggregate(vec![unknown("setRows"), unknown("setCols")]);
    let Some(DecorError::Aggregate(agg)) = outcome else {
        panic!("expected Aggregate");
    };
    assert!(!agg.is_empty());
    assert_eq!(
        agg.to_string(),
        "  - no decorator registered for 'text' field mutation 'setRows'\n  \
         - no decorator registered for 'text' field mutation 'setCols'"
    );
    let wrapped = DecorError::Aggregate(agg);
    assert!(wrapped.to_string().starts_with("multiple field decorator errors:\n  - "));
    let DecorError::Aggregate(agg) = wrapped else {
        panic!("expected Aggregate");
    };
    assert_eq!(agg.into_iter().count(), 2);
}

#[rstest]
#[case::unknown(
    DecorError::unknown_decorator("select", "setRows"),
    "no decorator registered for 'select' field mutation 'setRows'"
)]
#[case::duplicate(
    DecorError::duplicate_decorator("text", "setPattern"),
    "several decorators registered for 'text' field mutation 'setPattern'"
)]
#[case::invalid_config(
    DecorError::InvalidConfig { message: "expected a map".into() },
    "invalid field configuration: expected a map"
)]
fn display_messages(#[case] err: DecorError, #[case] expected: &str) {
    assert_eq!(err.to_string(), expected);
}

#[test]
fn figment_errors_become_gathering() {
    let err: DecorError = figment::Error::from("boom").into();
    assert!(matches!(err, DecorError::Gathering(_)));
}
