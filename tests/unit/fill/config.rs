use super::*;

#[test]
fn default_is_sequential_scoped() {
    let cfg = FillThreading::default();
    assert_eq!(cfg.workers, 0);
    assert_eq!(cfg.strategy, FillStrategy::Scoped);
    assert_eq!(cfg.partition_count(), 0);
}

#[test]
fn negative_workers_mean_sequential() {
    assert_eq!(FillThreading::scoped(-4).partition_count(), 0);
    assert_eq!(FillThreading::scoped(6).partition_count(), 6);
}

#[test]
fn parses_pool_strategy_from_json() {
    let cfg = FillThreading::from_json_str(
        r#"{"workers": 8, "strategy": {"kind": "pool", "threads": 4}}"#,
    )
    .unwrap();
    assert_eq!(cfg, FillThreading::pooled(8, Some(4)));
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let cfg = FillThreading::from_json_str(r#"{"workers": 3}"#).unwrap();
    assert_eq!(cfg, FillThreading::scoped(3));
}

#[test]
fn zero_pool_threads_is_rejected() {
    let err = FillThreading::from_json_str(
        r#"{"workers": 2, "strategy": {"kind": "pool", "threads": 0}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, SynthError::Validation(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = FillThreading::from_json_str("{workers: }").unwrap_err();
    assert!(matches!(err, SynthError::Serde(_)));
}

#[test]
fn worker_count_is_capped_by_validation() {
    assert!(FillThreading::scoped(MAX_WORKERS).validate().is_ok());
    let err = FillThreading::from_json_str(r#"{"workers": 2147483647}"#).unwrap_err();
    assert!(matches!(err, SynthError::Validation(_)));
}
