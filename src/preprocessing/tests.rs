//! Tests for preprocessing module.

use super::*;

#[test]
fn test_new_rejects_length_mismatch() {
    let err = StandardScaler::new(vec![1.0, 2.0], vec![1.0]).expect_err("mismatch");
    assert!(matches!(err, ValuerError::ModelUnavailable { .. }));
}

#[test]
fn test_new_rejects_empty_and_non_finite() {
    assert!(StandardScaler::new(Vec::new(), Vec::new()).is_err());
    assert!(StandardScaler::new(vec![f64::NAN], vec![1.0]).is_err());
    assert!(StandardScaler::new(vec![0.0], vec![f64::INFINITY]).is_err());
}

#[test]
fn test_transform_row_basic() {
    let scaler = StandardScaler::new(vec![2.0, 20.0], vec![0.5, 10.0]).expect("valid");
    let z = scaler.transform_row(&[3.0, 0.0]).expect("transform");
    assert!((z[0] - 2.0).abs() < 1e-12);
    assert!((z[1] + 2.0).abs() < 1e-12);
}

#[test]
fn test_constant_feature_is_centered_only() {
    let scaler = StandardScaler::new(vec![1.0], vec![0.0]).expect("valid");
    let z = scaler.transform_row(&[4.0]).expect("transform");
    assert_eq!(z, vec![3.0]);
}

#[test]
fn test_width_mismatch_is_unavailable() {
    let scaler = StandardScaler::new(vec![0.0; 3], vec![1.0; 3]).expect("valid");
    let err = scaler.transform_row(&[1.0, 2.0]).expect_err("too narrow");
    assert!(err.to_string().contains("expects 3 features, got 2"));
}

#[test]
fn test_feature_names_must_match_width() {
    let scaler = StandardScaler::new(vec![0.0, 0.0], vec![1.0, 1.0])
        .expect("valid")
        .with_feature_names(vec!["Ram".into()]);
    assert!(scaler.validate().is_err());
}

#[test]
fn test_deserialize_without_feature_names() {
    let scaler: StandardScaler =
        serde_json::from_str(r#"{"mean": [1.0], "scale": [2.0]}"#).expect("json scaler");
    assert!(scaler.feature_names().is_none());
    assert_eq!(scaler.transform_row(&[5.0]).expect("transform"), vec![2.0]);
}
