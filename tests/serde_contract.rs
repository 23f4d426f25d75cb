//! Serialized field names of `StatisticsRecord`.
//!
//! Run with: cargo test --test serde_contract --features serde

#![cfg(feature = "serde")]

use u_descriptive::compute_statistics;
use u_descriptive::stats::{MedianRule, StatisticsRecord};

#[test]
fn record_uses_contract_field_names() {
    let s = compute_statistics(&[5.0]).unwrap();
    let value = serde_json::to_value(s).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        [
            "count",
            "max",
            "mean",
            "median",
            "min",
            "standardDeviation",
            "sum",
            "variance"
        ]
    );
    assert_eq!(object["count"], 1);
    assert_eq!(object["standardDeviation"], 0.0);
}

#[test]
fn record_deserializes_back() {
    let s = compute_statistics(&[3.0, 2.0, 4.0, 5.0, 5.0, 5.0, 2.0, 6.0, 7.0]).unwrap();
    let json = serde_json::to_string(&s).unwrap();
    let back: StatisticsRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn median_rule_names() {
    assert_eq!(
        serde_json::to_string(&MedianRule::Conventional).unwrap(),
        "\"conventional\""
    );
}
