// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Wire value model tests for xenapi-protocol.

use xenapi_protocol::{WireMap, WireValue};

#[test]
fn test_json_integers_stay_integers() {
    let value: WireValue = serde_json::from_str("[1, -7, 9223372036854775807]").unwrap();
    assert_eq!(
        value,
        WireValue::Seq(vec![
            WireValue::Int(1),
            WireValue::Int(-7),
            WireValue::Int(i64::MAX),
        ])
    );
}

#[test]
fn test_json_overflowing_integer_becomes_double() {
    let value: WireValue = serde_json::from_str("18446744073709551615").unwrap();
    assert!(matches!(value, WireValue::Double(_)));
}

#[test]
fn test_json_fraction_is_double() {
    let value: WireValue = serde_json::from_str("2.5").unwrap();
    assert_eq!(value, WireValue::Double(2.5));
}

#[test]
fn test_json_nested_map() {
    let value: WireValue =
        serde_json::from_str(r#"{"uuid": "u-1", "VIFs": ["OpaqueRef:a"], "other": null}"#)
            .unwrap();
    assert_eq!(value.get("uuid"), Some(&WireValue::from("u-1")));
    assert_eq!(
        value.get("VIFs").and_then(WireValue::as_seq).map(<[_]>::len),
        Some(1)
    );
    assert_eq!(value.get("other"), Some(&WireValue::Null));
    assert_eq!(value.get("missing"), None);
}

#[test]
fn test_non_finite_doubles_serialize_as_sentinels() {
    let seq = WireValue::Seq(vec![
        WireValue::Double(f64::INFINITY),
        WireValue::Double(f64::NEG_INFINITY),
        WireValue::Double(f64::NAN),
        WireValue::Double(0.5),
    ]);
    let json = serde_json::to_string(&seq).unwrap();
    assert_eq!(json, r#"["+Inf","-Inf","NaN",0.5]"#);
}

#[test]
fn test_serialize_map() {
    let mut map = WireMap::new();
    map.insert("enabled".to_string(), WireValue::from(true));
    map.insert("count".to_string(), WireValue::from(3i64));
    let json = serde_json::to_value(WireValue::Map(map)).unwrap();
    assert_eq!(json, serde_json::json!({"enabled": true, "count": 3}));
}

#[test]
fn test_from_json_value() {
    let value = WireValue::from(serde_json::json!({"a": [true, null, "x", 4, 1.25]}));
    assert_eq!(
        value.get("a"),
        Some(&WireValue::Seq(vec![
            WireValue::Bool(true),
            WireValue::Null,
            WireValue::from("x"),
            WireValue::Int(4),
            WireValue::Double(1.25),
        ]))
    );
}

#[test]
fn test_display_is_json_like() {
    let mut map = WireMap::new();
    map.insert("k".to_string(), WireValue::Seq(vec![WireValue::Int(1), WireValue::Null]));
    assert_eq!(WireValue::Map(map).to_string(), r#"{"k": [1, null]}"#);
}

#[test]
fn test_default_is_null() {
    assert!(WireValue::default().is_null());
}

#[test]
fn test_wire_value_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WireValue>();
}
