// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Scalar, container and path tests for the codec layer.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use xenapi_sdk::codec::{decode, encode};
use xenapi_sdk::{CodecError, FromWire, Path, ToWire, VmRef, WireValue};

fn decode_err<T: FromWire + std::fmt::Debug>(value: WireValue) -> CodecError {
    decode::<T>(&value).unwrap_err()
}

// ============================================================================
// Strings and booleans
// ============================================================================

#[test]
fn test_null_string_is_empty() {
    assert_eq!(decode::<String>(&WireValue::Null).unwrap(), "");
}

#[test]
fn test_null_bool_is_false() {
    assert!(!decode::<bool>(&WireValue::Null).unwrap());
}

#[test]
fn test_string_rejects_integer() {
    let err = decode_err::<String>(WireValue::Int(5));
    assert_eq!(err.path(), "value");
    assert!(err.message().contains("expected string"));
    assert!(err.message().contains("integer"));
    assert!(err.message().contains('5'));
}

// ============================================================================
// Integers
// ============================================================================

#[test]
fn test_int_accepts_decimal_string() {
    assert_eq!(decode::<i64>(&WireValue::from("-42")).unwrap(), -42);
}

#[test]
fn test_int_accepts_integral_double() {
    assert_eq!(decode::<i64>(&WireValue::Double(8.0)).unwrap(), 8);
}

/// Float numerals in strings are truncated toward zero. Pinned: tightening
/// this changes what existing servers' replies decode to.
#[test]
fn test_int_truncates_float_string() {
    assert_eq!(decode::<i64>(&WireValue::from("12.7")).unwrap(), 12);
    assert_eq!(decode::<i64>(&WireValue::from("-3.9")).unwrap(), -3);
    assert_eq!(decode::<i64>(&WireValue::from("1e3")).unwrap(), 1000);
}

#[test]
fn test_int_rejects_garbage_and_overflow() {
    let err = decode_err::<i64>(WireValue::from("twelve"));
    assert!(err.message().contains("expected integer"));
    assert!(err.message().contains("\"twelve\""));

    decode_err::<i64>(WireValue::from("1e30"));
    decode_err::<i64>(WireValue::from("NaN"));
    decode_err::<i64>(WireValue::Bool(true));
}

// ============================================================================
// Doubles
// ============================================================================

#[test]
fn test_positive_infinity_round_trip() {
    let wire = encode(&f64::INFINITY).unwrap();
    assert_eq!(wire, WireValue::from("+Inf"));

    let back = decode::<f64>(&wire).unwrap();
    assert!(back.is_infinite() && back.is_sign_positive());
}

#[test]
fn test_negative_infinity_and_nan() {
    assert_eq!(encode(&f64::NEG_INFINITY).unwrap(), WireValue::from("-Inf"));
    assert_eq!(encode(&f64::NAN).unwrap(), WireValue::from("NaN"));

    let neg = decode::<f64>(&WireValue::from("-Inf")).unwrap();
    assert!(neg.is_infinite() && neg.is_sign_negative());
    assert!(decode::<f64>(&WireValue::from("NaN")).unwrap().is_nan());
}

#[test]
fn test_double_accepts_native_non_finite() {
    let d = decode::<f64>(&WireValue::Double(f64::NEG_INFINITY)).unwrap();
    assert_eq!(d, f64::NEG_INFINITY);
}

#[test]
fn test_double_accepts_integer_and_numeric_string() {
    assert_eq!(decode::<f64>(&WireValue::Int(3)).unwrap(), 3.0);
    assert_eq!(decode::<f64>(&WireValue::from("0.25")).unwrap(), 0.25);
    assert!(decode::<f64>(&WireValue::from("lots")).is_err());
}

// ============================================================================
// Times
// ============================================================================

#[test]
fn test_all_time_forms_agree() {
    let expected = Utc.with_ymd_and_hms(2024, 3, 5, 10, 20, 30).unwrap();
    let forms = [
        WireValue::from("2024-03-05T10:20:30Z"),
        WireValue::from("2024-03-05T11:20:30+01:00"),
        WireValue::from("20240305T10:20:30Z"),
        WireValue::from("20240305T10:20:30"),
        WireValue::Int(1_709_634_030),
        WireValue::Double(1_709_634_030.0),
        WireValue::from("1709634030"),
    ];
    for form in forms {
        assert_eq!(
            decode::<DateTime<Utc>>(&form).unwrap(),
            expected,
            "form {}",
            form
        );
    }
}

#[test]
fn test_time_encodes_rfc3339_utc() {
    let t = Utc.with_ymd_and_hms(2024, 3, 5, 10, 20, 30).unwrap();
    assert_eq!(encode(&t).unwrap(), WireValue::from("2024-03-05T10:20:30Z"));
}

#[test]
fn test_time_rejects_nonsense() {
    let err = decode_err::<DateTime<Utc>>(WireValue::from("yesterday"));
    assert!(err.message().contains("expected time"));
    decode_err::<DateTime<Utc>>(WireValue::Bool(false));
}

// ============================================================================
// Containers and paths
// ============================================================================

#[test]
fn test_sequence_preserves_order() {
    let refs = vec![VmRef::new("OpaqueRef:b"), VmRef::new("OpaqueRef:a")];
    let wire = encode(&refs).unwrap();
    assert_eq!(decode::<Vec<VmRef>>(&wire).unwrap(), refs);
}

#[test]
fn test_ref_keyed_map_round_trip() {
    let mut map = HashMap::new();
    map.insert(VmRef::new("OpaqueRef:a"), "eth0".to_string());
    map.insert(VmRef::new("OpaqueRef:b"), "eth1".to_string());
    let wire = encode(&map).unwrap();
    assert_eq!(wire.get("OpaqueRef:a"), Some(&WireValue::from("eth0")));
    assert_eq!(decode::<HashMap<VmRef, String>>(&wire).unwrap(), map);
}

#[test]
fn test_int_keyed_map_decodes() {
    let wire = xenapi_sdk::WireValue::Map(
        [("0", 0.5), ("1", 0.25)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), WireValue::Double(v)))
            .collect(),
    );
    let decoded = decode::<HashMap<i64, f64>>(&wire).unwrap();
    assert_eq!(decoded.get(&1), Some(&0.25));
}

#[test]
fn test_non_numeric_int_key_is_rejected() {
    let wire = WireValue::Map(
        [("cpu0".to_string(), WireValue::Double(0.5))]
            .into_iter()
            .collect(),
    );
    let err = decode::<HashMap<i64, f64>>(&wire).unwrap_err();
    assert_eq!(err.path(), "value[cpu0]");
    assert_eq!(err.message(), "expected integer map key, found string \"cpu0\"");
}

#[test]
fn test_option_presence() {
    assert_eq!(decode::<Option<String>>(&WireValue::Null).unwrap(), None);
    assert_eq!(
        decode::<Option<String>>(&WireValue::from("")).unwrap(),
        Some(String::new())
    );
}

#[test]
fn test_containers_reject_null_outside_records() {
    assert!(decode::<Vec<String>>(&WireValue::Null).is_err());
    assert!(decode::<HashMap<String, String>>(&WireValue::Null).is_err());
}

#[test]
fn test_nested_path_composition() {
    let wire = WireValue::Seq(vec![
        WireValue::Seq(vec![WireValue::Int(1)]),
        WireValue::Seq(vec![WireValue::Int(2), WireValue::from("x")]),
    ]);
    let root = Path::arg("VM.set_tags", "value");
    let err = Vec::<Vec<i64>>::from_wire(&root, &wire).unwrap_err();
    assert_eq!(err.path(), "VM.set_tags(value)[1][1]");
}

#[test]
fn test_arguments_encode_through_references() {
    let name = "web-01";
    let path = Path::arg("VM.set_name_label", "value");
    assert_eq!(name.to_wire(&path).unwrap(), WireValue::from("web-01"));
    let tags: &[&str] = &["a", "b"];
    assert_eq!(
        tags.to_wire(&path).unwrap(),
        WireValue::Seq(vec![WireValue::from("a"), WireValue::from("b")])
    );
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, ..ProptestConfig::default() })]

    #[test]
    fn prop_int_round_trip(i in any::<i64>()) {
        prop_assert_eq!(decode::<i64>(&encode(&i).unwrap()).unwrap(), i);
    }

    #[test]
    fn prop_int_from_decimal_string(i in any::<i64>()) {
        prop_assert_eq!(decode::<i64>(&WireValue::from(i.to_string())).unwrap(), i);
    }

    #[test]
    fn prop_finite_double_round_trip(d in any::<f64>().prop_filter("finite", |d| d.is_finite())) {
        prop_assert_eq!(decode::<f64>(&encode(&d).unwrap()).unwrap(), d);
    }

    #[test]
    fn prop_string_round_trip(s in any::<String>()) {
        prop_assert_eq!(decode::<String>(&encode(&s).unwrap()).unwrap(), s);
    }

    #[test]
    fn prop_bool_round_trip(b in any::<bool>()) {
        prop_assert_eq!(decode::<bool>(&encode(&b).unwrap()).unwrap(), b);
    }

    #[test]
    fn prop_time_round_trip(secs in 0i64..4_102_444_800, nanos in 0u32..1_000_000_000) {
        let t = DateTime::from_timestamp(secs, nanos).unwrap();
        prop_assert_eq!(decode::<DateTime<Utc>>(&encode(&t).unwrap()).unwrap(), t);
    }
}
