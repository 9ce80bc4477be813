// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Reply envelope tests for xenapi-protocol.

use xenapi_protocol::envelope::{failure, success};
use xenapi_protocol::{EnvelopeError, Fault, Reply, WireMap, WireValue};

fn map(entries: Vec<(&str, WireValue)>) -> WireValue {
    WireValue::Map(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<WireMap>(),
    )
}

fn strings(items: &[&str]) -> WireValue {
    WireValue::Seq(items.iter().map(|s| WireValue::from(*s)).collect())
}

#[test]
fn test_status_success() {
    let envelope = map(vec![
        ("Status", WireValue::from("Success")),
        ("Value", WireValue::from("OpaqueRef:s")),
    ]);
    assert_eq!(
        Reply::from_wire(envelope).unwrap(),
        Reply::Success(WireValue::from("OpaqueRef:s"))
    );
}

#[test]
fn test_status_failure() {
    let envelope = map(vec![
        ("Status", WireValue::from("Failure")),
        (
            "ErrorDescription",
            strings(&["HANDLE_INVALID", "VM", "OpaqueRef:x"]),
        ),
    ]);
    assert_eq!(
        Reply::from_wire(envelope).unwrap(),
        Reply::Fault(Fault {
            tag: "HANDLE_INVALID".to_string(),
            params: vec!["VM".to_string(), "OpaqueRef:x".to_string()],
        })
    );
}

#[test]
fn test_bare_fault_shape() {
    let envelope = map(vec![("fault", strings(&["SESSION_INVALID", "OpaqueRef:NULL"]))]);
    assert_eq!(
        Reply::from_wire(envelope).unwrap(),
        Reply::Fault(Fault {
            tag: "SESSION_INVALID".to_string(),
            params: vec!["OpaqueRef:NULL".to_string()],
        })
    );
}

#[test]
fn test_bare_value_shape() {
    let envelope = map(vec![("Value", WireValue::Int(42))]);
    assert_eq!(
        Reply::from_wire(envelope).unwrap(),
        Reply::Success(WireValue::Int(42))
    );
}

#[test]
fn test_fault_without_params() {
    let envelope = map(vec![("fault", strings(&["PERMISSION_DENIED"]))]);
    match Reply::from_wire(envelope).unwrap() {
        Reply::Fault(fault) => {
            assert_eq!(fault.tag, "PERMISSION_DENIED");
            assert!(fault.params.is_empty());
        }
        other => panic!("expected fault, got {:?}", other),
    }
}

#[test]
fn test_non_map_reply_is_rejected() {
    let err = Reply::from_wire(WireValue::from("oops")).unwrap_err();
    assert!(matches!(err, EnvelopeError::NotAMap { shape: "string", .. }));
    assert!(err.to_string().contains("oops"));
}

#[test]
fn test_unrecognised_map_is_rejected() {
    let err = Reply::from_wire(map(vec![("something", WireValue::Null)])).unwrap_err();
    assert!(matches!(err, EnvelopeError::Unrecognised(_)));
}

#[test]
fn test_unknown_status_is_rejected() {
    let envelope = map(vec![("Status", WireValue::from("Maybe"))]);
    assert_eq!(
        Reply::from_wire(envelope).unwrap_err(),
        EnvelopeError::UnknownStatus("Maybe".to_string())
    );
}

#[test]
fn test_empty_fault_is_rejected() {
    let envelope = map(vec![("fault", WireValue::Seq(vec![]))]);
    assert_eq!(
        Reply::from_wire(envelope).unwrap_err(),
        EnvelopeError::EmptyFault
    );
}

#[test]
fn test_fault_with_non_string_tag_is_rejected() {
    let envelope = map(vec![("fault", WireValue::Seq(vec![WireValue::Int(500)]))]);
    assert!(matches!(
        Reply::from_wire(envelope).unwrap_err(),
        EnvelopeError::FaultTagNotAString(_)
    ));
}

#[test]
fn test_fault_description_must_be_sequence() {
    let envelope = map(vec![("fault", WireValue::from("SESSION_INVALID"))]);
    assert!(matches!(
        Reply::from_wire(envelope).unwrap_err(),
        EnvelopeError::FaultNotASequence(_)
    ));
}

#[test]
fn test_constructors_produce_status_shape() {
    let ok = success(WireValue::Bool(true));
    assert_eq!(ok.get("Status"), Some(&WireValue::from("Success")));

    let err = failure("VM_BAD_POWER_STATE", vec!["OpaqueRef:v".to_string()]);
    assert_eq!(err.get("Status"), Some(&WireValue::from("Failure")));
    assert_eq!(
        err.get("ErrorDescription"),
        Some(&strings(&["VM_BAD_POWER_STATE", "OpaqueRef:v"]))
    );
}
