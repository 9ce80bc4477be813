// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Enumeration codec tests.

mod common;

use std::collections::HashMap;

use common::{map, text};
use xenapi_sdk::codec::{decode, encode};
use xenapi_sdk::{
    EventOperation, OnBoot, Path, TaskStatusType, UnknownVariant, VmOperations, VmPowerState,
    WireValue,
};
use xenapi_sdk::FromWire;

#[test]
fn test_unknown_variant_is_rejected() {
    let err = VmPowerState::from_wire(&Path::result("VM.get_power_state"), &text("paused-ish"))
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("VMPowerState"), "message was {}", message);
    assert!(message.contains("\"paused-ish\""), "message was {}", message);
    assert_eq!(err.path(), "VM.get_power_state()");
    assert_eq!(
        err.message(),
        "unknown VMPowerState variant \"paused-ish\": expected VMPowerState, found string \"paused-ish\""
    );
}

#[test]
fn test_unknown_variant_reports_wire_shape() {
    let err = decode::<VmPowerState>(&text("paused-ish")).unwrap_err();
    assert_eq!(err.path(), "value");
    assert!(err.message().contains("found string \"paused-ish\""));
}

#[test]
fn test_non_string_is_rejected() {
    let err = decode::<VmPowerState>(&WireValue::Int(1)).unwrap_err();
    assert!(err.message().contains("VMPowerState"));
    assert!(err.message().contains("integer 1"));
}

#[test]
fn test_null_is_rejected_outside_records() {
    assert!(decode::<VmPowerState>(&WireValue::Null).is_err());
}

#[test]
fn test_every_tag_round_trips() {
    for state in VmPowerState::ALL {
        let wire = encode(state).unwrap();
        assert_eq!(wire, text(state.as_str()));
        assert_eq!(decode::<VmPowerState>(&wire).unwrap(), *state);
    }
    for op in VmOperations::ALL {
        assert_eq!(op.as_str().parse::<VmOperations>().unwrap(), *op);
    }
}

#[test]
fn test_tags_are_case_sensitive() {
    assert_eq!("Running".parse::<VmPowerState>(), Ok(VmPowerState::Running));
    assert_eq!(
        "running".parse::<VmPowerState>(),
        Err(UnknownVariant {
            enum_name: "VMPowerState",
            tag: "running".to_string(),
        })
    );
    assert_eq!("pending".parse::<TaskStatusType>(), Ok(TaskStatusType::Pending));
}

#[test]
fn test_default_is_first_variant() {
    assert_eq!(VmPowerState::default(), VmPowerState::ALL[0]);
    assert_eq!(VmPowerState::default(), VmPowerState::Halted);
    assert_eq!(EventOperation::default(), EventOperation::Add);
    assert_eq!(OnBoot::default(), OnBoot::ALL[0]);
}

#[test]
fn test_names_and_display() {
    assert_eq!(VmPowerState::NAME, "VMPowerState");
    assert_eq!(VmPowerState::Suspended.to_string(), "Suspended");
    assert_eq!(EventOperation::Mod.to_string(), "mod");
}

#[test]
fn test_enum_keyed_map() {
    let wire = map(vec![
        ("start", text("cannot start")),
        ("destroy", text("protected")),
    ]);
    let decoded: HashMap<VmOperations, String> = decode(&wire).unwrap();
    assert_eq!(decoded[&VmOperations::Destroy], "protected");
    assert_eq!(decoded.len(), 2);

    let bad = map(vec![("explode", text("?"))]);
    let err = decode::<HashMap<VmOperations, String>>(&bad).unwrap_err();
    assert_eq!(err.path(), "value[explode]");
    assert!(err.message().contains("VMOperations"));
    assert!(err.message().contains("found string \"explode\""));
}

#[test]
fn test_serde_uses_wire_tags() {
    assert_eq!(
        serde_json::to_value(EventOperation::Del).unwrap(),
        serde_json::json!("del")
    );
    let state: VmPowerState = serde_json::from_value(serde_json::json!("Paused")).unwrap();
    assert_eq!(state, VmPowerState::Paused);
}
