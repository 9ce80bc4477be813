// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Record codec tests.

mod common;

use std::collections::HashMap;

use common::{map, text, texts};
use xenapi_sdk::codec::{decode, encode};
use xenapi_sdk::{
    HostRef, ObserverRecord, Path, ProbeResultRecord, SrHealth, SrStatRecord, VifRef,
    VmMetricsRecord, VmPowerState, VmRecord, VmRef, WireValue,
};
use xenapi_sdk::{FromWire, VmOperations};

fn observer_wire() -> WireValue {
    map(vec![
        ("uuid", text("u-1")),
        ("name_label", text("n")),
        ("hosts", texts(&[])),
        ("attributes", map(vec![])),
        ("endpoints", texts(&[])),
        ("components", texts(&[])),
        ("enabled", WireValue::Bool(true)),
    ])
}

#[test]
fn test_missing_field_defaults_to_empty_string() {
    let record: ObserverRecord = decode(&observer_wire()).unwrap();
    assert_eq!(record.uuid, "u-1");
    assert_eq!(record.name_label, "n");
    assert_eq!(record.name_description, "");
    assert!(record.enabled);
    assert!(record.hosts.is_empty());
}

#[test]
fn test_missing_enum_field_reads_as_first_variant() {
    let vm: VmRecord = decode(&map(vec![("uuid", text("vm-1"))])).unwrap();
    assert_eq!(vm.power_state, VmPowerState::Halted);
    assert_eq!(vm.power_state, VmPowerState::ALL[0]);

    let halted: VmRecord = decode(&map(vec![
        ("uuid", text("vm-1")),
        ("power_state", text("Halted")),
    ]))
    .unwrap();
    assert_eq!(vm, halted);
}

#[test]
fn test_extra_fields_are_ignored() {
    let mut wire = observer_wire();
    if let WireValue::Map(m) = &mut wire {
        m.insert("added_in_a_later_release".to_string(), WireValue::Int(7));
        m.insert("another".to_string(), map(vec![("x", WireValue::Null)]));
    }
    let with_extra: ObserverRecord = decode(&wire).unwrap();
    let plain: ObserverRecord = decode(&observer_wire()).unwrap();
    assert_eq!(with_extra, plain);
}

#[test]
fn test_null_fields_decode_to_zero_values() {
    let wire = map(vec![
        ("uuid", WireValue::Null),
        ("power_state", WireValue::Null),
        ("VIFs", WireValue::Null),
        ("memory_target", WireValue::Null),
        ("resident_on", WireValue::Null),
        ("snapshot_time", WireValue::Null),
    ]);
    let vm: VmRecord = decode(&wire).unwrap();
    assert_eq!(vm, VmRecord::default());
    assert_eq!(vm.power_state, VmPowerState::Halted);
    assert_eq!(vm.memory_target, 0);
}

#[test]
fn test_absent_fields_decode_to_zero_values() {
    let vm: VmRecord = decode(&map(vec![])).unwrap();
    assert_eq!(vm, VmRecord::default());
}

#[test]
fn test_bad_vif_element_path() {
    let wire = map(vec![
        ("uuid", text("vm-1")),
        (
            "VIFs",
            WireValue::Seq(vec![
                text("OpaqueRef:vif-0"),
                text("OpaqueRef:vif-1"),
                WireValue::Int(99),
            ]),
        ),
    ]);
    let err = VmRecord::from_wire(&Path::result("VM.get_record"), &wire).unwrap_err();
    assert!(err.path().ends_with(".VIFs[2]"), "path was {}", err.path());
    assert_eq!(err.path(), "VM.get_record().VIFs[2]");
    assert!(err.message().contains("VIF reference"));
    assert!(err.message().contains("integer"));
}

#[test]
fn test_first_failing_field_is_reported() {
    let wire = map(vec![("power_state", text("Exploded"))]);
    let err = decode::<VmRecord>(&wire).unwrap_err();
    assert_eq!(err.path(), "value.power_state");
    assert!(err.message().contains("VMPowerState"));
}

#[test]
fn test_non_map_record_is_rejected() {
    let err = decode::<VmRecord>(&texts(&["not", "a", "map"])).unwrap_err();
    assert!(err.message().contains("VMRecord"));
    assert!(err.message().contains("sequence"));
}

#[test]
fn test_vm_record_round_trip() {
    let mut vm = VmRecord {
        uuid: "1b0a".to_string(),
        name_label: "web-01".to_string(),
        power_state: VmPowerState::Running,
        memory_target: 4 << 30,
        vcpus_max: 4,
        hvm_shadow_multiplier: 1.0,
        resident_on: HostRef::new("OpaqueRef:h"),
        vifs: vec![VifRef::new("OpaqueRef:v0"), VifRef::new("OpaqueRef:v1")],
        tags: vec!["prod".to_string()],
        ..Default::default()
    };
    vm.blocked_operations
        .insert(VmOperations::Destroy, "protected".to_string());
    vm.other_config
        .insert("owner".to_string(), "ops".to_string());

    let wire = encode(&vm).unwrap();
    assert_eq!(wire.get("VIFs").and_then(WireValue::as_seq).map(<[_]>::len), Some(2));
    assert_eq!(
        wire.get("blocked_operations").and_then(|m| m.get("destroy")),
        Some(&text("protected"))
    );
    assert_eq!(decode::<VmRecord>(&wire).unwrap(), vm);
}

#[test]
fn test_every_declared_field_is_encoded() {
    let wire = encode(&VmRecord::default()).unwrap();
    let keys = wire.as_map().unwrap();
    for field in VmRecord::FIELDS {
        assert!(keys.contains_key(*field), "{} missing", field);
    }
    assert_eq!(keys.len(), VmRecord::FIELDS.len());
}

#[test]
fn test_nested_optional_record() {
    let wire = map(vec![
        ("complete", WireValue::Bool(true)),
        (
            "sr",
            map(vec![
                ("name_label", text("local")),
                ("total_space", text("1073741824")),
                ("health", text("healthy")),
            ]),
        ),
    ]);
    let probe: ProbeResultRecord = decode(&wire).unwrap();
    let sr: SrStatRecord = probe.sr.unwrap();
    assert_eq!(sr.uuid, None);
    assert_eq!(sr.total_space, 1 << 30);
    assert_eq!(sr.health, SrHealth::Healthy);

    let absent: ProbeResultRecord = decode(&map(vec![("sr", WireValue::Null)])).unwrap();
    assert_eq!(absent.sr, None);
}

#[test]
fn test_integer_keyed_maps() {
    let wire = map(vec![(
        "VCPUs_utilisation",
        map(vec![("0", WireValue::Double(0.5)), ("1", WireValue::Int(1))]),
    )]);
    let metrics: VmMetricsRecord = decode(&wire).unwrap();
    let expected: HashMap<i64, f64> = [(0, 0.5), (1, 1.0)].into_iter().collect();
    assert_eq!(metrics.vcpus_utilisation, expected);
}

#[test]
fn test_serde_uses_wire_names() {
    let vm = VmRecord {
        name_label: "db".to_string(),
        vifs: vec![VifRef::new("OpaqueRef:v")],
        ..Default::default()
    };
    let json = serde_json::to_value(&vm).unwrap();
    assert_eq!(json["name_label"], "db");
    assert_eq!(json["VIFs"], serde_json::json!(["OpaqueRef:v"]));
    assert_eq!(json["power_state"], "Halted");

    let back: VmRecord = serde_json::from_value(serde_json::json!({"VIFs": ["OpaqueRef:v"]})).unwrap();
    assert_eq!(back.vifs, vm.vifs);
}

#[test]
fn test_handles_are_distinct_types() {
    fn takes_vm(_: &VmRef) {}
    let vm = VmRef::from("OpaqueRef:x");
    takes_vm(&vm);
    assert_eq!(VmRef::CLASS, "VM");
    assert_eq!(HostRef::CLASS, "host");
    assert!(VmRef::null().is_null());
    assert!(VmRef::default().is_null());
    assert!(!vm.is_null());
}
