// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Session lifecycle and generic object access tests.

mod common;

use std::time::Duration;

use common::{MASTER, POOL, SESSION, ScriptedTransport, map, session, text, texts};
use xenapi_sdk::protocol::TransportError;
use xenapi_sdk::{
    ApiVersion, HostRef, PoolRef, SdkError, SessionRef, TaskRef, TaskStatusType, VmPowerState,
    VmRecord, VmRef, WireValue,
};

#[tokio::test]
async fn test_login_detects_versions() {
    let transport = ScriptedTransport::new();
    transport.login_script();
    let mut session = session(&transport);
    assert_eq!(session.api_version(), ApiVersion::Unknown);

    session.login("root", "secret").await.unwrap();

    assert_eq!(session.api_version(), ApiVersion::V2_21);
    assert_eq!(session.xapi_version(), Some("24.19.1"));
    assert_eq!(
        transport.methods(),
        vec![
            "session.login_with_password",
            "pool.get_all",
            "pool.get_record",
            "host.get_record",
        ]
    );
    let calls = transport.calls();
    assert_eq!(calls[1].1, vec![text(SESSION)]);
    assert_eq!(calls[2].1, vec![text(SESSION), text(POOL)]);
    assert_eq!(calls[3].1, vec![text(SESSION), text(MASTER)]);
    assert_eq!(calls[0].1[3], text(session.originator()));
}

#[tokio::test]
async fn test_login_fault_leaves_session_logged_out() {
    let transport = ScriptedTransport::new();
    transport.fault(
        "session.login_with_password",
        "SESSION_AUTHENTICATION_FAILED",
        &["root", "Authentication failure"],
    );
    let mut session = session(&transport);

    let err = session.login("root", "wrong").await.unwrap_err();
    assert!(err.is("SESSION_AUTHENTICATION_FAILED"));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_login_without_pool_is_unexpected() {
    let transport = ScriptedTransport::new();
    transport
        .ok("session.login_with_password", text(SESSION))
        .ok("pool.get_all", texts(&[]));
    let mut session = session(&transport);

    let err = session.login("root", "").await.unwrap_err();
    assert!(matches!(err, SdkError::UnexpectedReplyShape(_)));
}

#[tokio::test]
async fn test_unknown_api_version_is_kept_as_unknown() {
    let transport = ScriptedTransport::new();
    transport
        .ok("session.login_with_password", text(SESSION))
        .ok("pool.get_all", texts(&[POOL]))
        .ok("pool.get_record", map(vec![("master", text(MASTER))]))
        .ok(
            "host.get_record",
            map(vec![
                ("API_version_major", WireValue::Int(9)),
                ("API_version_minor", WireValue::Int(1)),
                ("software_version", map(vec![("xapi", text("99.0"))])),
            ]),
        );
    let mut session = session(&transport);

    session.login("root", "").await.unwrap();
    assert_eq!(session.api_version(), ApiVersion::Unknown);
    assert_eq!(session.xapi_version(), Some("99.0"));
}

#[tokio::test]
async fn test_slave_local_login() {
    let transport = ScriptedTransport::new();
    transport
        .ok("session.slave_local_login_with_password", text(SESSION))
        .ok("pool.get_all", texts(&[POOL]))
        .ok("pool.get_record", map(vec![("master", text(MASTER))]))
        .ok(
            "host.get_record",
            map(vec![
                ("API_version_major", WireValue::Int(2)),
                ("API_version_minor", WireValue::Int(21)),
                ("software_version", map(vec![("xapi", text("24.19.1"))])),
            ]),
        )
        .ok("session.local_logout", WireValue::Null);
    let mut session = session(&transport);

    session
        .slave_local_login_with_password("root", "")
        .await
        .unwrap();
    assert_eq!(transport.calls()[0].1, vec![text("root"), text("")]);

    session.local_logout().await.unwrap();
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_logout_forgets_handle() {
    let transport = ScriptedTransport::new();
    transport.login_script().ok("session.logout", WireValue::Null);
    let mut session = session(&transport);
    session.login("root", "").await.unwrap();

    session.logout().await.unwrap();

    assert!(!session.is_logged_in());
    assert_eq!(session.api_version(), ApiVersion::Unknown);
    assert_eq!(session.xapi_version(), None);
    assert_eq!(transport.calls()[4].1, vec![text(SESSION)]);
}

#[tokio::test]
async fn test_logout_forgets_handle_on_failure() {
    let transport = ScriptedTransport::new();
    transport.fail(
        "session.logout",
        TransportError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        },
    );
    let mut session = session(&transport).with_session_ref(SESSION.into());

    let err = session.logout().await.unwrap_err();
    assert!(matches!(err, SdkError::Transport(_)));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_change_password() {
    let transport = ScriptedTransport::new();
    transport.ok("session.change_password", WireValue::Null);
    let session = session(&transport).with_session_ref(SESSION.into());

    session.change_password("old", "new").await.unwrap();
    assert_eq!(
        transport.calls()[0].1,
        vec![text(SESSION), text("old"), text("new")]
    );
}

#[tokio::test]
async fn test_generic_methods_use_class_names() {
    let transport = ScriptedTransport::new();
    transport
        .ok("VM.get_by_uuid", text("OpaqueRef:vm-1"))
        .ok("VM.get_uuid", text("b2c4"))
        .ok("host.get_all", texts(&[MASTER]))
        .ok(
            "VM.get_all_records",
            map(vec![(
                "OpaqueRef:vm-1",
                map(vec![
                    ("name_label", text("web-01")),
                    ("power_state", text("Suspended")),
                ]),
            )]),
        );
    let session = session(&transport).with_session_ref(SESSION.into());

    let vm: VmRef = session.get_by_uuid("b2c4").await.unwrap();
    assert_eq!(vm, VmRef::new("OpaqueRef:vm-1"));
    assert_eq!(session.get_uuid(&vm).await.unwrap(), "b2c4");

    let hosts: Vec<HostRef> = session.get_all().await.unwrap();
    assert_eq!(hosts, vec![HostRef::new(MASTER)]);

    let records = session.get_all_records::<VmRef>().await.unwrap();
    let record: &VmRecord = &records[&vm];
    assert_eq!(record.power_state, VmPowerState::Suspended);

    let calls = transport.calls();
    assert_eq!(calls[0].1, vec![text(SESSION), text("b2c4")]);
    assert_eq!(calls[1].1, vec![text(SESSION), text("OpaqueRef:vm-1")]);
}

#[tokio::test]
async fn test_record_decode_error_path() {
    let transport = ScriptedTransport::new();
    transport.ok(
        "VM.get_record",
        map(vec![(
            "VIFs",
            WireValue::Seq(vec![text("OpaqueRef:a"), text("OpaqueRef:b"), WireValue::Bool(true)]),
        )]),
    );
    let session = session(&transport).with_session_ref(SESSION.into());

    let err = session
        .get_record(&VmRef::new("OpaqueRef:vm-1"))
        .await
        .unwrap_err();
    match err {
        SdkError::Decode { path, .. } => assert!(path.ends_with(".VIFs[2]"), "{}", path),
        other => panic!("expected a decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_host_and_pool_accessors() {
    let transport = ScriptedTransport::new();
    transport
        .ok("pool.get_master", text(MASTER))
        .ok("host.get_API_version_major", text("2"))
        .ok("host.get_API_version_minor", WireValue::Int(21))
        .ok(
            "host.get_software_version",
            map(vec![("xapi", text("24.19.1")), ("xen", text("4.17"))]),
        );
    let session = session(&transport).with_session_ref(SESSION.into());

    let master = session.pool().get_master(&PoolRef::new(POOL)).await.unwrap();
    assert_eq!(master.as_str(), MASTER);
    assert_eq!(session.host().get_api_version_major(&master).await.unwrap(), 2);
    assert_eq!(session.host().get_api_version_minor(&master).await.unwrap(), 21);
    let versions = session.host().get_software_version(&master).await.unwrap();
    assert_eq!(versions["xen"], "4.17");
}

#[tokio::test(start_paused = true)]
async fn test_task_wait_polls_until_done() {
    let transport = ScriptedTransport::new();
    transport
        .ok("task.get_status", text("pending"))
        .ok("task.get_status", text("pending"))
        .ok("task.get_status", text("success"))
        .ok(
            "task.get_record",
            map(vec![
                ("status", text("success")),
                ("progress", WireValue::Double(1.0)),
                ("result", text("OpaqueRef:vm-1")),
            ]),
        );
    let session = session(&transport).with_session_ref(SESSION.into());
    let task = TaskRef::new("OpaqueRef:task-1");

    let record = session
        .task()
        .wait(&task, Duration::from_secs(1))
        .await
        .unwrap();

    assert_eq!(record.status, TaskStatusType::Success);
    assert_eq!(record.result, "OpaqueRef:vm-1");
    assert_eq!(transport.remaining(), 0);
}

#[tokio::test]
async fn test_task_wait_stops_on_fault() {
    let transport = ScriptedTransport::new();
    transport.fault("task.get_status", "HANDLE_INVALID", &["task", "OpaqueRef:gone"]);
    let session = session(&transport).with_session_ref(SESSION.into());

    let err = session
        .task()
        .wait(&TaskRef::new("OpaqueRef:gone"), Duration::from_millis(10))
        .await
        .unwrap_err();
    assert!(err.is("HANDLE_INVALID"));
}

#[tokio::test]
async fn test_task_accessors() {
    let transport = ScriptedTransport::new();
    transport
        .ok("task.get_progress", WireValue::Double(0.25))
        .ok("task.get_error_info", texts(&["VM_HVM_REQUIRED", "OpaqueRef:vm"]))
        .ok("task.cancel", WireValue::Null)
        .ok("task.destroy", WireValue::Null);
    let session = session(&transport).with_session_ref(SESSION.into());
    let task = TaskRef::new("OpaqueRef:task-2");

    assert_eq!(session.task().get_progress(&task).await.unwrap(), 0.25);
    assert_eq!(
        session.task().get_error_info(&task).await.unwrap(),
        vec!["VM_HVM_REQUIRED", "OpaqueRef:vm"]
    );
    session.task().cancel(&task).await.unwrap();
    session.task().destroy(&task).await.unwrap();
    assert_eq!(transport.remaining(), 0);
}

#[test]
fn test_resumed_session_is_logged_in() {
    let transport = ScriptedTransport::new();
    let session = session(&transport).with_session_ref(SessionRef::new(SESSION));
    assert!(session.is_logged_in());
    assert!(format!("{:?}", session).contains(SESSION));
}
