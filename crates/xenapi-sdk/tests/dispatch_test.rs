// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Dispatch and reply inspection tests.

mod common;

use common::{ScriptedTransport, map, session, text, texts, SESSION};
use xenapi_sdk::dispatch::{self, Arg};
use xenapi_sdk::protocol::TransportError;
use xenapi_sdk::{SdkError, SessionRef, VmPowerState, VmRef, WireValue, error_codes};

#[tokio::test]
async fn test_login_returns_session_handle() {
    let transport = ScriptedTransport::new();
    transport.login_script();
    let mut session = session(&transport).with_originator("test");

    let handle = session.login("root", "").await.unwrap();

    assert_eq!(handle, SessionRef::new(SESSION));
    assert_eq!(session.session_ref(), Some(&handle));
    let calls = transport.calls();
    assert_eq!(calls[0].0, "session.login_with_password");
    assert_eq!(
        calls[0].1,
        vec![text("root"), text(""), text("1.0"), text("test")]
    );
}

#[tokio::test]
async fn test_bare_fault_becomes_server_error() {
    let transport = ScriptedTransport::new();
    transport.expect(
        "VM.get_power_state",
        map(vec![("fault", texts(&["SESSION_INVALID", "OpaqueRef:NULL"]))]),
    );
    let session = session(&transport);

    let err = session
        .vm()
        .get_power_state(&VmRef::new("OpaqueRef:vm"))
        .await
        .unwrap_err();

    match &err {
        SdkError::Server { tag, params } => {
            assert_eq!(tag, "SESSION_INVALID");
            assert_eq!(params, &vec!["OpaqueRef:NULL".to_string()]);
        }
        other => panic!("expected a server error, got {:?}", other),
    }
    assert!(err.is(error_codes::SESSION_INVALID));
}

#[tokio::test]
async fn test_status_failure_envelope() {
    let transport = ScriptedTransport::new();
    transport.fault(
        "VM.start",
        "VM_BAD_POWER_STATE",
        &["OpaqueRef:vm", "halted", "running"],
    );
    let session = session(&transport).with_session_ref(SESSION.into());

    let err = session
        .vm()
        .start(&VmRef::new("OpaqueRef:vm"), false, false)
        .await
        .unwrap_err();
    assert_eq!(err.tag(), Some("VM_BAD_POWER_STATE"));
    assert_eq!(err.params(), ["OpaqueRef:vm", "halted", "running"]);
    assert!(err.to_string().contains("VM_BAD_POWER_STATE"));
}

#[tokio::test]
async fn test_session_handle_is_prepended() {
    let transport = ScriptedTransport::new();
    transport.ok("VM.get_power_state", text("Running"));
    let session = session(&transport).with_session_ref(SESSION.into());

    let state = session
        .vm()
        .get_power_state(&VmRef::new("OpaqueRef:vm"))
        .await
        .unwrap();
    assert_eq!(state, VmPowerState::Running);
    assert_eq!(
        transport.calls()[0].1,
        vec![text(SESSION), text("OpaqueRef:vm")]
    );
}

#[tokio::test]
async fn test_null_handle_sent_before_login() {
    let transport = ScriptedTransport::new();
    transport.fault("pool.get_all", "SESSION_INVALID", &["OpaqueRef:NULL"]);
    let session = session(&transport);

    let err = session.call("pool.get_all", vec![]).await.unwrap_err();
    assert!(err.is("SESSION_INVALID"));
    assert_eq!(transport.calls()[0].1, vec![text("OpaqueRef:NULL")]);
}

#[tokio::test]
async fn test_transport_error_passes_through() {
    let transport = ScriptedTransport::new();
    transport.fail("VM.clean_shutdown", TransportError::Timeout(60_000));
    let session = session(&transport).with_session_ref(SESSION.into());

    let err = session
        .vm()
        .clean_shutdown(&VmRef::new("OpaqueRef:vm"))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::Transport(TransportError::Timeout(60_000))));
    assert_eq!(err.tag(), None);
}

#[tokio::test]
async fn test_unrecognised_envelope() {
    let transport = ScriptedTransport::new();
    transport.expect("VM.hard_shutdown", map(vec![("Result", text("ok"))]));
    let session = session(&transport).with_session_ref(SESSION.into());

    let err = session
        .vm()
        .hard_shutdown(&VmRef::new("OpaqueRef:vm"))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::UnexpectedReplyShape(_)));

    transport.expect("VM.clean_reboot", text("not a map"));
    let err = session
        .vm()
        .clean_reboot(&VmRef::new("OpaqueRef:vm"))
        .await
        .unwrap_err();
    assert!(matches!(err, SdkError::UnexpectedReplyShape(_)));
}

#[tokio::test]
async fn test_decode_failure_names_the_method() {
    let transport = ScriptedTransport::new();
    transport.ok("VM.get_power_state", text("paused-ish"));
    let session = session(&transport).with_session_ref(SESSION.into());

    let err = session
        .vm()
        .get_power_state(&VmRef::new("OpaqueRef:vm"))
        .await
        .unwrap_err();
    match err {
        SdkError::Decode { path, message } => {
            assert_eq!(path, "VM.get_power_state()");
            assert!(message.contains("VMPowerState"));
        }
        other => panic!("expected a decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_async_start_returns_task() {
    let transport = ScriptedTransport::new();
    transport.ok("Async.VM.start", text("OpaqueRef:task-9"));
    let session = session(&transport).with_session_ref(SESSION.into());

    let task = session
        .vm()
        .async_start(&VmRef::new("OpaqueRef:vm"), true, false)
        .await
        .unwrap();
    assert_eq!(task.as_str(), "OpaqueRef:task-9");
    assert_eq!(
        transport.calls()[0].1,
        vec![
            text(SESSION),
            text("OpaqueRef:vm"),
            WireValue::Bool(true),
            WireValue::Bool(false),
        ]
    );
}

#[test]
fn test_non_finite_argument_and_result_path() {
    let value = f64::NAN;
    let args = dispatch::encode_args("VM.set_memory", &[Arg::new("value", &value)]).unwrap();
    assert_eq!(args, vec![text("NaN")]);

    let err = dispatch::decode_result::<i64>("VM.get_memory_target", &text("lots")).unwrap_err();
    match err {
        SdkError::Decode { path, .. } => assert_eq!(path, "VM.get_memory_target()"),
        other => panic!("expected a decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dispatch_call_without_session() {
    let transport = ScriptedTransport::new();
    transport.ok("pool.get_all", texts(&["OpaqueRef:p"]));

    let value = dispatch::call(&*transport, None, "pool.get_all", vec![])
        .await
        .unwrap();
    assert_eq!(value, texts(&["OpaqueRef:p"]));
    assert!(transport.calls()[0].1.is_empty());
}
