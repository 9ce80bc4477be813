// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error type tests.

use xenapi_sdk::codec::decode;
use xenapi_sdk::protocol::{EnvelopeError, Fault, TransportError};
use xenapi_sdk::{SdkError, VmRecord, error_codes, messages};

#[test]
fn test_server_error_display() {
    let err = SdkError::from(Fault {
        tag: "HANDLE_INVALID".to_string(),
        params: vec!["VM".to_string(), "OpaqueRef:x".to_string()],
    });
    assert_eq!(err.to_string(), "server error [HANDLE_INVALID]: VM, OpaqueRef:x");
    assert_eq!(err.tag(), Some("HANDLE_INVALID"));
    assert!(err.is(error_codes::HANDLE_INVALID));
    assert!(!err.is(error_codes::SESSION_INVALID));
}

#[test]
fn test_server_error_without_params() {
    let err = SdkError::Server {
        tag: "PERMISSION_DENIED".to_string(),
        params: vec![],
    };
    assert!(err.params().is_empty());
    assert!(err.to_string().contains("PERMISSION_DENIED"));
}

#[test]
fn test_codec_error_conversion_keeps_path() {
    let wire = xenapi_sdk::WireValue::Map(
        [("memory_target".to_string(), xenapi_sdk::WireValue::from("lots"))]
            .into_iter()
            .collect(),
    );
    let err: SdkError = decode::<VmRecord>(&wire).unwrap_err().into();
    match &err {
        SdkError::Decode { path, message } => {
            assert_eq!(path, "value.memory_target");
            assert!(message.contains("\"lots\""));
        }
        other => panic!("expected a decode error, got {:?}", other),
    }
    assert!(err.to_string().contains("value.memory_target"));
    assert_eq!(err.tag(), None);
}

#[test]
fn test_envelope_error_is_unexpected_shape() {
    let err = SdkError::from(EnvelopeError::EmptyFault);
    assert!(matches!(err, SdkError::UnexpectedReplyShape(_)));
    assert!(err.to_string().contains("no error tag"));
}

#[test]
fn test_transport_error_display() {
    let err = SdkError::from(TransportError::Timeout(1500));
    assert!(err.to_string().contains("1500ms"));
    assert!(err.params().is_empty());
}

#[test]
fn test_catalogues_know_common_tags() {
    assert!(error_codes::is_known("SESSION_INVALID"));
    assert!(error_codes::is_known("VM_BAD_POWER_STATE"));
    assert!(!error_codes::is_known("SESSION_INVALIDISH"));
    assert!(messages::is_known(messages::HA_POOL_OVERCOMMITTED));
}

#[test]
fn test_errors_cross_threads() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<SdkError>();
}
