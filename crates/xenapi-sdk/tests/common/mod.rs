// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Common test infrastructure for xenapi-sdk tests.
//!
//! Provides a scripted in-memory Transport and wire value builders.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use xenapi_sdk::protocol::envelope;
use xenapi_sdk::protocol::TransportError;
use xenapi_sdk::{Session, Transport, WireMap, WireValue};

pub const SESSION: &str = "OpaqueRef:session-1";
pub const POOL: &str = "OpaqueRef:pool-1";
pub const MASTER: &str = "OpaqueRef:host-1";

type Scripted = (String, Result<WireValue, TransportError>);

/// Transport that answers from a queue of expected calls, recording what it
/// was sent.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<(String, Vec<WireValue>)>>,
}

impl ScriptedTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue the envelope returned for the next call, which must be `method`.
    pub fn expect(&self, method: &str, envelope: WireValue) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back((method.to_string(), Ok(envelope)));
        self
    }

    /// Queue a success envelope around `value`.
    pub fn ok(&self, method: &str, value: WireValue) -> &Self {
        self.expect(method, envelope::success(value))
    }

    /// Queue a fault envelope.
    pub fn fault(&self, method: &str, tag: &str, params: &[&str]) -> &Self {
        self.expect(
            method,
            envelope::failure(tag, params.iter().map(|p| p.to_string())),
        )
    }

    /// Queue a transport failure.
    pub fn fail(&self, method: &str, err: TransportError) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .push_back((method.to_string(), Err(err)));
        self
    }

    /// Queue the calls a password login makes.
    pub fn login_script(&self) -> &Self {
        self.ok("session.login_with_password", text(SESSION))
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
    }

    /// Every call sent so far, as (method, params).
    pub fn calls(&self) -> Vec<(String, Vec<WireValue>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.calls().into_iter().map(|(m, _)| m).collect()
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        method: &str,
        params: Vec<WireValue>,
    ) -> Result<WireValue, TransportError> {
        self.calls
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        let (expected, reply) = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected call to {}", method));
        assert_eq!(expected, method, "calls arrived out of script order");
        reply
    }
}

/// A session over `transport`, not logged in.
pub fn session(transport: &Arc<ScriptedTransport>) -> Session {
    Session::new(transport.clone())
}

pub fn text(s: &str) -> WireValue {
    WireValue::from(s)
}

pub fn texts(items: &[&str]) -> WireValue {
    WireValue::Seq(items.iter().map(|s| WireValue::from(*s)).collect())
}

pub fn map(entries: Vec<(&str, WireValue)>) -> WireValue {
    WireValue::Map(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<WireMap>(),
    )
}
