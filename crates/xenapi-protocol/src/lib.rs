// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! XenAPI Protocol - wire layer for the hypervisor management API
//!
//! This crate provides everything below the typed codecs:
//! - [`WireValue`], the transport-neutral value tree
//! - [`Reply`], inspection of success and fault reply envelopes
//! - [`Transport`], the single operation the dispatch layer consumes
//! - [`JsonRpcClient`], a JSON-RPC 2.0 transport over HTTP(S)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    xenapi-protocol                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Envelope: Status/Value/ErrorDescription, fault             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Values: null, bool, int, double, string, seq, map          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Transport: JSON-RPC 2.0 over HTTP(S) (reqwest)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use xenapi_protocol::{JsonRpcClient, Reply, Transport, WireValue};
//!
//! let client = JsonRpcClient::localhost()?;
//! let envelope = client
//!     .send(
//!         "session.login_with_password",
//!         vec!["root".into(), "".into(), "1.0".into(), "example".into()],
//!     )
//!     .await?;
//!
//! match Reply::from_wire(envelope)? {
//!     Reply::Success(value) => println!("session: {}", value),
//!     Reply::Fault(fault) => println!("fault: {} {:?}", fault.tag, fault.params),
//! }
//! ```

pub mod client;
pub mod envelope;
pub mod value;

pub use client::{JsonRpcClient, JsonRpcClientConfig, Transport, TransportError};
pub use envelope::{EnvelopeError, Fault, Reply};
pub use value::{WireMap, WireValue};
