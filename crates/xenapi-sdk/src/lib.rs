// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! XenAPI SDK
//!
//! Typed client for the hypervisor management API.
//!
//! This crate turns typed calls into wire calls and typed values back out of
//! replies. Everything on the wire goes through [`xenapi_protocol`].
//!
//! # Architecture
//!
//! - [`codec`]: encoders/decoders between native values and [`WireValue`],
//!   with path breadcrumbs on every failure
//! - [`refs`], [`enums`], [`records`]: the schema's handles, enumerations and
//!   records, each with its codec pair
//! - [`event`]: event batches and runtime snapshot decoding
//! - [`dispatch`]: the `call(session, method, args)` contract
//! - [`Session`]: login/logout, typed `invoke`, generic object access and the
//!   per-class wrappers in [`api`]
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use xenapi_sdk::{Session, VmPowerState, VmRef, VmRecord};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = Session::from_env()?;
//! session.login("root", "secret").await?;
//! println!("API version {}", session.api_version());
//!
//! let vms = session.get_all_records::<VmRef>().await?;
//! for (vm, record) in &vms {
//!     if !record.is_a_template && record.power_state == VmPowerState::Halted {
//!         let task = session.vm().async_start(vm, false, false).await?;
//!         let done = session.task().wait(&task, Duration::from_secs(1)).await?;
//!         println!("{}: {}", record.name_label, done.status);
//!     }
//! }
//!
//! let record: VmRecord = session.get_record(&VmRef::new("OpaqueRef:...")).await?;
//! println!("{} has {} VIFs", record.name_label, record.vifs.len());
//!
//! session.logout().await?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
pub mod codec;

pub mod api;
pub mod api_version;
mod config;
pub mod dispatch;
pub mod enums;
mod error;
pub mod error_codes;
pub mod event;
pub mod messages;
pub mod records;
pub mod refs;
mod session;

pub use api::ApiObject;
pub use api_version::ApiVersion;
pub use codec::{CodecError, FromWire, MapKey, Path, ToWire, UnknownVariant};
pub use config::SdkConfig;
pub use dispatch::Arg;
pub use enums::*;
pub use error::{Result, SdkError};
pub use event::{EventBatch, EventRecord, Snapshot};
pub use records::*;
pub use refs::*;
pub use session::Session;

pub use xenapi_protocol::{self as protocol, Transport, WireMap, WireValue};
