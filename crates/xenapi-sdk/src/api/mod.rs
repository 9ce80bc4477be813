// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Per-class method wrappers.
//!
//! Each accessor borrows a [`Session`] and pairs method names with the codecs
//! of their arguments and results:
//!
//! ```ignore
//! let vm = session.get_by_uuid::<VmRef>("9a1b...").await?;
//! session.vm().start(&vm, false, false).await?;
//! ```
//!
//! Anything not wrapped here is reachable through [`Session::invoke`].

mod event;
mod host;
mod task;
mod vm;

pub use event::EventApi;
pub use host::{HostApi, PoolApi};
pub use task::TaskApi;
pub use vm::VmApi;

use std::hash::Hash;

use crate::codec::{FromWire, MapKey, ToWire};
use crate::session::Session;

/// A reference handle whose class has a record.
///
/// Implemented for every handle type by the record declarations; drives the
/// generic accessors such as [`Session::get_record`].
pub trait ApiObject: ToWire + FromWire + MapKey + Clone + Eq + Hash + Send + Sync + 'static {
    /// Class name used as the method prefix, e.g. `VM` in `VM.get_record`.
    const CLASS: &'static str;

    /// Record returned by `<class>.get_record`.
    type Record: ToWire + FromWire + Send;
}

impl Session {
    pub fn event(&self) -> EventApi<'_> {
        EventApi::new(self)
    }

    pub fn task(&self) -> TaskApi<'_> {
        TaskApi::new(self)
    }

    pub fn vm(&self) -> VmApi<'_> {
        VmApi::new(self)
    }

    pub fn host(&self) -> HostApi<'_> {
        HostApi::new(self)
    }

    pub fn pool(&self) -> PoolApi<'_> {
        PoolApi::new(self)
    }
}
