// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! `host.*` and `pool.*` version and topology queries.

use std::collections::HashMap;

use crate::dispatch::Arg;
use crate::error::Result;
use crate::refs::{HostRef, PoolRef};
use crate::session::Session;

pub struct HostApi<'a> {
    session: &'a Session,
}

impl<'a> HostApi<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn get_api_version_major(&self, host: &HostRef) -> Result<i64> {
        self.session
            .invoke("host.get_API_version_major", &[Arg::new("self", host)])
            .await
    }

    pub async fn get_api_version_minor(&self, host: &HostRef) -> Result<i64> {
        self.session
            .invoke("host.get_API_version_minor", &[Arg::new("self", host)])
            .await
    }

    /// Component versions, keyed by component (`xapi`, `xen`, ...).
    pub async fn get_software_version(&self, host: &HostRef) -> Result<HashMap<String, String>> {
        self.session
            .invoke("host.get_software_version", &[Arg::new("self", host)])
            .await
    }
}

pub struct PoolApi<'a> {
    session: &'a Session,
}

impl<'a> PoolApi<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn get_master(&self, pool: &PoolRef) -> Result<HostRef> {
        self.session
            .invoke("pool.get_master", &[Arg::new("self", pool)])
            .await
    }
}
