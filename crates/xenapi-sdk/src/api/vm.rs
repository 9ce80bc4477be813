// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! `VM.*` lifecycle calls.

use crate::dispatch::Arg;
use crate::enums::VmPowerState;
use crate::error::Result;
use crate::refs::{TaskRef, VmRef};
use crate::session::Session;

/// Virtual machine lifecycle calls.
pub struct VmApi<'a> {
    session: &'a Session,
}

impl<'a> VmApi<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Start a halted VM, optionally paused.
    pub async fn start(&self, vm: &VmRef, start_paused: bool, force: bool) -> Result<()> {
        self.session
            .invoke("VM.start", &Self::start_args(vm, &start_paused, &force))
            .await
    }

    /// As [`VmApi::start`], returning the task that tracks it.
    pub async fn async_start(
        &self,
        vm: &VmRef,
        start_paused: bool,
        force: bool,
    ) -> Result<TaskRef> {
        self.session
            .invoke(
                "Async.VM.start",
                &Self::start_args(vm, &start_paused, &force),
            )
            .await
    }

    fn start_args<'b>(vm: &'b VmRef, start_paused: &'b bool, force: &'b bool) -> [Arg<'b>; 3] {
        [
            Arg::new("vm", vm),
            Arg::new("start_paused", start_paused),
            Arg::new("force", force),
        ]
    }

    pub async fn clean_shutdown(&self, vm: &VmRef) -> Result<()> {
        self.session
            .invoke("VM.clean_shutdown", &[Arg::new("vm", vm)])
            .await
    }

    pub async fn hard_shutdown(&self, vm: &VmRef) -> Result<()> {
        self.session
            .invoke("VM.hard_shutdown", &[Arg::new("vm", vm)])
            .await
    }

    pub async fn clean_reboot(&self, vm: &VmRef) -> Result<()> {
        self.session
            .invoke("VM.clean_reboot", &[Arg::new("vm", vm)])
            .await
    }

    pub async fn get_power_state(&self, vm: &VmRef) -> Result<VmPowerState> {
        self.session
            .invoke("VM.get_power_state", &[Arg::new("self", vm)])
            .await
    }
}
