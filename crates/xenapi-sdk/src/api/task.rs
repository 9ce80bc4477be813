// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! `task.*`

use std::time::Duration;

use tracing::{debug, instrument};

use crate::dispatch::Arg;
use crate::enums::TaskStatusType;
use crate::error::Result;
use crate::records::TaskRecord;
use crate::refs::TaskRef;
use crate::session::Session;

/// Calls on asynchronous tasks.
pub struct TaskApi<'a> {
    session: &'a Session,
}

impl<'a> TaskApi<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    pub async fn cancel(&self, task: &TaskRef) -> Result<()> {
        self.session
            .invoke("task.cancel", &[Arg::new("task", task)])
            .await
    }

    pub async fn destroy(&self, task: &TaskRef) -> Result<()> {
        self.session
            .invoke("task.destroy", &[Arg::new("self", task)])
            .await
    }

    pub async fn get_status(&self, task: &TaskRef) -> Result<TaskStatusType> {
        self.session
            .invoke("task.get_status", &[Arg::new("self", task)])
            .await
    }

    pub async fn get_progress(&self, task: &TaskRef) -> Result<f64> {
        self.session
            .invoke("task.get_progress", &[Arg::new("self", task)])
            .await
    }

    /// The task's result value; for handle-returning calls, the handle.
    pub async fn get_result(&self, task: &TaskRef) -> Result<String> {
        self.session
            .invoke("task.get_result", &[Arg::new("self", task)])
            .await
    }

    pub async fn get_error_info(&self, task: &TaskRef) -> Result<Vec<String>> {
        self.session
            .invoke("task.get_error_info", &[Arg::new("self", task)])
            .await
    }

    /// Poll every `interval` until the task leaves `pending`, then return
    /// its record.
    #[instrument(skip(self), fields(task = %task))]
    pub async fn wait(&self, task: &TaskRef, interval: Duration) -> Result<TaskRecord> {
        loop {
            let status = self.get_status(task).await?;
            if status != TaskStatusType::Pending {
                debug!(task = %task, status = %status, "task finished");
                return self.session.get_record(task).await;
            }
            tokio::time::sleep(interval).await;
        }
    }
}
