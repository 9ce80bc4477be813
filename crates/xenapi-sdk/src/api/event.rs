// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! `event.*`

use crate::dispatch::Arg;
use crate::error::Result;
use crate::event::{EventBatch, EventRecord};
use crate::session::Session;

/// Event subscription calls.
pub struct EventApi<'a> {
    session: &'a Session,
}

impl<'a> EventApi<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Subscribe to the given classes (`"*"` for all) for [`EventApi::next`].
    pub async fn register(&self, classes: &[&str]) -> Result<()> {
        self.session
            .invoke("event.register", &[Arg::new("classes", &classes)])
            .await
    }

    pub async fn unregister(&self, classes: &[&str]) -> Result<()> {
        self.session
            .invoke("event.unregister", &[Arg::new("classes", &classes)])
            .await
    }

    /// Block until events arrive for registered classes.
    pub async fn next(&self) -> Result<Vec<EventRecord>> {
        self.session.invoke("event.next", &[]).await
    }

    /// Return changes since `token` (empty for the initial state), waiting up
    /// to `timeout` seconds when there are none.
    pub async fn from(&self, classes: &[&str], token: &str, timeout: f64) -> Result<EventBatch> {
        self.session
            .invoke(
                "event.from",
                &[
                    Arg::new("classes", &classes),
                    Arg::new("token", &token),
                    Arg::new("timeout", &timeout),
                ],
            )
            .await
    }

    /// Id of the next event the server will generate.
    pub async fn get_current_id(&self) -> Result<i64> {
        self.session.invoke("event.get_current_id", &[]).await
    }

    /// Inject an artificial event on the given object; returns the event id.
    pub async fn inject(&self, class: &str, object: &str) -> Result<String> {
        self.session
            .invoke(
                "event.inject",
                &[Arg::new("class", &class), Arg::new("ref", &object)],
            )
            .await
    }
}
