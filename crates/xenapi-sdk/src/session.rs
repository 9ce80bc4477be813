// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Session: an authenticated handle plus the transport it talks through.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, instrument};
use xenapi_protocol::{JsonRpcClient, Transport, WireValue};

use crate::api::ApiObject;
use crate::api_version::ApiVersion;
use crate::codec::FromWire;
use crate::config::SdkConfig;
use crate::dispatch::{self, Arg};
use crate::error::{Result, SdkError};
use crate::records::{HostRecord, PoolRecord};
use crate::refs::{HostRef, PoolRef, SessionRef};

/// An authenticated conversation with the management API.
///
/// Holds the session handle prepended to every session-scoped call, and the
/// API and `xapi` versions detected at login. Cloning is cheap; clones share
/// the transport but not later logins or logouts.
#[derive(Clone)]
pub struct Session {
    transport: Arc<dyn Transport>,
    session_ref: Option<SessionRef>,
    api_version: ApiVersion,
    xapi_version: Option<String>,
    originator: String,
}

impl Session {
    /// Create a session over an existing transport. Not logged in yet.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            session_ref: None,
            api_version: ApiVersion::Unknown,
            xapi_version: None,
            originator: SdkConfig::default().originator,
        }
    }

    /// Create a session over JSON-RPC with the given configuration.
    pub fn from_config(config: &SdkConfig) -> Result<Self> {
        let client = JsonRpcClient::new(config.client_config())?;
        let mut session = Self::new(Arc::new(client));
        session.originator = config.originator.clone();
        Ok(session)
    }

    /// Create a session from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&SdkConfig::from_env()?)
    }

    /// Create a session for a local server with a self-signed certificate.
    pub fn localhost() -> Result<Self> {
        Self::from_config(&SdkConfig::localhost())
    }

    /// Resume a session handle obtained elsewhere.
    pub fn with_session_ref(mut self, session_ref: SessionRef) -> Self {
        self.session_ref = Some(session_ref);
        self
    }

    /// Set the originator string sent by [`Session::login`].
    pub fn with_originator(mut self, originator: impl Into<String>) -> Self {
        self.originator = originator.into();
        self
    }

    pub fn session_ref(&self) -> Option<&SessionRef> {
        self.session_ref.as_ref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.session_ref.is_some()
    }

    /// API version of the pool master, detected at login.
    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// `xapi` software version of the pool master, detected at login.
    pub fn xapi_version(&self) -> Option<&str> {
        self.xapi_version.as_deref()
    }

    /// Originator string sent by [`Session::login`].
    pub fn originator(&self) -> &str {
        &self.originator
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Log in with this session's originator and API version "1.0".
    pub async fn login(&mut self, uname: &str, pwd: &str) -> Result<SessionRef> {
        let originator = self.originator.clone();
        self.login_with_password(uname, pwd, "1.0", &originator).await
    }

    /// Authenticate, store the returned handle and detect the server versions.
    #[instrument(skip(self, pwd))]
    pub async fn login_with_password(
        &mut self,
        uname: &str,
        pwd: &str,
        version: &str,
        originator: &str,
    ) -> Result<SessionRef> {
        let session_ref: SessionRef = self
            .invoke_unauthenticated(
                "session.login_with_password",
                &[
                    Arg::new("uname", &uname),
                    Arg::new("pwd", &pwd),
                    Arg::new("version", &version),
                    Arg::new("originator", &originator),
                ],
            )
            .await?;

        self.session_ref = Some(session_ref.clone());
        info!("Logged in");

        self.load_details().await?;
        Ok(session_ref)
    }

    /// Authenticate locally against a pool member in emergency mode.
    #[instrument(skip(self, pwd))]
    pub async fn slave_local_login_with_password(
        &mut self,
        uname: &str,
        pwd: &str,
    ) -> Result<SessionRef> {
        let session_ref: SessionRef = self
            .invoke_unauthenticated(
                "session.slave_local_login_with_password",
                &[Arg::new("uname", &uname), Arg::new("pwd", &pwd)],
            )
            .await?;

        self.session_ref = Some(session_ref.clone());
        info!("Logged in locally");

        self.load_details().await?;
        Ok(session_ref)
    }

    /// Log out. The handle is forgotten even when the server call fails.
    #[instrument(skip(self))]
    pub async fn logout(&mut self) -> Result<()> {
        let result = self.invoke::<()>("session.logout", &[]).await;
        self.forget();
        info!("Logged out");
        result
    }

    /// Log out of a session created by
    /// [`slave_local_login_with_password`](Session::slave_local_login_with_password).
    #[instrument(skip(self))]
    pub async fn local_logout(&mut self) -> Result<()> {
        let result = self.invoke::<()>("session.local_logout", &[]).await;
        self.forget();
        info!("Logged out locally");
        result
    }

    /// Change the password of the logged-in account.
    #[instrument(skip_all)]
    pub async fn change_password(&self, old_pwd: &str, new_pwd: &str) -> Result<()> {
        self.invoke(
            "session.change_password",
            &[Arg::new("old_pwd", &old_pwd), Arg::new("new_pwd", &new_pwd)],
        )
        .await
    }

    fn forget(&mut self) {
        self.session_ref = None;
        self.api_version = ApiVersion::Unknown;
        self.xapi_version = None;
    }

    async fn load_details(&mut self) -> Result<()> {
        self.api_version = ApiVersion::Unknown;

        let master = self.pool_master().await?;
        let host: HostRecord = self.get_record(&master).await?;

        self.api_version =
            ApiVersion::from_major_minor(host.api_version_major, host.api_version_minor);
        let xapi = host.software_version.get("xapi").cloned().ok_or_else(|| {
            SdkError::UnexpectedReplyShape(format!(
                "host {} reports no xapi software version",
                master
            ))
        })?;
        debug!(api_version = %self.api_version, xapi_version = %xapi, "Detected server versions");
        self.xapi_version = Some(xapi);
        Ok(())
    }

    async fn pool_master(&self) -> Result<HostRef> {
        let pools: Vec<PoolRef> = self.get_all().await?;
        let pool = pools.first().ok_or_else(|| {
            SdkError::UnexpectedReplyShape("pool.get_all returned no pool".to_string())
        })?;
        let record: PoolRecord = self.get_record(pool).await?;
        Ok(record.master)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Call a session-scoped method with already-encoded arguments.
    ///
    /// The session handle is prepended; before login the null handle is sent
    /// and the server answers with `SESSION_INVALID`.
    pub async fn call(&self, method: &str, args: Vec<WireValue>) -> Result<WireValue> {
        let null;
        let session = match &self.session_ref {
            Some(session) => session,
            None => {
                null = SessionRef::null();
                &null
            }
        };
        dispatch::call(self.transport.as_ref(), Some(session), method, args).await
    }

    /// Call a method that takes no session handle, such as a login.
    pub async fn call_unauthenticated(
        &self,
        method: &str,
        args: Vec<WireValue>,
    ) -> Result<WireValue> {
        dispatch::call(self.transport.as_ref(), None, method, args).await
    }

    /// Encode `args`, call `method` with the session handle, decode a `T`.
    pub async fn invoke<T: FromWire>(&self, method: &str, args: &[Arg<'_>]) -> Result<T> {
        let params = dispatch::encode_args(method, args)?;
        let value = self.call(method, params).await?;
        dispatch::decode_result(method, &value)
    }

    /// As [`Session::invoke`], without the session handle.
    pub async fn invoke_unauthenticated<T: FromWire>(
        &self,
        method: &str,
        args: &[Arg<'_>],
    ) -> Result<T> {
        let params = dispatch::encode_args(method, args)?;
        let value = self.call_unauthenticated(method, params).await?;
        dispatch::decode_result(method, &value)
    }

    // =========================================================================
    // Generic object access
    // =========================================================================

    /// `<class>.get_record`
    pub async fn get_record<R: ApiObject>(&self, handle: &R) -> Result<R::Record> {
        let method = format!("{}.get_record", R::CLASS);
        self.invoke(&method, &[Arg::new("self", handle)]).await
    }

    /// `<class>.get_by_uuid`
    pub async fn get_by_uuid<R: ApiObject>(&self, uuid: &str) -> Result<R> {
        let method = format!("{}.get_by_uuid", R::CLASS);
        self.invoke(&method, &[Arg::new("uuid", &uuid)]).await
    }

    /// `<class>.get_uuid`
    pub async fn get_uuid<R: ApiObject>(&self, handle: &R) -> Result<String> {
        let method = format!("{}.get_uuid", R::CLASS);
        self.invoke(&method, &[Arg::new("self", handle)]).await
    }

    /// `<class>.get_all`
    pub async fn get_all<R: ApiObject>(&self) -> Result<Vec<R>> {
        let method = format!("{}.get_all", R::CLASS);
        self.invoke(&method, &[]).await
    }

    /// `<class>.get_all_records`
    pub async fn get_all_records<R: ApiObject>(&self) -> Result<HashMap<R, R::Record>> {
        let method = format!("{}.get_all_records", R::CLASS);
        self.invoke(&method, &[]).await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("session_ref", &self.session_ref)
            .field("api_version", &self.api_version)
            .field("xapi_version", &self.xapi_version)
            .field("originator", &self.originator)
            .finish_non_exhaustive()
    }
}
