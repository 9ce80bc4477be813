// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Transports that carry calls to the Management API.
//!
//! The dispatch layer only needs [`Transport::send`]: a method name and
//! positional wire values in, a reply envelope out. [`JsonRpcClient`] is the
//! stock implementation, speaking JSON-RPC 2.0 over HTTP(S).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument, trace};

use crate::envelope;
use crate::value::WireValue;

/// Path of the JSON-RPC endpoint relative to the server URL.
pub const JSONRPC_PATH: &str = "jsonrpc";

/// Errors raised below the reply envelope: connection, TLS, HTTP, framing.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid server url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request timed out after {0}ms")]
    Timeout(u64),

    #[error("server answered HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed JSON-RPC reply: {0}")]
    Malformed(String),

    #[error("reply id {got} does not match request id {expected}")]
    IdMismatch { expected: u64, got: String },
}

/// The one operation the dispatch layer consumes.
///
/// Implementations return the reply *envelope*; inspecting it for success or
/// fault is left to the caller (see [`crate::envelope::Reply`]).
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, method: &str, params: Vec<WireValue>)
    -> Result<WireValue, TransportError>;
}

/// Configuration for the JSON-RPC client.
#[derive(Debug, Clone)]
pub struct JsonRpcClientConfig {
    /// Base URL of the server, e.g. `https://pool-master.example`.
    pub url: String,
    /// Accept any server certificate (for development only!)
    pub dangerous_skip_cert_verification: bool,
    /// Connection timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Whole-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// `User-Agent` header sent with each request
    pub user_agent: String,
}

impl Default for JsonRpcClientConfig {
    fn default() -> Self {
        Self {
            url: "https://localhost".to_string(),
            dangerous_skip_cert_verification: false,
            connect_timeout_ms: 10_000,
            // event.from blocks server-side for up to its own timeout
            request_timeout_ms: 60_000,
            user_agent: concat!("xenapi-protocol/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl JsonRpcClientConfig {
    /// The full JSON-RPC endpoint for this configuration.
    pub fn endpoint(&self) -> Result<reqwest::Url, TransportError> {
        let raw = format!("{}/{}", self.url.trim_end_matches('/'), JSONRPC_PATH);
        let url = reqwest::Url::parse(&raw).map_err(|e| TransportError::InvalidUrl {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(TransportError::InvalidUrl {
                url: self.url.clone(),
                reason: format!("unsupported scheme {:?}", other),
            }),
        }
    }
}

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: &'a [WireValue],
    id: u64,
}

#[derive(Debug, Deserialize)]
struct JsonRpcErrorObject {
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: WireValue,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<WireValue>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
    #[serde(default)]
    id: Option<serde_json::Value>,
}

impl JsonRpcResponse {
    /// Translate the JSON-RPC reply into the common envelope shape.
    fn into_envelope(self, expected_id: u64) -> Result<WireValue, TransportError> {
        if let Some(id) = &self.id
            && !id.is_null()
            && id.as_u64() != Some(expected_id)
        {
            return Err(TransportError::IdMismatch {
                expected: expected_id,
                got: id.to_string(),
            });
        }

        match self.error {
            Some(error) => {
                if error.message.is_empty() {
                    return Err(TransportError::Malformed(
                        "error object carries no message".to_string(),
                    ));
                }
                let params = match error.data {
                    WireValue::Null => Vec::new(),
                    WireValue::Seq(items) => items
                        .into_iter()
                        .map(|item| match item {
                            WireValue::String(s) => s,
                            other => other.to_string(),
                        })
                        .collect(),
                    WireValue::String(s) => vec![s],
                    other => vec![other.to_string()],
                };
                Ok(envelope::failure(error.message, params))
            }
            None => Ok(envelope::success(self.result.unwrap_or_default())),
        }
    }
}

/// JSON-RPC 2.0 over HTTP(S).
pub struct JsonRpcClient {
    http: reqwest::Client,
    endpoint: reqwest::Url,
    next_id: AtomicU64,
    config: JsonRpcClientConfig,
}

impl JsonRpcClient {
    /// Create a new client with the given configuration
    pub fn new(config: JsonRpcClientConfig) -> Result<Self, TransportError> {
        let endpoint = config.endpoint()?;
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .danger_accept_invalid_certs(config.dangerous_skip_cert_verification)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http,
            endpoint,
            next_id: AtomicU64::new(1),
            config,
        })
    }

    /// Create a client for a local development server with a self-signed certificate
    pub fn localhost() -> Result<Self, TransportError> {
        Self::new(JsonRpcClientConfig {
            dangerous_skip_cert_verification: true,
            ..Default::default()
        })
    }

    pub fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    pub fn config(&self) -> &JsonRpcClientConfig {
        &self.config
    }

    fn classify(&self, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(self.config.request_timeout_ms)
        } else {
            TransportError::Http(err)
        }
    }
}

#[async_trait]
impl Transport for JsonRpcClient {
    #[instrument(skip(self, params), fields(endpoint = %self.endpoint))]
    async fn send(
        &self,
        method: &str,
        params: Vec<WireValue>,
    ) -> Result<WireValue, TransportError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params: &params,
            id,
        };
        trace!(id, params = params.len(), "sending JSON-RPC request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let reply: JsonRpcResponse = serde_json::from_slice(&body)
            .map_err(|e| TransportError::Malformed(e.to_string()))?;
        debug!(id, "received JSON-RPC reply");

        reply.into_envelope(id)
    }
}
