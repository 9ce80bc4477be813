// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Configuration for the SDK.

use std::time::Duration;

use xenapi_protocol::JsonRpcClientConfig;

use crate::error::{Result, SdkError};

/// Configuration for a [`Session`](crate::Session) over JSON-RPC.
#[derive(Debug, Clone)]
pub struct SdkConfig {
    /// Server URL, e.g. `https://pool-master.example`.
    pub url: String,
    /// Accept any server certificate. Pools ship self-signed ones by default.
    pub skip_cert_verification: bool,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Request timeout.
    pub request_timeout: Duration,
    /// Originator reported at login and sent as the user agent.
    pub originator: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            url: "https://localhost".to_string(),
            skip_cert_verification: false,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            originator: "xenapi-sdk".to_string(),
        }
    }
}

impl SdkConfig {
    /// Defaults: `https://localhost`, verified TLS, 10s connect, 60s request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration for a local server with a self-signed certificate.
    pub fn localhost() -> Self {
        Self {
            skip_cert_verification: true,
            ..Self::default()
        }
    }

    /// Read the configuration from `XENAPI_*` environment variables.
    ///
    /// Environment variables:
    /// - `XENAPI_URL`: Server URL (default: "https://localhost")
    /// - `XENAPI_SKIP_CERT_VERIFICATION`: Skip TLS verification (default: "false")
    /// - `XENAPI_CONNECT_TIMEOUT_MS`: Connection timeout in milliseconds (default: 10000)
    /// - `XENAPI_REQUEST_TIMEOUT_MS`: Request timeout in milliseconds (default: 60000)
    /// - `XENAPI_ORIGINATOR`: Originator string (default: "xenapi-sdk")
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SdkConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup("XENAPI_URL").unwrap_or_else(|| "https://localhost".to_string());
        if url.trim().is_empty() {
            return Err(SdkError::Config("XENAPI_URL is empty".to_string()));
        }

        let skip_cert_verification = lookup("XENAPI_SKIP_CERT_VERIFICATION")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        let connect_timeout_ms: u64 = lookup("XENAPI_CONNECT_TIMEOUT_MS")
            .unwrap_or_else(|| "10000".to_string())
            .parse()
            .map_err(|e| SdkError::Config(format!("invalid XENAPI_CONNECT_TIMEOUT_MS: {}", e)))?;

        let request_timeout_ms: u64 = lookup("XENAPI_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| "60000".to_string())
            .parse()
            .map_err(|e| SdkError::Config(format!("invalid XENAPI_REQUEST_TIMEOUT_MS: {}", e)))?;

        let originator =
            lookup("XENAPI_ORIGINATOR").unwrap_or_else(|| "xenapi-sdk".to_string());

        Ok(Self {
            url,
            skip_cert_verification,
            connect_timeout: Duration::from_millis(connect_timeout_ms),
            request_timeout: Duration::from_millis(request_timeout_ms),
            originator,
        })
    }

    /// Set the server URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Accept self-signed pool certificates.
    pub fn with_skip_cert_verification(mut self, skip: bool) -> Self {
        self.skip_cert_verification = skip;
        self
    }

    /// Timeout for establishing the HTTPS connection.
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Timeout for a whole call, including `event.from` long polls.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the originator.
    pub fn with_originator(mut self, originator: impl Into<String>) -> Self {
        self.originator = originator.into();
        self
    }

    /// Transport configuration derived from this one.
    pub fn client_config(&self) -> JsonRpcClientConfig {
        JsonRpcClientConfig {
            url: self.url.clone(),
            dangerous_skip_cert_verification: self.skip_cert_verification,
            connect_timeout_ms: self.connect_timeout.as_millis() as u64,
            request_timeout_ms: self.request_timeout.as_millis() as u64,
            user_agent: self.originator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SdkConfig::default();
        assert_eq!(config.url, "https://localhost");
        assert!(!config.skip_cert_verification);
        assert_eq!(config.originator, "xenapi-sdk");
    }

    #[test]
    fn test_localhost_config() {
        let config = SdkConfig::localhost();
        assert!(config.skip_cert_verification);
    }

    #[test]
    fn test_client_config_carries_timeouts() {
        let client = SdkConfig::new()
            .with_connect_timeout(Duration::from_secs(3))
            .with_request_timeout(Duration::from_millis(2500))
            .client_config();
        assert_eq!(client.connect_timeout_ms, 3000);
        assert_eq!(client.request_timeout_ms, 2500);
    }
}
