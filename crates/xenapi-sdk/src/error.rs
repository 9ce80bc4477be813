// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for xenapi-sdk.

use thiserror::Error;
use xenapi_protocol::{EnvelopeError, Fault, TransportError};

use crate::codec::CodecError;

/// Result type using SdkError.
pub type Result<T> = std::result::Result<T, SdkError>;

/// Errors that can occur when calling the management API.
#[derive(Debug, Error)]
pub enum SdkError {
    /// Connection, TLS, HTTP or framing failure below the reply envelope.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server answered with a fault.
    #[error("server error [{tag}]: {}", .params.join(", "))]
    Server { tag: String, params: Vec<String> },

    /// A reply value did not match the expected type.
    #[error("decode error at {path}: {message}")]
    Decode { path: String, message: String },

    /// An argument could not be encoded.
    #[error("encode error at {path}: {message}")]
    Encode { path: String, message: String },

    /// The reply was neither a success nor a fault envelope.
    #[error("unexpected reply shape: {0}")]
    UnexpectedReplyShape(String),

    /// Configuration error (missing or invalid values).
    #[error("configuration error: {0}")]
    Config(String),
}

impl SdkError {
    /// Fault tag for server errors, e.g. `SESSION_INVALID`.
    pub fn tag(&self) -> Option<&str> {
        match self {
            SdkError::Server { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Fault parameters for server errors; empty otherwise.
    pub fn params(&self) -> &[String] {
        match self {
            SdkError::Server { params, .. } => params,
            _ => &[],
        }
    }

    /// True when this is a server fault with the given tag.
    ///
    /// ```ignore
    /// if err.is(error_codes::SESSION_INVALID) { /* log in again */ }
    /// ```
    pub fn is(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }
}

impl From<Fault> for SdkError {
    fn from(fault: Fault) -> Self {
        SdkError::Server {
            tag: fault.tag,
            params: fault.params,
        }
    }
}

impl From<EnvelopeError> for SdkError {
    fn from(err: EnvelopeError) -> Self {
        SdkError::UnexpectedReplyShape(err.to_string())
    }
}

impl From<CodecError> for SdkError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Decode { path, message } => SdkError::Decode { path, message },
            CodecError::Encode { path, message } => SdkError::Encode { path, message },
        }
    }
}
