// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! The call contract between typed callers and a [`Transport`].
//!
//! [`call`] works on wire values only: it prepends the session handle, sends,
//! and lifts the reply envelope into either the success value or an
//! [`SdkError::Server`]. [`encode_args`] and [`decode_result`] are the typed
//! ends used by [`Session::invoke`](crate::Session::invoke).

use tracing::{debug, instrument, warn};
use xenapi_protocol::{Reply, Transport, WireValue};

use crate::codec::{FromWire, Path, ToWire};
use crate::error::{Result, SdkError};
use crate::refs::SessionRef;

/// One named call argument.
#[derive(Clone, Copy)]
pub struct Arg<'a> {
    name: &'a str,
    value: &'a (dyn ToWire + Sync),
}

impl<'a> Arg<'a> {
    pub fn new<T: ToWire + Sync>(name: &'a str, value: &'a T) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> &str {
        self.name
    }
}

impl std::fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // values may be passwords
        f.debug_struct("Arg").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Encode arguments left to right, each under the path `method(name)`.
pub fn encode_args(method: &str, args: &[Arg<'_>]) -> Result<Vec<WireValue>> {
    args.iter()
        .map(|arg| {
            arg.value
                .to_wire(&Path::arg(method, arg.name))
                .map_err(SdkError::from)
        })
        .collect()
}

/// Decode a success value under the path `method()`.
pub fn decode_result<T: FromWire>(method: &str, value: &WireValue) -> Result<T> {
    Ok(T::from_wire(&Path::result(method), value)?)
}

/// Send `method` with already-encoded arguments and inspect the reply.
///
/// With a session the handle is prepended to `args`.
#[instrument(skip_all, fields(method = %method, args = args.len()))]
pub async fn call(
    transport: &dyn Transport,
    session: Option<&SessionRef>,
    method: &str,
    args: Vec<WireValue>,
) -> Result<WireValue> {
    let params = match session {
        Some(session) => {
            let mut params = Vec::with_capacity(args.len() + 1);
            params.push(WireValue::from(session.as_str()));
            params.extend(args);
            params
        }
        None => args,
    };

    debug!("sending call");
    let envelope = transport.send(method, params).await?;

    match Reply::from_wire(envelope)? {
        Reply::Success(value) => {
            debug!(shape = value.shape(), "call succeeded");
            Ok(value)
        }
        Reply::Fault(fault) => {
            warn!(tag = %fault.tag, params = ?fault.params, "server returned a fault");
            Err(fault.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_args_in_order() {
        let vm = crate::VmRef::new("OpaqueRef:vm");
        let force = true;
        let args = encode_args(
            "VM.start",
            &[Arg::new("vm", &vm), Arg::new("force", &force)],
        )
        .unwrap();
        assert_eq!(
            args,
            vec![WireValue::from("OpaqueRef:vm"), WireValue::Bool(true)]
        );
    }

    #[test]
    fn test_decode_result_path() {
        let err = decode_result::<i64>("VM.get_domid", &WireValue::from("x")).unwrap_err();
        match err {
            SdkError::Decode { path, .. } => assert_eq!(path, "VM.get_domid()"),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_arg_debug_hides_value() {
        let pwd = "secret".to_string();
        let rendered = format!("{:?}", Arg::new("pwd", &pwd));
        assert!(!rendered.contains("secret"));
    }
}
