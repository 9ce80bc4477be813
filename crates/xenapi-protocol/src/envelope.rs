// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Reply envelopes.
//!
//! Every call answers with a map that is either a success carrying one value or
//! a fault carrying an error tag and string parameters. The recognised shapes:
//!
//! | Shape | Meaning |
//! |-------|---------|
//! | `{"Status": "Success", "Value": v}` | success |
//! | `{"Status": "Failure", "ErrorDescription": [tag, params…]}` | fault |
//! | `{"Value": v}` | success |
//! | `{"fault": [tag, params…]}` | fault |

use thiserror::Error;

use crate::value::{WireMap, WireValue};

const STATUS: &str = "Status";
const VALUE: &str = "Value";
const ERROR_DESCRIPTION: &str = "ErrorDescription";
const FAULT: &str = "fault";

/// Errors raised when a reply matches neither envelope shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvelopeError {
    #[error("reply is a {shape}, not a map: {rendered}")]
    NotAMap { shape: &'static str, rendered: String },

    #[error("reply carries neither a value nor a fault: {0}")]
    Unrecognised(String),

    #[error("unknown reply status {0:?}")]
    UnknownStatus(String),

    #[error("fault description is not a sequence: {0}")]
    FaultNotASequence(String),

    #[error("fault carries no error tag")]
    EmptyFault,

    #[error("fault tag is not a string: {0}")]
    FaultTagNotAString(String),
}

/// A server-side fault: an error tag plus its ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault {
    pub tag: String,
    pub params: Vec<String>,
}

/// The inspected form of a reply envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Success(WireValue),
    Fault(Fault),
}

impl Reply {
    /// Inspect a reply envelope.
    pub fn from_wire(envelope: WireValue) -> Result<Reply, EnvelopeError> {
        let mut map = match envelope {
            WireValue::Map(map) => map,
            other => {
                return Err(EnvelopeError::NotAMap {
                    shape: other.shape(),
                    rendered: other.render(),
                });
            }
        };

        match map.get(STATUS).and_then(WireValue::as_str) {
            Some("Success") => {
                return Ok(Reply::Success(map.remove(VALUE).unwrap_or_default()));
            }
            Some("Failure") => {
                let description = map.remove(ERROR_DESCRIPTION).unwrap_or_default();
                return parse_fault(description).map(Reply::Fault);
            }
            Some(other) => return Err(EnvelopeError::UnknownStatus(other.to_string())),
            None => {}
        }

        if let Some(description) = map.remove(FAULT) {
            return parse_fault(description).map(Reply::Fault);
        }
        if let Some(value) = map.remove(VALUE) {
            return Ok(Reply::Success(value));
        }

        Err(EnvelopeError::Unrecognised(WireValue::Map(map).render()))
    }
}

fn parse_fault(description: WireValue) -> Result<Fault, EnvelopeError> {
    let items = match description {
        WireValue::Seq(items) => items,
        other => return Err(EnvelopeError::FaultNotASequence(other.render())),
    };
    let mut items = items.into_iter();
    let tag = match items.next() {
        Some(WireValue::String(tag)) => tag,
        Some(other) => return Err(EnvelopeError::FaultTagNotAString(other.render())),
        None => return Err(EnvelopeError::EmptyFault),
    };
    let params = items
        .map(|param| match param {
            WireValue::String(s) => s,
            other => other.to_string(),
        })
        .collect();
    Ok(Fault { tag, params })
}

/// Build a success envelope around `value`.
pub fn success(value: WireValue) -> WireValue {
    let mut map = WireMap::new();
    map.insert(STATUS.to_string(), WireValue::from("Success"));
    map.insert(VALUE.to_string(), value);
    WireValue::Map(map)
}

/// Build a fault envelope from a tag and its parameters.
pub fn failure(tag: impl Into<String>, params: impl IntoIterator<Item = String>) -> WireValue {
    let mut description = vec![WireValue::String(tag.into())];
    description.extend(params.into_iter().map(WireValue::String));
    let mut map = WireMap::new();
    map.insert(STATUS.to_string(), WireValue::from("Failure"));
    map.insert(ERROR_DESCRIPTION.to_string(), WireValue::Seq(description));
    WireValue::Map(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_constructor_round_trips() {
        let reply = Reply::from_wire(success(WireValue::from("OpaqueRef:1"))).unwrap();
        assert_eq!(reply, Reply::Success(WireValue::from("OpaqueRef:1")));
    }

    #[test]
    fn test_failure_constructor_round_trips() {
        let envelope = failure("HANDLE_INVALID", vec!["VM".to_string(), "x".to_string()]);
        match Reply::from_wire(envelope).unwrap() {
            Reply::Fault(fault) => {
                assert_eq!(fault.tag, "HANDLE_INVALID");
                assert_eq!(fault.params, vec!["VM", "x"]);
            }
            other => panic!("expected fault, got {:?}", other),
        }
    }

    #[test]
    fn test_success_without_value_is_null() {
        let mut map = WireMap::new();
        map.insert(STATUS.to_string(), WireValue::from("Success"));
        let reply = Reply::from_wire(WireValue::Map(map)).unwrap();
        assert_eq!(reply, Reply::Success(WireValue::Null));
    }

    #[test]
    fn test_non_string_params_are_rendered() {
        let description = WireValue::Seq(vec![WireValue::from("TOO_MANY"), WireValue::Int(5)]);
        let fault = parse_fault(description).unwrap();
        assert_eq!(fault.params, vec!["5"]);
    }
}
