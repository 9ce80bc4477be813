// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Codecs between native values and [`WireValue`].
//!
//! Every logical type carries a pair of [`ToWire`] / [`FromWire`] impls. The
//! impls for scalars, containers and times live here; handles, enumerations
//! and records get theirs from the `wire_refs!`, `wire_enum!` and
//! `wire_record!` macros.
//!
//! Decoders are permissive where the server is known to be loose (numbers in
//! strings, several time formats) and strict everywhere else. Every failure
//! carries the [`Path`] of the offending value.

#[macro_use]
mod macros;
mod container;
mod path;
#[cfg(test)]
pub(crate) mod sample;
mod scalar;

pub use path::Path;

use thiserror::Error;
use xenapi_protocol::{WireMap, WireValue};

/// A codec failure, with the rendered path of the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("cannot decode {path}: {message}")]
    Decode { path: String, message: String },

    #[error("cannot encode {path}: {message}")]
    Encode { path: String, message: String },
}

impl CodecError {
    pub fn decode(path: &Path<'_>, message: impl Into<String>) -> Self {
        CodecError::Decode {
            path: path.to_string(),
            message: message.into(),
        }
    }

    pub fn encode(path: &Path<'_>, message: impl Into<String>) -> Self {
        CodecError::Encode {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// The value at `path` has the wrong wire shape for `expected`.
    pub fn mismatch(path: &Path<'_>, expected: &str, found: &WireValue) -> Self {
        Self::decode(
            path,
            format!(
                "expected {}, found {} {}",
                expected,
                found.shape(),
                found.render()
            ),
        )
    }

    /// A wire string that names no variant of the enumeration.
    pub fn unknown_variant(path: &Path<'_>, err: &UnknownVariant) -> Self {
        Self::decode(
            path,
            format!(
                "{}: expected {}, found string {}",
                err,
                err.enum_name,
                WireValue::from(err.tag.as_str()).render()
            ),
        )
    }

    pub fn path(&self) -> &str {
        match self {
            CodecError::Decode { path, .. } | CodecError::Encode { path, .. } => path,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CodecError::Decode { message, .. } | CodecError::Encode { message, .. } => message,
        }
    }
}

/// A wire tag that names no variant of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {enum_name} variant {tag:?}")]
pub struct UnknownVariant {
    pub enum_name: &'static str,
    pub tag: String,
}

/// Encode a native value into its wire form.
///
/// Object safe, so heterogeneous call arguments can travel as `&dyn ToWire`.
pub trait ToWire {
    fn to_wire(&self, path: &Path<'_>) -> Result<WireValue, CodecError>;
}

/// Decode a native value from its wire form.
pub trait FromWire: Sized {
    fn from_wire(path: &Path<'_>, value: &WireValue) -> Result<Self, CodecError>;
}

/// Types usable as keys of a wire map.
///
/// Wire maps are always keyed by strings; handles and enumerations use their
/// wire tag, integers their decimal form.
pub trait MapKey: Sized {
    fn to_key(&self) -> String;

    fn from_key(path: &Path<'_>, key: &str) -> Result<Self, CodecError>;
}

/// Encode `value` under the root path `value`.
pub fn encode<T: ToWire + ?Sized>(value: &T) -> Result<WireValue, CodecError> {
    value.to_wire(&Path::root("value"))
}

/// Decode a `T` from `value` under the root path `value`.
pub fn decode<T: FromWire>(value: &WireValue) -> Result<T, CodecError> {
    T::from_wire(&Path::root("value"), value)
}

/// Borrow the map a record decodes from, or fail with a shape mismatch.
pub fn expect_map<'v>(
    path: &Path<'_>,
    value: &'v WireValue,
    expected: &str,
) -> Result<&'v WireMap, CodecError> {
    match value {
        WireValue::Map(map) => Ok(map),
        other => Err(CodecError::mismatch(path, expected, other)),
    }
}

/// Decode one record field. An absent or null entry yields the zero value.
pub fn decode_field<T: FromWire + Default>(
    path: &Path<'_>,
    map: &WireMap,
    name: &str,
) -> Result<T, CodecError> {
    match map.get(name) {
        None | Some(WireValue::Null) => Ok(T::default()),
        Some(value) => T::from_wire(&path.field(name), value),
    }
}

/// Encode one record field into `map`.
pub fn encode_field<T: ToWire + ?Sized>(
    path: &Path<'_>,
    map: &mut WireMap,
    name: &str,
    value: &T,
) -> Result<(), CodecError> {
    let wire = value.to_wire(&path.field(name))?;
    map.insert(name.to_string(), wire);
    Ok(())
}
