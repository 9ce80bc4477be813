// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Wire value model.
//!
//! [`WireValue`] is the only shape the codecs and the transports agree on. It
//! mirrors what the Management API carries: null, booleans, integers, doubles,
//! strings, ordered sequences and string-keyed maps. Everything richer (records,
//! handles, enumerations, times) is a composition of these.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// String-keyed map of wire values.
///
/// Keys are looked up by name only; callers must not depend on iteration order.
pub type WireMap = BTreeMap<String, WireValue>;

/// Longest rendering produced by [`WireValue::render`] before truncation.
const RENDER_LIMIT: usize = 48;

/// A node of the transport-neutral value tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WireValue {
    /// Explicit absence.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// IEEE 754 double, including non-finite values.
    Double(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence.
    Seq(Vec<WireValue>),
    /// Mapping from string to wire value.
    Map(WireMap),
}

impl WireValue {
    /// Short name of this value's shape, used in diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            WireValue::Null => "null",
            WireValue::Bool(_) => "boolean",
            WireValue::Int(_) => "integer",
            WireValue::Double(_) => "double",
            WireValue::String(_) => "string",
            WireValue::Seq(_) => "sequence",
            WireValue::Map(_) => "map",
        }
    }

    /// Render the value for an error message, truncated to a few dozen characters.
    pub fn render(&self) -> String {
        let full = self.to_string();
        if full.chars().count() <= RENDER_LIMIT {
            return full;
        }
        let mut short: String = full.chars().take(RENDER_LIMIT).collect();
        short.push('…');
        short
    }

    pub fn is_null(&self) -> bool {
        matches!(self, WireValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            WireValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&WireMap> {
        match self {
            WireValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[WireValue]> {
        match self {
            WireValue::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Look up `key` if this value is a map.
    pub fn get(&self, key: &str) -> Option<&WireValue> {
        self.as_map().and_then(|m| m.get(key))
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireValue::Null => f.write_str("null"),
            WireValue::Bool(b) => write!(f, "{}", b),
            WireValue::Int(i) => write!(f, "{}", i),
            WireValue::Double(d) => write!(f, "{:?}", d),
            WireValue::String(s) => write!(f, "{:?}", s),
            WireValue::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            WireValue::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for WireValue {
    fn from(value: bool) -> Self {
        WireValue::Bool(value)
    }
}

impl From<i64> for WireValue {
    fn from(value: i64) -> Self {
        WireValue::Int(value)
    }
}

impl From<f64> for WireValue {
    fn from(value: f64) -> Self {
        WireValue::Double(value)
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        WireValue::String(value.to_string())
    }
}

impl From<String> for WireValue {
    fn from(value: String) -> Self {
        WireValue::String(value)
    }
}

impl From<Vec<WireValue>> for WireValue {
    fn from(items: Vec<WireValue>) -> Self {
        WireValue::Seq(items)
    }
}

impl From<WireMap> for WireValue {
    fn from(map: WireMap) -> Self {
        WireValue::Map(map)
    }
}

impl From<serde_json::Value> for WireValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => WireValue::Null,
            serde_json::Value::Bool(b) => WireValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => WireValue::Int(i),
                None => WireValue::Double(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => WireValue::String(s),
            serde_json::Value::Array(items) => {
                WireValue::Seq(items.into_iter().map(WireValue::from).collect())
            }
            serde_json::Value::Object(map) => WireValue::Map(
                map.into_iter()
                    .map(|(k, v)| (k, WireValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// JSON has no literal for non-finite numbers; they travel as the same string
/// sentinels the double codec emits.
fn non_finite_sentinel(d: f64) -> &'static str {
    if d.is_nan() {
        "NaN"
    } else if d.is_sign_positive() {
        "+Inf"
    } else {
        "-Inf"
    }
}

impl Serialize for WireValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WireValue::Null => serializer.serialize_unit(),
            WireValue::Bool(b) => serializer.serialize_bool(*b),
            WireValue::Int(i) => serializer.serialize_i64(*i),
            WireValue::Double(d) if d.is_finite() => serializer.serialize_f64(*d),
            WireValue::Double(d) => serializer.serialize_str(non_finite_sentinel(*d)),
            WireValue::String(s) => serializer.serialize_str(s),
            WireValue::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            WireValue::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

struct WireValueVisitor;

impl<'de> Visitor<'de> for WireValueVisitor {
    type Value = WireValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any wire value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<WireValue, E> {
        Ok(WireValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<WireValue, E> {
        Ok(WireValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<WireValue, D::Error> {
        Deserialize::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<WireValue, E> {
        Ok(WireValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<WireValue, E> {
        Ok(WireValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<WireValue, E> {
        Ok(i64::try_from(v)
            .map(WireValue::Int)
            .unwrap_or(WireValue::Double(v as f64)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<WireValue, E> {
        Ok(WireValue::Double(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<WireValue, E> {
        Ok(WireValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<WireValue, E> {
        Ok(WireValue::String(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<WireValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(WireValue::Seq(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<WireValue, A::Error> {
        let mut map = WireMap::new();
        while let Some((key, value)) = access.next_entry::<String, WireValue>()? {
            map.insert(key, value);
        }
        Ok(WireValue::Map(map))
    }
}

impl<'de> Deserialize<'de> for WireValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<WireValue, D::Error> {
        deserializer.deserialize_any(WireValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_names() {
        assert_eq!(WireValue::Null.shape(), "null");
        assert_eq!(WireValue::from(true).shape(), "boolean");
        assert_eq!(WireValue::from(3i64).shape(), "integer");
        assert_eq!(WireValue::from(1.5).shape(), "double");
        assert_eq!(WireValue::from("x").shape(), "string");
        assert_eq!(WireValue::Seq(vec![]).shape(), "sequence");
        assert_eq!(WireValue::Map(WireMap::new()).shape(), "map");
    }

    #[test]
    fn test_render_truncates_long_values() {
        let long = WireValue::from("x".repeat(200));
        let rendered = long.render();
        assert!(rendered.ends_with('…'));
        assert_eq!(rendered.chars().count(), RENDER_LIMIT + 1);
    }

    #[test]
    fn test_render_quotes_strings() {
        assert_eq!(WireValue::from("paused-ish").render(), "\"paused-ish\"");
    }

    #[test]
    fn test_get_on_non_map_is_none() {
        assert!(WireValue::from(1i64).get("a").is_none());
    }
}
