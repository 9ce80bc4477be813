// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Scalar and time codecs.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use xenapi_protocol::WireValue;

use super::{CodecError, FromWire, MapKey, Path, ToWire};

const POS_INF: &str = "+Inf";
const NEG_INF: &str = "-Inf";
const NAN: &str = "NaN";

/// Compact calendar forms the server emits, tried after RFC 3339.
const COMPACT_FORMATS: [&str; 2] = ["%Y%m%dT%H:%M:%SZ", "%Y%m%dT%H:%M:%S"];

impl ToWire for str {
    fn to_wire(&self, _path: &Path<'_>) -> Result<WireValue, CodecError> {
        Ok(WireValue::String(self.to_string()))
    }
}

impl ToWire for String {
    fn to_wire(&self, _path: &Path<'_>) -> Result<WireValue, CodecError> {
        Ok(WireValue::String(self.clone()))
    }
}

impl FromWire for String {
    fn from_wire(path: &Path<'_>, value: &WireValue) -> Result<Self, CodecError> {
        match value {
            WireValue::String(s) => Ok(s.clone()),
            WireValue::Null => Ok(String::new()),
            other => Err(CodecError::mismatch(path, "string", other)),
        }
    }
}

impl MapKey for String {
    fn to_key(&self) -> String {
        self.clone()
    }

    fn from_key(_path: &Path<'_>, key: &str) -> Result<Self, CodecError> {
        Ok(key.to_string())
    }
}

impl ToWire for bool {
    fn to_wire(&self, _path: &Path<'_>) -> Result<WireValue, CodecError> {
        Ok(WireValue::Bool(*self))
    }
}

impl FromWire for bool {
    fn from_wire(path: &Path<'_>, value: &WireValue) -> Result<Self, CodecError> {
        match value {
            WireValue::Bool(b) => Ok(*b),
            WireValue::Null => Ok(false),
            other => Err(CodecError::mismatch(path, "boolean", other)),
        }
    }
}

impl ToWire for i64 {
    fn to_wire(&self, _path: &Path<'_>) -> Result<WireValue, CodecError> {
        Ok(WireValue::Int(*self))
    }
}

impl FromWire for i64 {
    fn from_wire(path: &Path<'_>, value: &WireValue) -> Result<Self, CodecError> {
        match value {
            WireValue::Int(i) => Ok(*i),
            WireValue::Double(d) if d.fract() == 0.0 => {
                truncate(*d).ok_or_else(|| CodecError::mismatch(path, "integer", value))
            }
            WireValue::String(s) => parse_int(s.trim())
                .ok_or_else(|| CodecError::mismatch(path, "integer", value)),
            other => Err(CodecError::mismatch(path, "integer", other)),
        }
    }
}

impl MapKey for i64 {
    fn to_key(&self) -> String {
        self.to_string()
    }

    fn from_key(path: &Path<'_>, key: &str) -> Result<Self, CodecError> {
        key.trim()
            .parse()
            .map_err(|_| CodecError::mismatch(path, "integer map key", &WireValue::from(key)))
    }
}

/// Decimal integers first; then, as a loose fallback, any float numeral whose
/// truncation fits in an `i64` ("12.7" decodes as 12).
fn parse_int(s: &str) -> Option<i64> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(i);
    }
    s.parse::<f64>().ok().and_then(truncate)
}

fn truncate(d: f64) -> Option<i64> {
    let t = d.trunc();
    // i64::MAX as f64 rounds up to 2^63, which does not fit
    if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}

impl ToWire for f64 {
    fn to_wire(&self, _path: &Path<'_>) -> Result<WireValue, CodecError> {
        let wire = if self.is_nan() {
            WireValue::from(NAN)
        } else if *self == f64::INFINITY {
            WireValue::from(POS_INF)
        } else if *self == f64::NEG_INFINITY {
            WireValue::from(NEG_INF)
        } else {
            WireValue::Double(*self)
        };
        Ok(wire)
    }
}

impl FromWire for f64 {
    fn from_wire(path: &Path<'_>, value: &WireValue) -> Result<Self, CodecError> {
        match value {
            WireValue::Double(d) => Ok(*d),
            WireValue::Int(i) => Ok(*i as f64),
            WireValue::String(s) => {
                let s = s.trim();
                if let Ok(d) = s.parse::<f64>() {
                    return Ok(d);
                }
                match s {
                    POS_INF => Ok(f64::INFINITY),
                    NEG_INF => Ok(f64::NEG_INFINITY),
                    NAN => Ok(f64::NAN),
                    _ => Err(CodecError::mismatch(path, "double", value)),
                }
            }
            other => Err(CodecError::mismatch(path, "double", other)),
        }
    }
}

impl ToWire for DateTime<Utc> {
    fn to_wire(&self, _path: &Path<'_>) -> Result<WireValue, CodecError> {
        Ok(WireValue::String(
            self.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        ))
    }
}

impl FromWire for DateTime<Utc> {
    fn from_wire(path: &Path<'_>, value: &WireValue) -> Result<Self, CodecError> {
        let parsed = match value {
            WireValue::String(s) => parse_time(s.trim()),
            WireValue::Int(secs) => DateTime::from_timestamp(*secs, 0),
            WireValue::Double(secs) => from_epoch_float(*secs),
            _ => None,
        };
        parsed.ok_or_else(|| CodecError::mismatch(path, "time", value))
    }
}

fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    for format in COMPACT_FORMATS {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, format) {
            return Some(t.and_utc());
        }
    }
    if let Ok(secs) = s.parse::<i64>() {
        return DateTime::from_timestamp(secs, 0);
    }
    s.parse::<f64>().ok().and_then(from_epoch_float)
}

fn from_epoch_float(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9).round() as u32;
    let whole = truncate(whole)?;
    // rounding may carry a full second
    if nanos >= 1_000_000_000 {
        DateTime::from_timestamp(whole.checked_add(1)?, 0)
    } else {
        DateTime::from_timestamp(whole, nanos)
    }
}

/// The opaque wire value itself. Used for event snapshots.
impl ToWire for WireValue {
    fn to_wire(&self, _path: &Path<'_>) -> Result<WireValue, CodecError> {
        Ok(self.clone())
    }
}

impl FromWire for WireValue {
    fn from_wire(_path: &Path<'_>, value: &WireValue) -> Result<Self, CodecError> {
        Ok(value.clone())
    }
}

/// Methods with no result.
impl ToWire for () {
    fn to_wire(&self, _path: &Path<'_>) -> Result<WireValue, CodecError> {
        Ok(WireValue::Null)
    }
}

impl FromWire for () {
    fn from_wire(_path: &Path<'_>, _value: &WireValue) -> Result<Self, CodecError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> Path<'static> {
        Path::root("value")
    }

    #[test]
    fn test_int_from_integral_double() {
        assert_eq!(i64::from_wire(&root(), &WireValue::Double(42.0)), Ok(42));
    }

    #[test]
    fn test_int_rejects_fractional_double() {
        assert!(i64::from_wire(&root(), &WireValue::Double(4.5)).is_err());
    }

    #[test]
    fn test_int_rejects_null() {
        assert!(i64::from_wire(&root(), &WireValue::Null).is_err());
    }

    #[test]
    fn test_truncate_bounds() {
        assert_eq!(truncate(-0.9), Some(0));
        assert_eq!(truncate(9.3e18), None);
        assert_eq!(truncate(f64::NAN), None);
    }

    #[test]
    fn test_epoch_float_keeps_fraction() {
        let t = from_epoch_float(1.5).unwrap();
        assert_eq!(t.timestamp(), 1);
        assert_eq!(t.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_negative_zero_is_not_a_sentinel() {
        assert_eq!(
            (-0.0f64).to_wire(&root()).unwrap(),
            WireValue::Double(-0.0)
        );
    }
}
