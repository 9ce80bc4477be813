// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Sequence, map and option codecs.

use std::collections::HashMap;
use std::hash::Hash;

use xenapi_protocol::{WireMap, WireValue};

use super::{CodecError, FromWire, MapKey, Path, ToWire};

impl<T: ToWire + ?Sized> ToWire for &T {
    fn to_wire(&self, path: &Path<'_>) -> Result<WireValue, CodecError> {
        (**self).to_wire(path)
    }
}

impl<T: ToWire> ToWire for [T] {
    fn to_wire(&self, path: &Path<'_>) -> Result<WireValue, CodecError> {
        self.iter()
            .enumerate()
            .map(|(i, item)| item.to_wire(&path.index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(WireValue::Seq)
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self, path: &Path<'_>) -> Result<WireValue, CodecError> {
        self.as_slice().to_wire(path)
    }
}

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(path: &Path<'_>, value: &WireValue) -> Result<Self, CodecError> {
        match value {
            WireValue::Seq(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| T::from_wire(&path.index(i), item))
                .collect(),
            other => Err(CodecError::mismatch(path, "sequence", other)),
        }
    }
}

impl<K, V, S> ToWire for HashMap<K, V, S>
where
    K: MapKey,
    V: ToWire,
{
    fn to_wire(&self, path: &Path<'_>) -> Result<WireValue, CodecError> {
        let mut map = WireMap::new();
        for (key, value) in self {
            let key = key.to_key();
            let wire = value.to_wire(&path.key(&key))?;
            map.insert(key, wire);
        }
        Ok(WireValue::Map(map))
    }
}

impl<K, V> FromWire for HashMap<K, V>
where
    K: MapKey + Eq + Hash,
    V: FromWire,
{
    fn from_wire(path: &Path<'_>, value: &WireValue) -> Result<Self, CodecError> {
        let map = match value {
            WireValue::Map(map) => map,
            other => return Err(CodecError::mismatch(path, "map", other)),
        };
        let mut out = HashMap::with_capacity(map.len());
        for (key, value) in map {
            let entry = path.key(key);
            out.insert(K::from_key(&entry, key)?, V::from_wire(&entry, value)?);
        }
        Ok(out)
    }
}

impl<T: ToWire> ToWire for Option<T> {
    fn to_wire(&self, path: &Path<'_>) -> Result<WireValue, CodecError> {
        match self {
            Some(value) => value.to_wire(path),
            None => Ok(WireValue::Null),
        }
    }
}

impl<T: FromWire> FromWire for Option<T> {
    fn from_wire(path: &Path<'_>, value: &WireValue) -> Result<Self, CodecError> {
        match value {
            WireValue::Null => Ok(None),
            value => T::from_wire(path, value).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_error_carries_index() {
        let wire = WireValue::Seq(vec![WireValue::from("a"), WireValue::Int(1)]);
        let err = Vec::<String>::from_wire(&Path::root("tags"), &wire).unwrap_err();
        assert_eq!(err.path(), "tags[1]");
    }

    #[test]
    fn test_map_error_carries_key() {
        let mut map = WireMap::new();
        map.insert("memory".to_string(), WireValue::from("lots"));
        let err = HashMap::<String, i64>::from_wire(&Path::root("limits"), &WireValue::Map(map))
            .unwrap_err();
        assert_eq!(err.path(), "limits[memory]");
    }

    #[test]
    fn test_map_rejects_bad_integer_key() {
        let mut map = WireMap::new();
        map.insert("x".to_string(), WireValue::Int(1));
        let err = HashMap::<i64, i64>::from_wire(&Path::root("utilisation"), &WireValue::Map(map))
            .unwrap_err();
        assert_eq!(err.path(), "utilisation[x]");
    }

    #[test]
    fn test_option_null_is_none() {
        let decoded = Option::<i64>::from_wire(&Path::root("v"), &WireValue::Null).unwrap();
        assert_eq!(decoded, None);
        assert_eq!(None::<i64>.to_wire(&Path::root("v")).unwrap(), WireValue::Null);
    }
}
