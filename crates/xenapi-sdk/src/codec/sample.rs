// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Non-zero sample values for codec tests.
//!
//! Handles, enumerations and records get their impls from the declaration
//! macros, so every schema type can be exercised without hand-written
//! fixtures.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::{DateTime, TimeZone, Utc};
use xenapi_protocol::WireValue;

/// A value that differs from the type's zero value wherever the type allows.
pub(crate) trait Sample {
    fn sample() -> Self;
}

impl Sample for String {
    fn sample() -> Self {
        "sample".to_string()
    }
}

impl Sample for bool {
    fn sample() -> Self {
        true
    }
}

impl Sample for i64 {
    fn sample() -> Self {
        42
    }
}

impl Sample for f64 {
    fn sample() -> Self {
        1.5
    }
}

impl Sample for DateTime<Utc> {
    fn sample() -> Self {
        Utc.with_ymd_and_hms(2024, 3, 5, 10, 20, 30).unwrap()
    }
}

impl Sample for WireValue {
    fn sample() -> Self {
        WireValue::from("sample")
    }
}

impl<T: Sample> Sample for Vec<T> {
    fn sample() -> Self {
        vec![T::sample()]
    }
}

impl<T: Sample> Sample for Option<T> {
    fn sample() -> Self {
        Some(T::sample())
    }
}

impl<K: Sample + Eq + Hash, V: Sample> Sample for HashMap<K, V> {
    fn sample() -> Self {
        let mut map = HashMap::new();
        map.insert(K::sample(), V::sample());
        map
    }
}
