// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Management API versions.

use std::fmt;

/// API version reported by the pool master.
///
/// Ordered by release, so `version >= ApiVersion::V2_0` gates features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ApiVersion {
    /// XenServer 4.0 (rio)
    V1_1,
    /// XenServer 4.1 (miami)
    V1_2,
    /// XenServer 5.0 (orlando)
    V1_3,
    V1_4,
    /// XenServer 5.0 update 3
    V1_5,
    /// XenServer 5.5 (george)
    V1_6,
    /// XenServer 5.6 (midnight-ride)
    V1_7,
    /// XenServer 5.6 FP1 (cowley)
    V1_8,
    /// XenServer 6.0 (boston)
    V1_9,
    /// XenServer 6.1 (tampa)
    V1_10,
    /// XenServer 6.2 (clearwater)
    V2_0,
    /// XenServer 6.2 SP1 (vgpu-productisation)
    V2_1,
    /// XenServer 6.2 SP1 Hotfix 4 (clearwater-felton)
    V2_2,
    /// XenServer 6.5 (creedence)
    V2_3,
    /// XenServer 6.5 SP1 (cream)
    V2_4,
    /// XenServer 7.0 (dundee)
    V2_5,
    /// XenServer 7.1 (ely)
    V2_6,
    /// XenServer 7.2 (falcon)
    V2_7,
    /// XenServer 7.3 (inverness)
    V2_8,
    /// XenServer 7.4 (jura)
    V2_9,
    /// XenServer 7.5 (kolkata)
    V2_10,
    /// XenServer 7.6 (lima)
    V2_11,
    /// Citrix Hypervisor 8.0 (naples)
    V2_12,
    V2_13,
    /// Citrix Hypervisor 8.1 (quebec)
    V2_14,
    /// Citrix Hypervisor 8.2 (stockholm)
    V2_15,
    /// XenServer 8 Preview (nile-preview)
    V2_20,
    /// XenServer 8 (nile)
    V2_21,
    /// Newer than any version this SDK knows by number.
    Latest,
    /// Not yet detected, or not a known version.
    #[default]
    Unknown,
}

/// (major, minor, version) for every numbered release.
const NUMBERED: &[(i64, i64, ApiVersion)] = &[
    (1, 1, ApiVersion::V1_1),
    (1, 2, ApiVersion::V1_2),
    (1, 3, ApiVersion::V1_3),
    (1, 4, ApiVersion::V1_4),
    (1, 5, ApiVersion::V1_5),
    (1, 6, ApiVersion::V1_6),
    (1, 7, ApiVersion::V1_7),
    (1, 8, ApiVersion::V1_8),
    (1, 9, ApiVersion::V1_9),
    (1, 10, ApiVersion::V1_10),
    (2, 0, ApiVersion::V2_0),
    (2, 1, ApiVersion::V2_1),
    (2, 2, ApiVersion::V2_2),
    (2, 3, ApiVersion::V2_3),
    (2, 4, ApiVersion::V2_4),
    (2, 5, ApiVersion::V2_5),
    (2, 6, ApiVersion::V2_6),
    (2, 7, ApiVersion::V2_7),
    (2, 8, ApiVersion::V2_8),
    (2, 9, ApiVersion::V2_9),
    (2, 10, ApiVersion::V2_10),
    (2, 11, ApiVersion::V2_11),
    (2, 12, ApiVersion::V2_12),
    (2, 13, ApiVersion::V2_13),
    (2, 14, ApiVersion::V2_14),
    (2, 15, ApiVersion::V2_15),
    (2, 20, ApiVersion::V2_20),
    (2, 21, ApiVersion::V2_21),
];

impl ApiVersion {
    /// Map the host's `API_version_major`/`API_version_minor` to a version.
    ///
    /// Unlisted pairs map to [`ApiVersion::Unknown`].
    pub fn from_major_minor(major: i64, minor: i64) -> Self {
        NUMBERED
            .iter()
            .find(|(ma, mi, _)| *ma == major && *mi == minor)
            .map(|(_, _, v)| *v)
            .unwrap_or(ApiVersion::Unknown)
    }

    /// `(major, minor)` for numbered versions.
    pub fn major_minor(&self) -> Option<(i64, i64)> {
        NUMBERED
            .iter()
            .find(|(_, _, v)| v == self)
            .map(|(ma, mi, _)| (*ma, *mi))
    }

    pub fn is_known(&self) -> bool {
        *self != ApiVersion::Unknown
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.major_minor()) {
            (_, Some((major, minor))) => write!(f, "{}.{}", major, minor),
            (ApiVersion::Latest, None) => f.write_str("Latest"),
            _ => f.write_str("Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_minor() {
        assert_eq!(ApiVersion::from_major_minor(2, 21), ApiVersion::V2_21);
        assert_eq!(ApiVersion::from_major_minor(1, 10), ApiVersion::V1_10);
        assert_eq!(ApiVersion::from_major_minor(2, 16), ApiVersion::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiVersion::V2_0.to_string(), "2.0");
        assert_eq!(ApiVersion::V1_10.to_string(), "1.10");
        assert_eq!(ApiVersion::Latest.to_string(), "Latest");
        assert_eq!(ApiVersion::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_ordering_follows_releases() {
        assert!(ApiVersion::V1_10 < ApiVersion::V2_0);
        assert!(ApiVersion::V2_21 < ApiVersion::Latest);
    }
}
