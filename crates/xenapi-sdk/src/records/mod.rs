// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Records: the field sets returned by `<class>.get_record` and friends.
//!
//! Fields use snake_case names; the wire name each maps to is given in the
//! declaration and exposed through `FIELDS`.

mod access;
mod device;
mod guest;
mod host;
mod network;
mod storage;

pub use access::*;
pub use device::*;
pub use guest::*;
pub use host::*;
pub use network::*;
pub use storage::*;

#[cfg(test)]
mod tests {
    use std::fmt::Debug;

    use xenapi_protocol::WireValue;

    use super::*;
    use crate::codec::sample::Sample;
    use crate::codec::{FromWire, ToWire, decode, encode};
    use crate::event::{EventBatch, EventRecord};

    /// Round trip, extra-key tolerance and per-field absence defaulting.
    fn check_record<R>(name: &str, fields: &[&str])
    where
        R: ToWire + FromWire + Sample + Default + PartialEq + Debug,
    {
        let sample = R::sample();
        if !fields.is_empty() {
            assert_ne!(sample, R::default(), "{}: sample equals the zero value", name);
        }

        let wire = encode(&sample).unwrap();
        let keys = wire.as_map().unwrap();
        assert_eq!(keys.len(), fields.len(), "{}: encoded key count", name);
        assert_eq!(decode::<R>(&wire).unwrap(), sample, "{}: round trip", name);

        let mut extra = keys.clone();
        extra.insert("x_added_later".to_string(), WireValue::Int(7));
        extra.insert("x_nested".to_string(), WireValue::Seq(vec![WireValue::Null]));
        assert_eq!(
            decode::<R>(&WireValue::Map(extra)).unwrap(),
            sample,
            "{}: extra keys",
            name
        );

        let zero = encode(&R::default()).unwrap();
        for field in fields {
            let mut without = keys.clone();
            assert!(without.remove(*field).is_some(), "{}.{} not encoded", name, field);
            let decoded = encode(&decode::<R>(&WireValue::Map(without)).unwrap()).unwrap();
            for (key, value) in decoded.as_map().unwrap() {
                let expected = if key == field { zero.get(key) } else { keys.get(key) };
                assert_eq!(Some(value), expected, "{}: {} after removing {}", name, key, field);
            }
        }
    }

    macro_rules! check_records {
        ($($record:ident),* $(,)?) => {
            $(check_record::<$record>(<$record>::NAME, <$record>::FIELDS);)*
        };
    }

    #[test]
    fn test_every_record_obeys_codec_laws() {
        check_records!(
            BlobRecord,
            BondRecord,
            CertificateRecord,
            ClusterHostRecord,
            ClusterRecord,
            ConsoleRecord,
            CrashdumpRecord,
            DataSourceRecord,
            DrTaskRecord,
            FeatureRecord,
            GpuGroupRecord,
            HostCpuRecord,
            HostCrashdumpRecord,
            HostMetricsRecord,
            HostPatchRecord,
            HostRecord,
            LvhdRecord,
            MessageRecord,
            NetworkRecord,
            NetworkSriovRecord,
            ObserverRecord,
            PbdRecord,
            PciRecord,
            PgpuRecord,
            PifMetricsRecord,
            PifRecord,
            PoolPatchRecord,
            PoolRecord,
            PoolUpdateRecord,
            ProbeResultRecord,
            PusbRecord,
            PvsCacheStorageRecord,
            PvsProxyRecord,
            PvsServerRecord,
            PvsSiteRecord,
            RepositoryRecord,
            RoleRecord,
            SdnControllerRecord,
            SecretRecord,
            SessionRecord,
            SmRecord,
            SrRecord,
            SrStatRecord,
            SubjectRecord,
            TaskRecord,
            TunnelRecord,
            UsbGroupRecord,
            UserRecord,
            VbdMetricsRecord,
            VbdRecord,
            VdiNbdServerInfoRecord,
            VdiRecord,
            VgpuRecord,
            VgpuTypeRecord,
            VifMetricsRecord,
            VifRecord,
            VlanRecord,
            VmApplianceRecord,
            VmGuestMetricsRecord,
            VmMetricsRecord,
            VmRecord,
            VmppRecord,
            VmssRecord,
            VtpmRecord,
            VusbRecord,
            EventRecord,
            EventBatch,
        );
    }
}
