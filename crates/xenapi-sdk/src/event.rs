// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Event batches and snapshot decoding.
//!
//! `event.from` answers with an [`EventBatch`]. Each [`EventRecord`] carries
//! the changed object's record as an opaque wire value, because its type
//! depends on the event's `class`. Decode it with
//! [`EventRecord::snapshot_as`] when the class is known statically, or with
//! [`EventRecord::snapshot`] to dispatch on the class at runtime.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use xenapi_protocol::WireValue;

use crate::codec::{CodecError, FromWire, Path};
use crate::enums::EventOperation;
use crate::records::*;
use crate::refs::*;

wire_record! {
    /// One change notification.
    pub struct EventRecord as "EventRecord" {
        id: i64 = "id",
        timestamp: DateTime<Utc> = "timestamp",
        class: String = "class",
        operation: EventOperation = "operation",
        r#ref: String = "ref",
        obj_uuid: String = "obj_uuid",
        snapshot: WireValue = "snapshot",
    }
}

wire_record! {
    /// A batch of events returned by `event.from`.
    pub struct EventBatch as "EventBatch" {
        token: String = "token",
        valid_ref_counts: HashMap<String, i64> = "valid_ref_counts",
        events: Vec<EventRecord> = "events",
    }
}

impl EventRecord {
    /// Decode the snapshot as a record chosen by the caller.
    pub fn snapshot_as<R: FromWire>(&self) -> Result<R, CodecError> {
        R::from_wire(&Path::root("snapshot"), &self.snapshot)
    }

    /// Decode the snapshot by looking up this event's class.
    ///
    /// `None` when the event carries no snapshot, as for most deletions.
    pub fn snapshot(&self) -> Result<Option<Snapshot>, CodecError> {
        if self.snapshot.is_null() {
            return Ok(None);
        }
        Snapshot::decode(&self.class, &self.snapshot).map(Some)
    }
}

type SnapshotDecoder = fn(&Path<'_>, &WireValue) -> Result<Snapshot, CodecError>;

trait IntoSnapshot: FromWire {
    fn into_snapshot(self) -> Snapshot;
}

fn decode_snapshot<R: IntoSnapshot>(
    path: &Path<'_>,
    value: &WireValue,
) -> Result<Snapshot, CodecError> {
    R::from_wire(path, value).map(R::into_snapshot)
}

macro_rules! snapshots {
    ($($variant:ident($record:ident) for $handle:ident),* $(,)?) => {
        /// A decoded event snapshot, one variant per class.
        #[allow(clippy::large_enum_variant)]
        #[derive(Debug, Clone, PartialEq)]
        pub enum Snapshot {
            $($variant($record),)*
            /// A class this SDK has no record for.
            Unrecognised { class: String, value: WireValue },
        }

        $(
            impl IntoSnapshot for $record {
                fn into_snapshot(self) -> Snapshot {
                    Snapshot::$variant(self)
                }
            }
        )*

        /// Decoders keyed by lower-cased class name.
        static DECODERS: Lazy<HashMap<String, SnapshotDecoder>> = Lazy::new(|| {
            let mut table: HashMap<String, SnapshotDecoder> = HashMap::new();
            $(
                table.insert(
                    <$handle>::CLASS.to_lowercase(),
                    decode_snapshot::<$record> as SnapshotDecoder,
                );
            )*
            table
        });
    };
}

snapshots! {
    Blob(BlobRecord) for BlobRef,
    Bond(BondRecord) for BondRef,
    Certificate(CertificateRecord) for CertificateRef,
    ClusterHost(ClusterHostRecord) for ClusterHostRef,
    Cluster(ClusterRecord) for ClusterRef,
    Console(ConsoleRecord) for ConsoleRef,
    Crashdump(CrashdumpRecord) for CrashdumpRef,
    DrTask(DrTaskRecord) for DrTaskRef,
    Feature(FeatureRecord) for FeatureRef,
    GpuGroup(GpuGroupRecord) for GpuGroupRef,
    HostCpu(HostCpuRecord) for HostCpuRef,
    HostCrashdump(HostCrashdumpRecord) for HostCrashdumpRef,
    HostMetrics(HostMetricsRecord) for HostMetricsRef,
    HostPatch(HostPatchRecord) for HostPatchRef,
    Host(HostRecord) for HostRef,
    Lvhd(LvhdRecord) for LvhdRef,
    Message(MessageRecord) for MessageRef,
    Network(NetworkRecord) for NetworkRef,
    NetworkSriov(NetworkSriovRecord) for NetworkSriovRef,
    Observer(ObserverRecord) for ObserverRef,
    Pbd(PbdRecord) for PbdRef,
    Pci(PciRecord) for PciRef,
    Pgpu(PgpuRecord) for PgpuRef,
    PifMetrics(PifMetricsRecord) for PifMetricsRef,
    Pif(PifRecord) for PifRef,
    PoolPatch(PoolPatchRecord) for PoolPatchRef,
    Pool(PoolRecord) for PoolRef,
    PoolUpdate(PoolUpdateRecord) for PoolUpdateRef,
    Pusb(PusbRecord) for PusbRef,
    PvsCacheStorage(PvsCacheStorageRecord) for PvsCacheStorageRef,
    PvsProxy(PvsProxyRecord) for PvsProxyRef,
    PvsServer(PvsServerRecord) for PvsServerRef,
    PvsSite(PvsSiteRecord) for PvsSiteRef,
    Repository(RepositoryRecord) for RepositoryRef,
    Role(RoleRecord) for RoleRef,
    SdnController(SdnControllerRecord) for SdnControllerRef,
    Secret(SecretRecord) for SecretRef,
    Session(SessionRecord) for SessionRef,
    Sm(SmRecord) for SmRef,
    Sr(SrRecord) for SrRef,
    Subject(SubjectRecord) for SubjectRef,
    Task(TaskRecord) for TaskRef,
    Tunnel(TunnelRecord) for TunnelRef,
    UsbGroup(UsbGroupRecord) for UsbGroupRef,
    User(UserRecord) for UserRef,
    VbdMetrics(VbdMetricsRecord) for VbdMetricsRef,
    Vbd(VbdRecord) for VbdRef,
    Vdi(VdiRecord) for VdiRef,
    Vgpu(VgpuRecord) for VgpuRef,
    VgpuType(VgpuTypeRecord) for VgpuTypeRef,
    VifMetrics(VifMetricsRecord) for VifMetricsRef,
    Vif(VifRecord) for VifRef,
    Vlan(VlanRecord) for VlanRef,
    VmAppliance(VmApplianceRecord) for VmApplianceRef,
    VmGuestMetrics(VmGuestMetricsRecord) for VmGuestMetricsRef,
    VmMetrics(VmMetricsRecord) for VmMetricsRef,
    Vm(VmRecord) for VmRef,
    Vmpp(VmppRecord) for VmppRef,
    Vmss(VmssRecord) for VmssRef,
    Vtpm(VtpmRecord) for VtpmRef,
    Vusb(VusbRecord) for VusbRef,
}

impl Snapshot {
    /// Decode `value` with the record codec registered for `class`.
    ///
    /// Class names compare case-insensitively. An unknown class is not an
    /// error: the value comes back untouched as [`Snapshot::Unrecognised`].
    pub fn decode(class: &str, value: &WireValue) -> Result<Snapshot, CodecError> {
        match DECODERS.get(&class.to_lowercase()) {
            Some(decode) => decode(&Path::root("snapshot"), value),
            None => Ok(Snapshot::Unrecognised {
                class: class.to_string(),
                value: value.clone(),
            }),
        }
    }

    /// True if `class` has a registered record codec.
    pub fn is_registered(class: &str) -> bool {
        DECODERS.contains_key(&class.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_record_class_is_registered() {
        for class in ["VM", "vm", "host", "SR", "task", "pool", "Observer", "VIF"] {
            assert!(Snapshot::is_registered(class), "{} not registered", class);
        }
        assert!(!Snapshot::is_registered("nonexistent"));
    }

    #[test]
    fn test_null_snapshot_is_none() {
        let event = EventRecord {
            class: "vm".to_string(),
            operation: EventOperation::Del,
            ..Default::default()
        };
        assert_eq!(event.snapshot(), Ok(None));
    }
}
