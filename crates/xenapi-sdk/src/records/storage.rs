// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Storage repositories, disks, and the plumbing between them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::enums::*;
use crate::refs::*;

wire_record! {
    /// A storage repository.
    pub struct SrRecord as "SRRecord" for SrRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        allowed_operations: Vec<StorageOperations> = "allowed_operations",
        current_operations: HashMap<String, StorageOperations> = "current_operations",
        vdis: Vec<VdiRef> = "VDIs",
        pbds: Vec<PbdRef> = "PBDs",
        virtual_allocation: i64 = "virtual_allocation",
        physical_utilisation: i64 = "physical_utilisation",
        physical_size: i64 = "physical_size",
        r#type: String = "type",
        content_type: String = "content_type",
        shared: bool = "shared",
        other_config: HashMap<String, String> = "other_config",
        tags: Vec<String> = "tags",
        sm_config: HashMap<String, String> = "sm_config",
        blobs: HashMap<String, BlobRef> = "blobs",
        local_cache_enabled: bool = "local_cache_enabled",
        introduced_by: DrTaskRef = "introduced_by",
        clustered: bool = "clustered",
        is_tools_sr: bool = "is_tools_sr",
    }
}

wire_record! {
    /// A virtual disk image.
    pub struct VdiRecord as "VDIRecord" for VdiRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        allowed_operations: Vec<VdiOperations> = "allowed_operations",
        current_operations: HashMap<String, VdiOperations> = "current_operations",
        sr: SrRef = "SR",
        vbds: Vec<VbdRef> = "VBDs",
        crash_dumps: Vec<CrashdumpRef> = "crash_dumps",
        virtual_size: i64 = "virtual_size",
        physical_utilisation: i64 = "physical_utilisation",
        r#type: VdiType = "type",
        sharable: bool = "sharable",
        read_only: bool = "read_only",
        other_config: HashMap<String, String> = "other_config",
        storage_lock: bool = "storage_lock",
        location: String = "location",
        managed: bool = "managed",
        missing: bool = "missing",
        parent: VdiRef = "parent",
        xenstore_data: HashMap<String, String> = "xenstore_data",
        sm_config: HashMap<String, String> = "sm_config",
        is_a_snapshot: bool = "is_a_snapshot",
        snapshot_of: VdiRef = "snapshot_of",
        snapshots: Vec<VdiRef> = "snapshots",
        snapshot_time: DateTime<Utc> = "snapshot_time",
        tags: Vec<String> = "tags",
        allow_caching: bool = "allow_caching",
        on_boot: OnBoot = "on_boot",
        metadata_of_pool: PoolRef = "metadata_of_pool",
        metadata_latest: bool = "metadata_latest",
        is_tools_iso: bool = "is_tools_iso",
        cbt_enabled: bool = "cbt_enabled",
    }
}

wire_record! {
    /// A virtual block device.
    pub struct VbdRecord as "VBDRecord" for VbdRef {
        uuid: String = "uuid",
        allowed_operations: Vec<VbdOperations> = "allowed_operations",
        current_operations: HashMap<String, VbdOperations> = "current_operations",
        vm: VmRef = "VM",
        vdi: VdiRef = "VDI",
        device: String = "device",
        userdevice: String = "userdevice",
        bootable: bool = "bootable",
        mode: VbdMode = "mode",
        r#type: VbdType = "type",
        unpluggable: bool = "unpluggable",
        storage_lock: bool = "storage_lock",
        empty: bool = "empty",
        other_config: HashMap<String, String> = "other_config",
        currently_attached: bool = "currently_attached",
        status_code: i64 = "status_code",
        status_detail: String = "status_detail",
        runtime_properties: HashMap<String, String> = "runtime_properties",
        qos_algorithm_type: String = "qos_algorithm_type",
        qos_algorithm_params: HashMap<String, String> = "qos_algorithm_params",
        qos_supported_algorithms: Vec<String> = "qos_supported_algorithms",
        metrics: VbdMetricsRef = "metrics",
    }
}

wire_record! {
    /// The metrics associated with a virtual block device.
    pub struct VbdMetricsRecord as "VBDMetricsRecord" for VbdMetricsRef {
        uuid: String = "uuid",
        io_read_kbs: f64 = "io_read_kbs",
        io_write_kbs: f64 = "io_write_kbs",
        last_updated: DateTime<Utc> = "last_updated",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// The physical block devices through which hosts access SRs.
    pub struct PbdRecord as "PBDRecord" for PbdRef {
        uuid: String = "uuid",
        host: HostRef = "host",
        sr: SrRef = "SR",
        device_config: HashMap<String, String> = "device_config",
        currently_attached: bool = "currently_attached",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// A storage manager plugin.
    pub struct SmRecord as "SMRecord" for SmRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        r#type: String = "type",
        vendor: String = "vendor",
        copyright: String = "copyright",
        version: String = "version",
        required_api_version: String = "required_api_version",
        configuration: HashMap<String, String> = "configuration",
        capabilities: Vec<String> = "capabilities",
        features: HashMap<String, i64> = "features",
        other_config: HashMap<String, String> = "other_config",
        driver_filename: String = "driver_filename",
        required_cluster_stack: Vec<String> = "required_cluster_stack",
    }
}

wire_record! {
    /// LVHD SR specific operations.
    pub struct LvhdRecord as "LVHDRecord" for LvhdRef {
        uuid: String = "uuid",
    }
}

wire_record! {
    /// DR task.
    pub struct DrTaskRecord as "DRTaskRecord" for DrTaskRef {
        uuid: String = "uuid",
        introduced_srs: Vec<SrRef> = "introduced_SRs",
    }
}

wire_record! {
    /// A set of high-level properties associated with an SR.
    pub struct SrStatRecord as "SrStatRecord" {
        uuid: Option<String> = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        free_space: i64 = "free_space",
        total_space: i64 = "total_space",
        clustered: bool = "clustered",
        health: SrHealth = "health",
    }
}

wire_record! {
    /// A set of properties that describe one result element of SR.probe. Result elements and properties can change dynamically based on changes to the the SR.probe input-parameters or the target.
    pub struct ProbeResultRecord as "ProbeResultRecord" {
        configuration: HashMap<String, String> = "configuration",
        complete: bool = "complete",
        sr: Option<SrStatRecord> = "sr",
        extra_info: HashMap<String, String> = "extra_info",
    }
}

wire_record! {
    /// Details for connecting to a VDI using the Network Block Device protocol.
    pub struct VdiNbdServerInfoRecord as "VdiNbdServerInfoRecord" {
        exportname: String = "exportname",
        address: String = "address",
        port: i64 = "port",
        cert: String = "cert",
        subject: String = "subject",
    }
}

wire_record! {
    /// machines serving blocks of data for provisioning VMs.
    pub struct PvsSiteRecord as "PVSSiteRecord" for PvsSiteRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        pvs_uuid: String = "PVS_uuid",
        cache_storage: Vec<PvsCacheStorageRef> = "cache_storage",
        servers: Vec<PvsServerRef> = "servers",
        proxies: Vec<PvsProxyRef> = "proxies",
    }
}

wire_record! {
    /// individual machine serving provisioning (block) data.
    pub struct PvsServerRecord as "PVSServerRecord" for PvsServerRef {
        uuid: String = "uuid",
        addresses: Vec<String> = "addresses",
        first_port: i64 = "first_port",
        last_port: i64 = "last_port",
        site: PvsSiteRef = "site",
    }
}

wire_record! {
    /// a proxy connects a VM/VIF with a PVS site.
    pub struct PvsProxyRecord as "PVSProxyRecord" for PvsProxyRef {
        uuid: String = "uuid",
        site: PvsSiteRef = "site",
        vif: VifRef = "VIF",
        currently_attached: bool = "currently_attached",
        status: PvsProxyStatus = "status",
    }
}

wire_record! {
    /// Describes the storage that is available to a PVS site for caching purposes.
    pub struct PvsCacheStorageRecord as "PVSCacheStorageRecord" for PvsCacheStorageRef {
        uuid: String = "uuid",
        host: HostRef = "host",
        sr: SrRef = "SR",
        site: PvsSiteRef = "site",
        size: i64 = "size",
        vdi: VdiRef = "VDI",
    }
}
