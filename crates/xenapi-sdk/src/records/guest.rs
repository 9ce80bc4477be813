// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Virtual machines and the objects that hang directly off them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::enums::*;
use crate::refs::*;

wire_record! {
    /// A virtual machine (or 'guest').
    pub struct VmRecord as "VMRecord" for VmRef {
        uuid: String = "uuid",
        allowed_operations: Vec<VmOperations> = "allowed_operations",
        current_operations: HashMap<String, VmOperations> = "current_operations",
        name_label: String = "name_label",
        name_description: String = "name_description",
        /// `Halted` when the server omits it.
        power_state: VmPowerState = "power_state",
        user_version: i64 = "user_version",
        is_a_template: bool = "is_a_template",
        is_default_template: bool = "is_default_template",
        suspend_vdi: VdiRef = "suspend_VDI",
        resident_on: HostRef = "resident_on",
        scheduled_to_be_resident_on: HostRef = "scheduled_to_be_resident_on",
        affinity: HostRef = "affinity",
        memory_overhead: i64 = "memory_overhead",
        memory_target: i64 = "memory_target",
        memory_static_max: i64 = "memory_static_max",
        memory_dynamic_max: i64 = "memory_dynamic_max",
        memory_dynamic_min: i64 = "memory_dynamic_min",
        memory_static_min: i64 = "memory_static_min",
        vcpus_params: HashMap<String, String> = "VCPUs_params",
        vcpus_max: i64 = "VCPUs_max",
        vcpus_at_startup: i64 = "VCPUs_at_startup",
        actions_after_softreboot: OnSoftrebootBehavior = "actions_after_softreboot",
        actions_after_shutdown: OnNormalExit = "actions_after_shutdown",
        actions_after_reboot: OnNormalExit = "actions_after_reboot",
        actions_after_crash: OnCrashBehaviour = "actions_after_crash",
        consoles: Vec<ConsoleRef> = "consoles",
        vifs: Vec<VifRef> = "VIFs",
        vbds: Vec<VbdRef> = "VBDs",
        vusbs: Vec<VusbRef> = "VUSBs",
        crash_dumps: Vec<CrashdumpRef> = "crash_dumps",
        vtpms: Vec<VtpmRef> = "VTPMs",
        pv_bootloader: String = "PV_bootloader",
        pv_kernel: String = "PV_kernel",
        pv_ramdisk: String = "PV_ramdisk",
        pv_args: String = "PV_args",
        pv_bootloader_args: String = "PV_bootloader_args",
        pv_legacy_args: String = "PV_legacy_args",
        hvm_boot_policy: String = "HVM_boot_policy",
        hvm_boot_params: HashMap<String, String> = "HVM_boot_params",
        hvm_shadow_multiplier: f64 = "HVM_shadow_multiplier",
        platform: HashMap<String, String> = "platform",
        pci_bus: String = "PCI_bus",
        other_config: HashMap<String, String> = "other_config",
        domid: i64 = "domid",
        domarch: String = "domarch",
        last_boot_cpu_flags: HashMap<String, String> = "last_boot_CPU_flags",
        is_control_domain: bool = "is_control_domain",
        metrics: VmMetricsRef = "metrics",
        guest_metrics: VmGuestMetricsRef = "guest_metrics",
        last_booted_record: String = "last_booted_record",
        recommendations: String = "recommendations",
        xenstore_data: HashMap<String, String> = "xenstore_data",
        ha_always_run: bool = "ha_always_run",
        ha_restart_priority: String = "ha_restart_priority",
        is_a_snapshot: bool = "is_a_snapshot",
        snapshot_of: VmRef = "snapshot_of",
        snapshots: Vec<VmRef> = "snapshots",
        snapshot_time: DateTime<Utc> = "snapshot_time",
        transportable_snapshot_id: String = "transportable_snapshot_id",
        blobs: HashMap<String, BlobRef> = "blobs",
        tags: Vec<String> = "tags",
        blocked_operations: HashMap<VmOperations, String> = "blocked_operations",
        snapshot_info: HashMap<String, String> = "snapshot_info",
        snapshot_metadata: String = "snapshot_metadata",
        parent: VmRef = "parent",
        children: Vec<VmRef> = "children",
        bios_strings: HashMap<String, String> = "bios_strings",
        protection_policy: VmppRef = "protection_policy",
        is_snapshot_from_vmpp: bool = "is_snapshot_from_vmpp",
        snapshot_schedule: VmssRef = "snapshot_schedule",
        is_vmss_snapshot: bool = "is_vmss_snapshot",
        appliance: VmApplianceRef = "appliance",
        start_delay: i64 = "start_delay",
        shutdown_delay: i64 = "shutdown_delay",
        order: i64 = "order",
        vgpus: Vec<VgpuRef> = "VGPUs",
        attached_pcis: Vec<PciRef> = "attached_PCIs",
        suspend_sr: SrRef = "suspend_SR",
        version: i64 = "version",
        generation_id: String = "generation_id",
        hardware_platform_version: i64 = "hardware_platform_version",
        has_vendor_device: bool = "has_vendor_device",
        requires_reboot: bool = "requires_reboot",
        reference_label: String = "reference_label",
        domain_type: DomainType = "domain_type",
        nvram: HashMap<String, String> = "NVRAM",
        pending_guidances: Vec<UpdateGuidances> = "pending_guidances",
        pending_guidances_recommended: Vec<UpdateGuidances> = "pending_guidances_recommended",
        pending_guidances_full: Vec<UpdateGuidances> = "pending_guidances_full",
    }
}

wire_record! {
    /// The metrics associated with a VM.
    pub struct VmMetricsRecord as "VMMetricsRecord" for VmMetricsRef {
        uuid: String = "uuid",
        memory_actual: i64 = "memory_actual",
        vcpus_number: i64 = "VCPUs_number",
        vcpus_utilisation: HashMap<i64, f64> = "VCPUs_utilisation",
        vcpus_cpu: HashMap<i64, i64> = "VCPUs_CPU",
        vcpus_params: HashMap<String, String> = "VCPUs_params",
        vcpus_flags: HashMap<i64, Vec<String>> = "VCPUs_flags",
        state: Vec<String> = "state",
        start_time: DateTime<Utc> = "start_time",
        install_time: DateTime<Utc> = "install_time",
        last_updated: DateTime<Utc> = "last_updated",
        other_config: HashMap<String, String> = "other_config",
        hvm: bool = "hvm",
        nested_virt: bool = "nested_virt",
        nomigrate: bool = "nomigrate",
        current_domain_type: DomainType = "current_domain_type",
    }
}

wire_record! {
    /// The metrics reported by the guest (as opposed to inferred from outside).
    pub struct VmGuestMetricsRecord as "VMGuestMetricsRecord" for VmGuestMetricsRef {
        uuid: String = "uuid",
        os_version: HashMap<String, String> = "os_version",
        pv_drivers_version: HashMap<String, String> = "PV_drivers_version",
        pv_drivers_up_to_date: bool = "PV_drivers_up_to_date",
        memory: HashMap<String, String> = "memory",
        disks: HashMap<String, String> = "disks",
        networks: HashMap<String, String> = "networks",
        other: HashMap<String, String> = "other",
        last_updated: DateTime<Utc> = "last_updated",
        other_config: HashMap<String, String> = "other_config",
        live: bool = "live",
        can_use_hotplug_vbd: TristateType = "can_use_hotplug_vbd",
        can_use_hotplug_vif: TristateType = "can_use_hotplug_vif",
        pv_drivers_detected: bool = "PV_drivers_detected",
    }
}

wire_record! {
    /// VM appliance.
    pub struct VmApplianceRecord as "VMApplianceRecord" for VmApplianceRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        allowed_operations: Vec<VmApplianceOperation> = "allowed_operations",
        current_operations: HashMap<String, VmApplianceOperation> = "current_operations",
        vms: Vec<VmRef> = "VMs",
    }
}

wire_record! {
    /// VM Protection Policy.
    pub struct VmppRecord as "VMPPRecord" for VmppRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        is_policy_enabled: bool = "is_policy_enabled",
        backup_type: VmppBackupType = "backup_type",
        backup_retention_value: i64 = "backup_retention_value",
        backup_frequency: VmppBackupFrequency = "backup_frequency",
        backup_schedule: HashMap<String, String> = "backup_schedule",
        is_backup_running: bool = "is_backup_running",
        backup_last_run_time: DateTime<Utc> = "backup_last_run_time",
        archive_target_type: VmppArchiveTargetType = "archive_target_type",
        archive_target_config: HashMap<String, String> = "archive_target_config",
        archive_frequency: VmppArchiveFrequency = "archive_frequency",
        archive_schedule: HashMap<String, String> = "archive_schedule",
        is_archive_running: bool = "is_archive_running",
        archive_last_run_time: DateTime<Utc> = "archive_last_run_time",
        vms: Vec<VmRef> = "VMs",
        is_alarm_enabled: bool = "is_alarm_enabled",
        alarm_config: HashMap<String, String> = "alarm_config",
        recent_alerts: Vec<String> = "recent_alerts",
    }
}

wire_record! {
    /// VM Snapshot Schedule.
    pub struct VmssRecord as "VMSSRecord" for VmssRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        enabled: bool = "enabled",
        r#type: VmssType = "type",
        retained_snapshots: i64 = "retained_snapshots",
        frequency: VmssFrequency = "frequency",
        schedule: HashMap<String, String> = "schedule",
        last_run_time: DateTime<Utc> = "last_run_time",
        vms: Vec<VmRef> = "VMs",
    }
}

wire_record! {
    /// A virtual TPM device.
    pub struct VtpmRecord as "VTPMRecord" for VtpmRef {
        uuid: String = "uuid",
        allowed_operations: Vec<VtpmOperations> = "allowed_operations",
        current_operations: HashMap<String, VtpmOperations> = "current_operations",
        vm: VmRef = "VM",
        backend: VmRef = "backend",
        persistence_backend: PersistenceBackend = "persistence_backend",
        is_unique: bool = "is_unique",
        is_protected: bool = "is_protected",
    }
}

wire_record! {
    /// A console.
    pub struct ConsoleRecord as "ConsoleRecord" for ConsoleRef {
        uuid: String = "uuid",
        protocol: ConsoleProtocol = "protocol",
        location: String = "location",
        vm: VmRef = "VM",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// A VM crashdump.
    pub struct CrashdumpRecord as "CrashdumpRecord" for CrashdumpRef {
        uuid: String = "uuid",
        vm: VmRef = "VM",
        vdi: VdiRef = "VDI",
        other_config: HashMap<String, String> = "other_config",
    }
}
