// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Hosts, pools, and pool-wide software and cluster state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::enums::*;
use crate::refs::*;

wire_record! {
    /// A physical host.
    pub struct HostRecord as "HostRecord" for HostRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        memory_overhead: i64 = "memory_overhead",
        allowed_operations: Vec<HostAllowedOperations> = "allowed_operations",
        current_operations: HashMap<String, HostAllowedOperations> = "current_operations",
        api_version_major: i64 = "API_version_major",
        api_version_minor: i64 = "API_version_minor",
        api_version_vendor: String = "API_version_vendor",
        api_version_vendor_implementation: HashMap<String, String> = "API_version_vendor_implementation",
        enabled: bool = "enabled",
        software_version: HashMap<String, String> = "software_version",
        other_config: HashMap<String, String> = "other_config",
        capabilities: Vec<String> = "capabilities",
        cpu_configuration: HashMap<String, String> = "cpu_configuration",
        sched_policy: String = "sched_policy",
        supported_bootloaders: Vec<String> = "supported_bootloaders",
        resident_vms: Vec<VmRef> = "resident_VMs",
        logging: HashMap<String, String> = "logging",
        pifs: Vec<PifRef> = "PIFs",
        suspend_image_sr: SrRef = "suspend_image_sr",
        crash_dump_sr: SrRef = "crash_dump_sr",
        crashdumps: Vec<HostCrashdumpRef> = "crashdumps",
        patches: Vec<HostPatchRef> = "patches",
        updates: Vec<PoolUpdateRef> = "updates",
        pbds: Vec<PbdRef> = "PBDs",
        host_cpus: Vec<HostCpuRef> = "host_CPUs",
        cpu_info: HashMap<String, String> = "cpu_info",
        hostname: String = "hostname",
        address: String = "address",
        metrics: HostMetricsRef = "metrics",
        license_params: HashMap<String, String> = "license_params",
        ha_statefiles: Vec<String> = "ha_statefiles",
        ha_network_peers: Vec<String> = "ha_network_peers",
        blobs: HashMap<String, BlobRef> = "blobs",
        tags: Vec<String> = "tags",
        external_auth_type: String = "external_auth_type",
        external_auth_service_name: String = "external_auth_service_name",
        external_auth_configuration: HashMap<String, String> = "external_auth_configuration",
        edition: String = "edition",
        license_server: HashMap<String, String> = "license_server",
        bios_strings: HashMap<String, String> = "bios_strings",
        power_on_mode: String = "power_on_mode",
        power_on_config: HashMap<String, String> = "power_on_config",
        local_cache_sr: SrRef = "local_cache_sr",
        chipset_info: HashMap<String, String> = "chipset_info",
        pcis: Vec<PciRef> = "PCIs",
        pgpus: Vec<PgpuRef> = "PGPUs",
        pusbs: Vec<PusbRef> = "PUSBs",
        ssl_legacy: bool = "ssl_legacy",
        guest_vcpus_params: HashMap<String, String> = "guest_VCPUs_params",
        display: HostDisplay = "display",
        virtual_hardware_platform_versions: Vec<i64> = "virtual_hardware_platform_versions",
        control_domain: VmRef = "control_domain",
        updates_requiring_reboot: Vec<PoolUpdateRef> = "updates_requiring_reboot",
        features: Vec<FeatureRef> = "features",
        iscsi_iqn: String = "iscsi_iqn",
        multipathing: bool = "multipathing",
        uefi_certificates: String = "uefi_certificates",
        certificates: Vec<CertificateRef> = "certificates",
        editions: Vec<String> = "editions",
        pending_guidances: Vec<UpdateGuidances> = "pending_guidances",
        tls_verification_enabled: bool = "tls_verification_enabled",
        last_software_update: DateTime<Utc> = "last_software_update",
        https_only: bool = "https_only",
        latest_synced_updates_applied: LatestSyncedUpdatesAppliedState = "latest_synced_updates_applied",
        numa_affinity_policy: HostNumaAffinityPolicy = "numa_affinity_policy",
        pending_guidances_recommended: Vec<UpdateGuidances> = "pending_guidances_recommended",
        pending_guidances_full: Vec<UpdateGuidances> = "pending_guidances_full",
        last_update_hash: String = "last_update_hash",
    }
}

wire_record! {
    /// A physical CPU.
    pub struct HostCpuRecord as "HostCPURecord" for HostCpuRef {
        uuid: String = "uuid",
        host: HostRef = "host",
        number: i64 = "number",
        vendor: String = "vendor",
        speed: i64 = "speed",
        modelname: String = "modelname",
        family: i64 = "family",
        model: i64 = "model",
        stepping: String = "stepping",
        flags: String = "flags",
        features: String = "features",
        utilisation: f64 = "utilisation",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// Represents a host crash dump.
    pub struct HostCrashdumpRecord as "HostCrashdumpRecord" for HostCrashdumpRef {
        uuid: String = "uuid",
        host: HostRef = "host",
        timestamp: DateTime<Utc> = "timestamp",
        size: i64 = "size",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// The metrics associated with a host.
    pub struct HostMetricsRecord as "HostMetricsRecord" for HostMetricsRef {
        uuid: String = "uuid",
        memory_total: i64 = "memory_total",
        memory_free: i64 = "memory_free",
        live: bool = "live",
        last_updated: DateTime<Utc> = "last_updated",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// Represents a patch stored on a server.
    pub struct HostPatchRecord as "HostPatchRecord" for HostPatchRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        version: String = "version",
        host: HostRef = "host",
        applied: bool = "applied",
        timestamp_applied: DateTime<Utc> = "timestamp_applied",
        size: i64 = "size",
        pool_patch: PoolPatchRef = "pool_patch",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// Pool-wide information.
    pub struct PoolRecord as "PoolRecord" for PoolRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        master: HostRef = "master",
        default_sr: SrRef = "default_SR",
        suspend_image_sr: SrRef = "suspend_image_SR",
        crash_dump_sr: SrRef = "crash_dump_SR",
        other_config: HashMap<String, String> = "other_config",
        ha_enabled: bool = "ha_enabled",
        ha_configuration: HashMap<String, String> = "ha_configuration",
        ha_statefiles: Vec<String> = "ha_statefiles",
        ha_host_failures_to_tolerate: i64 = "ha_host_failures_to_tolerate",
        ha_plan_exists_for: i64 = "ha_plan_exists_for",
        ha_allow_overcommit: bool = "ha_allow_overcommit",
        ha_overcommitted: bool = "ha_overcommitted",
        blobs: HashMap<String, BlobRef> = "blobs",
        tags: Vec<String> = "tags",
        gui_config: HashMap<String, String> = "gui_config",
        health_check_config: HashMap<String, String> = "health_check_config",
        wlb_url: String = "wlb_url",
        wlb_username: String = "wlb_username",
        wlb_enabled: bool = "wlb_enabled",
        wlb_verify_cert: bool = "wlb_verify_cert",
        redo_log_enabled: bool = "redo_log_enabled",
        redo_log_vdi: VdiRef = "redo_log_vdi",
        vswitch_controller: String = "vswitch_controller",
        restrictions: HashMap<String, String> = "restrictions",
        metadata_vdis: Vec<VdiRef> = "metadata_VDIs",
        ha_cluster_stack: String = "ha_cluster_stack",
        allowed_operations: Vec<PoolAllowedOperations> = "allowed_operations",
        current_operations: HashMap<String, PoolAllowedOperations> = "current_operations",
        guest_agent_config: HashMap<String, String> = "guest_agent_config",
        cpu_info: HashMap<String, String> = "cpu_info",
        policy_no_vendor_device: bool = "policy_no_vendor_device",
        live_patching_disabled: bool = "live_patching_disabled",
        igmp_snooping_enabled: bool = "igmp_snooping_enabled",
        uefi_certificates: String = "uefi_certificates",
        custom_uefi_certificates: String = "custom_uefi_certificates",
        is_psr_pending: bool = "is_psr_pending",
        tls_verification_enabled: bool = "tls_verification_enabled",
        repositories: Vec<RepositoryRef> = "repositories",
        client_certificate_auth_enabled: bool = "client_certificate_auth_enabled",
        client_certificate_auth_name: String = "client_certificate_auth_name",
        repository_proxy_url: String = "repository_proxy_url",
        repository_proxy_username: String = "repository_proxy_username",
        repository_proxy_password: SecretRef = "repository_proxy_password",
        migration_compression: bool = "migration_compression",
        coordinator_bias: bool = "coordinator_bias",
        local_auth_max_threads: i64 = "local_auth_max_threads",
        ext_auth_max_threads: i64 = "ext_auth_max_threads",
        telemetry_uuid: SecretRef = "telemetry_uuid",
        telemetry_frequency: TelemetryFrequency = "telemetry_frequency",
        telemetry_next_collection: DateTime<Utc> = "telemetry_next_collection",
        last_update_sync: DateTime<Utc> = "last_update_sync",
        update_sync_frequency: UpdateSyncFrequency = "update_sync_frequency",
        update_sync_day: i64 = "update_sync_day",
        update_sync_enabled: bool = "update_sync_enabled",
    }
}

wire_record! {
    /// Pool-wide patches.
    pub struct PoolPatchRecord as "PoolPatchRecord" for PoolPatchRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        version: String = "version",
        size: i64 = "size",
        pool_applied: bool = "pool_applied",
        host_patches: Vec<HostPatchRef> = "host_patches",
        after_apply_guidance: Vec<AfterApplyGuidance> = "after_apply_guidance",
        pool_update: PoolUpdateRef = "pool_update",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// Pool-wide updates to the host software.
    pub struct PoolUpdateRecord as "PoolUpdateRecord" for PoolUpdateRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        version: String = "version",
        installation_size: i64 = "installation_size",
        key: String = "key",
        after_apply_guidance: Vec<UpdateAfterApplyGuidance> = "after_apply_guidance",
        vdi: VdiRef = "vdi",
        hosts: Vec<HostRef> = "hosts",
        other_config: HashMap<String, String> = "other_config",
        enforce_homogeneity: bool = "enforce_homogeneity",
    }
}

wire_record! {
    /// Repository for updates.
    pub struct RepositoryRecord as "RepositoryRecord" for RepositoryRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        binary_url: String = "binary_url",
        source_url: String = "source_url",
        update: bool = "update",
        hash: String = "hash",
        up_to_date: bool = "up_to_date",
        gpgkey_path: String = "gpgkey_path",
    }
}

wire_record! {
    /// An X509 certificate used for TLS connections.
    pub struct CertificateRecord as "CertificateRecord" for CertificateRef {
        uuid: String = "uuid",
        name: String = "name",
        r#type: CertificateType = "type",
        host: HostRef = "host",
        not_before: DateTime<Utc> = "not_before",
        not_after: DateTime<Utc> = "not_after",
        fingerprint: String = "fingerprint",
    }
}

wire_record! {
    /// Cluster-wide Cluster metadata.
    pub struct ClusterRecord as "ClusterRecord" for ClusterRef {
        uuid: String = "uuid",
        cluster_hosts: Vec<ClusterHostRef> = "cluster_hosts",
        pending_forget: Vec<String> = "pending_forget",
        cluster_token: String = "cluster_token",
        cluster_stack: String = "cluster_stack",
        is_quorate: bool = "is_quorate",
        quorum: i64 = "quorum",
        live_hosts: i64 = "live_hosts",
        allowed_operations: Vec<ClusterOperation> = "allowed_operations",
        current_operations: HashMap<String, ClusterOperation> = "current_operations",
        pool_auto_join: bool = "pool_auto_join",
        token_timeout: f64 = "token_timeout",
        token_timeout_coefficient: f64 = "token_timeout_coefficient",
        cluster_config: HashMap<String, String> = "cluster_config",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// Cluster member metadata.
    pub struct ClusterHostRecord as "ClusterHostRecord" for ClusterHostRef {
        uuid: String = "uuid",
        cluster: ClusterRef = "cluster",
        host: HostRef = "host",
        enabled: bool = "enabled",
        pif: PifRef = "PIF",
        joined: bool = "joined",
        live: bool = "live",
        last_update_live: DateTime<Utc> = "last_update_live",
        allowed_operations: Vec<ClusterHostOperation> = "allowed_operations",
        current_operations: HashMap<String, ClusterHostOperation> = "current_operations",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// A new piece of functionality.
    pub struct FeatureRecord as "FeatureRecord" for FeatureRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        enabled: bool = "enabled",
        experimental: bool = "experimental",
        version: String = "version",
        host: HostRef = "host",
    }
}
