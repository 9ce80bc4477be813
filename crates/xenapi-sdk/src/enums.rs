// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Closed enumerations and their wire tags.
//!
//! The first variant listed for each enumeration is its zero value, used when a
//! record field is missing from the wire.

wire_enum! {
    pub enum AfterApplyGuidance as "AfterApplyGuidance" {
        RestartHvm = "restartHVM",
        RestartPv = "restartPV",
        RestartHost = "restartHost",
        RestartXapi = "restartXAPI",
    }
}

wire_enum! {
    pub enum AllocationAlgorithm as "AllocationAlgorithm" {
        BreadthFirst = "breadth_first",
        DepthFirst = "depth_first",
    }
}

wire_enum! {
    pub enum BondMode as "BondMode" {
        BalanceSlb = "balance-slb",
        ActiveBackup = "active-backup",
        Lacp = "lacp",
    }
}

wire_enum! {
    pub enum CertificateType as "CertificateType" {
        Ca = "ca",
        Host = "host",
        HostInternal = "host_internal",
    }
}

wire_enum! {
    pub enum Cls as "Cls" {
        Vm = "VM",
        Host = "Host",
        Sr = "SR",
        Pool = "Pool",
        Vmpp = "VMPP",
        Vmss = "VMSS",
        PvsProxy = "PVS_proxy",
        Vdi = "VDI",
        Certificate = "Certificate",
    }
}

wire_enum! {
    pub enum ClusterHostOperation as "ClusterHostOperation" {
        Enable = "enable",
        Disable = "disable",
        Destroy = "destroy",
    }
}

wire_enum! {
    pub enum ClusterOperation as "ClusterOperation" {
        Add = "add",
        Remove = "remove",
        Enable = "enable",
        Disable = "disable",
        Destroy = "destroy",
    }
}

wire_enum! {
    pub enum ConsoleProtocol as "ConsoleProtocol" {
        Vt100 = "vt100",
        Rfb = "rfb",
        Rdp = "rdp",
    }
}

wire_enum! {
    pub enum DomainType as "DomainType" {
        Hvm = "hvm",
        Pv = "pv",
        PvInPvh = "pv_in_pvh",
        Pvh = "pvh",
        Unspecified = "unspecified",
    }
}

wire_enum! {
    pub enum EventOperation as "EventOperation" {
        Add = "add",
        Del = "del",
        Mod = "mod",
    }
}

wire_enum! {
    pub enum HostAllowedOperations as "HostAllowedOperations" {
        Provision = "provision",
        Evacuate = "evacuate",
        Shutdown = "shutdown",
        Reboot = "reboot",
        PowerOn = "power_on",
        VmStart = "vm_start",
        VmResume = "vm_resume",
        VmMigrate = "vm_migrate",
        ApplyUpdates = "apply_updates",
        Enable = "enable",
    }
}

wire_enum! {
    pub enum HostDisplay as "HostDisplay" {
        Enabled = "enabled",
        DisableOnReboot = "disable_on_reboot",
        Disabled = "disabled",
        EnableOnReboot = "enable_on_reboot",
    }
}

wire_enum! {
    pub enum HostNumaAffinityPolicy as "HostNumaAffinityPolicy" {
        Any = "any",
        BestEffort = "best_effort",
        DefaultPolicy = "default_policy",
    }
}

wire_enum! {
    pub enum HostSchedGran as "HostSchedGran" {
        Core = "core",
        Cpu = "cpu",
        Socket = "socket",
    }
}

wire_enum! {
    pub enum IpConfigurationMode as "IPConfigurationMode" {
        None = "None",
        Dhcp = "DHCP",
        Static = "Static",
    }
}

wire_enum! {
    pub enum Ipv6ConfigurationMode as "Ipv6ConfigurationMode" {
        None = "None",
        Dhcp = "DHCP",
        Static = "Static",
        Autoconf = "Autoconf",
    }
}

wire_enum! {
    pub enum LatestSyncedUpdatesAppliedState as "LatestSyncedUpdatesAppliedState" {
        Yes = "yes",
        No = "no",
        Unknown = "unknown",
    }
}

wire_enum! {
    pub enum LivepatchStatus as "LivepatchStatus" {
        OkLivepatchComplete = "ok_livepatch_complete",
        OkLivepatchIncomplete = "ok_livepatch_incomplete",
        Ok = "ok",
    }
}

wire_enum! {
    pub enum NetworkDefaultLockingMode as "NetworkDefaultLockingMode" {
        Unlocked = "unlocked",
        Disabled = "disabled",
    }
}

wire_enum! {
    pub enum NetworkOperations as "NetworkOperations" {
        Attaching = "attaching",
    }
}

wire_enum! {
    pub enum NetworkPurpose as "NetworkPurpose" {
        Nbd = "nbd",
        InsecureNbd = "insecure_nbd",
    }
}

wire_enum! {
    pub enum OnBoot as "OnBoot" {
        Reset = "reset",
        Persist = "persist",
    }
}

wire_enum! {
    pub enum OnCrashBehaviour as "OnCrashBehaviour" {
        Destroy = "destroy",
        CoredumpAndDestroy = "coredump_and_destroy",
        Restart = "restart",
        CoredumpAndRestart = "coredump_and_restart",
        Preserve = "preserve",
        RenameRestart = "rename_restart",
    }
}

wire_enum! {
    pub enum OnNormalExit as "OnNormalExit" {
        Destroy = "destroy",
        Restart = "restart",
    }
}

wire_enum! {
    pub enum OnSoftrebootBehavior as "OnSoftrebootBehavior" {
        SoftReboot = "soft_reboot",
        Destroy = "destroy",
        Restart = "restart",
        Preserve = "preserve",
    }
}

wire_enum! {
    pub enum PersistenceBackend as "PersistenceBackend" {
        Xapi = "xapi",
    }
}

wire_enum! {
    pub enum PgpuDom0Access as "PgpuDom0Access" {
        Enabled = "enabled",
        DisableOnReboot = "disable_on_reboot",
        Disabled = "disabled",
        EnableOnReboot = "enable_on_reboot",
    }
}

wire_enum! {
    pub enum PifIgmpStatus as "PifIgmpStatus" {
        Enabled = "enabled",
        Disabled = "disabled",
        Unknown = "unknown",
    }
}

wire_enum! {
    pub enum PoolAllowedOperations as "PoolAllowedOperations" {
        HaEnable = "ha_enable",
        HaDisable = "ha_disable",
        ClusterCreate = "cluster_create",
        DesignateNewMaster = "designate_new_master",
        ConfigureRepositories = "configure_repositories",
        SyncUpdates = "sync_updates",
        GetUpdates = "get_updates",
        ApplyUpdates = "apply_updates",
        TlsVerificationEnable = "tls_verification_enable",
        CertRefresh = "cert_refresh",
        ExchangeCertificatesOnJoin = "exchange_certificates_on_join",
        ExchangeCaCertificatesOnJoin = "exchange_ca_certificates_on_join",
        CopyPrimaryHostCerts = "copy_primary_host_certs",
        Eject = "eject",
    }
}

wire_enum! {
    pub enum PrimaryAddressType as "PrimaryAddressType" {
        IPv4 = "IPv4",
        IPv6 = "IPv6",
    }
}

wire_enum! {
    pub enum PvsProxyStatus as "PvsProxyStatus" {
        Stopped = "stopped",
        Initialised = "initialised",
        Caching = "caching",
        IncompatibleWriteCacheMode = "incompatible_write_cache_mode",
        IncompatibleProtocolVersion = "incompatible_protocol_version",
    }
}

wire_enum! {
    pub enum SdnControllerProtocol as "SdnControllerProtocol" {
        Ssl = "ssl",
        Pssl = "pssl",
    }
}

wire_enum! {
    pub enum SrHealth as "SrHealth" {
        Healthy = "healthy",
        Recovering = "recovering",
    }
}

wire_enum! {
    pub enum SriovConfigurationMode as "SriovConfigurationMode" {
        Sysfs = "sysfs",
        Modprobe = "modprobe",
        Manual = "manual",
        Unknown = "unknown",
    }
}

wire_enum! {
    pub enum StorageOperations as "StorageOperations" {
        Scan = "scan",
        Destroy = "destroy",
        Forget = "forget",
        Plug = "plug",
        Unplug = "unplug",
        Update = "update",
        VdiCreate = "vdi_create",
        VdiIntroduce = "vdi_introduce",
        VdiDestroy = "vdi_destroy",
        VdiResize = "vdi_resize",
        VdiClone = "vdi_clone",
        VdiSnapshot = "vdi_snapshot",
        VdiMirror = "vdi_mirror",
        VdiEnableCbt = "vdi_enable_cbt",
        VdiDisableCbt = "vdi_disable_cbt",
        VdiDataDestroy = "vdi_data_destroy",
        VdiListChangedBlocks = "vdi_list_changed_blocks",
        VdiSetOnBoot = "vdi_set_on_boot",
        PbdCreate = "pbd_create",
        PbdDestroy = "pbd_destroy",
    }
}

wire_enum! {
    pub enum TaskAllowedOperations as "TaskAllowedOperations" {
        Cancel = "cancel",
        Destroy = "destroy",
    }
}

wire_enum! {
    pub enum TaskStatusType as "TaskStatusType" {
        Pending = "pending",
        Success = "success",
        Failure = "failure",
        Cancelling = "cancelling",
        Cancelled = "cancelled",
    }
}

wire_enum! {
    pub enum TelemetryFrequency as "TelemetryFrequency" {
        Daily = "daily",
        Weekly = "weekly",
        Monthly = "monthly",
    }
}

wire_enum! {
    pub enum TristateType as "TristateType" {
        Yes = "yes",
        No = "no",
        Unspecified = "unspecified",
    }
}

wire_enum! {
    pub enum TunnelProtocol as "TunnelProtocol" {
        Gre = "gre",
        Vxlan = "vxlan",
    }
}

wire_enum! {
    pub enum UpdateAfterApplyGuidance as "UpdateAfterApplyGuidance" {
        RestartHvm = "restartHVM",
        RestartPv = "restartPV",
        RestartHost = "restartHost",
        RestartXapi = "restartXAPI",
    }
}

wire_enum! {
    pub enum UpdateGuidances as "UpdateGuidances" {
        RebootHost = "reboot_host",
        RebootHostOnLivepatchFailure = "reboot_host_on_livepatch_failure",
        RebootHostOnKernelLivepatchFailure = "reboot_host_on_kernel_livepatch_failure",
        RebootHostOnXenLivepatchFailure = "reboot_host_on_xen_livepatch_failure",
        RestartToolstack = "restart_toolstack",
        RestartDeviceModel = "restart_device_model",
        RestartVm = "restart_vm",
    }
}

wire_enum! {
    pub enum UpdateSyncFrequency as "UpdateSyncFrequency" {
        Daily = "daily",
        Weekly = "weekly",
    }
}

wire_enum! {
    pub enum VbdMode as "VbdMode" {
        Ro = "RO",
        Rw = "RW",
    }
}

wire_enum! {
    pub enum VbdOperations as "VbdOperations" {
        Attach = "attach",
        Eject = "eject",
        Insert = "insert",
        Plug = "plug",
        Unplug = "unplug",
        UnplugForce = "unplug_force",
        Pause = "pause",
        Unpause = "unpause",
    }
}

wire_enum! {
    pub enum VbdType as "VbdType" {
        Cd = "CD",
        Disk = "Disk",
        Floppy = "Floppy",
    }
}

wire_enum! {
    pub enum VdiOperations as "VdiOperations" {
        Clone = "clone",
        Copy = "copy",
        Resize = "resize",
        ResizeOnline = "resize_online",
        Snapshot = "snapshot",
        Mirror = "mirror",
        Destroy = "destroy",
        Forget = "forget",
        Update = "update",
        ForceUnlock = "force_unlock",
        GenerateConfig = "generate_config",
        EnableCbt = "enable_cbt",
        DisableCbt = "disable_cbt",
        DataDestroy = "data_destroy",
        ListChangedBlocks = "list_changed_blocks",
        SetOnBoot = "set_on_boot",
        Blocked = "blocked",
    }
}

wire_enum! {
    pub enum VdiType as "VdiType" {
        System = "system",
        User = "user",
        Ephemeral = "ephemeral",
        Suspend = "suspend",
        Crashdump = "crashdump",
        HaStatefile = "ha_statefile",
        Metadata = "metadata",
        RedoLog = "redo_log",
        Rrd = "rrd",
        PvsCache = "pvs_cache",
        CbtMetadata = "cbt_metadata",
    }
}

wire_enum! {
    pub enum VgpuTypeImplementation as "VgpuTypeImplementation" {
        Passthrough = "passthrough",
        Nvidia = "nvidia",
        NvidiaSriov = "nvidia_sriov",
        GvtG = "gvt_g",
        Mxgpu = "mxgpu",
    }
}

wire_enum! {
    pub enum VifIpv4ConfigurationMode as "VifIpv4ConfigurationMode" {
        None = "None",
        Static = "Static",
    }
}

wire_enum! {
    pub enum VifIpv6ConfigurationMode as "VifIpv6ConfigurationMode" {
        None = "None",
        Static = "Static",
    }
}

wire_enum! {
    pub enum VifLockingMode as "VifLockingMode" {
        NetworkDefault = "network_default",
        Locked = "locked",
        Unlocked = "unlocked",
        Disabled = "disabled",
    }
}

wire_enum! {
    pub enum VifOperations as "VifOperations" {
        Attach = "attach",
        Plug = "plug",
        Unplug = "unplug",
    }
}

wire_enum! {
    pub enum VmApplianceOperation as "VMApplianceOperation" {
        Start = "start",
        CleanShutdown = "clean_shutdown",
        HardShutdown = "hard_shutdown",
        Shutdown = "shutdown",
    }
}

wire_enum! {
    pub enum VmOperations as "VMOperations" {
        Snapshot = "snapshot",
        Clone = "clone",
        Copy = "copy",
        CreateTemplate = "create_template",
        Revert = "revert",
        Checkpoint = "checkpoint",
        SnapshotWithQuiesce = "snapshot_with_quiesce",
        Provision = "provision",
        Start = "start",
        StartOn = "start_on",
        Pause = "pause",
        Unpause = "unpause",
        CleanShutdown = "clean_shutdown",
        CleanReboot = "clean_reboot",
        HardShutdown = "hard_shutdown",
        PowerStateReset = "power_state_reset",
        HardReboot = "hard_reboot",
        Suspend = "suspend",
        Csvm = "csvm",
        Resume = "resume",
        ResumeOn = "resume_on",
        PoolMigrate = "pool_migrate",
        MigrateSend = "migrate_send",
        GetBootRecord = "get_boot_record",
        SendSysrq = "send_sysrq",
        SendTrigger = "send_trigger",
        QueryServices = "query_services",
        Shutdown = "shutdown",
        CallPlugin = "call_plugin",
        ChangingMemoryLive = "changing_memory_live",
        AwaitingMemoryLive = "awaiting_memory_live",
        ChangingDynamicRange = "changing_dynamic_range",
        ChangingStaticRange = "changing_static_range",
        ChangingMemoryLimits = "changing_memory_limits",
        ChangingShadowMemory = "changing_shadow_memory",
        ChangingShadowMemoryLive = "changing_shadow_memory_live",
        ChangingVcpUs = "changing_VCPUs",
        ChangingVcpUsLive = "changing_VCPUs_live",
        ChangingNvram = "changing_NVRAM",
        AssertOperationValid = "assert_operation_valid",
        DataSourceOp = "data_source_op",
        UpdateAllowedOperations = "update_allowed_operations",
        MakeIntoTemplate = "make_into_template",
        Import = "import",
        Export = "export",
        MetadataExport = "metadata_export",
        Reverting = "reverting",
        Destroy = "destroy",
        CreateVtpm = "create_vtpm",
    }
}

wire_enum! {
    pub enum VmPowerState as "VMPowerState" {
        Halted = "Halted",
        Paused = "Paused",
        Running = "Running",
        Suspended = "Suspended",
    }
}

wire_enum! {
    pub enum VmppArchiveFrequency as "VmppArchiveFrequency" {
        Never = "never",
        AlwaysAfterBackup = "always_after_backup",
        Daily = "daily",
        Weekly = "weekly",
    }
}

wire_enum! {
    pub enum VmppArchiveTargetType as "VmppArchiveTargetType" {
        None = "none",
        Cifs = "cifs",
        Nfs = "nfs",
    }
}

wire_enum! {
    pub enum VmppBackupFrequency as "VmppBackupFrequency" {
        Hourly = "hourly",
        Daily = "daily",
        Weekly = "weekly",
    }
}

wire_enum! {
    pub enum VmppBackupType as "VmppBackupType" {
        Snapshot = "snapshot",
        Checkpoint = "checkpoint",
    }
}

wire_enum! {
    pub enum VmssFrequency as "VmssFrequency" {
        Hourly = "hourly",
        Daily = "daily",
        Weekly = "weekly",
    }
}

wire_enum! {
    pub enum VmssType as "VmssType" {
        Snapshot = "snapshot",
        Checkpoint = "checkpoint",
        SnapshotWithQuiesce = "snapshot_with_quiesce",
    }
}

wire_enum! {
    pub enum VtpmOperations as "VtpmOperations" {
        Destroy = "destroy",
    }
}

wire_enum! {
    pub enum VusbOperations as "VusbOperations" {
        Attach = "attach",
        Plug = "plug",
        Unplug = "unplug",
    }
}
