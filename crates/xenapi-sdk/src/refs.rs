// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Typed reference handles, one per server class.
//!
//! Every handle wraps the opaque string the server minted. The type keeps a
//! host handle from being passed where a VM handle is expected; the wire
//! form is the bare string.

/// Wire form of a handle that points at nothing.
pub const NULL_REF: &str = "OpaqueRef:NULL";

wire_refs! {
    BlobRef => "blob",
    BondRef => "Bond",
    CertificateRef => "Certificate",
    ClusterHostRef => "Cluster_host",
    ClusterRef => "Cluster",
    ConsoleRef => "console",
    CrashdumpRef => "crashdump",
    DrTaskRef => "DR_task",
    FeatureRef => "Feature",
    GpuGroupRef => "GPU_group",
    HostCpuRef => "host_cpu",
    HostCrashdumpRef => "host_crashdump",
    HostMetricsRef => "host_metrics",
    HostPatchRef => "host_patch",
    HostRef => "host",
    LvhdRef => "LVHD",
    MessageRef => "message",
    NetworkRef => "network",
    NetworkSriovRef => "network_sriov",
    ObserverRef => "Observer",
    PbdRef => "PBD",
    PciRef => "PCI",
    PgpuRef => "PGPU",
    PifMetricsRef => "PIF_metrics",
    PifRef => "PIF",
    PoolPatchRef => "pool_patch",
    PoolRef => "pool",
    PoolUpdateRef => "pool_update",
    PusbRef => "PUSB",
    PvsCacheStorageRef => "PVS_cache_storage",
    PvsProxyRef => "PVS_proxy",
    PvsServerRef => "PVS_server",
    PvsSiteRef => "PVS_site",
    RepositoryRef => "Repository",
    RoleRef => "role",
    SdnControllerRef => "SDN_controller",
    SecretRef => "secret",
    SessionRef => "session",
    SmRef => "SM",
    SrRef => "SR",
    SubjectRef => "subject",
    TaskRef => "task",
    TunnelRef => "tunnel",
    UsbGroupRef => "USB_group",
    UserRef => "user",
    VbdMetricsRef => "VBD_metrics",
    VbdRef => "VBD",
    VdiRef => "VDI",
    VgpuRef => "VGPU",
    VgpuTypeRef => "VGPU_type",
    VifMetricsRef => "VIF_metrics",
    VifRef => "VIF",
    VlanRef => "VLAN",
    VmApplianceRef => "VM_appliance",
    VmGuestMetricsRef => "VM_guest_metrics",
    VmMetricsRef => "VM_metrics",
    VmRef => "VM",
    VmppRef => "VMPP",
    VmssRef => "VMSS",
    VtpmRef => "VTPM",
    VusbRef => "VUSB",
}
