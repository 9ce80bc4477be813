// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Networks, physical and virtual interfaces.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::enums::*;
use crate::refs::*;

wire_record! {
    /// A virtual network.
    pub struct NetworkRecord as "NetworkRecord" for NetworkRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        allowed_operations: Vec<NetworkOperations> = "allowed_operations",
        current_operations: HashMap<String, NetworkOperations> = "current_operations",
        vifs: Vec<VifRef> = "VIFs",
        pifs: Vec<PifRef> = "PIFs",
        mtu: i64 = "MTU",
        other_config: HashMap<String, String> = "other_config",
        bridge: String = "bridge",
        managed: bool = "managed",
        blobs: HashMap<String, BlobRef> = "blobs",
        tags: Vec<String> = "tags",
        default_locking_mode: NetworkDefaultLockingMode = "default_locking_mode",
        assigned_ips: HashMap<VifRef, String> = "assigned_ips",
        purpose: Vec<NetworkPurpose> = "purpose",
    }
}

wire_record! {
    /// A virtual network interface.
    pub struct VifRecord as "VIFRecord" for VifRef {
        uuid: String = "uuid",
        allowed_operations: Vec<VifOperations> = "allowed_operations",
        current_operations: HashMap<String, VifOperations> = "current_operations",
        device: String = "device",
        network: NetworkRef = "network",
        vm: VmRef = "VM",
        mac: String = "MAC",
        mtu: i64 = "MTU",
        other_config: HashMap<String, String> = "other_config",
        currently_attached: bool = "currently_attached",
        status_code: i64 = "status_code",
        status_detail: String = "status_detail",
        runtime_properties: HashMap<String, String> = "runtime_properties",
        qos_algorithm_type: String = "qos_algorithm_type",
        qos_algorithm_params: HashMap<String, String> = "qos_algorithm_params",
        qos_supported_algorithms: Vec<String> = "qos_supported_algorithms",
        metrics: VifMetricsRef = "metrics",
        mac_autogenerated: bool = "MAC_autogenerated",
        locking_mode: VifLockingMode = "locking_mode",
        ipv4_allowed: Vec<String> = "ipv4_allowed",
        ipv6_allowed: Vec<String> = "ipv6_allowed",
        ipv4_configuration_mode: VifIpv4ConfigurationMode = "ipv4_configuration_mode",
        ipv4_addresses: Vec<String> = "ipv4_addresses",
        ipv4_gateway: String = "ipv4_gateway",
        ipv6_configuration_mode: VifIpv6ConfigurationMode = "ipv6_configuration_mode",
        ipv6_addresses: Vec<String> = "ipv6_addresses",
        ipv6_gateway: String = "ipv6_gateway",
        reserved_pci: PciRef = "reserved_pci",
    }
}

wire_record! {
    /// The metrics associated with a virtual network device.
    pub struct VifMetricsRecord as "VIFMetricsRecord" for VifMetricsRef {
        uuid: String = "uuid",
        io_read_kbs: f64 = "io_read_kbs",
        io_write_kbs: f64 = "io_write_kbs",
        last_updated: DateTime<Utc> = "last_updated",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// A physical network interface (note separate VLANs are represented as several PIFs).
    pub struct PifRecord as "PIFRecord" for PifRef {
        uuid: String = "uuid",
        device: String = "device",
        network: NetworkRef = "network",
        host: HostRef = "host",
        mac: String = "MAC",
        mtu: i64 = "MTU",
        vlan: i64 = "VLAN",
        metrics: PifMetricsRef = "metrics",
        physical: bool = "physical",
        currently_attached: bool = "currently_attached",
        ip_configuration_mode: IpConfigurationMode = "ip_configuration_mode",
        ip: String = "IP",
        netmask: String = "netmask",
        gateway: String = "gateway",
        dns: String = "DNS",
        bond_slave_of: BondRef = "bond_slave_of",
        bond_master_of: Vec<BondRef> = "bond_master_of",
        vlan_master_of: VlanRef = "VLAN_master_of",
        vlan_slave_of: Vec<VlanRef> = "VLAN_slave_of",
        management: bool = "management",
        other_config: HashMap<String, String> = "other_config",
        disallow_unplug: bool = "disallow_unplug",
        tunnel_access_pif_of: Vec<TunnelRef> = "tunnel_access_PIF_of",
        tunnel_transport_pif_of: Vec<TunnelRef> = "tunnel_transport_PIF_of",
        ipv6_configuration_mode: Ipv6ConfigurationMode = "ipv6_configuration_mode",
        ipv6: Vec<String> = "IPv6",
        ipv6_gateway: String = "ipv6_gateway",
        primary_address_type: PrimaryAddressType = "primary_address_type",
        managed: bool = "managed",
        properties: HashMap<String, String> = "properties",
        capabilities: Vec<String> = "capabilities",
        igmp_snooping_status: PifIgmpStatus = "igmp_snooping_status",
        sriov_physical_pif_of: Vec<NetworkSriovRef> = "sriov_physical_PIF_of",
        sriov_logical_pif_of: Vec<NetworkSriovRef> = "sriov_logical_PIF_of",
        pci: PciRef = "PCI",
    }
}

wire_record! {
    /// The metrics associated with a physical network interface.
    pub struct PifMetricsRecord as "PIFMetricsRecord" for PifMetricsRef {
        uuid: String = "uuid",
        io_read_kbs: f64 = "io_read_kbs",
        io_write_kbs: f64 = "io_write_kbs",
        carrier: bool = "carrier",
        vendor_id: String = "vendor_id",
        vendor_name: String = "vendor_name",
        device_id: String = "device_id",
        device_name: String = "device_name",
        speed: i64 = "speed",
        duplex: bool = "duplex",
        pci_bus_path: String = "pci_bus_path",
        last_updated: DateTime<Utc> = "last_updated",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// A Network bond that combines physical network interfaces, also known as link aggregation.
    pub struct BondRecord as "BondRecord" for BondRef {
        uuid: String = "uuid",
        master: PifRef = "master",
        slaves: Vec<PifRef> = "slaves",
        other_config: HashMap<String, String> = "other_config",
        primary_slave: PifRef = "primary_slave",
        mode: BondMode = "mode",
        properties: HashMap<String, String> = "properties",
        links_up: i64 = "links_up",
        auto_update_mac: bool = "auto_update_mac",
    }
}

wire_record! {
    /// A VLAN mux/demux.
    pub struct VlanRecord as "VLANRecord" for VlanRef {
        uuid: String = "uuid",
        tagged_pif: PifRef = "tagged_PIF",
        untagged_pif: PifRef = "untagged_PIF",
        tag: i64 = "tag",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// A tunnel for network traffic.
    pub struct TunnelRecord as "TunnelRecord" for TunnelRef {
        uuid: String = "uuid",
        access_pif: PifRef = "access_PIF",
        transport_pif: PifRef = "transport_PIF",
        status: HashMap<String, String> = "status",
        other_config: HashMap<String, String> = "other_config",
        protocol: TunnelProtocol = "protocol",
    }
}

wire_record! {
    /// network-sriov which connects logical pif and physical pif.
    pub struct NetworkSriovRecord as "NetworkSriovRecord" for NetworkSriovRef {
        uuid: String = "uuid",
        physical_pif: PifRef = "physical_PIF",
        logical_pif: PifRef = "logical_PIF",
        requires_reboot: bool = "requires_reboot",
        configuration_mode: SriovConfigurationMode = "configuration_mode",
    }
}

wire_record! {
    /// Describes the SDN controller that is to connect with the pool.
    pub struct SdnControllerRecord as "SDNControllerRecord" for SdnControllerRef {
        uuid: String = "uuid",
        protocol: SdnControllerProtocol = "protocol",
        address: String = "address",
        port: i64 = "port",
    }
}
