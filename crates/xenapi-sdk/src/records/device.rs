// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Passthrough devices: PCI, GPUs and USB.

use std::collections::HashMap;

use crate::enums::*;
use crate::refs::*;

wire_record! {
    /// A PCI device.
    pub struct PciRecord as "PCIRecord" for PciRef {
        uuid: String = "uuid",
        class_name: String = "class_name",
        vendor_name: String = "vendor_name",
        device_name: String = "device_name",
        host: HostRef = "host",
        pci_id: String = "pci_id",
        dependencies: Vec<PciRef> = "dependencies",
        other_config: HashMap<String, String> = "other_config",
        subsystem_vendor_name: String = "subsystem_vendor_name",
        subsystem_device_name: String = "subsystem_device_name",
        driver_name: String = "driver_name",
    }
}

wire_record! {
    /// A physical GPU (pGPU).
    pub struct PgpuRecord as "PGPURecord" for PgpuRef {
        uuid: String = "uuid",
        pci: PciRef = "PCI",
        gpu_group: GpuGroupRef = "GPU_group",
        host: HostRef = "host",
        other_config: HashMap<String, String> = "other_config",
        supported_vgpu_types: Vec<VgpuTypeRef> = "supported_VGPU_types",
        enabled_vgpu_types: Vec<VgpuTypeRef> = "enabled_VGPU_types",
        resident_vgpus: Vec<VgpuRef> = "resident_VGPUs",
        supported_vgpu_max_capacities: HashMap<VgpuTypeRef, i64> = "supported_VGPU_max_capacities",
        dom0_access: PgpuDom0Access = "dom0_access",
        is_system_display_device: bool = "is_system_display_device",
        compatibility_metadata: HashMap<String, String> = "compatibility_metadata",
    }
}

wire_record! {
    /// A group of compatible GPUs across the resource pool.
    pub struct GpuGroupRecord as "GPUGroupRecord" for GpuGroupRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        pgpus: Vec<PgpuRef> = "PGPUs",
        vgpus: Vec<VgpuRef> = "VGPUs",
        gpu_types: Vec<String> = "GPU_types",
        other_config: HashMap<String, String> = "other_config",
        allocation_algorithm: AllocationAlgorithm = "allocation_algorithm",
        supported_vgpu_types: Vec<VgpuTypeRef> = "supported_VGPU_types",
        enabled_vgpu_types: Vec<VgpuTypeRef> = "enabled_VGPU_types",
    }
}

wire_record! {
    /// A virtual GPU (vGPU).
    pub struct VgpuRecord as "VGPURecord" for VgpuRef {
        uuid: String = "uuid",
        vm: VmRef = "VM",
        gpu_group: GpuGroupRef = "GPU_group",
        device: String = "device",
        currently_attached: bool = "currently_attached",
        other_config: HashMap<String, String> = "other_config",
        r#type: VgpuTypeRef = "type",
        resident_on: PgpuRef = "resident_on",
        scheduled_to_be_resident_on: PgpuRef = "scheduled_to_be_resident_on",
        compatibility_metadata: HashMap<String, String> = "compatibility_metadata",
        extra_args: String = "extra_args",
        pci: PciRef = "PCI",
    }
}

wire_record! {
    /// A type of virtual GPU.
    pub struct VgpuTypeRecord as "VGPUTypeRecord" for VgpuTypeRef {
        uuid: String = "uuid",
        vendor_name: String = "vendor_name",
        model_name: String = "model_name",
        framebuffer_size: i64 = "framebuffer_size",
        max_heads: i64 = "max_heads",
        max_resolution_x: i64 = "max_resolution_x",
        max_resolution_y: i64 = "max_resolution_y",
        supported_on_pgpus: Vec<PgpuRef> = "supported_on_PGPUs",
        enabled_on_pgpus: Vec<PgpuRef> = "enabled_on_PGPUs",
        vgpus: Vec<VgpuRef> = "VGPUs",
        supported_on_gpu_groups: Vec<GpuGroupRef> = "supported_on_GPU_groups",
        enabled_on_gpu_groups: Vec<GpuGroupRef> = "enabled_on_GPU_groups",
        implementation: VgpuTypeImplementation = "implementation",
        identifier: String = "identifier",
        experimental: bool = "experimental",
        compatible_types_in_vm: Vec<VgpuTypeRef> = "compatible_types_in_vm",
    }
}

wire_record! {
    /// A physical USB device.
    pub struct PusbRecord as "PUSBRecord" for PusbRef {
        uuid: String = "uuid",
        usb_group: UsbGroupRef = "USB_group",
        host: HostRef = "host",
        path: String = "path",
        vendor_id: String = "vendor_id",
        vendor_desc: String = "vendor_desc",
        product_id: String = "product_id",
        product_desc: String = "product_desc",
        serial: String = "serial",
        version: String = "version",
        description: String = "description",
        passthrough_enabled: bool = "passthrough_enabled",
        other_config: HashMap<String, String> = "other_config",
        speed: f64 = "speed",
    }
}

wire_record! {
    /// A group of compatible USBs across the resource pool.
    pub struct UsbGroupRecord as "USBGroupRecord" for UsbGroupRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        pusbs: Vec<PusbRef> = "PUSBs",
        vusbs: Vec<VusbRef> = "VUSBs",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// Describes the vusb device.
    pub struct VusbRecord as "VUSBRecord" for VusbRef {
        uuid: String = "uuid",
        allowed_operations: Vec<VusbOperations> = "allowed_operations",
        current_operations: HashMap<String, VusbOperations> = "current_operations",
        vm: VmRef = "VM",
        usb_group: UsbGroupRef = "USB_group",
        other_config: HashMap<String, String> = "other_config",
        currently_attached: bool = "currently_attached",
    }
}
