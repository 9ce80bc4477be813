// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Message names.
//!
//! The `name` field of a [`MessageRecord`](crate::MessageRecord) is one of
//! these tags. They are plain strings rather than an enumeration: servers add
//! new ones, and renaming one is a wire-compatibility change.

pub const ALARM: &str = "ALARM";
pub const BOND_STATUS_CHANGED: &str = "BOND_STATUS_CHANGED";
pub const CLUSTER_HOST_ENABLE_FAILED: &str = "CLUSTER_HOST_ENABLE_FAILED";
pub const CLUSTER_HOST_FENCING: &str = "CLUSTER_HOST_FENCING";
pub const CLUSTER_HOST_JOINING: &str = "CLUSTER_HOST_JOINING";
pub const CLUSTER_HOST_LEAVING: &str = "CLUSTER_HOST_LEAVING";
pub const CLUSTER_QUORUM_APPROACHING_LOST: &str = "CLUSTER_QUORUM_APPROACHING_LOST";
pub const EXTAUTH_INIT_IN_HOST_FAILED: &str = "EXTAUTH_INIT_IN_HOST_FAILED";
pub const EXTAUTH_IN_POOL_IS_NON_HOMOGENEOUS: &str = "EXTAUTH_IN_POOL_IS_NON_HOMOGENEOUS";
pub const FAILED_LOGIN_ATTEMPTS: &str = "FAILED_LOGIN_ATTEMPTS";
pub const GRACE_LICENSE: &str = "GRACE_LICENSE";
pub const HA_HEARTBEAT_APPROACHING_TIMEOUT: &str = "HA_HEARTBEAT_APPROACHING_TIMEOUT";
pub const HA_HOST_FAILED: &str = "HA_HOST_FAILED";
pub const HA_HOST_WAS_FENCED: &str = "HA_HOST_WAS_FENCED";
pub const HA_NETWORK_BONDING_ERROR: &str = "HA_NETWORK_BONDING_ERROR";
pub const HA_POOL_DROP_IN_PLAN_EXISTS_FOR: &str = "HA_POOL_DROP_IN_PLAN_EXISTS_FOR";
pub const HA_POOL_OVERCOMMITTED: &str = "HA_POOL_OVERCOMMITTED";
pub const HA_PROTECTED_VM_RESTART_FAILED: &str = "HA_PROTECTED_VM_RESTART_FAILED";
pub const HA_STATEFILE_APPROACHING_TIMEOUT: &str = "HA_STATEFILE_APPROACHING_TIMEOUT";
pub const HA_STATEFILE_LOST: &str = "HA_STATEFILE_LOST";
pub const HA_XAPI_HEALTHCHECK_APPROACHING_TIMEOUT: &str = "HA_XAPI_HEALTHCHECK_APPROACHING_TIMEOUT";
pub const HOST_CLOCK_SKEW_DETECTED: &str = "HOST_CLOCK_SKEW_DETECTED";
pub const HOST_CLOCK_WENT_BACKWARDS: &str = "HOST_CLOCK_WENT_BACKWARDS";
pub const HOST_CPU_FEATURES_DOWN: &str = "HOST_CPU_FEATURES_DOWN";
pub const HOST_CPU_FEATURES_UP: &str = "HOST_CPU_FEATURES_UP";
pub const HOST_INTERNAL_CERTIFICATE_EXPIRED: &str = "HOST_INTERNAL_CERTIFICATE_EXPIRED";
pub const HOST_INTERNAL_CERTIFICATE_EXPIRING_07: &str = "HOST_INTERNAL_CERTIFICATE_EXPIRING_07";
pub const HOST_INTERNAL_CERTIFICATE_EXPIRING_14: &str = "HOST_INTERNAL_CERTIFICATE_EXPIRING_14";
pub const HOST_INTERNAL_CERTIFICATE_EXPIRING_30: &str = "HOST_INTERNAL_CERTIFICATE_EXPIRING_30";
pub const HOST_SERVER_CERTIFICATE_EXPIRED: &str = "HOST_SERVER_CERTIFICATE_EXPIRED";
pub const HOST_SERVER_CERTIFICATE_EXPIRING_07: &str = "HOST_SERVER_CERTIFICATE_EXPIRING_07";
pub const HOST_SERVER_CERTIFICATE_EXPIRING_14: &str = "HOST_SERVER_CERTIFICATE_EXPIRING_14";
pub const HOST_SERVER_CERTIFICATE_EXPIRING_30: &str = "HOST_SERVER_CERTIFICATE_EXPIRING_30";
pub const HOST_SYNC_DATA_FAILED: &str = "HOST_SYNC_DATA_FAILED";
pub const IP_CONFIGURED_PIF_CAN_UNPLUG: &str = "IP_CONFIGURED_PIF_CAN_UNPLUG";
pub const LICENSE_DOES_NOT_SUPPORT_POOLING: &str = "LICENSE_DOES_NOT_SUPPORT_POOLING";
pub const LICENSE_EXPIRED: &str = "LICENSE_EXPIRED";
pub const LICENSE_EXPIRES_SOON: &str = "LICENSE_EXPIRES_SOON";
pub const LICENSE_NOT_AVAILABLE: &str = "LICENSE_NOT_AVAILABLE";
pub const LICENSE_SERVER_CONNECTED: &str = "LICENSE_SERVER_CONNECTED";
pub const LICENSE_SERVER_UNAVAILABLE: &str = "LICENSE_SERVER_UNAVAILABLE";
pub const LICENSE_SERVER_UNREACHABLE: &str = "LICENSE_SERVER_UNREACHABLE";
pub const LICENSE_SERVER_VERSION_OBSOLETE: &str = "LICENSE_SERVER_VERSION_OBSOLETE";
pub const METADATA_LUN_BROKEN: &str = "METADATA_LUN_BROKEN";
pub const METADATA_LUN_HEALTHY: &str = "METADATA_LUN_HEALTHY";
pub const MULTIPATH_PERIODIC_ALERT: &str = "MULTIPATH_PERIODIC_ALERT";
pub const PBD_PLUG_FAILED_ON_SERVER_START: &str = "PBD_PLUG_FAILED_ON_SERVER_START";
pub const PERIODIC_UPDATE_SYNC_FAILED: &str = "PERIODIC_UPDATE_SYNC_FAILED";
pub const POOL_CA_CERTIFICATE_EXPIRED: &str = "POOL_CA_CERTIFICATE_EXPIRED";
pub const POOL_CA_CERTIFICATE_EXPIRING_07: &str = "POOL_CA_CERTIFICATE_EXPIRING_07";
pub const POOL_CA_CERTIFICATE_EXPIRING_14: &str = "POOL_CA_CERTIFICATE_EXPIRING_14";
pub const POOL_CA_CERTIFICATE_EXPIRING_30: &str = "POOL_CA_CERTIFICATE_EXPIRING_30";
pub const POOL_CPU_FEATURES_DOWN: &str = "POOL_CPU_FEATURES_DOWN";
pub const POOL_CPU_FEATURES_UP: &str = "POOL_CPU_FEATURES_UP";
pub const POOL_MASTER_TRANSITION: &str = "POOL_MASTER_TRANSITION";
pub const PVS_PROXY_NO_CACHE_SR_AVAILABLE: &str = "PVS_PROXY_NO_CACHE_SR_AVAILABLE";
pub const PVS_PROXY_NO_SERVER_AVAILABLE: &str = "PVS_PROXY_NO_SERVER_AVAILABLE";
pub const PVS_PROXY_SETUP_FAILED: &str = "PVS_PROXY_SETUP_FAILED";
pub const PVS_PROXY_SR_OUT_OF_SPACE: &str = "PVS_PROXY_SR_OUT_OF_SPACE";
pub const TLS_VERIFICATION_EMERGENCY_DISABLED: &str = "TLS_VERIFICATION_EMERGENCY_DISABLED";
pub const VBD_QOS_FAILED: &str = "VBD_QOS_FAILED";
pub const VCPU_QOS_FAILED: &str = "VCPU_QOS_FAILED";
pub const VDI_CBT_METADATA_INCONSISTENT: &str = "VDI_CBT_METADATA_INCONSISTENT";
pub const VDI_CBT_RESIZE_FAILED: &str = "VDI_CBT_RESIZE_FAILED";
pub const VDI_CBT_SNAPSHOT_FAILED: &str = "VDI_CBT_SNAPSHOT_FAILED";
pub const VIF_QOS_FAILED: &str = "VIF_QOS_FAILED";
pub const VMPP_ARCHIVE_FAILED_0: &str = "VMPP_ARCHIVE_FAILED_0";
pub const VMPP_ARCHIVE_LOCK_FAILED: &str = "VMPP_ARCHIVE_LOCK_FAILED";
pub const VMPP_ARCHIVE_MISSED_EVENT: &str = "VMPP_ARCHIVE_MISSED_EVENT";
pub const VMPP_ARCHIVE_SUCCEEDED: &str = "VMPP_ARCHIVE_SUCCEEDED";
pub const VMPP_ARCHIVE_TARGET_MOUNT_FAILED: &str = "VMPP_ARCHIVE_TARGET_MOUNT_FAILED";
pub const VMPP_ARCHIVE_TARGET_UNMOUNT_FAILED: &str = "VMPP_ARCHIVE_TARGET_UNMOUNT_FAILED";
pub const VMPP_LICENSE_ERROR: &str = "VMPP_LICENSE_ERROR";
pub const VMPP_SNAPSHOT_ARCHIVE_ALREADY_EXISTS: &str = "VMPP_SNAPSHOT_ARCHIVE_ALREADY_EXISTS";
pub const VMPP_SNAPSHOT_FAILED: &str = "VMPP_SNAPSHOT_FAILED";
pub const VMPP_SNAPSHOT_LOCK_FAILED: &str = "VMPP_SNAPSHOT_LOCK_FAILED";
pub const VMPP_SNAPSHOT_MISSED_EVENT: &str = "VMPP_SNAPSHOT_MISSED_EVENT";
pub const VMPP_SNAPSHOT_SUCCEEDED: &str = "VMPP_SNAPSHOT_SUCCEEDED";
pub const VMPP_XAPI_LOGON_FAILURE: &str = "VMPP_XAPI_LOGON_FAILURE";
pub const VMSS_LICENSE_ERROR: &str = "VMSS_LICENSE_ERROR";
pub const VMSS_SNAPSHOT_FAILED: &str = "VMSS_SNAPSHOT_FAILED";
pub const VMSS_SNAPSHOT_LOCK_FAILED: &str = "VMSS_SNAPSHOT_LOCK_FAILED";
pub const VMSS_SNAPSHOT_MISSED_EVENT: &str = "VMSS_SNAPSHOT_MISSED_EVENT";
pub const VMSS_SNAPSHOT_SUCCEEDED: &str = "VMSS_SNAPSHOT_SUCCEEDED";
pub const VMSS_XAPI_LOGON_FAILURE: &str = "VMSS_XAPI_LOGON_FAILURE";
pub const VM_CHECKPOINTED: &str = "VM_CHECKPOINTED";
pub const VM_CLONED: &str = "VM_CLONED";
pub const VM_CRASHED: &str = "VM_CRASHED";
pub const VM_MIGRATED: &str = "VM_MIGRATED";
pub const VM_PAUSED: &str = "VM_PAUSED";
pub const VM_REBOOTED: &str = "VM_REBOOTED";
pub const VM_RESUMED: &str = "VM_RESUMED";
pub const VM_SECURE_BOOT_FAILED: &str = "VM_SECURE_BOOT_FAILED";
pub const VM_SHUTDOWN: &str = "VM_SHUTDOWN";
pub const VM_SNAPSHOTTED: &str = "VM_SNAPSHOTTED";
pub const VM_SNAPSHOT_REVERTED: &str = "VM_SNAPSHOT_REVERTED";
pub const VM_STARTED: &str = "VM_STARTED";
pub const VM_SUSPENDED: &str = "VM_SUSPENDED";
pub const VM_UNPAUSED: &str = "VM_UNPAUSED";
pub const WLB_CONSULTATION_FAILED: &str = "WLB_CONSULTATION_FAILED";
pub const WLB_OPTIMIZATION_ALERT: &str = "WLB_OPTIMIZATION_ALERT";
pub const XAPI_STARTUP_BLOCKED_AS_VERSION_HIGHER_THAN_COORDINATOR: &str = "XAPI_STARTUP_BLOCKED_AS_VERSION_HIGHER_THAN_COORDINATOR";

/// Every message name, sorted.
pub const ALL: &[&str] = &[
    ALARM,
    BOND_STATUS_CHANGED,
    CLUSTER_HOST_ENABLE_FAILED,
    CLUSTER_HOST_FENCING,
    CLUSTER_HOST_JOINING,
    CLUSTER_HOST_LEAVING,
    CLUSTER_QUORUM_APPROACHING_LOST,
    EXTAUTH_INIT_IN_HOST_FAILED,
    EXTAUTH_IN_POOL_IS_NON_HOMOGENEOUS,
    FAILED_LOGIN_ATTEMPTS,
    GRACE_LICENSE,
    HA_HEARTBEAT_APPROACHING_TIMEOUT,
    HA_HOST_FAILED,
    HA_HOST_WAS_FENCED,
    HA_NETWORK_BONDING_ERROR,
    HA_POOL_DROP_IN_PLAN_EXISTS_FOR,
    HA_POOL_OVERCOMMITTED,
    HA_PROTECTED_VM_RESTART_FAILED,
    HA_STATEFILE_APPROACHING_TIMEOUT,
    HA_STATEFILE_LOST,
    HA_XAPI_HEALTHCHECK_APPROACHING_TIMEOUT,
    HOST_CLOCK_SKEW_DETECTED,
    HOST_CLOCK_WENT_BACKWARDS,
    HOST_CPU_FEATURES_DOWN,
    HOST_CPU_FEATURES_UP,
    HOST_INTERNAL_CERTIFICATE_EXPIRED,
    HOST_INTERNAL_CERTIFICATE_EXPIRING_07,
    HOST_INTERNAL_CERTIFICATE_EXPIRING_14,
    HOST_INTERNAL_CERTIFICATE_EXPIRING_30,
    HOST_SERVER_CERTIFICATE_EXPIRED,
    HOST_SERVER_CERTIFICATE_EXPIRING_07,
    HOST_SERVER_CERTIFICATE_EXPIRING_14,
    HOST_SERVER_CERTIFICATE_EXPIRING_30,
    HOST_SYNC_DATA_FAILED,
    IP_CONFIGURED_PIF_CAN_UNPLUG,
    LICENSE_DOES_NOT_SUPPORT_POOLING,
    LICENSE_EXPIRED,
    LICENSE_EXPIRES_SOON,
    LICENSE_NOT_AVAILABLE,
    LICENSE_SERVER_CONNECTED,
    LICENSE_SERVER_UNAVAILABLE,
    LICENSE_SERVER_UNREACHABLE,
    LICENSE_SERVER_VERSION_OBSOLETE,
    METADATA_LUN_BROKEN,
    METADATA_LUN_HEALTHY,
    MULTIPATH_PERIODIC_ALERT,
    PBD_PLUG_FAILED_ON_SERVER_START,
    PERIODIC_UPDATE_SYNC_FAILED,
    POOL_CA_CERTIFICATE_EXPIRED,
    POOL_CA_CERTIFICATE_EXPIRING_07,
    POOL_CA_CERTIFICATE_EXPIRING_14,
    POOL_CA_CERTIFICATE_EXPIRING_30,
    POOL_CPU_FEATURES_DOWN,
    POOL_CPU_FEATURES_UP,
    POOL_MASTER_TRANSITION,
    PVS_PROXY_NO_CACHE_SR_AVAILABLE,
    PVS_PROXY_NO_SERVER_AVAILABLE,
    PVS_PROXY_SETUP_FAILED,
    PVS_PROXY_SR_OUT_OF_SPACE,
    TLS_VERIFICATION_EMERGENCY_DISABLED,
    VBD_QOS_FAILED,
    VCPU_QOS_FAILED,
    VDI_CBT_METADATA_INCONSISTENT,
    VDI_CBT_RESIZE_FAILED,
    VDI_CBT_SNAPSHOT_FAILED,
    VIF_QOS_FAILED,
    VMPP_ARCHIVE_FAILED_0,
    VMPP_ARCHIVE_LOCK_FAILED,
    VMPP_ARCHIVE_MISSED_EVENT,
    VMPP_ARCHIVE_SUCCEEDED,
    VMPP_ARCHIVE_TARGET_MOUNT_FAILED,
    VMPP_ARCHIVE_TARGET_UNMOUNT_FAILED,
    VMPP_LICENSE_ERROR,
    VMPP_SNAPSHOT_ARCHIVE_ALREADY_EXISTS,
    VMPP_SNAPSHOT_FAILED,
    VMPP_SNAPSHOT_LOCK_FAILED,
    VMPP_SNAPSHOT_MISSED_EVENT,
    VMPP_SNAPSHOT_SUCCEEDED,
    VMPP_XAPI_LOGON_FAILURE,
    VMSS_LICENSE_ERROR,
    VMSS_SNAPSHOT_FAILED,
    VMSS_SNAPSHOT_LOCK_FAILED,
    VMSS_SNAPSHOT_MISSED_EVENT,
    VMSS_SNAPSHOT_SUCCEEDED,
    VMSS_XAPI_LOGON_FAILURE,
    VM_CHECKPOINTED,
    VM_CLONED,
    VM_CRASHED,
    VM_MIGRATED,
    VM_PAUSED,
    VM_REBOOTED,
    VM_RESUMED,
    VM_SECURE_BOOT_FAILED,
    VM_SHUTDOWN,
    VM_SNAPSHOTTED,
    VM_SNAPSHOT_REVERTED,
    VM_STARTED,
    VM_SUSPENDED,
    VM_UNPAUSED,
    WLB_CONSULTATION_FAILED,
    WLB_OPTIMIZATION_ALERT,
    XAPI_STARTUP_BLOCKED_AS_VERSION_HIGHER_THAN_COORDINATOR,
];

/// True if `tag` is a known message name.
pub fn is_known(tag: &str) -> bool {
    ALL.binary_search(&tag).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_sorted_and_unique() {
        assert!(ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_known_message() {
        assert!(is_known(HA_POOL_OVERCOMMITTED));
        assert!(!is_known("NOT_A_REAL_TAG"));
    }
}
