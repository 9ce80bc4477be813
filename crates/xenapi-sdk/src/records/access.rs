// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Sessions, identity, tasks, messages and other bookkeeping objects.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::enums::*;
use crate::refs::*;

wire_record! {
    /// A placeholder for a binary blob.
    pub struct BlobRecord as "BlobRecord" for BlobRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        size: i64 = "size",
        public: bool = "public",
        last_updated: DateTime<Utc> = "last_updated",
        mime_type: String = "mime_type",
    }
}

wire_record! {
    /// Data sources for logging in RRDs.
    pub struct DataSourceRecord as "DataSourceRecord" {
        name_label: String = "name_label",
        name_description: String = "name_description",
        enabled: bool = "enabled",
        standard: bool = "standard",
        units: String = "units",
        min: f64 = "min",
        max: f64 = "max",
        value: f64 = "value",
    }
}

wire_record! {
    /// An message for the attention of the administrator.
    pub struct MessageRecord as "MessageRecord" for MessageRef {
        uuid: String = "uuid",
        name: String = "name",
        priority: i64 = "priority",
        cls: Cls = "cls",
        obj_uuid: String = "obj_uuid",
        timestamp: DateTime<Utc> = "timestamp",
        body: String = "body",
    }
}

wire_record! {
    /// Describes a observer which will control observability activity in the Toolstack.
    pub struct ObserverRecord as "ObserverRecord" for ObserverRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        hosts: Vec<HostRef> = "hosts",
        attributes: HashMap<String, String> = "attributes",
        endpoints: Vec<String> = "endpoints",
        components: Vec<String> = "components",
        enabled: bool = "enabled",
    }
}

wire_record! {
    /// A set of permissions associated with a subject.
    pub struct RoleRecord as "RoleRecord" for RoleRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        subroles: Vec<RoleRef> = "subroles",
        is_internal: bool = "is_internal",
    }
}

wire_record! {
    /// A secret.
    pub struct SecretRecord as "SecretRecord" for SecretRef {
        uuid: String = "uuid",
        value: String = "value",
        other_config: HashMap<String, String> = "other_config",
    }
}

wire_record! {
    /// A session.
    pub struct SessionRecord as "SessionRecord" for SessionRef {
        uuid: String = "uuid",
        this_host: HostRef = "this_host",
        this_user: UserRef = "this_user",
        last_active: DateTime<Utc> = "last_active",
        pool: bool = "pool",
        other_config: HashMap<String, String> = "other_config",
        is_local_superuser: bool = "is_local_superuser",
        subject: SubjectRef = "subject",
        validation_time: DateTime<Utc> = "validation_time",
        auth_user_sid: String = "auth_user_sid",
        auth_user_name: String = "auth_user_name",
        rbac_permissions: Vec<String> = "rbac_permissions",
        tasks: Vec<TaskRef> = "tasks",
        parent: SessionRef = "parent",
        originator: String = "originator",
        client_certificate: bool = "client_certificate",
    }
}

wire_record! {
    /// A user or group that can log in xapi.
    pub struct SubjectRecord as "SubjectRecord" for SubjectRef {
        uuid: String = "uuid",
        subject_identifier: String = "subject_identifier",
        other_config: HashMap<String, String> = "other_config",
        roles: Vec<RoleRef> = "roles",
    }
}

wire_record! {
    /// A long-running asynchronous task.
    pub struct TaskRecord as "TaskRecord" for TaskRef {
        uuid: String = "uuid",
        name_label: String = "name_label",
        name_description: String = "name_description",
        allowed_operations: Vec<TaskAllowedOperations> = "allowed_operations",
        current_operations: HashMap<String, TaskAllowedOperations> = "current_operations",
        created: DateTime<Utc> = "created",
        finished: DateTime<Utc> = "finished",
        status: TaskStatusType = "status",
        resident_on: HostRef = "resident_on",
        progress: f64 = "progress",
        r#type: String = "type",
        result: String = "result",
        error_info: Vec<String> = "error_info",
        other_config: HashMap<String, String> = "other_config",
        subtask_of: TaskRef = "subtask_of",
        subtasks: Vec<TaskRef> = "subtasks",
        backtrace: String = "backtrace",
    }
}

wire_record! {
    /// A user of the system.
    pub struct UserRecord as "UserRecord" for UserRef {
        uuid: String = "uuid",
        short_name: String = "short_name",
        fullname: String = "fullname",
        other_config: HashMap<String, String> = "other_config",
    }
}
