// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Path breadcrumbs for codec diagnostics.
//!
//! A [`Path`] is a chain of borrowed frames living on the stack of the codec
//! that is currently running. Nothing is formatted until an error needs the
//! rendered string.

use std::fmt;

/// Location of a value inside the tree being encoded or decoded.
#[derive(Debug, Clone, Copy)]
pub enum Path<'a> {
    /// A free-standing root, e.g. `value`.
    Root(&'a str),
    /// A call argument, rendered `method(name)`.
    Arg { method: &'a str, name: &'a str },
    /// A call result, rendered `method()`.
    Return(&'a str),
    /// A record field, rendered `parent.field`.
    Field(&'a Path<'a>, &'a str),
    /// A sequence element, rendered `parent[index]`.
    Index(&'a Path<'a>, usize),
    /// A map entry, rendered `parent[key]`.
    Key(&'a Path<'a>, &'a str),
}

impl<'a> Path<'a> {
    pub fn root(name: &'a str) -> Self {
        Path::Root(name)
    }

    pub fn arg(method: &'a str, name: &'a str) -> Self {
        Path::Arg { method, name }
    }

    pub fn result(method: &'a str) -> Self {
        Path::Return(method)
    }

    pub fn field<'b>(&'b self, name: &'b str) -> Path<'b> {
        Path::Field(self, name)
    }

    pub fn index(&self, index: usize) -> Path<'_> {
        Path::Index(self, index)
    }

    pub fn key<'b>(&'b self, key: &'b str) -> Path<'b> {
        Path::Key(self, key)
    }

    fn is_empty(&self) -> bool {
        matches!(self, Path::Root(name) if name.is_empty())
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Path::Root(name) => f.write_str(name),
            Path::Arg { method, name } => write!(f, "{}({})", method, name),
            Path::Return(method) => write!(f, "{}()", method),
            Path::Field(parent, name) if parent.is_empty() => f.write_str(name),
            Path::Field(parent, name) => write!(f, "{}.{}", parent, name),
            Path::Index(parent, index) => write!(f, "{}[{}]", parent, index),
            Path::Key(parent, key) => write!(f, "{}[{}]", parent, key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_rendering() {
        let arg = Path::arg("VM.create", "vm_record");
        let field = arg.field("VIFs");
        let element = field.index(3);
        assert_eq!(element.to_string(), "VM.create(vm_record).VIFs[3]");
    }

    #[test]
    fn test_map_key_rendering() {
        let root = Path::result("VM.get_all_records");
        let entry = root.key("OpaqueRef:abc");
        let field = entry.field("power_state");
        assert_eq!(
            field.to_string(),
            "VM.get_all_records()[OpaqueRef:abc].power_state"
        );
    }

    #[test]
    fn test_empty_root_drops_leading_dot() {
        let root = Path::root("");
        assert_eq!(root.field("uuid").to_string(), "uuid");
    }
}
