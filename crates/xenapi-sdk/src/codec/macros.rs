// Copyright (C) 2025 SyncMyOrders Sp. z o.o.
// SPDX-License-Identifier: AGPL-3.0-or-later
//! Declarative generators for handles, enumerations and records.
//!
//! Each macro emits the native type together with its codec pair, so the
//! tables in `refs.rs`, `enums.rs` and `records/` stay a plain transcription
//! of the server schema.

/// Declare one distinct reference-handle type per server class.
///
/// ```ignore
/// wire_refs! {
///     VmRef => "VM",
///     HostRef => "host",
/// }
/// ```
macro_rules! wire_refs {
    ($($name:ident => $class:literal),* $(,)?) => {
        $(
            #[doc = concat!("Reference to a `", $class, "` object.")]
            #[derive(
                Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
                serde::Serialize, serde::Deserialize,
            )]
            #[serde(transparent)]
            pub struct $name(String);

            impl $name {
                /// Server class this handle refers to.
                pub const CLASS: &'static str = $class;

                pub fn new(value: impl Into<String>) -> Self {
                    Self(value.into())
                }

                /// The null handle, `OpaqueRef:NULL`.
                pub fn null() -> Self {
                    Self($crate::refs::NULL_REF.to_string())
                }

                /// True for the null handle and for the empty string.
                pub fn is_null(&self) -> bool {
                    self.0.is_empty() || self.0 == $crate::refs::NULL_REF
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }

                pub fn into_inner(self) -> String {
                    self.0
                }
            }

            impl std::fmt::Display for $name {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<String> for $name {
                fn from(value: String) -> Self {
                    Self(value)
                }
            }

            impl From<&str> for $name {
                fn from(value: &str) -> Self {
                    Self(value.to_string())
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl $crate::codec::ToWire for $name {
                fn to_wire(
                    &self,
                    _path: &$crate::codec::Path<'_>,
                ) -> Result<xenapi_protocol::WireValue, $crate::codec::CodecError> {
                    Ok(xenapi_protocol::WireValue::String(self.0.clone()))
                }
            }

            impl $crate::codec::FromWire for $name {
                fn from_wire(
                    path: &$crate::codec::Path<'_>,
                    value: &xenapi_protocol::WireValue,
                ) -> Result<Self, $crate::codec::CodecError> {
                    match value {
                        xenapi_protocol::WireValue::String(s) => Ok(Self(s.clone())),
                        other => Err($crate::codec::CodecError::mismatch(
                            path,
                            concat!($class, " reference"),
                            other,
                        )),
                    }
                }
            }

            impl $crate::codec::MapKey for $name {
                fn to_key(&self) -> String {
                    self.0.clone()
                }

                fn from_key(
                    _path: &$crate::codec::Path<'_>,
                    key: &str,
                ) -> Result<Self, $crate::codec::CodecError> {
                    Ok(Self(key.to_string()))
                }
            }

            #[cfg(test)]
            impl $crate::codec::sample::Sample for $name {
                fn sample() -> Self {
                    Self(concat!("OpaqueRef:sample-", $class).to_string())
                }
            }
        )*
    };
}

/// Declare a closed enumeration with its wire tags.
///
/// The first variant is the zero value used for absent record fields. The
/// name after `as` is the schema name reported in decode errors.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $schema:literal {
            $first:ident = $first_tag:literal
            $(, $variant:ident = $tag:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            #[default]
            #[serde(rename = $first_tag)]
            $first,
            $(
                #[serde(rename = $tag)]
                $variant,
            )*
        }

        impl $name {
            /// Schema name of this enumeration.
            pub const NAME: &'static str = $schema;

            /// Every variant, in schema order.
            pub const ALL: &'static [$name] = &[$name::$first $(, $name::$variant)*];

            /// Canonical wire tag.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$first => $first_tag,
                    $($name::$variant => $tag,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::codec::UnknownVariant;

            fn from_str(tag: &str) -> Result<Self, Self::Err> {
                match tag {
                    $first_tag => Ok($name::$first),
                    $($tag => Ok($name::$variant),)*
                    _ => Err($crate::codec::UnknownVariant {
                        enum_name: $schema,
                        tag: tag.to_string(),
                    }),
                }
            }
        }

        impl $crate::codec::ToWire for $name {
            fn to_wire(
                &self,
                _path: &$crate::codec::Path<'_>,
            ) -> Result<xenapi_protocol::WireValue, $crate::codec::CodecError> {
                Ok(xenapi_protocol::WireValue::from(self.as_str()))
            }
        }

        impl $crate::codec::FromWire for $name {
            fn from_wire(
                path: &$crate::codec::Path<'_>,
                value: &xenapi_protocol::WireValue,
            ) -> Result<Self, $crate::codec::CodecError> {
                match value {
                    xenapi_protocol::WireValue::String(s) => s
                        .parse()
                        .map_err(|e: $crate::codec::UnknownVariant| {
                            $crate::codec::CodecError::unknown_variant(path, &e)
                        }),
                    other => Err($crate::codec::CodecError::mismatch(path, $schema, other)),
                }
            }
        }

        impl $crate::codec::MapKey for $name {
            fn to_key(&self) -> String {
                self.as_str().to_string()
            }

            fn from_key(
                path: &$crate::codec::Path<'_>,
                key: &str,
            ) -> Result<Self, $crate::codec::CodecError> {
                key.parse().map_err(|e: $crate::codec::UnknownVariant| {
                    $crate::codec::CodecError::unknown_variant(path, &e)
                })
            }
        }

        #[cfg(test)]
        impl $crate::codec::sample::Sample for $name {
            fn sample() -> Self {
                Self::ALL[Self::ALL.len() - 1]
            }
        }
    };
}

/// Declare a record and its field-by-field codec.
///
/// Absent or null fields decode to their zero value, extra wire keys are
/// ignored, and the first failing field aborts the decode. With `for Handle`
/// the handle type also becomes an [`ApiObject`](crate::api::ApiObject) whose
/// record is this type.
macro_rules! wire_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident as $schema:literal $(for $handle:ident)? {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty = $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        ///
        /// Fields missing from the wire decode to their zero value. For an
        /// enumeration that is its first variant, which reads the same as a
        /// server that sent that variant.
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire)]
                pub $field: $ty,
            )*
        }

        impl $name {
            /// Schema name of this record.
            pub const NAME: &'static str = $schema;

            /// Wire names of every declared field.
            pub const FIELDS: &'static [&'static str] = &[$($wire),*];
        }

        impl $crate::codec::ToWire for $name {
            fn to_wire(
                &self,
                path: &$crate::codec::Path<'_>,
            ) -> Result<xenapi_protocol::WireValue, $crate::codec::CodecError> {
                #[allow(unused_mut)]
                let mut map = xenapi_protocol::WireMap::new();
                $(
                    $crate::codec::encode_field(path, &mut map, $wire, &self.$field)?;
                )*
                Ok(xenapi_protocol::WireValue::Map(map))
            }
        }

        impl $crate::codec::FromWire for $name {
            fn from_wire(
                path: &$crate::codec::Path<'_>,
                value: &xenapi_protocol::WireValue,
            ) -> Result<Self, $crate::codec::CodecError> {
                #[allow(unused_variables)]
                let map = $crate::codec::expect_map(path, value, $schema)?;
                Ok(Self {
                    $(
                        $field: $crate::codec::decode_field(path, map, $wire)?,
                    )*
                })
            }
        }

        #[cfg(test)]
        impl $crate::codec::sample::Sample for $name {
            fn sample() -> Self {
                Self {
                    $(
                        $field: $crate::codec::sample::Sample::sample(),
                    )*
                }
            }
        }

        $(
            impl $crate::api::ApiObject for $handle {
                const CLASS: &'static str = <$handle>::CLASS;
                type Record = $name;
            }
        )?
    };
}
