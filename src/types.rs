//! Runtime type identifiers for column elements
//!
//! [`TypeId`] is the closed enumeration of element types a column can carry;
//! [`DataType`] is the small runtime value callers build per operation and
//! hand to dispatch. Discriminant values appear in persisted column metadata
//! and are wire-stable: once released they are never renumbered, and new
//! types consume fresh integers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dispatch::{dispatch, SizeOf};
use crate::error::Result;

/// Identifier for the element type of a column, known only at run time.
///
/// `Empty` is the sentinel for "no usable element type"; it is never mapped
/// to a concrete type and dispatching on it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum TypeId {
    /// Sentinel: no registered element type
    Empty = 0,
    /// 8-bit signed integer
    Int8 = 1,
    /// 16-bit signed integer
    Int16 = 2,
    /// 32-bit signed integer
    Int32 = 3,
    /// 64-bit signed integer
    Int64 = 4,
    /// 32-bit floating point
    Float32 = 5,
    /// 64-bit floating point
    Float64 = 6,
}

impl TypeId {
    /// Every id with a registered concrete type, i.e. everything but `Empty`.
    pub const SUPPORTED: [TypeId; 6] = [
        TypeId::Int8,
        TypeId::Int16,
        TypeId::Int32,
        TypeId::Int64,
        TypeId::Float32,
        TypeId::Float64,
    ];

    /// Human-readable name, used in diagnostics and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            TypeId::Empty => "empty",
            TypeId::Int8 => "int8",
            TypeId::Int16 => "int16",
            TypeId::Int32 => "int32",
            TypeId::Int64 => "int64",
            TypeId::Float32 => "float32",
            TypeId::Float64 => "float64",
        }
    }

    /// The wire-stable integer form used in persisted column metadata.
    pub const fn as_raw(self) -> u32 {
        self as u32
    }

    /// Decodes a persisted integer back to a `TypeId`.
    ///
    /// Integers outside the released set have no representation and yield
    /// `None`; they can never reach dispatch as a mismatched type.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        Some(match raw {
            0 => TypeId::Empty,
            1 => TypeId::Int8,
            2 => TypeId::Int16,
            3 => TypeId::Int32,
            4 => TypeId::Int64,
            5 => TypeId::Float32,
            6 => TypeId::Float64,
            _ => return None,
        })
    }

    /// Whether this id has a registered concrete element type.
    pub const fn is_supported(self) -> bool {
        !matches!(self, TypeId::Empty)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runtime type descriptor for a column, built per operation by callers.
///
/// Wraps a [`TypeId`] and carries no other semantics in this core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataType(TypeId);

impl DataType {
    /// Creates a descriptor for the given id.
    pub const fn new(id: TypeId) -> Self {
        Self(id)
    }

    /// The runtime type id this descriptor carries.
    pub const fn id(self) -> TypeId {
        self.0
    }

    /// Byte width of one element of this type, resolved through dispatch.
    ///
    /// Fails with [`Error::UnsupportedType`](crate::Error::UnsupportedType)
    /// for the `Empty` sentinel.
    pub fn size_of(self) -> Result<usize> {
        dispatch(self, &mut SizeOf)
    }
}

impl From<TypeId> for DataType {
    fn from(id: TypeId) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
