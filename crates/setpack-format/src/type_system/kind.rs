//! Canonical field kind definitions.
//!
//! Every kind has a fixed width that does not depend on the host, so a blob
//! produced on one architecture reads identically on another. Values pack
//! little-endian with no padding between fields.

use crate::POINTER_SIZE;
use crate::schema::StructId;

/// Field kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FieldKind {
    U8,
    U16,
    U32,
    U64,
    /// Boolean stored as a 4-byte integer (0 or 1).
    Bool,
    /// Opaque pointer, always 8 bytes.
    Ptr,
    /// Nullable reference to another record, packed as its 8-byte offset.
    StructRef(StructId),
}

impl FieldKind {
    /// Stable one-byte tag, used by generated metadata tables.
    pub fn tag(self) -> u8 {
        match self {
            Self::U8 => 0,
            Self::U16 => 1,
            Self::U32 => 2,
            Self::U64 => 3,
            Self::Bool => 4,
            Self::Ptr => 5,
            Self::StructRef(_) => 6,
        }
    }

    /// Size in bytes.
    pub fn width(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::U32 | Self::Bool => 4,
            Self::U64 => 8,
            Self::Ptr | Self::StructRef(_) => POINTER_SIZE,
        }
    }

    /// Largest value the kind can hold.
    pub fn max_value(self) -> u64 {
        match self {
            Self::U8 => u8::MAX as u64,
            Self::U16 => u16::MAX as u64,
            Self::U32 => u32::MAX as u64,
            Self::Bool => 1,
            Self::U64 | Self::Ptr | Self::StructRef(_) => u64::MAX,
        }
    }

    /// Whether `value` is representable without truncation.
    pub fn fits(self, value: i128) -> bool {
        value >= 0 && value <= self.max_value() as i128
    }

    /// Short name used in dumps and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Bool => "bool",
            Self::Ptr => "ptr",
            Self::StructRef(_) => "ref",
        }
    }

    /// C spelling of the storage type.
    ///
    /// Pointer kinds report `uint64_t`: the generated declaration wraps the
    /// real pointer in a union with it so the field stays 8 bytes wide.
    pub fn c_type(self) -> &'static str {
        match self {
            Self::U8 => "uint8_t",
            Self::U16 => "uint16_t",
            Self::U32 => "uint32_t",
            Self::U64 | Self::Ptr | Self::StructRef(_) => "uint64_t",
            Self::Bool => "int32_t",
        }
    }

    pub fn is_struct_ref(self) -> bool {
        matches!(self, Self::StructRef(_))
    }

    /// Referenced struct, for `StructRef` kinds.
    pub fn target(self) -> Option<StructId> {
        match self {
            Self::StructRef(id) => Some(id),
            _ => None,
        }
    }

    /// Same binary layout, ignoring which struct a reference points to.
    ///
    /// Reference targets are schema-local ids, so comparing them across two
    /// schema versions is meaningless; see [`crate::Schema::is_superset_of`]
    /// for the recursive check.
    pub fn layout_eq(self, other: Self) -> bool {
        match (self, other) {
            (Self::StructRef(_), Self::StructRef(_)) => true,
            (a, b) => a == b,
        }
    }

    /// Append `value` in little-endian order, truncated to the kind's width.
    ///
    /// Callers check [`fits`](Self::fits) first.
    pub fn pack(self, value: u64, out: &mut Vec<u8>) {
        out.extend_from_slice(&value.to_le_bytes()[..self.width()]);
    }

    /// Decode a little-endian value from the first `width()` bytes.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than the kind's width.
    pub fn unpack(self, bytes: &[u8]) -> u64 {
        let width = self.width();
        let mut buf = [0u8; 8];
        buf[..width].copy_from_slice(&bytes[..width]);
        u64::from_le_bytes(buf)
    }
}
