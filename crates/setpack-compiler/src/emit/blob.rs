//! Emitted bytes plus per-field provenance.

use std::fmt;

use setpack_format::{FieldKind, NULL_OFFSET, StructId};

/// Value written for one field, as it went into the blob.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Literal {
    Int(u64),
    Bool(bool),
    /// Null struct reference.
    Null,
    /// Offset of a referenced record.
    Offset(u64),
}

impl Literal {
    /// Integer packed into the field.
    pub fn raw(self) -> u64 {
        match self {
            Self::Int(v) | Self::Offset(v) => v,
            Self::Bool(b) => b as u64,
            Self::Null => NULL_OFFSET,
        }
    }
}

/// C-flavored rendering: integers and offsets in hex, `NULL` for null.
impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) | Self::Offset(v) => write!(f, "{v:#x}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("NULL"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub kind: FieldKind,
    /// C spelling of the field type (`uint32_t`, `Window *`).
    pub type_name: String,
    /// Absolute offset within the blob.
    pub offset: u64,
    pub literal: Literal,
}

impl FieldInfo {
    pub fn width(&self) -> usize {
        self.kind.width()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordInfo {
    pub struct_id: StructId,
    pub struct_name: String,
    pub offset: u64,
    pub size: u64,
    pub fields: Vec<FieldInfo>,
}

/// An emitted blob for one root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Blob {
    /// Name of the root struct.
    pub name: String,
    pub bytes: Vec<u8>,
    pub records: Vec<RecordInfo>,
}

impl Blob {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Bytes of one field.
    pub fn field_bytes(&self, field: &FieldInfo) -> &[u8] {
        let start = field.offset as usize;
        &self.bytes[start..start + field.width()]
    }
}
