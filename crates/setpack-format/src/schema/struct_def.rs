//! Struct definitions.

use super::StructId;
use crate::type_system::FieldKind;
use crate::version::VERSION_FIELD;

/// A named, typed field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn u8(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::U8)
    }

    pub fn u16(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::U16)
    }

    pub fn u32(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::U32)
    }

    pub fn u64(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::U64)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    pub fn ptr(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Ptr)
    }

    pub fn struct_ref(name: impl Into<String>, target: StructId) -> Self {
        Self::new(name, FieldKind::StructRef(target))
    }

    /// `u32 version`, the field every root record starts with.
    pub fn is_version(&self) -> bool {
        self.name == VERSION_FIELD && self.kind == FieldKind::U32
    }
}

/// A byte-packed record layout.
///
/// Field offsets and `c_size` are computed once at construction. There is
/// no alignment padding: a field starts where the previous one ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructDef {
    name: String,
    fields: Vec<Field>,
    offsets: Vec<u64>,
    c_size: u64,
    top_level: bool,
}

impl StructDef {
    /// Build a definition. Validation happens in [`Schema`](super::Schema).
    pub(crate) fn new(name: String, fields: Vec<Field>, top_level: bool) -> Self {
        let mut offsets = Vec::with_capacity(fields.len());
        let mut c_size = 0u64;
        for field in &fields {
            offsets.push(c_size);
            c_size += field.kind.width() as u64;
        }
        Self {
            name,
            fields,
            offsets,
            c_size,
            top_level,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Byte offset of a field within the record.
    pub fn field_offset(&self, index: usize) -> Option<u64> {
        self.offsets.get(index).copied()
    }

    /// Packed size in bytes (sum of field widths).
    pub fn c_size(&self) -> u64 {
        self.c_size
    }

    pub fn is_top_level(&self) -> bool {
        self.top_level
    }

    /// Whether the first field is `u32 version`.
    ///
    /// Always true for top-level structs. Structs defined without the flag
    /// may still qualify and can then be emitted as roots.
    pub fn starts_with_version(&self) -> bool {
        self.fields.first().is_some_and(Field::is_version)
    }

    /// Whether this definition is a layout-compatible extension of `older`.
    ///
    /// Every field of `older` must appear at the same position with the same
    /// kind; names may differ and new fields may follow. Struct references
    /// compare by layout only; use [`Schema::is_superset_of`](super::Schema::is_superset_of)
    /// to also check the referenced structs.
    pub fn is_superset_of(&self, older: &StructDef) -> bool {
        self.fields.len() >= older.fields.len()
            && self
                .fields
                .iter()
                .zip(&older.fields)
                .all(|(new, old)| new.kind.layout_eq(old.kind))
    }

    /// Struct references in field order.
    pub fn references(&self) -> impl Iterator<Item = StructId> + '_ {
        self.fields.iter().filter_map(|f| f.kind.target())
    }
}
