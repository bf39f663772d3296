//! Decoding records back out of an emitted blob.
//!
//! The reader interprets bytes under a given struct definition. Reading a
//! blob written for an older schema under a newer definition works for the
//! leading fields both versions share; see [`RecordReader::read_prefix`].

use crate::schema::{Schema, StructId};
use crate::type_system::FieldKind;
use crate::version::PackedVersion;
use crate::{NULL_OFFSET, ReadError};

/// One decoded field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldValue<'a> {
    pub name: &'a str,
    pub kind: FieldKind,
    /// Raw little-endian value, zero-extended to 64 bits.
    pub raw: u64,
}

impl FieldValue<'_> {
    /// Offset of the referenced record, `None` for null or non-reference fields.
    pub fn target_offset(&self) -> Option<u64> {
        match self.kind {
            FieldKind::StructRef(_) if self.raw != NULL_OFFSET => Some(self.raw),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> bool {
        self.raw != 0
    }

    /// Interpret the value as a packed version.
    ///
    /// Only meaningful for `u32` fields; wider values are truncated.
    pub fn as_version(&self) -> PackedVersion {
        PackedVersion::from_raw(self.raw as u32)
    }
}

/// Reads records from a blob under a schema.
#[derive(Clone, Copy, Debug)]
pub struct RecordReader<'a> {
    schema: &'a Schema,
    bytes: &'a [u8],
}

impl<'a> RecordReader<'a> {
    pub fn new(schema: &'a Schema, bytes: &'a [u8]) -> Self {
        Self { schema, bytes }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Decode every field of the record at `offset`.
    pub fn read(&self, id: StructId, offset: u64) -> Result<Vec<FieldValue<'a>>, ReadError> {
        let count = self.schema.get(id).fields().len();
        self.read_prefix(id, offset, count)
    }

    /// Decode the first `count` fields of the record at `offset`.
    ///
    /// Only the bytes those fields occupy must be present, so a blob written
    /// with an older, shorter definition can be read under a newer one.
    pub fn read_prefix(
        &self,
        id: StructId,
        offset: u64,
        count: usize,
    ) -> Result<Vec<FieldValue<'a>>, ReadError> {
        let schema: &'a Schema = self.schema;
        let def = schema.get(id);
        let fields = def.fields();
        if count > fields.len() {
            return Err(ReadError::TooManyFields {
                struct_name: def.name().to_string(),
                requested: count,
                available: fields.len(),
            });
        }

        let needed: u64 = fields[..count].iter().map(|f| f.kind.width() as u64).sum();
        let end = offset.checked_add(needed);
        let Some(start) = usize::try_from(offset)
            .ok()
            .filter(|_| end.is_some_and(|end| end <= self.bytes.len() as u64))
        else {
            return Err(ReadError::OutOfBounds {
                struct_name: def.name().to_string(),
                offset,
                needed,
                len: self.bytes.len(),
            });
        };

        let mut pos = start;
        let mut values = Vec::with_capacity(count);
        for field in &fields[..count] {
            let width = field.kind.width();
            values.push(FieldValue {
                name: field.name.as_str(),
                kind: field.kind,
                raw: field.kind.unpack(&self.bytes[pos..pos + width]),
            });
            pos += width;
        }
        Ok(values)
    }

    /// Decode a single field by name.
    pub fn field(
        &self,
        id: StructId,
        offset: u64,
        name: &str,
    ) -> Result<Option<FieldValue<'a>>, ReadError> {
        let Some(index) = self.schema.get(id).field_index(name) else {
            return Ok(None);
        };
        let mut values = self.read_prefix(id, offset, index + 1)?;
        Ok(values.pop())
    }
}
