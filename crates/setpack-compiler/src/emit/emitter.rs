//! Core byte emission logic.

use setpack_format::{Field, FieldKind, Schema, StructDef};
use tracing::{debug, instrument, trace};

use super::EmitError;
use super::blob::{Blob, FieldInfo, Literal, RecordInfo};
use crate::layout::Layout;
use crate::value::Value;

/// Emit the blob for a layout.
pub fn emit(layout: &Layout<'_, '_>) -> Result<Vec<u8>, EmitError> {
    emit_annotated(layout).map(|blob| blob.bytes)
}

/// Emit the blob together with what went into every field.
#[instrument(level = "debug", skip(layout), fields(root = %layout.root()))]
pub fn emit_annotated(layout: &Layout<'_, '_>) -> Result<Blob, EmitError> {
    let tree = layout.tree();
    let schema = tree.schema();

    let mut bytes = Vec::with_capacity(layout.total_size() as usize);
    let mut records = Vec::with_capacity(layout.len());

    for record in layout.records() {
        let def = schema.get(record.def);
        let val = tree.get(record.node);
        let start = bytes.len() as u64;

        let mut fields = Vec::with_capacity(def.fields().len());
        for (field, value) in def.fields().iter().zip(val.fields()) {
            let literal = resolve(layout, def, field, *value)?;
            let offset = bytes.len() as u64;
            field.kind.pack(literal.raw(), &mut bytes);
            fields.push(FieldInfo {
                name: field.name.clone(),
                kind: field.kind,
                type_name: type_name(schema, field.kind),
                offset,
                literal,
            });
        }

        let written = bytes.len() as u64 - start;
        if start != record.offset || written != record.size {
            return Err(EmitError::SizeMismatch {
                struct_name: def.name().to_string(),
                offset: record.offset,
                expected: record.size,
                found: written,
            });
        }
        trace!(struct_name = def.name(), offset = start, size = written, "emitted record");

        records.push(RecordInfo {
            struct_id: record.def,
            struct_name: def.name().to_string(),
            offset: start,
            size: written,
            fields,
        });
    }

    let name = layout.root_def().name().to_string();
    debug!(name = %name, len = bytes.len(), records = records.len(), "emitted blob");
    Ok(Blob {
        name,
        bytes,
        records,
    })
}

fn resolve(
    layout: &Layout<'_, '_>,
    def: &StructDef,
    field: &Field,
    value: Value,
) -> Result<Literal, EmitError> {
    match (field.kind, value) {
        (FieldKind::Bool, Value::Bool(b)) => Ok(Literal::Bool(b)),
        (FieldKind::StructRef(_), Value::Null) => Ok(Literal::Null),
        (FieldKind::StructRef(_), Value::Record(node)) => layout
            .offset_of(node)
            .map(Literal::Offset)
            .ok_or(EmitError::UnresolvedReference(node)),
        (kind, Value::Int(v)) if kind != FieldKind::Bool && !kind.is_struct_ref() => {
            if !kind.fits(v) {
                return Err(EmitError::PackRange {
                    struct_name: def.name().to_string(),
                    field: field.name.clone(),
                    kind: kind.name(),
                    value: v,
                });
            }
            Ok(Literal::Int(v as u64))
        }
        _ => Err(EmitError::UnexpectedValue {
            struct_name: def.name().to_string(),
            field: field.name.clone(),
        }),
    }
}

/// C spelling of a field's type as seen by user code.
pub(crate) fn type_name(schema: &Schema, kind: FieldKind) -> String {
    match kind {
        FieldKind::StructRef(target) => format!("{} *", schema.get(target).name()),
        FieldKind::Ptr => "void *".to_string(),
        kind => kind.c_type().to_string(),
    }
}
