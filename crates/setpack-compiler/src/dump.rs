//! Human-readable listing of an emitted blob.
//!
//! One header line per record, then one line per field with its offset,
//! raw bytes, kind, and decoded value:
//!
//! ```text
//! @0000 S
//!   0000  00 00 03 02              u32  version = 2.3
//!   0008  10 00 00 00 00 00 00 00  ref  child -> @0010
//! ```

use std::fmt::Write as _;

use setpack_core::Colors;
use setpack_core::utils::hex_width;
use setpack_format::{FieldKind, PackedVersion, VERSION_FIELD};

use crate::emit::{Blob, FieldInfo, Literal, RecordInfo};

/// Widest field is 8 bytes: `xx xx xx xx xx xx xx xx`.
const HEX_COLUMN: usize = 8 * 3 - 1;

pub fn dump(blob: &Blob, colors: Colors) -> String {
    let width = hex_width(blob.bytes.len() as u64);
    let mut out = String::new();
    for record in &blob.records {
        dump_record(&mut out, blob, record, width, colors);
    }
    out
}

fn dump_record(out: &mut String, blob: &Blob, record: &RecordInfo, width: usize, c: Colors) {
    writeln!(
        out,
        "{}@{:0width$x}{} {}{}{}",
        c.muted, record.offset, c.reset, c.name, record.struct_name, c.reset
    )
    .unwrap();

    for field in &record.fields {
        let hex = blob
            .field_bytes(field)
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(
            out,
            "  {}{:0width$x}  {hex:<HEX_COLUMN$}{}  {:<4} {}{}{}",
            c.muted,
            field.offset,
            c.reset,
            field.kind.name(),
            c.name,
            field.name,
            c.reset
        )
        .unwrap();
        let is_version = field.offset == record.offset
            && field.name == VERSION_FIELD
            && field.kind == FieldKind::U32;
        write_value(out, field, is_version, width, c);
        out.push('\n');
    }
}

fn write_value(out: &mut String, field: &FieldInfo, is_version: bool, width: usize, c: Colors) {
    match field.literal {
        Literal::Offset(target) => {
            write!(out, " -> {}@{target:0width$x}{}", c.muted, c.reset).unwrap()
        }
        Literal::Null => write!(out, " = {}null{}", c.literal, c.reset).unwrap(),
        Literal::Bool(b) => write!(out, " = {}{b}{}", c.literal, c.reset).unwrap(),
        Literal::Int(v) if is_version => {
            let version = PackedVersion::from_raw(v as u32);
            write!(out, " = {}{version}{}", c.literal, c.reset).unwrap()
        }
        Literal::Int(v) if field.kind == FieldKind::Ptr => {
            write!(out, " = {}{v:#x}{}", c.literal, c.reset).unwrap()
        }
        Literal::Int(v) => write!(out, " = {}{v}{}", c.literal, c.reset).unwrap(),
    }
}
