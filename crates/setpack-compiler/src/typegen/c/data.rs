//! Default data arrays.

use std::fmt::Write as _;

use setpack_core::utils::bytes_to_c_hex;

use super::Config;
use crate::emit::{Blob, FieldInfo};

pub(super) fn render_default_data(blob: &Blob, config: &Config) -> String {
    let c = config.colors;
    let mut out = String::new();

    writeln!(
        out,
        "static uint8_t {}{}{}[] = {{",
        c.name,
        config.data_symbol(&blob.name),
        c.reset
    )
    .unwrap();

    for record in &blob.records {
        if config.comments {
            out.push('\n');
            writeln!(
                out,
                "  {}// {} offset: {:#x}{}",
                c.muted, record.struct_name, record.offset, c.reset
            )
            .unwrap();
        }
        for field in &record.fields {
            let hex = bytes_to_c_hex(blob.field_bytes(field));
            if config.comments {
                writeln!(
                    out,
                    "  {hex}, {}// {} = {}{}",
                    c.muted,
                    declarator(field),
                    field.literal,
                    c.reset
                )
                .unwrap();
            } else {
                writeln!(out, "  {hex},").unwrap();
            }
        }
    }

    out.push_str("};\n");
    out
}

/// `uint32_t version`, `Window *window`.
fn declarator(field: &FieldInfo) -> String {
    if field.type_name.ends_with('*') {
        format!("{}{}", field.type_name, field.name)
    } else {
        format!("{} {}", field.type_name, field.name)
    }
}
