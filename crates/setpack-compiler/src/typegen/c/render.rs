//! Output rendering methods.

use std::fmt::Write as _;

use setpack_format::{FieldKind, StructId};

use super::{Config, Emitter};

/// Meaning of the `type` column in field metadata tables.
const TAG_LEGEND: &str = "0 u8, 1 u16, 2 u32, 3 u64, 4 bool, 5 ptr, 6 struct";

impl Emitter<'_> {
    pub(super) fn render_struct(&mut self, id: StructId) {
        let c = self.c();
        let schema = self.schema;
        let def = schema.get(id);
        let out = &mut self.output;

        if self.config.comments {
            writeln!(out, "{}// {}: {} bytes{}", c.muted, def.name(), def.c_size(), c.reset).unwrap();
        }
        writeln!(out, "struct {}{}{} {{", c.name, def.name(), c.reset).unwrap();
        for field in def.fields() {
            let name = &field.name;
            match field.kind {
                FieldKind::StructRef(target) => {
                    let target = schema.get(target).name();
                    writeln!(out, "    union {{ {target} *{name}; uint64_t {name}Pad; }};").unwrap();
                }
                FieldKind::Ptr => {
                    writeln!(out, "    union {{ void *{name}; uint64_t {name}Pad; }};").unwrap();
                }
                kind => {
                    writeln!(out, "    {} {name};", kind.c_type()).unwrap();
                }
            }
        }
        out.push_str("};\n");
    }

    pub(super) fn render_metadata(&mut self, id: StructId) {
        let c = self.c();
        let schema = self.schema;
        let def = schema.get(id);
        let fields_symbol = self.config.fields_symbol(def.name());
        let metadata_symbol = self.config.metadata_symbol(def.name());
        let comments = self.config.comments;

        let nested: Vec<String> = def
            .fields()
            .iter()
            .map(|field| match field.kind.target() {
                Some(target) => format!("&{}", self.config.metadata_symbol(schema.get(target).name())),
                None => "NULL".to_string(),
            })
            .collect();

        let out = &mut self.output;
        if def.references().any(|target| target == id) {
            writeln!(out, "extern const StructMetadata {metadata_symbol};").unwrap();
        }
        writeln!(out, "const FieldMetadata {}{fields_symbol}{}[] = {{", c.name, c.reset).unwrap();
        let mut offset = 0u64;
        for (field, nested) in def.fields().iter().zip(&nested) {
            write!(out, "    {{ {offset}, {}, {nested} }},", field.kind.tag()).unwrap();
            if comments {
                write!(out, " {}// {}{}", c.muted, field.name, c.reset).unwrap();
            }
            out.push('\n');
            offset += field.kind.width() as u64;
        }
        out.push_str("};\n");
        writeln!(
            out,
            "const StructMetadata {}{metadata_symbol}{} = {{ {}, {}, {fields_symbol} }};",
            c.name,
            c.reset,
            def.c_size(),
            def.fields().len()
        )
        .unwrap();
    }
}

pub(super) fn render_metadata_types(config: &Config) -> String {
    let c = config.colors;
    let mut out = String::new();

    if config.comments {
        writeln!(out, "{}// Field type tags: {TAG_LEGEND}{}", c.muted, c.reset).unwrap();
    }
    out.push_str("typedef struct StructMetadata StructMetadata;\n\n");
    out.push_str("typedef struct {\n");
    out.push_str("    uint32_t offset;\n");
    out.push_str("    uint8_t type;\n");
    out.push_str("    const StructMetadata *def;\n");
    out.push_str("} FieldMetadata;\n\n");
    out.push_str("struct StructMetadata {\n");
    out.push_str("    uint32_t size;\n");
    out.push_str("    uint16_t nFields;\n");
    out.push_str("    const FieldMetadata *fields;\n");
    out.push_str("};\n");
    out
}
