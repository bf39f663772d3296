//! Schemas and value trees from declarative documents.
//!
//! Structs may appear in any order in a document; they are defined
//! dependencies first. A record must give a value for every field of its
//! struct and nothing else. Version text is only accepted for the
//! `u32 version` field.

use std::collections::HashMap;

use setpack_core::{DocRecord, DocStruct, DocValue, Document, FieldType};
use setpack_format::{Field, FieldKind, FormatError, PackedVersion, Schema, StructId};
use tracing::{debug, instrument};

use crate::value::{BindError, NodeId, Value, ValueTree};

/// Error while turning a document into a schema or value tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("unknown struct `{0}`")]
    UnknownStruct(String),

    #[error("field `{field}` of `{struct_name}` refers to unknown struct `{target}`")]
    UnknownTarget {
        struct_name: String,
        field: String,
        target: String,
    },

    #[error("struct `{struct_name}` has no field `{field}`")]
    UnknownField { struct_name: String, field: String },

    #[error("record of `{struct_name}` has no value for field `{field}`")]
    MissingField { struct_name: String, field: String },

    #[error("field `{field}` of `{struct_name}` is not `u32 version` and cannot hold version text")]
    UnexpectedVersion { struct_name: String, field: String },

    #[error("roots `{first}` and `{second}` would both define `{symbol}`")]
    DuplicateRoot {
        first: String,
        second: String,
        symbol: String,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Bind(#[from] BindError),
}

/// Define every struct of a document.
#[instrument(level = "debug", skip_all, fields(structs = doc.structs.len()))]
pub fn build_schema(doc: &Document) -> Result<Schema, LoadError> {
    let by_name: HashMap<&str, &DocStruct> =
        doc.structs.iter().map(|s| (s.name.as_str(), s)).collect();

    let order = definition_order(doc, &by_name)?;
    let planned: HashMap<&str, StructId> = order
        .iter()
        .enumerate()
        .map(|(i, s)| (s.name.as_str(), StructId(i as u16)))
        .collect();

    let mut schema = Schema::new();
    for doc_struct in order {
        let fields = doc_struct
            .fields
            .iter()
            .map(|f| {
                let kind = match &f.ty {
                    FieldType::U8 => FieldKind::U8,
                    FieldType::U16 => FieldKind::U16,
                    FieldType::U32 => FieldKind::U32,
                    FieldType::U64 => FieldKind::U64,
                    FieldType::Bool => FieldKind::Bool,
                    FieldType::Ptr => FieldKind::Ptr,
                    // Targets were resolved by `definition_order`.
                    FieldType::Ref(target) => FieldKind::StructRef(planned[target.as_str()]),
                };
                Field::new(f.name.clone(), kind)
            })
            .collect();

        if doc_struct.top_level {
            schema.define_top_level(doc_struct.name.clone(), fields)?;
        } else {
            schema.define(doc_struct.name.clone(), fields)?;
        }
    }

    debug!(structs = schema.len(), "built schema");
    Ok(schema)
}

/// Document structs with every referenced struct before its referrers.
///
/// Mutually recursive structs keep document order and are rejected when
/// defined.
fn definition_order<'d>(
    doc: &'d Document,
    by_name: &HashMap<&str, &'d DocStruct>,
) -> Result<Vec<&'d DocStruct>, LoadError> {
    let mut order: Vec<&DocStruct> = Vec::with_capacity(doc.structs.len());
    let mut placed: HashMap<&str, bool> = HashMap::new();

    for root in &doc.structs {
        // (struct, dependencies already pushed)
        let mut stack = vec![(root, false)];
        while let Some((s, expanded)) = stack.pop() {
            if expanded {
                placed.insert(s.name.as_str(), true);
                order.push(s);
                continue;
            }
            if placed.contains_key(s.name.as_str()) {
                continue;
            }
            placed.insert(s.name.as_str(), false);
            stack.push((s, true));

            for field in s.fields.iter().rev() {
                let FieldType::Ref(target) = &field.ty else {
                    continue;
                };
                let Some(&dep) = by_name.get(target.as_str()) else {
                    return Err(LoadError::UnknownTarget {
                        struct_name: s.name.clone(),
                        field: field.name.clone(),
                        target: target.clone(),
                    });
                };
                if !placed.contains_key(dep.name.as_str()) {
                    stack.push((dep, false));
                }
            }
        }
    }

    Ok(order)
}

/// Bind a document record, and every record nested in it, into `tree`.
pub fn build_tree(tree: &mut ValueTree<'_>, record: &DocRecord) -> Result<NodeId, LoadError> {
    let schema = tree.schema();
    let Some(id) = schema.by_name(&record.struct_name) else {
        return Err(LoadError::UnknownStruct(record.struct_name.clone()));
    };
    let def = schema.get(id);

    if let Some((name, _)) = record
        .fields
        .iter()
        .find(|(name, _)| def.field_index(name).is_none())
    {
        return Err(LoadError::UnknownField {
            struct_name: def.name().to_string(),
            field: name.clone(),
        });
    }

    let mut values = Vec::with_capacity(def.fields().len());
    for field in def.fields() {
        let Some(doc_value) = record.get(&field.name) else {
            return Err(LoadError::MissingField {
                struct_name: def.name().to_string(),
                field: field.name.clone(),
            });
        };
        let value = match doc_value {
            DocValue::Null => Value::Null,
            DocValue::Bool(b) => Value::Bool(*b),
            DocValue::Int(v) => Value::Int(*v),
            DocValue::Version(text) => {
                if !field.is_version() {
                    return Err(LoadError::UnexpectedVersion {
                        struct_name: def.name().to_string(),
                        field: field.name.clone(),
                    });
                }
                text.parse::<PackedVersion>()?.into()
            }
            DocValue::Record(child) => build_tree(tree, child)?.into(),
        };
        values.push(value);
    }

    Ok(tree.bind(id, values)?)
}
