//! Document type definitions.

use serde::{Deserialize, Serialize};

/// A complete settings document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Struct definitions, in declaration order.
    pub structs: Vec<DocStruct>,
    /// Root value trees. Each one is flattened and emitted on its own.
    pub roots: Vec<DocRecord>,
}

/// A struct definition as written in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocStruct {
    pub name: String,
    /// Top-level structs must start with a `u32 version` field.
    pub top_level: bool,
    pub fields: Vec<DocField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocField {
    pub name: String,
    pub ty: FieldType,
}

/// Field type spelling used by documents.
///
/// JSON form: `"u8"`, `"u16"`, `"u32"`, `"u64"`, `"bool"`, `"ptr"`, or
/// `{ "ref": "StructName" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    U8,
    U16,
    U32,
    U64,
    Bool,
    Ptr,
    Ref(String),
}

/// A record value: a struct name plus values by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRecord {
    pub struct_name: String,
    /// Symbol name for a root's default data. Ignored on nested records.
    pub name: Option<String>,
    /// Field values in the order they were written.
    pub fields: Vec<(String, DocValue)>,
}

impl DocRecord {
    pub fn get(&self, field: &str) -> Option<&DocValue> {
        self.fields
            .iter()
            .find_map(|(name, value)| (name == field).then_some(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocValue {
    Null,
    Bool(bool),
    Int(i128),
    /// Dotted version text such as `"2.3.1"`.
    Version(String),
    Record(DocRecord),
}
