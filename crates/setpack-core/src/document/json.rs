//! JSON deserialization for settings documents.
//!
//! ```json
//! {
//!   "structs": {
//!     "Child": { "fields": [{ "name": "version", "type": "u32" }, { "name": "flag", "type": "u8" }] },
//!     "Settings": {
//!       "top_level": true,
//!       "fields": [
//!         { "name": "version", "type": "u32" },
//!         { "name": "child", "type": { "ref": "Child" } }
//!       ]
//!     }
//!   },
//!   "roots": [
//!     { "struct": "Settings", "name": "factory", "fields": { "version": "2.3", "child": null } }
//!   ]
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::de::value::MapAccessDeserializer;
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use super::types::{DocField, DocRecord, DocStruct, DocValue, Document, FieldType};

/// Error while reading or writing a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("binary codec error: {0}")]
    Binary(#[from] postcard::Error),
    #[error("field `{field}` of `{struct_name}`: {reason}")]
    InvalidValue {
        struct_name: String,
        field: String,
        reason: String,
    },
}

impl Document {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let raw: RawDocument = serde_json::from_str(json)?;
        let structs = raw
            .structs
            .into_iter()
            .map(|(name, s)| DocStruct {
                name,
                top_level: s.top_level,
                fields: s
                    .fields
                    .into_iter()
                    .map(|f| DocField {
                        name: f.name,
                        ty: f.ty,
                    })
                    .collect(),
            })
            .collect();
        let roots = raw
            .roots
            .into_iter()
            .map(record_from_raw)
            .collect::<Result<_, _>>()?;
        Ok(Self { structs, roots })
    }
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(deserialize_with = "unique_keys")]
    structs: IndexMap<String, RawStruct>,
    #[serde(default)]
    roots: Vec<RawRecord>,
}

#[derive(Debug, Deserialize)]
struct RawStruct {
    #[serde(default)]
    top_level: bool,
    fields: Vec<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,
    #[serde(rename = "type")]
    ty: FieldType,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "struct")]
    struct_name: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "unique_keys")]
    fields: IndexMap<String, RawValue>,
}

/// Object keys in document order. A key written twice is an error.
fn unique_keys<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct UniqueKeys<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueKeys<V> {
        type Value = IndexMap<String, V>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object with distinct keys")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = IndexMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, V>()? {
                match map.entry(key) {
                    Entry::Occupied(entry) => {
                        return Err(de::Error::custom(format_args!(
                            "duplicate key `{}`",
                            entry.key()
                        )));
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(value);
                    }
                }
            }
            Ok(map)
        }
    }

    deserializer.deserialize_map(UniqueKeys(PhantomData))
}

/// A record field value as written, before validation.
#[derive(Debug)]
enum RawValue {
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    Text(String),
    Array,
    Record(RawRecord),
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawValueVisitor;

        impl<'de> Visitor<'de> for RawValueVisitor {
            type Value = RawValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a field value")
            }

            fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
                Ok(RawValue::Null)
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
                Ok(RawValue::Bool(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
                Ok(RawValue::Int(i128::from(v)))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
                Ok(RawValue::Int(i128::from(v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
                Ok(RawValue::Float(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
                Ok(RawValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<RawValue, E> {
                Ok(RawValue::Text(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<RawValue, A::Error> {
                while access.next_element::<IgnoredAny>()?.is_some() {}
                Ok(RawValue::Array)
            }

            fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<RawValue, A::Error> {
                RawRecord::deserialize(MapAccessDeserializer::new(access)).map(RawValue::Record)
            }
        }

        deserializer.deserialize_any(RawValueVisitor)
    }
}

fn record_from_raw(raw: RawRecord) -> Result<DocRecord, DocumentError> {
    let mut fields = Vec::with_capacity(raw.fields.len());
    for (name, value) in raw.fields {
        let value = value_from_raw(&raw.struct_name, &name, value)?;
        fields.push((name, value));
    }
    Ok(DocRecord {
        struct_name: raw.struct_name,
        name: raw.name,
        fields,
    })
}

fn value_from_raw(struct_name: &str, field: &str, raw: RawValue) -> Result<DocValue, DocumentError> {
    let invalid = |reason: String| DocumentError::InvalidValue {
        struct_name: struct_name.to_string(),
        field: field.to_string(),
        reason,
    };

    match raw {
        RawValue::Null => Ok(DocValue::Null),
        RawValue::Bool(b) => Ok(DocValue::Bool(b)),
        RawValue::Int(v) => Ok(DocValue::Int(v)),
        RawValue::Float(v) => Err(invalid(format!("`{v}` is not an integer"))),
        RawValue::Text(s) => Ok(DocValue::Version(s)),
        RawValue::Record(record) => Ok(DocValue::Record(record_from_raw(record)?)),
        RawValue::Array => Err(invalid("arrays are not supported".to_string())),
    }
}
