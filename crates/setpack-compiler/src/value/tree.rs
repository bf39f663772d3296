//! Arena-backed value trees.
//!
//! Records live in a flat arena and refer to each other by [`NodeId`].
//! Every record has at most one owner (the record whose field references
//! it), and no record can reach itself. Both rules are enforced while the
//! tree is built, so a finished tree is always a forest.

use std::fmt;

use setpack_format::{FieldKind, PackedVersion, Schema, StructDef, StructId};
use tracing::trace;

use super::BindError;

/// Index of a record within a [`ValueTree`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(transparent)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value bound to one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Value {
    /// Null struct reference.
    Null,
    Bool(bool),
    /// Integer literal. Range is checked against the field width at emission.
    Int(i128),
    /// Reference to another record in the same tree.
    Record(NodeId),
}

impl Value {
    fn describe(&self, tree: &ValueTree<'_>) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(_) => "bool".to_string(),
            Self::Int(v) => format!("integer {v}"),
            Self::Record(id) => match tree.try_get(*id) {
                Some(val) => format!("record `{}`", tree.schema.get(val.def).name()),
                None => format!("record {id}"),
            },
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Self::Int(v as i128)
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, u64, i32, i64);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<PackedVersion> for Value {
    fn from(v: PackedVersion) -> Self {
        Self::Int(v.get() as i128)
    }
}

impl From<NodeId> for Value {
    fn from(id: NodeId) -> Self {
        Self::Record(id)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// One record: a struct definition plus a value per field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructVal {
    def: StructId,
    fields: Vec<Value>,
}

impl StructVal {
    pub fn def(&self) -> StructId {
        self.def
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<Value> {
        self.fields.get(index).copied()
    }

    /// Referenced records in field order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.fields.iter().filter_map(|v| match v {
            Value::Record(id) => Some(*id),
            _ => None,
        })
    }
}

/// Arena of records bound against one schema.
#[derive(Clone, Debug)]
pub struct ValueTree<'s> {
    schema: &'s Schema,
    nodes: Vec<StructVal>,
    /// Owner of each record, if any.
    parents: Vec<Option<NodeId>>,
}

impl<'s> ValueTree<'s> {
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            nodes: Vec::new(),
            parents: Vec::new(),
        }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    /// Bind one value per field of `def`, in field order.
    ///
    /// Referenced records must already exist, match the field's target
    /// struct, and not be owned by another record.
    pub fn bind(&mut self, def: StructId, values: Vec<Value>) -> Result<NodeId, BindError> {
        let schema = self.schema;
        let Some(struct_def) = schema.try_get(def) else {
            return Err(BindError::UnknownStruct(def));
        };

        if values.len() != struct_def.fields().len() {
            return Err(BindError::Arity {
                struct_name: struct_def.name().to_string(),
                expected: struct_def.fields().len(),
                found: values.len(),
            });
        }

        let id = NodeId(self.nodes.len() as u32);
        let mut claimed: Vec<NodeId> = Vec::new();
        for (index, value) in values.iter().enumerate() {
            self.check(struct_def, index, value)?;
            if let Value::Record(child) = *value {
                if let Some(owner) = self.parents[child.index()] {
                    return Err(BindError::SharedRecord { node: child, owner });
                }
                if claimed.contains(&child) {
                    return Err(BindError::SharedRecord {
                        node: child,
                        owner: id,
                    });
                }
                claimed.push(child);
            }
        }

        for child in claimed {
            self.parents[child.index()] = Some(id);
        }
        self.nodes.push(StructVal {
            def,
            fields: values,
        });
        self.parents.push(None);

        trace!(node = %id, struct_name = struct_def.name(), "bound record");
        Ok(id)
    }

    /// Replace one field of an existing record.
    ///
    /// This is how references between already-built records are wired up.
    /// Rejects a reference that would make `node` reachable from itself.
    pub fn set_field(
        &mut self,
        node: NodeId,
        field: &str,
        value: impl Into<Value>,
    ) -> Result<(), BindError> {
        let value = value.into();
        let schema = self.schema;
        let Some(val) = self.nodes.get(node.index()) else {
            return Err(BindError::UnknownNode(node));
        };
        let struct_def = schema.get(val.def);
        let Some(index) = struct_def.field_index(field) else {
            return Err(BindError::UnknownField {
                struct_name: struct_def.name().to_string(),
                field: field.to_string(),
            });
        };
        self.check(struct_def, index, &value)?;

        let old = val.fields[index];
        if let Value::Record(child) = value
            && old != value
        {
            let mut cursor = Some(node);
            while let Some(current) = cursor {
                if current == child {
                    return Err(BindError::CyclicReference {
                        node: child,
                        struct_name: struct_def.name().to_string(),
                        field: field.to_string(),
                    });
                }
                cursor = self.parents[current.index()];
            }
            if let Some(owner) = self.parents[child.index()] {
                return Err(BindError::SharedRecord { node: child, owner });
            }
        }

        if let Value::Record(old_child) = old {
            self.parents[old_child.index()] = None;
        }
        if let Value::Record(child) = value {
            self.parents[child.index()] = Some(node);
        }
        self.nodes[node.index()].fields[index] = value;
        Ok(())
    }

    fn check(&self, def: &StructDef, index: usize, value: &Value) -> Result<(), BindError> {
        let field = &def.fields()[index];
        let ok = match (field.kind, value) {
            (
                FieldKind::U8 | FieldKind::U16 | FieldKind::U32 | FieldKind::U64 | FieldKind::Ptr,
                Value::Int(_),
            ) => true,
            (FieldKind::Bool, Value::Bool(_)) => true,
            (FieldKind::StructRef(_), Value::Null) => true,
            (FieldKind::StructRef(target), Value::Record(child)) => {
                let Some(child_val) = self.try_get(*child) else {
                    return Err(BindError::UnknownNode(*child));
                };
                child_val.def == target
            }
            _ => false,
        };

        if ok {
            return Ok(());
        }
        let expected = match field.kind {
            FieldKind::StructRef(target) => format!("ref `{}`", self.schema.get(target).name()),
            kind => kind.name().to_string(),
        };
        Err(BindError::TypeMismatch {
            struct_name: def.name().to_string(),
            field: field.name.clone(),
            expected,
            found: value.describe(self),
        })
    }

    /// # Panics
    /// Panics if `node` does not belong to this tree.
    pub fn get(&self, node: NodeId) -> &StructVal {
        &self.nodes[node.index()]
    }

    pub fn try_get(&self, node: NodeId) -> Option<&StructVal> {
        self.nodes.get(node.index())
    }

    /// Record whose field references `node`.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(node.index()).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn force_field(&mut self, node: NodeId, index: usize, value: Value) {
        self.nodes[node.index()].fields[index] = value;
    }
}
