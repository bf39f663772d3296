use setpack_format::StructId;

use super::NodeId;

/// Error while binding values to struct definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("struct `{struct_name}` has {expected} fields, got {found} values")]
    Arity {
        struct_name: String,
        expected: usize,
        found: usize,
    },

    #[error("field `{field}` of `{struct_name}` expects {expected}, got {found}")]
    TypeMismatch {
        struct_name: String,
        field: String,
        expected: String,
        found: String,
    },

    #[error("struct {0} is not defined in this schema")]
    UnknownStruct(StructId),

    #[error("struct `{struct_name}` has no field `{field}`")]
    UnknownField { struct_name: String, field: String },

    #[error("record {0} does not exist in this tree")]
    UnknownNode(NodeId),

    #[error("record {node} would become reachable from itself through `{struct_name}.{field}`")]
    CyclicReference {
        node: NodeId,
        struct_name: String,
        field: String,
    },

    #[error("record {node} is already referenced by record {owner}")]
    SharedRecord { node: NodeId, owner: NodeId },
}
