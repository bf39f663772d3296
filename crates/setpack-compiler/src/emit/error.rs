use crate::value::NodeId;

/// Errors during byte emission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    #[error("value {value} does not fit {kind} field `{struct_name}.{field}`")]
    PackRange {
        struct_name: String,
        field: String,
        kind: &'static str,
        value: i128,
    },

    #[error("record `{struct_name}` at {offset:#x}: expected {expected} bytes, wrote {found}")]
    SizeMismatch {
        struct_name: String,
        offset: u64,
        expected: u64,
        found: u64,
    },

    #[error("field `{struct_name}.{field}` holds a value of the wrong shape")]
    UnexpectedValue { struct_name: String, field: String },

    #[error("record {0} is referenced but was not placed in the layout")]
    UnresolvedReference(NodeId),
}
