//! Errors raised while defining schemas and reading blobs.

/// Schema or version construction error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("version component {component} = {value} is out of range (0..=255)")]
    VersionComponentOutOfRange { component: &'static str, value: i64 },

    #[error("invalid version `{0}` (expected 1 to 4 dot-separated integers)")]
    InvalidVersion(String),

    #[error("struct `{struct_name}` declares field `{field}` more than once")]
    DuplicateField { struct_name: String, field: String },

    #[error("struct `{0}` is already defined")]
    DuplicateStruct(String),

    #[error("top-level struct `{struct_name}` must start with `u32 version`, found {found}")]
    InvalidFirstField { struct_name: String, found: String },

    #[error("struct `{struct_name}` references unknown struct #{target}")]
    UnknownStruct { struct_name: String, target: u16 },

    #[error("struct `{0}` has no fields")]
    EmptyStruct(String),

    #[error("too many structs: {0} (max 65535)")]
    TooManyStructs(usize),
}

/// Error while decoding a record from a blob.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("record `{struct_name}` at {offset:#x} needs {needed} bytes, blob has {len}")]
    OutOfBounds {
        struct_name: String,
        offset: u64,
        needed: u64,
        len: usize,
    },

    #[error("struct `{struct_name}` has {available} fields, {requested} requested")]
    TooManyFields {
        struct_name: String,
        requested: usize,
        available: usize,
    },
}
