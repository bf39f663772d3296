//! Byte emission from a flattened layout.
//!
//! Every field packs little-endian at its fixed width. Struct references
//! pack as the 8-byte offset of their target record, or `0` when null.
//! The blob carries no header, length prefix, or padding.

mod blob;
mod emitter;
mod error;


pub use blob::{Blob, FieldInfo, Literal, RecordInfo};
pub use emitter::{emit, emit_annotated};
pub use error::EmitError;
