//! C emitter for schemas and blobs.
//!
//! Generated declarations are byte-packed and use only fixed-width types.
//! Pointer fields sit in a union with a `uint64_t` so every struct has the
//! same layout on 32-bit and 64-bit targets.

mod config;
mod data;
mod emitter;
mod naming;
mod render;


pub use config::Config;
pub use emitter::Emitter;

use setpack_format::{Schema, StructId};

use crate::emit::Blob;

/// Packed struct declarations for everything reachable from `roots`.
pub fn emit_struct_defs(schema: &Schema, roots: &[StructId], config: &Config) -> String {
    Emitter::new(schema, config.clone()).struct_defs(roots)
}

/// `FieldMetadata` and `StructMetadata` type declarations.
pub fn emit_metadata_types(config: &Config) -> String {
    render::render_metadata_types(config)
}

/// Metadata tables for everything reachable from `roots`.
pub fn emit_metadata(schema: &Schema, roots: &[StructId], config: &Config) -> String {
    Emitter::new(schema, config.clone()).metadata(roots)
}

/// `static uint8_t g<Name>Default[]` holding the blob.
pub fn emit_default_data(blob: &Blob, config: &Config) -> String {
    data::render_default_data(blob, config)
}
